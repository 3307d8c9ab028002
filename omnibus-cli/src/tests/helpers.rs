//! Test helpers for writing transit-book documents to disk.

use camino::Utf8Path;
use serde_json::{Value, json};
use std::fs;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A loop route between two stops, an unserved stop and one request of
/// every kind, including requests that resolve to "not found".
pub(super) fn sample_document() -> Value {
    json!({
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
        "base_requests": [
            {
                "type": "Bus",
                "name": "297",
                "stops": ["Biryulyovo Tovarnaya", "Universam", "Biryulyovo Tovarnaya"],
                "is_roundtrip": true
            },
            {
                "type": "Stop",
                "name": "Biryulyovo Tovarnaya",
                "latitude": 55.6,
                "longitude": 37.6,
                "road_distances": {}
            },
            {
                "type": "Stop",
                "name": "Universam",
                "latitude": 55.6,
                "longitude": 37.62,
                "road_distances": {"Biryulyovo Tovarnaya": 1800}
            },
            {
                "type": "Stop",
                "name": "Lonely",
                "latitude": 55.7,
                "longitude": 37.7
            }
        ],
        "stat_requests": [
            {"id": 1, "type": "Bus", "name": "297"},
            {"id": 2, "type": "Bus", "name": "750"},
            {"id": 3, "type": "Stop", "name": "Universam"},
            {"id": 4, "type": "Stop", "name": "Lonely"},
            {"id": 5, "type": "Stop", "name": "Nowhere"},
            {"id": 6, "type": "Route", "from": "Biryulyovo Tovarnaya", "to": "Universam"},
            {"id": 7, "type": "Route", "from": "Biryulyovo Tovarnaya", "to": "Lonely"}
        ]
    })
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
