//! Bijection between stops and their board/alight vertex pairs.

use std::collections::HashMap;

use omnibus_core::Database;

use crate::graph::VertexId;

/// Which half of a split stop a vertex represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexRole {
    /// About to depart: ride edges leave from here.
    Board,
    /// Just arrived: ride edges end here, wait edges leave from here.
    Alight,
}

/// The two vertices of one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopVertices {
    /// Departure side.
    pub board: VertexId,
    /// Arrival side.
    pub alight: VertexId,
}

/// Maps stop names to vertex pairs and back.
///
/// Stop `i` in the database's name order owns vertices `2i` (board) and
/// `2i + 1` (alight), so the same stop set always yields the same mapping.
///
/// # Examples
/// ```
/// use omnibus_core::{Coordinates, Database, Stop};
/// use omnibus_router::{StopVertices, VertexMap, VertexRole};
///
/// let mut db = Database::new();
/// db.add_stop(Stop::new("B", Coordinates::default()));
/// db.add_stop(Stop::new("A", Coordinates::default()));
///
/// let vertices = VertexMap::from_database(&db);
/// assert_eq!(vertices.vertex_count(), 4);
/// assert_eq!(vertices.get("B"), Some(StopVertices { board: 2, alight: 3 }));
/// assert_eq!(vertices.stop_of(1), Some(("A", VertexRole::Alight)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexMap {
    indices: HashMap<String, usize>,
    names: Vec<String>,
}

impl VertexMap {
    /// Assign vertices to every stop of `database`.
    pub fn from_database(database: &Database) -> Self {
        let names: Vec<String> = database.stops().map(|stop| stop.name().to_owned()).collect();
        let indices = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();
        Self { indices, names }
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.names.len()
    }

    /// Number of vertices, two per stop.
    pub fn vertex_count(&self) -> usize {
        self.names.len() * 2
    }

    /// Vertex pair of a named stop.
    pub fn get(&self, stop: &str) -> Option<StopVertices> {
        self.indices.get(stop).map(|&index| StopVertices {
            board: index * 2,
            alight: index * 2 + 1,
        })
    }

    /// Stop name and role of a vertex.
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "each stop packs two consecutive vertex ids"
    )]
    pub fn stop_of(&self, vertex: VertexId) -> Option<(&str, VertexRole)> {
        let role = if vertex % 2 == 0 {
            VertexRole::Board
        } else {
            VertexRole::Alight
        };
        self.names
            .get(vertex / 2)
            .map(|name| (name.as_str(), role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnibus_core::test_support::transfer_network;
    use rstest::rstest;

    #[rstest]
    fn mapping_is_a_bijection() {
        let db = transfer_network().expect("fixture network");
        let vertices = VertexMap::from_database(&db);
        assert_eq!(vertices.stop_count(), db.stops().count());

        for vertex in 0..vertices.vertex_count() {
            let (name, role) = vertices.stop_of(vertex).expect("vertex in range");
            let pair = vertices.get(name).expect("known stop");
            let expected = match role {
                VertexRole::Board => pair.board,
                VertexRole::Alight => pair.alight,
            };
            assert_eq!(expected, vertex);
        }
        assert!(vertices.stop_of(vertices.vertex_count()).is_none());
    }

    #[rstest]
    fn mapping_is_reproducible() {
        let db = transfer_network().expect("fixture network");
        assert_eq!(VertexMap::from_database(&db), VertexMap::from_database(&db));
    }

    #[rstest]
    fn unknown_stop_has_no_vertices() {
        let db = transfer_network().expect("fixture network");
        assert!(VertexMap::from_database(&db).get("Atlantis").is_none());
    }
}
