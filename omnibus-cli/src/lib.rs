//! Command-line interface for answering transit-book documents.
#![forbid(unsafe_code)]

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use omnibus_core::{DistanceError, RouteError};
use omnibus_router::{RouterError, RoutingParamsError};
use thiserror::Error;

pub mod document;
mod fs;
mod query;
pub mod response;

pub use document::{BaseRequest, RoutingSettings, StatRequest, TransitDocument};
pub use response::{RouteItem, StatResponse};

const ARG_QUERY_DOCUMENT: &str = "document";
const ARG_BUS_VELOCITY: &str = "bus-velocity";
const ARG_BUS_WAIT_TIME: &str = "bus-wait-time";
const ENV_QUERY_DOCUMENT: &str = "OMNIBUS_CMDS_QUERY_DOCUMENT";
const ENV_BUS_VELOCITY: &str = "OMNIBUS_CMDS_QUERY_BUS_VELOCITY";
const ENV_BUS_WAIT_TIME: &str = "OMNIBUS_CMDS_QUERY_BUS_WAIT_TIME";

/// Run the Omnibus CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Query(args) => query::run_query(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "omnibus",
    about = "Answer route, stop and itinerary queries over a transit network",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a network from a transit-book document and answer its queries.
    Query(query::QueryArgs),
}

/// Errors emitted by the Omnibus CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the document failed.
    #[error("failed to open document at {path:?}: {source}")]
    OpenDocument {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Document JSON could not be decoded.
    #[error("failed to parse document JSON at {path:?}: {source}")]
    ParseDocument {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Neither the document nor the command line supplied a routing setting.
    #[error("missing routing setting {field} (set --{field}, {env} or routing_settings)")]
    MissingRoutingSetting {
        field: &'static str,
        env: &'static str,
    },
    /// Routing settings were out of range.
    #[error("invalid routing settings: {0}")]
    InvalidRoutingSettings(#[from] RoutingParamsError),
    /// A bus declaration was rejected.
    #[error("invalid bus declaration: {0}")]
    InvalidRoute(#[from] RouteError),
    /// Route metrics could not be computed.
    #[error("failed to compute route metrics: {0}")]
    RouteMetrics(#[from] DistanceError),
    /// The routing graph could not be built or queried.
    #[error("routing failed: {0}")]
    Routing(#[from] RouterError),
    /// Serializing the responses failed.
    #[error("failed to serialize responses: {0}")]
    SerializeResponses(#[source] serde_json::Error),
    /// Writing the responses failed.
    #[error("failed to write responses: {0}")]
    WriteResponses(#[source] std::io::Error),
}

#[cfg(test)]
mod tests;
