//! Query command implementation.

use std::io::{BufReader, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use omnibus_router::{Router, RoutingParams};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::document::{RoutingSettings, TransitDocument};
use crate::fs::{file_is_file, open_utf8_file};
use crate::response::{StatResponse, answer};
use crate::{
    ARG_BUS_VELOCITY, ARG_BUS_WAIT_TIME, ARG_QUERY_DOCUMENT, CliError, ENV_BUS_VELOCITY,
    ENV_BUS_WAIT_TIME, ENV_QUERY_DOCUMENT,
};

/// CLI arguments for the `query` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build a transit network from the base requests of a \
                 transit-book JSON document and print a JSON array answering \
                 its stat requests. Routing settings in the document can be \
                 overridden by flags, configuration files, or environment \
                 variables.",
    about = "Answer the stat requests of a transit-book document"
)]
#[ortho_config(prefix = "OMNIBUS")]
pub(crate) struct QueryArgs {
    /// Path to the transit-book JSON document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) document: Option<Utf8PathBuf>,
    /// Override the bus velocity in km/h.
    #[arg(long = ARG_BUS_VELOCITY, value_name = "km/h")]
    #[serde(default)]
    pub(crate) bus_velocity: Option<f64>,
    /// Override the wait time at every stop in minutes.
    #[arg(long = ARG_BUS_WAIT_TIME, value_name = "minutes")]
    #[serde(default)]
    pub(crate) bus_wait_time: Option<f64>,
}

impl QueryArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

/// Resolved `query` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueryConfig {
    /// Path to the JSON document.
    pub(crate) document: Utf8PathBuf,
    /// Velocity override.
    pub(crate) bus_velocity: Option<f64>,
    /// Wait time override.
    pub(crate) bus_wait_time: Option<f64>,
}

impl QueryConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match file_is_file(&self.document) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_QUERY_DOCUMENT,
                path: self.document.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_QUERY_DOCUMENT,
                    path: self.document.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_QUERY_DOCUMENT,
                path: self.document.clone(),
                source,
            }),
        }
    }

    /// Combine overrides with the document's own settings, overrides first.
    pub(crate) fn routing_params(
        &self,
        settings: Option<RoutingSettings>,
    ) -> Result<RoutingParams, CliError> {
        let velocity = self
            .bus_velocity
            .or_else(|| settings.map(|s| s.bus_velocity))
            .ok_or(CliError::MissingRoutingSetting {
                field: ARG_BUS_VELOCITY,
                env: ENV_BUS_VELOCITY,
            })?;
        let wait = self
            .bus_wait_time
            .or_else(|| settings.map(|s| s.bus_wait_time))
            .ok_or(CliError::MissingRoutingSetting {
                field: ARG_BUS_WAIT_TIME,
                env: ENV_BUS_WAIT_TIME,
            })?;
        Ok(RoutingParams::new(velocity, wait)?)
    }
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let document = args.document.ok_or(CliError::MissingArgument {
            field: ARG_QUERY_DOCUMENT,
            env: ENV_QUERY_DOCUMENT,
        })?;
        Ok(Self {
            document,
            bus_velocity: args.bus_velocity,
            bus_wait_time: args.bus_wait_time,
        })
    }
}

pub(crate) fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_query_with(args, &mut stdout)
}

pub(crate) fn run_query_with(args: QueryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let document = load_document(&config.document)?;
    let responses = answer_document(&document, &config)?;
    write_responses(writer, &responses)
}

/// Populate a database from `document` and answer its stat requests in
/// order.
pub(crate) fn answer_document(
    document: &TransitDocument,
    config: &QueryConfig,
) -> Result<Vec<StatResponse>, CliError> {
    let params = config.routing_params(document.routing_settings)?;
    let database = Arc::new(document.database()?);
    info!(
        "loaded {} stops and {} routes",
        database.stops().len(),
        database.routes().len()
    );
    let router = Router::new(Arc::clone(&database), params)?;
    document
        .stat_requests
        .iter()
        .map(|request| {
            debug!("answering request {}", request.id());
            answer(request, &database, &router)
        })
        .collect()
}

/// Loads a JSON-encoded [`TransitDocument`] from disk.
pub(crate) fn load_document(path: &Utf8Path) -> Result<TransitDocument, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDocument {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseDocument {
        path: path.to_path_buf(),
        source,
    })
}

fn write_responses(writer: &mut dyn Write, responses: &[StatResponse]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(responses).map_err(CliError::SerializeResponses)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteResponses)?;
    writer.write_all(b"\n").map_err(CliError::WriteResponses)?;
    Ok(())
}
