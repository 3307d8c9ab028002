//! Behaviour-driven step definitions driving the query CLI scenarios.

use super::helpers::{assert_close, sample_document, write_utf8};
use super::*;
use crate::query::run_query_with;
use clap::Parser;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct QueryWorld {
    _tmp: TempDir,
    document_path: Utf8PathBuf,
    include_document: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl QueryWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let document_path = root.join("book.json");

        Self {
            _tmp: tmp,
            document_path,
            include_document: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["omnibus".to_owned(), "query".to_owned()];
        if *self.include_document.borrow() {
            argv.push(self.document_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn responses(&self) -> Vec<StatResponse> {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON response array")
    }
}

#[fixture]
fn world() -> QueryWorld {
    QueryWorld::new()
}

#[given("a transit-book document exists on disk")]
fn document_exists(#[from(world)] world: &QueryWorld) {
    let payload = serde_json::to_string_pretty(&sample_document()).expect("serialize document");
    write_utf8(&world.document_path, payload.as_bytes());
}

#[given("the transit-book document contains invalid JSON")]
fn document_contains_invalid_json(#[from(world)] world: &QueryWorld) {
    write_utf8(&world.document_path, b"{ not valid json");
}

#[given("I omit the document path")]
fn omit_document_path(#[from(world)] world: &QueryWorld) {
    *world.include_document.borrow_mut() = false;
}

#[given("I pass a bus velocity of {velocity}")]
fn pass_bus_velocity(#[from(world)] world: &QueryWorld, velocity: f64) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_BUS_VELOCITY}"), velocity.to_string()]);
}

#[when("I run the query command")]
fn run_query_command(#[from(world)] world: &QueryWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Query(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_query_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints {count} responses")]
fn command_succeeds(#[from(world)] world: &QueryWorld, count: usize) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
    assert_eq!(world.responses().len(), count);
}

#[then("request {id} takes {minutes} minutes")]
fn request_takes(#[from(world)] world: &QueryWorld, id: i64, minutes: f64) {
    let responses = world.responses();
    let total = responses.iter().find_map(|response| match response {
        StatResponse::Route {
            request_id,
            total_time,
            ..
        } if *request_id == id => Some(*total_time),
        _ => None,
    });
    assert_close(total.expect("route response"), minutes);
}

#[then("the command fails because the document JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &QueryWorld) {
    match &*world.error() {
        CliError::ParseDocument { .. } => {}
        other => panic!("expected ParseDocument, found {other:?}"),
    }
}

#[then("the command fails because the document path is missing")]
fn command_fails_missing_document(#[from(world)] world: &QueryWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_QUERY_DOCUMENT),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_query_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/query_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: QueryWorld) {
            let _ = world;
        }
    };
}

register_query_scenario!(query_happy_path, "answering a transit-book document");
register_query_scenario!(query_velocity_override, "overriding the bus velocity");
register_query_scenario!(query_invalid_json, "rejecting invalid JSON input");
register_query_scenario!(query_missing_document, "rejecting missing document paths");
