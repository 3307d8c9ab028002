//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = omnibus_cli::run() {
        eprintln!("omnibus: {err}");
        std::process::exit(1);
    }
}
