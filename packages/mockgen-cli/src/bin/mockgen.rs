/**
 * GoMock generator CLI - mockgen
 *
 * Main entry point for mock generation
 */
use gomockgen_cli::run::{cli, run, RunConfig};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logging is opt-in through MOCKGEN_LOG, e.g. MOCKGEN_LOG=gomockgen=debug
    if let Ok(filter) = EnvFilter::try_from_env("MOCKGEN_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let matches = cli().get_matches();
    let result = RunConfig::from_matches(&matches).and_then(|config| run(&config));

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
