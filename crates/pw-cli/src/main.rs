//! phoneword - find dictionary words hidden in phone numbers

use clap::Parser;
use pw_cli::{app, Cli};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let result = cli
        .into_config()
        .map_err(anyhow::Error::from)
        .and_then(|config| app::run(&config));

    if let Err(e) = result {
        eprintln!("Error - {e}");
        process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
