use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use proxplore_lib::bootstrap::{init_tracing_subscriber, resolve_config, run_app};

/// ProXplore access gate console.
#[derive(Debug, Parser)]
#[command(name = "proxplore", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Sign this user in at startup.
    #[arg(long, value_name = "NAME")]
    user: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let config = match resolve_config(cli.config) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %format!("{err:#}"), "failed to load config");
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run_app(config, cli.user) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "proxplore exited with error");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
