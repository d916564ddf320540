//! jobconf: resolves monitoring job configurations from discovery files.

use std::path::Path;
use std::process::ExitCode;

use jobconf::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Some(Command::Init { output }) => init(output),
        None => resolve(&cli),
    }
}

/// `jobconf init`: writes the registry template.
fn init(output: &Path) -> ExitCode {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return exit_code::CONFIG_ERROR;
    }
    println!("Registry template written to: {}", output.display());
    exit_code::SUCCESS
}

/// `jobconf [OPTIONS] <FILE>...`: resolves the files and prints the groups.
#[cfg(not(tarpaulin_include))]
fn resolve(cli: &Cli) -> ExitCode {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start the resolver runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
