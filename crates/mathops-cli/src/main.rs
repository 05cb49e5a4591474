//! mathops: arithmetic and sanitizing from the command line
//!
//! ## Usage
//!
//! ```bash
//! mathops calc 5.5 add 3.25        # 8.75
//! mathops calc 3.5 divide 0        # Infinity
//! mathops sanitize 123abc          # 123
//! mathops --format json ops        # supported operations as JSON
//! ```

use clap::Parser;
use console::Term;
use mathops_cli::{handlers, logging, Cli, CliResult, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = handlers::build_config(&cli)?;
    logging::init(config.verbosity);
    tracing::debug!(?config, "resolved configuration");

    let output = match &cli.command {
        Commands::Calc(args) => handlers::run_calc(&config, args)?,
        Commands::Sanitize(args) => handlers::run_sanitize(&config, args)?,
        Commands::Ops => handlers::run_ops(&config)?,
    };
    Term::stdout().write_line(&output)?;
    Ok(())
}
