//! mathops CLI library
//!
//! Command-line front end for the `mathops` operation dispatcher and
//! numeric sanitizer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{CalcArgs, Cli, ColorArg, Commands, FormatArg, SanitizeArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{
    format_number, render_operations, CalcReport, OperationInfo, OutputFormat, SanitizeReport,
};
