//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mathops: four-operation arithmetic and digits-only input sanitizing
#[derive(Parser, Debug)]
#[command(name = "mathops")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    pub format: Option<FormatArg>,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply an operation to two operands
    Calc(CalcArgs),

    /// Strip every non-digit character from a value
    Sanitize(SanitizeArgs),

    /// List supported operations
    Ops,
}

/// Arguments for the calc command
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Left operand
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Operation tag: add, subtract, multiply or divide
    pub operation: String,

    /// Right operand
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

/// Arguments for the sanitize command
#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Value to sanitize (read from stdin when omitted)
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use crate::output::OutputFormat;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_calc_command() {
            let cli = Cli::parse_from(["mathops", "calc", "5.5", "add", "3.25"]);
            match cli.command {
                Commands::Calc(args) => {
                    assert_eq!(args.a, 5.5);
                    assert_eq!(args.operation, "add");
                    assert_eq!(args.b, 3.25);
                }
                _ => panic!("expected Calc command"),
            }
        }

        #[test]
        fn test_parse_calc_negative_operands() {
            let cli = Cli::parse_from(["mathops", "calc", "-3.5", "divide", "-0"]);
            match cli.command {
                Commands::Calc(args) => {
                    assert_eq!(args.a, -3.5);
                    assert!(args.b == 0.0 && args.b.is_sign_negative());
                }
                _ => panic!("expected Calc command"),
            }
        }

        #[test]
        fn test_parse_calc_rejects_non_numeric_operand() {
            let result = Cli::try_parse_from(["mathops", "calc", "five", "add", "3"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_sanitize_command() {
            let cli = Cli::parse_from(["mathops", "sanitize", "123abc"]);
            match cli.command {
                Commands::Sanitize(args) => assert_eq!(args.value.as_deref(), Some("123abc")),
                _ => panic!("expected Sanitize command"),
            }
        }

        #[test]
        fn test_parse_sanitize_hyphen_value() {
            let cli = Cli::parse_from(["mathops", "sanitize", "-12.5"]);
            match cli.command {
                Commands::Sanitize(args) => assert_eq!(args.value.as_deref(), Some("-12.5")),
                _ => panic!("expected Sanitize command"),
            }
        }

        #[test]
        fn test_parse_sanitize_without_value() {
            let cli = Cli::parse_from(["mathops", "sanitize"]);
            assert!(matches!(cli.command, Commands::Sanitize(SanitizeArgs { value: None })));
        }

        #[test]
        fn test_parse_ops_command() {
            let cli = Cli::parse_from(["mathops", "ops"]);
            assert!(matches!(cli.command, Commands::Ops));
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from([
                "mathops", "ops", "-vv", "--color", "never", "--format", "json", "--config",
                "m.yaml",
            ]);
            assert_eq!(cli.verbose, 2);
            assert_eq!(cli.color, Some(ColorArg::Never));
            assert_eq!(cli.format, Some(FormatArg::Json));
            assert_eq!(cli.config, Some(PathBuf::from("m.yaml")));
        }

        #[test]
        fn test_flags_default_to_none() {
            let cli = Cli::parse_from(["mathops", "ops"]);
            assert_eq!(cli.verbose, 0);
            assert!(!cli.quiet);
            assert!(cli.color.is_none());
            assert!(cli.format.is_none());
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_color_arg_conversion() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_format_arg_conversion() {
            assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
            assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        }
    }
}
