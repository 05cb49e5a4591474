//! Command implementations
//!
//! Each handler returns the rendered output so it can be tested without a
//! terminal; `main` does the printing.

use std::io::{IsTerminal, Read};

use mathops::prelude::{only_numbers, perform_operation, MathError, Operation};
use tracing::{debug, info};

use crate::commands::{CalcArgs, Cli, SanitizeArgs};
use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};
use crate::output::{render_operations, CalcReport, SanitizeReport};

/// Resolve configuration: defaults, then `--config`, then explicit flags
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    if let Some(format) = cli.format {
        config = config.with_format(format.into());
    }

    Ok(config)
}

/// `mathops calc A OPERATION B`
pub fn run_calc(config: &CliConfig, args: &CalcArgs) -> CliResult<String> {
    let operation = parse_operation(&args.operation)?;
    let result = perform_operation(args.a, args.b, operation);
    info!(a = args.a, b = args.b, %operation, result, "calc");

    let report = CalcReport::new(args.a, args.b, operation, result);
    report.render(config.format, config.verbosity.is_verbose())
}

/// Parses an operation typed on the command line.
///
/// Case and surrounding whitespace are forgiven here; the library accepts
/// exact tags only. Errors carry the argument as typed.
pub fn parse_operation(arg: &str) -> CliResult<Operation> {
    arg.trim()
        .to_ascii_lowercase()
        .parse::<Operation>()
        .map_err(|_| CliError::from(MathError::invalid_operation(arg)))
}

/// `mathops sanitize [VALUE]`
pub fn run_sanitize(config: &CliConfig, args: &SanitizeArgs) -> CliResult<String> {
    let input = match &args.value {
        Some(value) => value.clone(),
        None => read_stdin()?,
    };
    sanitize_value(config, input)
}

/// Sanitize an already-read value and render the report
pub fn sanitize_value(config: &CliConfig, input: String) -> CliResult<String> {
    let mut value = input.clone();
    only_numbers(&mut value);
    debug!(input_len = input.len(), output_len = value.len(), "sanitized");

    SanitizeReport { input, value }.render(config.format)
}

/// `mathops ops`
pub fn run_ops(config: &CliConfig) -> CliResult<String> {
    render_operations(config.format, config.color.should_color())
}

// one trailing newline is input framing, not part of the value
fn read_stdin() -> CliResult<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::invalid_argument(
            "no value given and stdin is a terminal",
        ));
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use crate::output::OutputFormat;
    use clap::Parser;
    use std::io::Write;

    fn calc_args(a: f64, operation: &str, b: f64) -> CalcArgs {
        CalcArgs {
            a,
            operation: operation.to_string(),
            b,
        }
    }

    // ===== build_config tests =====

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::parse_from(["mathops", "ops"]);
        assert_eq!(build_config(&cli).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_build_config_flags() {
        let cli = Cli::parse_from(["mathops", "-v", "--format", "json", "--color", "never", "ops"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_build_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format: json\nverbosity: debug\ncolor: always").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from(["mathops", "--config", &path, "--format", "text", "ops"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.color, ColorChoice::Always);
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = Cli::parse_from(["mathops", "--config", "/nonexistent/mathops.yaml", "ops"]);
        assert!(matches!(build_config(&cli), Err(CliError::Config { .. })));
    }

    // ===== run_calc tests =====

    #[test]
    fn test_run_calc_fractions() {
        let config = CliConfig::new();
        assert_eq!(run_calc(&config, &calc_args(5.5, "add", 3.25)).unwrap(), "8.75");
        assert_eq!(run_calc(&config, &calc_args(10.0, "subtract", 7.5)).unwrap(), "2.5");
        assert_eq!(run_calc(&config, &calc_args(2.5, "multiply", 4.0)).unwrap(), "10");
        assert_eq!(run_calc(&config, &calc_args(5.5, "divide", 2.75)).unwrap(), "2");
    }

    #[test]
    fn test_run_calc_divide_by_zero() {
        let config = CliConfig::new();
        assert_eq!(
            run_calc(&config, &calc_args(3.5, "divide", 0.0)).unwrap(),
            "Infinity"
        );
        assert_eq!(run_calc(&config, &calc_args(0.0, "divide", 0.0)).unwrap(), "NaN");
    }

    #[test]
    fn test_run_calc_verbose_shows_expression() {
        let config = CliConfig::new().with_verbosity(Verbosity::Verbose);
        assert_eq!(
            run_calc(&config, &calc_args(10.0, "divide", 2.5)).unwrap(),
            "10 / 2.5 = 4"
        );
    }

    #[test]
    fn test_run_calc_invalid_operation() {
        let config = CliConfig::new();
        let err = run_calc(&config, &calc_args(1.0, "modulo", 2.0)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Math(MathError::InvalidOperation { ref tag }) if tag == "modulo"
        ));
    }

    #[test]
    fn test_parse_operation_normalizes_case_and_whitespace() {
        assert_eq!(parse_operation("ADD").unwrap(), Operation::Add);
        assert_eq!(parse_operation("  Divide\n").unwrap(), Operation::Divide);
    }

    #[test]
    fn test_parse_operation_error_keeps_argument() {
        let err = parse_operation(" Modulo ").unwrap_err();
        assert!(matches!(
            err,
            CliError::Math(MathError::InvalidOperation { ref tag }) if tag == " Modulo "
        ));
    }

    // ===== sanitize tests =====

    #[test]
    fn test_run_sanitize_value() {
        let config = CliConfig::new();
        let args = SanitizeArgs {
            value: Some("123abc".to_string()),
        };
        assert_eq!(run_sanitize(&config, &args).unwrap(), "123");
    }

    #[test]
    fn test_sanitize_value_no_digits() {
        let config = CliConfig::new();
        assert_eq!(sanitize_value(&config, "abc".to_string()).unwrap(), "");
    }

    #[test]
    fn test_sanitize_value_json() {
        let config = CliConfig::new().with_format(OutputFormat::Json);
        assert_eq!(
            sanitize_value(&config, "12-34".to_string()).unwrap(),
            r#"{"input":"12-34","value":"1234"}"#
        );
    }

    // ===== run_ops tests =====

    #[test]
    fn test_run_ops_lists_all() {
        let config = CliConfig::new().with_color(ColorChoice::Never);
        let text = run_ops(&config).unwrap();
        for op in Operation::ALL {
            assert!(text.contains(op.tag()));
        }
    }
}
