//! Output formatting

use console::style;
use mathops::prelude::Operation;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per command
    Json,
}

/// Formats a number the way a browser prints it.
///
/// `Infinity`, `-Infinity` and `NaN` for non-finite values; negative zero
/// prints as `0`; integral values carry no trailing `.0`. Magnitudes of at
/// least `1e21` or below `1e-6` use exponent form (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        format_exponent(value)
    } else {
        value.to_string()
    }
}

// `{:e}` gives the shortest digits but omits the `+` on positive exponents
fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    if formatted.contains("e-") {
        formatted
    } else {
        formatted.replacen('e', "e+", 1)
    }
}

/// Result of `mathops calc`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcReport {
    /// Left operand
    pub a: f64,
    /// Right operand
    pub b: f64,
    /// Operation applied
    pub operation: Operation,
    /// Numeric result; serialized as `null` when not finite
    pub result: f64,
    /// Result formatted with [`format_number`]
    pub display: String,
}

impl CalcReport {
    /// Builds a report, filling in `display`
    #[must_use]
    pub fn new(a: f64, b: f64, operation: Operation, result: f64) -> Self {
        Self {
            a,
            b,
            operation,
            result,
            display: format_number(result),
        }
    }

    /// Renders the report in the given format
    pub fn render(&self, format: OutputFormat, show_expression: bool) -> CliResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text if show_expression => Ok(format!(
                "{} {} {} = {}",
                format_number(self.a),
                self.operation.symbol(),
                format_number(self.b),
                self.display
            )),
            OutputFormat::Text => Ok(self.display.clone()),
        }
    }
}

/// Result of `mathops sanitize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    /// Value before sanitizing
    pub input: String,
    /// Digits-only value
    pub value: String,
}

impl SanitizeReport {
    /// Renders the report in the given format
    pub fn render(&self, format: OutputFormat) -> CliResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(self.value.clone()),
        }
    }
}

/// One row of `mathops ops`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    /// Operation tag
    pub operation: Operation,
    /// Operator symbol
    pub symbol: &'static str,
}

/// Renders the supported operations
pub fn render_operations(format: OutputFormat, use_color: bool) -> CliResult<String> {
    let rows: Vec<OperationInfo> = Operation::ALL
        .iter()
        .map(|&operation| OperationInfo {
            operation,
            symbol: operation.symbol(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&rows)?),
        OutputFormat::Text => {
            let lines: Vec<String> = rows
                .iter()
                .map(|row| {
                    let tag = format!("{:<10}", row.operation.tag());
                    if use_color {
                        format!("{} {}", style(tag).bold(), style(row.symbol).cyan())
                    } else {
                        format!("{tag} {}", row.symbol)
                    }
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
