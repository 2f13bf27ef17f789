//! Output formatting for the route number report.
//!
//! The text formatter reproduces the classic layout byte for byte:
//!
//! ```text
//! 1=[US-1, CA-1]
//! 101=[US-101]
//! Numbers up to 999 for which no entries are found:
//! 2 3 4 ... 999
//! ```
//!
//! Every missing number is followed by a single space, including the last.

use crate::cli::args::OutputFormat;
use crate::routes::RouteReport;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a report into a string, including the final newline
    fn format(&self, report: &RouteReport) -> String;
}

/// Plain text formatter
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RouteReport) -> String {
        let mut output = String::new();

        for group in &report.groups {
            output.push_str(&format!("{}=[{}]\n", group.number, group.routes.join(", ")));
        }

        output.push_str(&report.missing_header());
        output.push('\n');
        for number in &report.missing {
            output.push_str(&number.to_string());
            output.push(' ');
        }
        output.push('\n');

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RouteReport) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        let mut output = rendered.expect("report holds only strings and integers");
        output.push('\n');
        output
    }
}

/// Get formatter for the selected output format
pub fn get_formatter(format: &OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
