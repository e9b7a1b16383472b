use crate::error::Result;
use crate::report::Report;

use super::ReportFormatter;

/// Pretty-printed JSON with two top-level keys, `summary` and `findings`.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
