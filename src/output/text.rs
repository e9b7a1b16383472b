use std::fmt::Write;

use serde_json::Value;

use crate::error::Result;
use crate::report::Report;
use crate::scan::{Finding, Level};

use super::{ColorMode, ReportFormatter, ansi};

/// Human-readable report: one line per finding, then the summary.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled_for(&std::io::stdout()),
        }
    }

    const fn level_icon(level: Level) -> &'static str {
        match level {
            Level::Info => "ℹ",
            Level::Warn => "⚠",
            Level::Error => "✗",
            Level::Safety => "◉",
        }
    }

    const fn level_color(level: Level) -> &'static str {
        match level {
            Level::Info => ansi::CYAN,
            Level::Warn => ansi::YELLOW,
            Level::Error => ansi::RED,
            Level::Safety => ansi::MAGENTA,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_finding(&self, finding: &Finding, out: &mut String) {
        let label = format!(
            "{} {}",
            Self::level_icon(finding.level),
            finding.level.as_str().to_uppercase()
        );
        let _ = writeln!(
            out,
            "{} {} {}: {}",
            self.colorize(&label, Self::level_color(finding.level)),
            finding.code,
            finding.path,
            finding.message
        );

        if !finding.extra.is_empty() {
            let fields = finding
                .extra
                .iter()
                .map(|(key, value)| format!("{key}={}", render_value(value)))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "    {}", self.colorize(&fields, ansi::DIM));
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        for finding in &report.findings {
            self.format_finding(finding, &mut out);
        }
        if !report.findings.is_empty() {
            out.push('\n');
        }

        let s = &report.summary;
        let size = s
            .size_bytes
            .map_or_else(|| "unknown size".to_string(), |n| format!("{n} bytes"));
        let heading = format!("Summary: {} ({size})", s.file);
        let _ = writeln!(out, "{}", self.colorize(&heading, ansi::BOLD));
        let _ = writeln!(
            out,
            "  objects:   {} ({} groups, {} datasets)",
            s.num_objects, s.num_groups, s.num_datasets
        );
        let _ = writeln!(
            out,
            "  links:     {} soft, {} external",
            s.num_links_soft, s.num_links_external
        );
        let _ = writeln!(out, "  userblock: {} bytes", s.userblock_bytes);
        let _ = write!(
            out,
            "  findings:  {} info, {} warn, {} error, {} safety",
            s.counts.info, s.counts.warn, s.counts.error, s.counts.safety
        );
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
