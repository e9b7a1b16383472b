use serde::Serialize;
use serde_json::{Map, Value};

use super::finding::{Code, Finding, Level};

/// Findings tallied per severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub info: usize,
    pub warn: usize,
    pub error: usize,
    pub safety: usize,
}

impl Counts {
    #[must_use]
    pub fn tally(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut counts, finding| {
            match finding.level {
                Level::Info => counts.info += 1,
                Level::Warn => counts.warn += 1,
                Level::Error => counts.error += 1,
                Level::Safety => counts.safety += 1,
            }
            counts
        })
    }
}

/// Running counters for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub file: String,
    pub size_bytes: Option<u64>,
    pub num_objects: u64,
    pub num_groups: u64,
    pub num_datasets: u64,
    pub num_links_soft: u64,
    pub num_links_external: u64,
    pub userblock_bytes: u64,
    pub counts: Counts,
}

impl Summary {
    #[must_use]
    pub fn new(file: impl Into<String>, size_bytes: Option<u64>) -> Self {
        Self {
            file: file.into(),
            size_bytes,
            num_objects: 0,
            num_groups: 0,
            num_datasets: 0,
            num_links_soft: 0,
            num_links_external: 0,
            userblock_bytes: 0,
            counts: Counts::default(),
        }
    }
}

/// Findings and counters accumulated by a single traversal.
///
/// Owned by one scan and consumed once by [`crate::report::Report::assemble`].
#[derive(Debug)]
pub struct ScanContext {
    summary: Summary,
    findings: Vec<Finding>,
}

impl ScanContext {
    #[must_use]
    pub fn new(file: impl Into<String>, size_bytes: Option<u64>) -> Self {
        Self {
            summary: Summary::new(file, size_bytes),
            findings: Vec::new(),
        }
    }

    pub fn record(&mut self, finding: Finding) {
        tracing::debug!(
            level = %finding.level,
            code = %finding.code,
            path = %finding.path,
            "{}",
            finding.message
        );
        self.findings.push(finding);
    }

    /// Shorthand for `record(Finding::new(..).with_extra(extra))`.
    pub fn emit(
        &mut self,
        level: Level,
        code: Code,
        path: &str,
        message: impl Into<String>,
        extra: Map<String, Value>,
    ) {
        self.record(Finding::new(level, code, path, message).with_extra(extra));
    }

    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    pub const fn summary_mut(&mut self) -> &mut Summary {
        &mut self.summary
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    #[must_use]
    pub fn into_parts(self) -> (Summary, Vec<Finding>) {
        (self.summary, self.findings)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
