use serde::Serialize;

use crate::scan::{Counts, Finding, ScanContext, Summary};
use crate::{EXIT_FINDINGS, EXIT_SUCCESS};

/// The output document: exactly `summary` and `findings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub findings: Vec<Finding>,
}

impl Report {
    /// Finalize a scan: tally findings per level into the summary.
    #[must_use]
    pub fn assemble(ctx: ScanContext) -> Self {
        let (mut summary, findings) = ctx.into_parts();
        summary.counts = Counts::tally(&findings);
        Self { summary, findings }
    }

    /// True if any finding is `error` or `safety`.
    #[must_use]
    pub fn has_blocking_findings(&self) -> bool {
        self.findings.iter().any(|f| f.level.is_blocking())
    }
}

/// Process exit code for a completed scan.
#[must_use]
pub fn exit_code(report: &Report, soft_fail: bool) -> i32 {
    if soft_fail || !report.has_blocking_findings() {
        EXIT_SUCCESS
    } else {
        EXIT_FINDINGS
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
