//! The scan engine: one traversal of a container producing a [`Report`].

mod attributes;
mod context;
mod dataset;
mod finding;
mod links;
mod sampler;
mod walker;

pub use context::{Counts, ScanContext, Summary};
pub use dataset::DatasetInspector;
pub use finding::{Code, Finding, Level, extra};
pub use links::is_safe_name;
pub use sampler::{NumericSampler, NumericScan, ParallelSampler, ScalarSampler, sampler_for};
pub use walker::Walker;

use serde_json::json;

use crate::config::ScanConfig;
use crate::error::{H5LintError, Result};
use crate::output::ScanProgress;
use crate::reader::FormatReader;
use crate::report::Report;

/// Path label of the root group.
pub const ROOT_PATH: &str = "/";

/// Runs the file-level check and the traversal with one configuration.
pub struct Scanner {
    config: ScanConfig,
    sampler: Box<dyn NumericSampler>,
    progress: Option<ScanProgress>,
}

impl Scanner {
    #[must_use]
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            sampler: sampler_for(config.sampler),
            config: config.clone(),
            progress: None,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Scan one container.
    ///
    /// `file` and `size_bytes` are reported as given.
    ///
    /// # Errors
    /// Returns `H5LintError::Traversal` if the root group cannot be decoded.
    /// Every other failure becomes a finding.
    pub fn scan(
        &self,
        reader: &dyn FormatReader,
        file: &str,
        size_bytes: Option<u64>,
    ) -> Result<Report> {
        tracing::info!(file, "scan started");
        let mut ctx = ScanContext::new(file, size_bytes);

        check_userblock(&mut ctx, reader);

        let root = reader.root().map_err(|source| H5LintError::Traversal {
            path: ROOT_PATH.to_string(),
            source,
        })?;
        let datasets = DatasetInspector::new(&self.config, &*self.sampler);
        let mut walker = Walker::new(
            reader,
            datasets,
            self.config.huge_attribute_bytes,
            self.progress.as_ref(),
        );
        walker.walk(&mut ctx, root);

        if let Some(progress) = &self.progress {
            progress.finish();
        }

        let report = Report::assemble(ctx);
        tracing::info!(
            objects = report.summary.num_objects,
            findings = report.findings.len(),
            "scan finished"
        );
        Ok(report)
    }
}

fn check_userblock(ctx: &mut ScanContext, reader: &dyn FormatReader) {
    match reader.userblock_size() {
        Ok(bytes) => {
            ctx.summary_mut().userblock_bytes = bytes;
            if bytes > 0 {
                ctx.emit(
                    Level::Safety,
                    Code::UserblockPresent,
                    ROOT_PATH,
                    format!("user block present ({bytes} bytes), inspect for embedded content"),
                    extra([("userblock_bytes", json!(bytes))]),
                );
            }
        }
        Err(e) => ctx.emit(
            Level::Warn,
            Code::UserblockUnknown,
            ROOT_PATH,
            "unable to read userblock size",
            extra([("error", json!(e.to_string()))]),
        ),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
