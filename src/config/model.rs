use serde::{Deserialize, Serialize};

use crate::error::{H5LintError, Result};

/// Numeric sampling backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerKind {
    /// Single-threaded loop (default).
    #[default]
    Scalar,
    /// Chunked rayon reduction; same results, useful for large samples.
    Parallel,
}

/// Heuristic thresholds and sampling bounds `[scan]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Attributes larger than this many bytes are reported.
    #[serde(default = "default_huge_attribute_bytes")]
    pub huge_attribute_bytes: u64,

    /// Chunks with fewer elements than this are reported.
    #[serde(default = "default_tiny_chunk_elements")]
    pub tiny_chunk_elements: u64,

    /// Per-dimension sample bound for float datasets.
    #[serde(default = "default_numeric_sample_limit")]
    pub numeric_sample_limit: u64,

    /// Per-dimension sample bound for variable-length text datasets.
    #[serde(default = "default_text_sample_limit")]
    pub text_sample_limit: u64,

    /// Leading bytes/characters of each text value checked for control characters.
    #[serde(default = "default_text_scan_window")]
    pub text_scan_window: usize,

    #[serde(default)]
    pub sampler: SamplerKind,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            huge_attribute_bytes: default_huge_attribute_bytes(),
            tiny_chunk_elements: default_tiny_chunk_elements(),
            numeric_sample_limit: default_numeric_sample_limit(),
            text_sample_limit: default_text_sample_limit(),
            text_scan_window: default_text_scan_window(),
            sampler: SamplerKind::default(),
        }
    }
}

/// Report policy `[report]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Exit 0 regardless of findings. `--soft-fail` also enables this.
    #[serde(default)]
    pub soft_fail: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Reject settings that would make a heuristic meaningless.
    ///
    /// # Errors
    /// Returns `H5LintError::Config` naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let scan = &self.scan;
        let zero = [
            ("scan.numeric_sample_limit", scan.numeric_sample_limit == 0),
            ("scan.text_sample_limit", scan.text_sample_limit == 0),
            ("scan.text_scan_window", scan.text_scan_window == 0),
        ];
        if let Some((key, _)) = zero.iter().find(|(_, is_zero)| *is_zero) {
            return Err(H5LintError::Config(format!("{key} must be greater than 0")));
        }
        Ok(())
    }
}

const fn default_huge_attribute_bytes() -> u64 {
    1_000_000
}

const fn default_tiny_chunk_elements() -> u64 {
    8
}

const fn default_numeric_sample_limit() -> u64 {
    1024
}

const fn default_text_sample_limit() -> u64 {
    64
}

const fn default_text_scan_window() -> usize {
    128
}
