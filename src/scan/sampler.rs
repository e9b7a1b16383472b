//! NaN/Inf detection over a bounded numeric sample.

use rayon::prelude::*;

use crate::config::SamplerKind;

/// Elements per rayon task in [`ParallelSampler`].
const PARALLEL_CHUNK: usize = 4096;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericScan {
    pub has_nan: bool,
    pub has_inf: bool,
}

impl NumericScan {
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            has_nan: self.has_nan || other.has_nan,
            has_inf: self.has_inf || other.has_inf,
        }
    }

    const fn is_saturated(self) -> bool {
        self.has_nan && self.has_inf
    }
}

/// Scans an already-bounded sample. Implementations must agree on every input.
pub trait NumericSampler: Send + Sync {
    fn scan(&self, values: &[f64]) -> NumericScan;
}

/// Plain loop; stops as soon as both anomalies are seen.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarSampler;

impl NumericSampler for ScalarSampler {
    fn scan(&self, values: &[f64]) -> NumericScan {
        let mut scan = NumericScan::default();
        for value in values {
            scan.has_nan |= value.is_nan();
            scan.has_inf |= value.is_infinite();
            if scan.is_saturated() {
                break;
            }
        }
        scan
    }
}

/// Splits the sample into chunks scanned on the rayon pool.
#[derive(Debug, Clone, Copy)]
pub struct ParallelSampler {
    chunk_size: usize,
}

impl ParallelSampler {
    #[must_use]
    pub const fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: if chunk_size == 0 { 1 } else { chunk_size },
        }
    }
}

impl Default for ParallelSampler {
    fn default() -> Self {
        Self::new(PARALLEL_CHUNK)
    }
}

impl NumericSampler for ParallelSampler {
    fn scan(&self, values: &[f64]) -> NumericScan {
        values
            .par_chunks(self.chunk_size)
            .map(|chunk| ScalarSampler.scan(chunk))
            .reduce(NumericScan::default, NumericScan::merge)
    }
}

#[must_use]
pub fn sampler_for(kind: SamplerKind) -> Box<dyn NumericSampler> {
    match kind {
        SamplerKind::Scalar => Box::new(ScalarSampler),
        SamplerKind::Parallel => Box::new(ParallelSampler::default()),
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
