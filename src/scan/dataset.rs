use serde_json::{Map, Value, json};

use crate::config::ScanConfig;
use crate::reader::{DatasetInfo, FormatReader, ObjectId, Selection};

use super::context::ScanContext;
use super::finding::{Code, Level, extra};
use super::sampler::NumericSampler;

/// Layout and sampled-content checks for datasets.
pub struct DatasetInspector<'a> {
    config: &'a ScanConfig,
    sampler: &'a dyn NumericSampler,
}

impl<'a> DatasetInspector<'a> {
    #[must_use]
    pub const fn new(config: &'a ScanConfig, sampler: &'a dyn NumericSampler) -> Self {
        Self { config, sampler }
    }

    /// Run every dataset heuristic. Each one is independent: a failed
    /// numeric sample never suppresses the text sample or the layout checks.
    pub fn inspect(
        &self,
        ctx: &mut ScanContext,
        reader: &dyn FormatReader,
        dataset: ObjectId,
        path: &str,
        info: &DatasetInfo,
    ) {
        self.check_layout(ctx, path, info);
        if info.dtype.is_float() {
            self.sample_numeric(ctx, reader, dataset, path, info);
        }
        if info.dtype.is_var_text() {
            self.sample_text(ctx, reader, dataset, path, info);
        }
    }

    fn check_layout(&self, ctx: &mut ScanContext, path: &str, info: &DatasetInfo) {
        if info.compression.is_some() && info.chunks.is_none() {
            ctx.emit(
                Level::Warn,
                Code::CompressionWithoutChunking,
                path,
                "compression set but dataset is not chunked",
                layout_context(info),
            );
        }

        let Some(chunks) = info.chunks.as_deref().filter(|c| !c.is_empty()) else {
            return;
        };
        let chunk_elements = chunks
            .iter()
            .fold(1u64, |acc, &c| acc.saturating_mul(c.max(1)));
        let dataset_elements = info.element_count();

        if chunk_elements < self.config.tiny_chunk_elements {
            ctx.emit(
                Level::Warn,
                Code::TinyChunks,
                path,
                "very small chunk size",
                layout_context(info),
            );
        }
        if dataset_elements > 0 && chunk_elements > dataset_elements {
            ctx.emit(
                Level::Warn,
                Code::ChunkLargerThanDataset,
                path,
                "chunk covers more than dataset",
                layout_context(info),
            );
        }
    }

    fn sample_numeric(
        &self,
        ctx: &mut ScanContext,
        reader: &dyn FormatReader,
        dataset: ObjectId,
        path: &str,
        info: &DatasetInfo,
    ) {
        let selection = Selection::leading(&info.shape, self.config.numeric_sample_limit);
        let sample = match reader.read_floats(dataset, &selection) {
            Ok(sample) => sample,
            Err(e) => {
                ctx.emit(
                    Level::Error,
                    Code::DataSampleFail,
                    path,
                    "failed to sample dataset",
                    extra([("error", json!(e.to_string()))]),
                );
                return;
            }
        };

        let scan = self.sampler.scan(sample.elements());
        let sampled = json!(sample.len());
        if scan.has_nan {
            ctx.emit(
                Level::Warn,
                Code::NanValues,
                path,
                "NaN detected in sampled values",
                extra([("sampled", sampled.clone())]),
            );
        }
        if scan.has_inf {
            ctx.emit(
                Level::Warn,
                Code::InfValues,
                path,
                "Inf detected in sampled values",
                extra([("sampled", sampled)]),
            );
        }
    }

    fn sample_text(
        &self,
        ctx: &mut ScanContext,
        reader: &dyn FormatReader,
        dataset: ObjectId,
        path: &str,
        info: &DatasetInfo,
    ) {
        let selection = Selection::leading(&info.shape, self.config.text_sample_limit);
        match reader.read_text(dataset, &selection) {
            Ok(sample) => {
                let window = self.config.text_scan_window;
                let count = sample.count_matching(|value| value.has_control_chars(window));
                if count > 0 {
                    ctx.emit(
                        Level::Warn,
                        Code::TextControlChars,
                        path,
                        format!("{count} sampled string(s) contain control characters"),
                        extra([("count", json!(count))]),
                    );
                }
            }
            Err(e) => ctx.emit(
                Level::Error,
                Code::TextSampleFail,
                path,
                "failed to sample text dataset",
                extra([("error", json!(e.to_string()))]),
            ),
        }
    }
}

fn layout_context(info: &DatasetInfo) -> Map<String, Value> {
    extra([
        ("shape", json!(info.shape)),
        ("dtype", json!(info.dtype.to_string())),
        ("chunks", json!(info.chunks)),
        ("compression", json!(info.compression)),
        (
            "fillvalue",
            info.fill_value.as_ref().map_or(Value::Null, |v| v.to_json()),
        ),
    ])
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
