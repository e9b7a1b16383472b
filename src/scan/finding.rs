use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Severity bucket. Buckets are independent; there is no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
    Safety,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Safety => "safety",
        }
    }

    /// Levels that make the scan exit non-zero unless soft-fail is set.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Error | Self::Safety)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable finding identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    UserblockPresent,
    UserblockUnknown,
    EmptyGroup,
    ObjectOpenFail,
    HugeAttribute,
    SuspiciousAttrName,
    AttrReadFail,
    SuspiciousName,
    SoftLink,
    ExternalLink,
    LinkInspectFail,
    CompressionWithoutChunking,
    TinyChunks,
    ChunkLargerThanDataset,
    NanValues,
    InfValues,
    DataSampleFail,
    TextControlChars,
    TextSampleFail,
}

impl Code {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserblockPresent => "USERBLOCK_PRESENT",
            Self::UserblockUnknown => "USERBLOCK_UNKNOWN",
            Self::EmptyGroup => "EMPTY_GROUP",
            Self::ObjectOpenFail => "OBJECT_OPEN_FAIL",
            Self::HugeAttribute => "HUGE_ATTRIBUTE",
            Self::SuspiciousAttrName => "SUSPICIOUS_ATTR_NAME",
            Self::AttrReadFail => "ATTR_READ_FAIL",
            Self::SuspiciousName => "SUSPICIOUS_NAME",
            Self::SoftLink => "SOFT_LINK",
            Self::ExternalLink => "EXTERNAL_LINK",
            Self::LinkInspectFail => "LINK_INSPECT_FAIL",
            Self::CompressionWithoutChunking => "COMPRESSION_WITHOUT_CHUNKING",
            Self::TinyChunks => "TINY_CHUNKS",
            Self::ChunkLargerThanDataset => "CHUNK_LARGER_THAN_DATASET",
            Self::NanValues => "NAN_VALUES",
            Self::InfValues => "INF_VALUES",
            Self::DataSampleFail => "DATA_SAMPLE_FAIL",
            Self::TextControlChars => "TEXT_CONTROL_CHARS",
            Self::TextSampleFail => "TEXT_SAMPLE_FAIL",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported anomaly. `extra` serializes with sorted keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub code: Code,
    pub path: String,
    pub message: String,
    pub extra: Map<String, Value>,
}

impl Finding {
    #[must_use]
    pub fn new(level: Level, code: Code, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            code,
            path: path.into(),
            message: message.into(),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }
}

/// Build an `extra` map from literal pairs.
#[must_use]
pub fn extra<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
