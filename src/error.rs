use std::path::PathBuf;

use thiserror::Error;

use crate::reader::ReadError;

/// Fatal errors: anything that prevents a report from being produced.
///
/// Per-check failures never surface here; they are recorded as findings.
#[derive(Error, Debug)]
pub enum H5LintError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to open container: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("Traversal failed at '{path}'")]
    Traversal {
        path: String,
        #[source]
        source: ReadError,
    },

    #[error("Failed to access file: {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl H5LintError {
    /// Short category name used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "FileNotFound",
            Self::Open { .. } => "Open",
            Self::Traversal { .. } => "Traversal",
            Self::FileAccess { .. } => "FileAccess",
            Self::Config(_) => "Config",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Headline message without the underlying cause.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => format!("file not found: {}", path.display()),
            Self::Open { path, .. } => format!("cannot open container {}", path.display()),
            Self::Traversal { path, .. } => format!("traversal aborted at '{path}'"),
            Self::FileAccess { path, source } => {
                format!("cannot access {}: {}", path.display(), source.kind())
            }
            Self::Config(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// The underlying cause, when there is one worth showing separately.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Open { source, .. } | Self::Traversal { source, .. } => Some(source.to_string()),
            Self::FileAccess { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileNotFound { .. } => Some("check the path and try again"),
            Self::Open { .. } => {
                Some("export the container to a JSON object-graph snapshot and scan that")
            }
            Self::TomlParse(_) | Self::Config(_) => {
                Some("fix the configuration file or pass --no-config")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, H5LintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
