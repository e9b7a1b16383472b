//! The container decoding boundary.
//!
//! The scanner only ever talks to a [`FormatReader`]. Every node carries a
//! stable [`ObjectId`] so that an object reachable through several hard links
//! can be recognised.

mod dtype;
mod snapshot;
mod value;

pub use dtype::{Dtype, TextEncoding};
pub use snapshot::{SnapshotReader, detect_native_superblock};
pub use value::{AttributeValue, NdArray, Scalar, TextValue};

use thiserror::Error;

/// Stable identity of an object within one container.
pub type ObjectId = u64;

/// Recoverable decode failure. The scanner turns these into findings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("unknown object handle {0}")]
    UnknownObject(ObjectId),

    #[error("object {0} is not a group")]
    NotAGroup(ObjectId),

    #[error("no member named '{0}'")]
    NoSuchMember(String),

    #[error("unsupported {what}: {detail}")]
    Unsupported { what: &'static str, detail: String },

    #[error("{0}")]
    Decode(String),

    #[error("data holds {actual} elements but shape {shape:?} needs {expected}")]
    ShapeMismatch {
        shape: Vec<u64>,
        expected: u64,
        actual: u64,
    },
}

/// How a group member refers to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Hard,
    Soft { target: String },
    External { file: String, path: String },
}

/// Storage layout and type of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInfo {
    pub shape: Vec<u64>,
    pub dtype: Dtype,
    pub chunks: Option<Vec<u64>>,
    pub compression: Option<String>,
    pub fill_value: Option<AttributeValue>,
}

impl DatasetInfo {
    /// Product of the shape dimensions. A scalar dataset holds one element.
    #[must_use]
    pub fn element_count(&self) -> u64 {
        self.shape.iter().fold(1u64, |acc, &d| acc.saturating_mul(d))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Member names in the container's reported order.
    Group { members: Vec<String> },
    Dataset(DatasetInfo),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: ObjectId,
    pub kind: NodeKind,
}

/// A leading sub-block of a dataset: `[0, count)` along every dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    counts: Vec<u64>,
}

impl Selection {
    /// Select the first `min(limit, dim)` elements of each dimension.
    #[must_use]
    pub fn leading(shape: &[u64], limit: u64) -> Self {
        Self {
            counts: shape.iter().map(|&d| d.min(limit)).collect(),
        }
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of selected elements. An empty selection on a scalar dataset
    /// selects its single element.
    #[must_use]
    pub fn element_count(&self) -> u64 {
        self.counts.iter().fold(1u64, |acc, &c| acc.saturating_mul(c))
    }
}

/// Elements read back from a [`Selection`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sample<T> {
    /// Row-major elements as stored.
    Dense(Vec<T>),
    /// `count` copies of one value, as read from storage that was never
    /// written and resolves to the fill value.
    Uniform { value: T, count: u64 },
}

impl<T> Sample<T> {
    /// Number of elements the selection covered.
    #[must_use]
    pub fn len(&self) -> u64 {
        match self {
            Self::Dense(values) => values.len() as u64,
            Self::Uniform { count, .. } => *count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialized elements; a uniform sample holds its value once.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        match self {
            Self::Dense(values) => values,
            Self::Uniform { count: 0, .. } => &[],
            Self::Uniform { value, .. } => std::slice::from_ref(value),
        }
    }

    /// Number of covered elements matching `predicate`.
    pub fn count_matching(&self, mut predicate: impl FnMut(&T) -> bool) -> u64 {
        match self {
            Self::Dense(values) => values.iter().filter(|v| predicate(v)).count() as u64,
            Self::Uniform { value, count } => {
                if predicate(value) {
                    *count
                } else {
                    0
                }
            }
        }
    }
}

/// Read access to one open container.
///
/// Objects are addressed by handle; paths are built by the caller and only
/// used for reporting. Implementations perform blocking I/O and are used
/// from a single thread.
pub trait FormatReader {
    /// Size of the reserved leading byte region.
    ///
    /// # Errors
    /// Returns an error if the size cannot be determined.
    fn userblock_size(&self) -> Result<u64, ReadError>;

    /// Decode the root group.
    ///
    /// # Errors
    /// Returns an error if the root object cannot be decoded.
    fn root(&self) -> Result<Node, ReadError>;

    /// Decode the object a hard-linked member of `group` points to.
    ///
    /// # Errors
    /// Returns an error if the member is missing, is not a hard link, or its
    /// target cannot be decoded.
    fn member(&self, group: ObjectId, name: &str) -> Result<Node, ReadError>;

    /// Describe how member `name` of `group` is linked, without following it.
    ///
    /// # Errors
    /// Returns an error if the link cannot be resolved.
    fn resolve_link(&self, group: ObjectId, name: &str) -> Result<Link, ReadError>;

    /// All attributes of an object, each decoded independently.
    ///
    /// # Errors
    /// Returns an error only if the attribute table itself cannot be read.
    fn attributes(
        &self,
        object: ObjectId,
    ) -> Result<Vec<(String, Result<AttributeValue, ReadError>)>, ReadError>;

    /// Read a floating-point selection, flattened in row-major order.
    ///
    /// # Errors
    /// Returns an error if the data cannot be read or is not floating-point.
    fn read_floats(
        &self,
        dataset: ObjectId,
        selection: &Selection,
    ) -> Result<Sample<f64>, ReadError>;

    /// Read a text selection, flattened in row-major order.
    ///
    /// # Errors
    /// Returns an error if the data cannot be read or is not text.
    fn read_text(
        &self,
        dataset: ObjectId,
        selection: &Selection,
    ) -> Result<Sample<TextValue>, ReadError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
