use serde_json::{Number, Value};

use super::{Dtype, ReadError};

/// Element width assumed when a scalar's declared type carries none.
const DEFAULT_SCALAR_WIDTH: usize = 8;

/// A single numeric value as decoded from the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Scalar {
    /// JSON-safe form. Non-finite floats have no JSON number form and are
    /// rendered as `"nan"`, `"inf"` or `"-inf"`.
    #[must_use]
    pub fn to_json(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::from(i),
            Self::UInt(u) => Value::from(u),
            Self::Float(f) => Number::from_f64(f).map_or_else(
                || {
                    let label = if f.is_nan() {
                        "nan"
                    } else if f.is_sign_negative() {
                        "-inf"
                    } else {
                        "inf"
                    };
                    Value::String(label.to_string())
                },
                Value::Number,
            ),
        }
    }
}

/// A text value, either already-decoded or raw bytes of unknown encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextValue {
    Utf8(String),
    Bytes(Vec<u8>),
}

impl TextValue {
    /// Encoded size in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Utf8(s) => s.len(),
            Self::Bytes(b) => b.len(),
        }
    }

    /// Bytes decode as UTF-8 text when valid, otherwise as lowercase hex.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Utf8(s) => Value::String(s.clone()),
            Self::Bytes(b) => Value::String(
                std::str::from_utf8(b).map_or_else(|_| hex::encode(b), ToString::to_string),
            ),
        }
    }

    /// True if any of the first `window` units (bytes or chars) is a control
    /// character other than tab, newline, vertical tab, form feed or carriage
    /// return: code point `< 9` or in `14..=31`.
    #[must_use]
    pub fn has_control_chars(&self, window: usize) -> bool {
        match self {
            Self::Utf8(s) => s.chars().take(window).any(|c| is_suspicious(u32::from(c))),
            Self::Bytes(b) => b.iter().take(window).any(|&c| is_suspicious(u32::from(c))),
        }
    }
}

const fn is_suspicious(code: u32) -> bool {
    code < 9 || (code > 13 && code < 32)
}

#[derive(Debug, Clone, PartialEq)]
enum Elements {
    Dense(Vec<Scalar>),
    /// Every element holds this value; nothing is materialized.
    Uniform(Scalar),
}

/// An n-dimensional numeric array in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray {
    shape: Vec<usize>,
    dtype: Dtype,
    len: usize,
    elements: Elements,
}

impl NdArray {
    /// # Errors
    /// Returns `ReadError::ShapeMismatch` if `values` does not fill `shape`.
    pub fn new(shape: Vec<usize>, dtype: Dtype, values: Vec<Scalar>) -> Result<Self, ReadError> {
        let expected = shape.iter().product::<usize>();
        if expected != values.len() {
            return Err(ReadError::ShapeMismatch {
                shape: shape.iter().map(|&d| d as u64).collect(),
                expected: expected as u64,
                actual: values.len() as u64,
            });
        }
        Ok(Self {
            shape,
            dtype,
            len: expected,
            elements: Elements::Dense(values),
        })
    }

    /// An array of `shape` where every element is `fill`. Storage stays
    /// constant regardless of the declared shape.
    ///
    /// # Errors
    /// Returns `ReadError::Unsupported` if the element count overflows.
    pub fn filled(shape: Vec<usize>, dtype: Dtype, fill: Scalar) -> Result<Self, ReadError> {
        let len = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| ReadError::Unsupported {
                what: "array shape",
                detail: format!("{shape:?} overflows the element count"),
            })?;
        Ok(Self {
            shape,
            dtype,
            len,
            elements: Elements::Uniform(fill),
        })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element count times element width.
    #[must_use]
    pub fn nbytes(&self) -> usize {
        self.len
            .saturating_mul(self.dtype.element_width().unwrap_or(DEFAULT_SCALAR_WIDTH))
    }

    /// Nested JSON sequences following the array's shape.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match &self.elements {
            Elements::Dense(values) => nest(&self.shape, values),
            Elements::Uniform(fill) => nest_uniform(&self.shape, *fill),
        }
    }
}

fn nest(shape: &[usize], values: &[Scalar]) -> Value {
    match shape.split_first() {
        None => values.first().map_or(Value::Null, |v| v.to_json()),
        Some((_, [])) => Value::Array(values.iter().map(|v| v.to_json()).collect()),
        Some((&outer, inner)) => {
            let stride = inner.iter().product::<usize>();
            if stride == 0 {
                return Value::Array(vec![Value::Array(Vec::new()); outer]);
            }
            Value::Array(
                values
                    .chunks(stride)
                    .map(|chunk| nest(inner, chunk))
                    .collect(),
            )
        }
    }
}

fn nest_uniform(shape: &[usize], fill: Scalar) -> Value {
    match shape.split_first() {
        None => fill.to_json(),
        Some((&outer, inner)) => Value::Array(vec![nest_uniform(inner, fill); outer]),
    }
}

/// A decoded attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Scalar { value: Scalar, dtype: Dtype },
    Text(TextValue),
    Array(NdArray),
}

impl AttributeValue {
    /// Approximate in-file payload size in bytes.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        match self {
            Self::Scalar { dtype, .. } => dtype.element_width().unwrap_or(DEFAULT_SCALAR_WIDTH),
            Self::Text(text) => text.byte_len(),
            Self::Array(array) => array.nbytes(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Scalar { value, .. } => value.to_json(),
            Self::Text(text) => text.to_json(),
            Self::Array(array) => array.to_json(),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
