use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Character set of a text type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Ascii,
    Utf8,
}

/// Element type descriptor of a dataset or attribute.
///
/// Widths are in bytes. Anything the scanner has no heuristic for is kept
/// as `Opaque` with its original tag so it can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dtype {
    Bool,
    Int(u8),
    UInt(u8),
    Float(u8),
    FixedText { len: usize, encoding: TextEncoding },
    VarText(TextEncoding),
    Opaque(String),
}

impl Dtype {
    /// Parse a short type name such as `float64`, `i4`, `S16` or `vlen-str`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "bool" | "b1" => return Self::Bool,
            "vlen-str" | "str" | "string" | "object" => return Self::VarText(TextEncoding::Utf8),
            "vlen-bytes" | "bytes" => return Self::VarText(TextEncoding::Ascii),
            "float" | "double" => return Self::Float(8),
            "int" => return Self::Int(8),
            _ => {}
        }

        let trimmed = name.trim();
        if let Some(dtype) = parse_numeric(&lower).or_else(|| parse_shorthand(trimmed)) {
            return dtype;
        }

        // Fixed-length text uses the upper-case numpy-style prefix.
        if let Some(len) = trimmed.strip_prefix('S').and_then(|n| n.parse().ok()) {
            return Self::FixedText {
                len,
                encoding: TextEncoding::Ascii,
            };
        }
        if let Some(len) = trimmed.strip_prefix('U').and_then(|n| n.parse().ok()) {
            return Self::FixedText {
                len,
                encoding: TextEncoding::Utf8,
            };
        }

        Self::Opaque(trimmed.to_string())
    }

    /// Size of one element in bytes, if the type has a fixed size.
    #[must_use]
    pub const fn element_width(&self) -> Option<usize> {
        match self {
            Self::Bool => Some(1),
            Self::Int(w) | Self::UInt(w) | Self::Float(w) => Some(*w as usize),
            Self::FixedText { len, .. } => Some(*len),
            Self::VarText(_) | Self::Opaque(_) => None,
        }
    }

    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// True for unbounded-length text.
    #[must_use]
    pub const fn is_var_text(&self) -> bool {
        matches!(self, Self::VarText(_))
    }
}

/// `float64`, `uint8`, `int32` and friends.
fn parse_numeric(lower: &str) -> Option<Dtype> {
    let (ctor, bits): (fn(u8) -> Dtype, &str) = if let Some(rest) = lower.strip_prefix("float") {
        (Dtype::Float, rest)
    } else if let Some(rest) = lower.strip_prefix("uint") {
        (Dtype::UInt, rest)
    } else if let Some(rest) = lower.strip_prefix("int") {
        (Dtype::Int, rest)
    } else {
        return None;
    };

    let bits: u8 = bits.parse().ok()?;
    matches!(bits, 8 | 16 | 32 | 64).then(|| ctor(bits / 8))
}

/// numpy shorthand in byte widths: `f8`, `i4`, `u1`. Case-sensitive, so
/// `U8` stays fixed-length text.
fn parse_shorthand(name: &str) -> Option<Dtype> {
    let (ctor, bytes): (fn(u8) -> Dtype, &str) = match name.split_at_checked(1)? {
        ("f", rest) => (Dtype::Float, rest),
        ("i", rest) => (Dtype::Int, rest),
        ("u", rest) => (Dtype::UInt, rest),
        _ => return None,
    };
    let width: u8 = bytes.parse().ok()?;
    matches!(width, 1 | 2 | 4 | 8).then(|| ctor(width))
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int(w) => write!(f, "int{}", u32::from(*w) * 8),
            Self::UInt(w) => write!(f, "uint{}", u32::from(*w) * 8),
            Self::Float(w) => write!(f, "float{}", u32::from(*w) * 8),
            Self::FixedText {
                len,
                encoding: TextEncoding::Ascii,
            } => write!(f, "S{len}"),
            Self::FixedText {
                len,
                encoding: TextEncoding::Utf8,
            } => write!(f, "U{len}"),
            Self::VarText(TextEncoding::Utf8) => write!(f, "vlen-str"),
            Self::VarText(TextEncoding::Ascii) => write!(f, "vlen-bytes"),
            Self::Opaque(tag) => write!(f, "{tag}"),
        }
    }
}

impl Serialize for Dtype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dtype {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|s| Self::parse(&s))
    }
}

#[cfg(test)]
#[path = "dtype_tests.rs"]
mod tests;
