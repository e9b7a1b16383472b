//! JSON object-graph snapshots of a container.
//!
//! A snapshot lists every object once in an `objects` table; groups refer to
//! their members by link, and hard links name the target object's key, so
//! shared objects and even cycles can be expressed:
//!
//! ```json
//! {
//!   "userblock_bytes": 512,
//!   "root": "root",
//!   "objects": {
//!     "root": {"type": "group", "members": [
//!       {"name": "temps", "link": "hard", "object": "t"},
//!       {"name": "alias", "link": "soft", "target": "/temps"},
//!       {"name": "extlink", "link": "external", "file": "other.h5", "path": "/data"}
//!     ]},
//!     "t": {"type": "dataset", "shape": [4], "dtype": "float64",
//!           "chunks": [2], "compression": "gzip", "data": [1.0, "nan", 3.0, "inf"],
//!           "attributes": {"units": "K"}}
//!   }
//! }
//! ```
//!
//! `userblock_bytes` defaults to 0; an explicit `null` means the size could
//! not be determined.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::{
    AttributeValue, DatasetInfo, Dtype, FormatReader, Link, NdArray, Node, NodeKind, ObjectId,
    ReadError, Sample, Scalar, Selection, TextEncoding, TextValue,
};
use crate::error::{H5LintError, Result};

/// Signature that opens an HDF5 superblock.
const HDF5_SIGNATURE: [u8; 8] = [0x89, b'H', b'D', b'F', b'\r', b'\n', 0x1a, b'\n'];

/// The first non-zero superblock offset; later candidates double from here.
const FIRST_USERBLOCK_OFFSET: u64 = 512;

/// Upper bound on elements in a dataset fill value, which is rendered into
/// every layout finding.
const MAX_FILL_ELEMENTS: usize = 4096;

fn default_userblock() -> Option<u64> {
    Some(0)
}

fn default_root() -> String {
    "root".to_string()
}

#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    #[serde(default = "default_userblock")]
    userblock_bytes: Option<u64>,
    #[serde(default = "default_root")]
    root: String,
    objects: IndexMap<String, ObjectSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectSpec {
    Group {
        #[serde(default)]
        members: Vec<MemberSpec>,
        #[serde(default)]
        attributes: IndexMap<String, Value>,
        #[serde(default)]
        attributes_error: Option<String>,
    },
    Dataset {
        #[serde(default)]
        shape: Vec<u64>,
        dtype: Dtype,
        #[serde(default)]
        chunks: Option<Vec<u64>>,
        #[serde(default)]
        compression: Option<String>,
        #[serde(default)]
        fillvalue: Option<Value>,
        #[serde(default)]
        data: Option<Value>,
        #[serde(default)]
        attributes: IndexMap<String, Value>,
        #[serde(default)]
        attributes_error: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct MemberSpec {
    name: String,
    #[serde(flatten)]
    link: LinkSpec,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "link", rename_all = "kebab-case")]
enum LinkSpec {
    Hard { object: String },
    Soft { target: String },
    External { file: String, path: String },
    UserDefined { class: u16 },
}

#[derive(Debug)]
enum MemberLink {
    /// `Err` holds the key of a target missing from the objects table.
    Hard(std::result::Result<ObjectId, String>),
    Soft(String),
    External { file: String, path: String },
    UserDefined(u16),
}

#[derive(Debug)]
struct Member {
    name: String,
    link: MemberLink,
}

#[derive(Debug)]
enum Body {
    Group(Vec<Member>),
    Dataset {
        info: DatasetInfo,
        data: Option<Value>,
    },
}

#[derive(Debug)]
struct Object {
    body: Body,
    attributes: std::result::Result<IndexMap<String, Value>, String>,
}

/// A [`FormatReader`] over a JSON snapshot held in memory.
#[derive(Debug)]
pub struct SnapshotReader {
    userblock_bytes: Option<u64>,
    root: ObjectId,
    objects: Vec<Object>,
}

impl SnapshotReader {
    /// Open a snapshot file.
    ///
    /// # Errors
    /// Returns `FileNotFound` if the path does not exist, `FileAccess` on I/O
    /// failure, and `Open` if the file is a native HDF5 container or not a
    /// valid snapshot.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(H5LintError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let access = |source| H5LintError::FileAccess {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(access)?;
        if let Some(offset) = detect_native_superblock(&mut file).map_err(access)? {
            return Err(H5LintError::Open {
                path: path.to_path_buf(),
                source: ReadError::Unsupported {
                    what: "container encoding",
                    detail: format!(
                        "native HDF5 superblock at offset {offset}; no native decoder is built in"
                    ),
                },
            });
        }
        file.seek(SeekFrom::Start(0)).map_err(access)?;

        let doc: SnapshotDoc =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| H5LintError::Open {
                path: path.to_path_buf(),
                source: ReadError::Decode(e.to_string()),
            })?;
        Self::from_doc(doc).map_err(|source| H5LintError::Open {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a reader from an in-memory snapshot document.
    ///
    /// # Errors
    /// Returns an error if the document is not a valid snapshot.
    pub fn from_value(value: Value) -> std::result::Result<Self, ReadError> {
        let doc: SnapshotDoc =
            serde_json::from_value(value).map_err(|e| ReadError::Decode(e.to_string()))?;
        Self::from_doc(doc)
    }

    fn from_doc(doc: SnapshotDoc) -> std::result::Result<Self, ReadError> {
        let Some(root) = doc.objects.get_index_of(&doc.root) else {
            return Err(ReadError::Decode(format!(
                "root object '{}' is not in the objects table",
                doc.root
            )));
        };
        if !matches!(doc.objects[root], ObjectSpec::Group { .. }) {
            return Err(ReadError::Decode(format!(
                "root object '{}' is not a group",
                doc.root
            )));
        }

        let ids: HashMap<String, ObjectId> = doc
            .objects
            .keys()
            .enumerate()
            .map(|(i, key)| (key.clone(), i as ObjectId))
            .collect();
        let objects = doc
            .objects
            .into_iter()
            .map(|(key, spec)| build_object(&key, spec, &ids))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            userblock_bytes: doc.userblock_bytes,
            root: root as ObjectId,
            objects,
        })
    }

    fn object(&self, id: ObjectId) -> std::result::Result<&Object, ReadError> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.objects.get(index))
            .ok_or(ReadError::UnknownObject(id))
    }

    fn node(&self, id: ObjectId) -> std::result::Result<Node, ReadError> {
        let kind = match &self.object(id)?.body {
            Body::Group(members) => NodeKind::Group {
                members: members.iter().map(|m| m.name.clone()).collect(),
            },
            Body::Dataset { info, .. } => NodeKind::Dataset(info.clone()),
        };
        Ok(Node { id, kind })
    }

    fn find_member(&self, group: ObjectId, name: &str) -> std::result::Result<&Member, ReadError> {
        match &self.object(group)?.body {
            Body::Group(members) => members
                .iter()
                .find(|m| m.name == name)
                .ok_or_else(|| ReadError::NoSuchMember(name.to_string())),
            Body::Dataset { .. } => Err(ReadError::NotAGroup(group)),
        }
    }

    /// Flattened elements covered by `selection`, or `None` if the dataset
    /// stores no data and reads resolve to its fill value.
    fn select(
        &self,
        dataset: ObjectId,
        selection: &Selection,
    ) -> std::result::Result<(&DatasetInfo, Option<Vec<&Value>>), ReadError> {
        let Body::Dataset { info, data } = &self.object(dataset)?.body else {
            return Err(ReadError::Unsupported {
                what: "read",
                detail: format!("object {dataset} is not a dataset"),
            });
        };
        let Some(data) = data else {
            return Ok((info, None));
        };

        let mut flat = Vec::new();
        flatten(data, &mut flat);
        let expected = info.element_count();
        if flat.len() as u64 != expected {
            return Err(ReadError::ShapeMismatch {
                shape: info.shape.clone(),
                expected,
                actual: flat.len() as u64,
            });
        }
        Ok((info, Some(leading_block(&flat, &info.shape, selection.counts()))))
    }
}

impl FormatReader for SnapshotReader {
    fn userblock_size(&self) -> std::result::Result<u64, ReadError> {
        self.userblock_bytes
            .ok_or_else(|| ReadError::Decode("userblock size not recorded".to_string()))
    }

    fn root(&self) -> std::result::Result<Node, ReadError> {
        self.node(self.root)
    }

    fn member(&self, group: ObjectId, name: &str) -> std::result::Result<Node, ReadError> {
        match &self.find_member(group, name)?.link {
            MemberLink::Hard(Ok(id)) => self.node(*id),
            MemberLink::Hard(Err(key)) => Err(ReadError::Decode(format!(
                "hard link points to missing object '{key}'"
            ))),
            MemberLink::Soft(_) | MemberLink::External { .. } | MemberLink::UserDefined(_) => {
                Err(ReadError::Unsupported {
                    what: "link traversal",
                    detail: format!("'{name}' is not a hard link"),
                })
            }
        }
    }

    fn resolve_link(&self, group: ObjectId, name: &str) -> std::result::Result<Link, ReadError> {
        match &self.find_member(group, name)?.link {
            MemberLink::Hard(_) => Ok(Link::Hard),
            MemberLink::Soft(target) => Ok(Link::Soft {
                target: target.clone(),
            }),
            MemberLink::External { file, path } => Ok(Link::External {
                file: file.clone(),
                path: path.clone(),
            }),
            MemberLink::UserDefined(class) => Err(ReadError::Unsupported {
                what: "link class",
                detail: format!("user-defined link class {class}"),
            }),
        }
    }

    fn attributes(
        &self,
        object: ObjectId,
    ) -> std::result::Result<Vec<(String, std::result::Result<AttributeValue, ReadError>)>, ReadError>
    {
        let table = self
            .object(object)?
            .attributes
            .as_ref()
            .map_err(|e| ReadError::Decode(e.clone()))?;
        Ok(table
            .iter()
            .map(|(name, value)| (name.clone(), decode_attribute(value)))
            .collect())
    }

    fn read_floats(
        &self,
        dataset: ObjectId,
        selection: &Selection,
    ) -> std::result::Result<Sample<f64>, ReadError> {
        let (info, selected) = self.select(dataset, selection)?;
        if !info.dtype.is_float() {
            return Err(ReadError::Unsupported {
                what: "float read",
                detail: format!("dataset type is {}", info.dtype),
            });
        }
        match selected {
            Some(values) => values
                .into_iter()
                .map(float_element)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Sample::Dense),
            None => {
                let fill = match &info.fill_value {
                    Some(AttributeValue::Scalar { value, .. }) => scalar_to_f64(*value),
                    _ => 0.0,
                };
                Ok(Sample::Uniform {
                    value: fill,
                    count: selection.element_count(),
                })
            }
        }
    }

    fn read_text(
        &self,
        dataset: ObjectId,
        selection: &Selection,
    ) -> std::result::Result<Sample<TextValue>, ReadError> {
        let (info, selected) = self.select(dataset, selection)?;
        let encoding = match info.dtype {
            Dtype::VarText(encoding) | Dtype::FixedText { encoding, .. } => encoding,
            _ => {
                return Err(ReadError::Unsupported {
                    what: "text read",
                    detail: format!("dataset type is {}", info.dtype),
                });
            }
        };
        match selected {
            Some(values) => values
                .into_iter()
                .map(|v| text_element(v, encoding))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Sample::Dense),
            None => {
                let fill = match &info.fill_value {
                    Some(AttributeValue::Text(text)) => text.clone(),
                    _ => TextValue::Utf8(String::new()),
                };
                Ok(Sample::Uniform {
                    value: fill,
                    count: selection.element_count(),
                })
            }
        }
    }
}

/// Look for the HDF5 superblock signature at offset 0, 512, 1024, 2048, ...
///
/// Returns the offset, which equals the userblock size, if found.
///
/// # Errors
/// Returns an error if the stream cannot be read or seeked.
pub fn detect_native_superblock<R: Read + Seek>(reader: &mut R) -> std::io::Result<Option<u64>> {
    let len = reader.seek(SeekFrom::End(0))?;
    let mut offset = 0;
    while offset + HDF5_SIGNATURE.len() as u64 <= len {
        reader.seek(SeekFrom::Start(offset))?;
        let mut magic = [0u8; 8];
        reader.read_exact(&mut magic)?;
        if magic == HDF5_SIGNATURE {
            return Ok(Some(offset));
        }
        offset = if offset == 0 {
            FIRST_USERBLOCK_OFFSET
        } else {
            offset * 2
        };
    }
    Ok(None)
}

fn build_object(
    key: &str,
    spec: ObjectSpec,
    ids: &HashMap<String, ObjectId>,
) -> std::result::Result<Object, ReadError> {
    let attributes = |table, error: Option<String>| error.map_or(Ok(table), Err);
    match spec {
        ObjectSpec::Group {
            members,
            attributes: table,
            attributes_error,
        } => {
            let mut seen = HashSet::new();
            let mut built = Vec::with_capacity(members.len());
            for member in members {
                if !seen.insert(member.name.clone()) {
                    return Err(ReadError::Decode(format!(
                        "group '{key}' lists member '{}' twice",
                        member.name
                    )));
                }
                built.push(Member {
                    link: build_link(member.link, ids),
                    name: member.name,
                });
            }
            Ok(Object {
                body: Body::Group(built),
                attributes: attributes(table, attributes_error),
            })
        }
        ObjectSpec::Dataset {
            shape,
            dtype,
            chunks,
            compression,
            fillvalue,
            data,
            attributes: table,
            attributes_error,
        } => {
            let fill_value = fillvalue
                .map(|v| decode_attribute(&v))
                .transpose()
                .map_err(|e| ReadError::Decode(format!("dataset '{key}': bad fillvalue: {e}")))?;
            if let Some(AttributeValue::Array(array)) = &fill_value
                && array.len() > MAX_FILL_ELEMENTS
            {
                return Err(ReadError::Decode(format!(
                    "dataset '{key}': fillvalue holds {} elements, at most {MAX_FILL_ELEMENTS} allowed",
                    array.len()
                )));
            }
            Ok(Object {
                body: Body::Dataset {
                    info: DatasetInfo {
                        shape,
                        dtype,
                        chunks,
                        compression: compression.filter(|c| !c.is_empty()),
                        fill_value,
                    },
                    data,
                },
                attributes: attributes(table, attributes_error),
            })
        }
    }
}

fn build_link(spec: LinkSpec, ids: &HashMap<String, ObjectId>) -> MemberLink {
    match spec {
        LinkSpec::Hard { object } => MemberLink::Hard(ids.get(&object).copied().ok_or(object)),
        LinkSpec::Soft { target } => MemberLink::Soft(target),
        LinkSpec::External { file, path } => MemberLink::External { file, path },
        LinkSpec::UserDefined { class } => MemberLink::UserDefined(class),
    }
}

fn flatten<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| flatten(item, out)),
        leaf => out.push(leaf),
    }
}

fn to_len(count: u64) -> usize {
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Row-major elements of the leading `counts` sub-block of `flat`.
fn leading_block<'a>(flat: &[&'a Value], shape: &[u64], counts: &[u64]) -> Vec<&'a Value> {
    if counts.contains(&0) {
        return Vec::new();
    }
    if shape.is_empty() {
        return flat.first().copied().into_iter().collect();
    }

    let mut strides = vec![1usize; shape.len()];
    for dim in (0..shape.len() - 1).rev() {
        strides[dim] = strides[dim + 1].saturating_mul(to_len(shape[dim + 1]));
    }

    let mut out = Vec::with_capacity(to_len(counts.iter().product()));
    let mut index = vec![0u64; counts.len()];
    loop {
        let offset: usize = index
            .iter()
            .zip(&strides)
            .map(|(&i, &s)| to_len(i) * s)
            .sum();
        out.push(flat[offset]);

        // Odometer increment, last dimension fastest.
        let mut dim = counts.len();
        loop {
            if dim == 0 {
                return out;
            }
            dim -= 1;
            index[dim] += 1;
            if index[dim] < counts[dim] {
                break;
            }
            index[dim] = 0;
        }
    }
}

fn parse_special_float(s: &str) -> Option<f64> {
    match s.to_ascii_lowercase().as_str() {
        "nan" => Some(f64::NAN),
        "inf" | "+inf" | "infinity" => Some(f64::INFINITY),
        "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn float_element(value: &Value) -> std::result::Result<f64, ReadError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ReadError::Decode(format!("number {n} is not representable"))),
        Value::String(s) => parse_special_float(s)
            .ok_or_else(|| ReadError::Decode(format!("'{s}' is not a float element"))),
        other => Err(ReadError::Decode(format!("{other} is not a float element"))),
    }
}

fn text_element(value: &Value, encoding: TextEncoding) -> std::result::Result<TextValue, ReadError> {
    match (value, encoding) {
        (Value::String(s), TextEncoding::Utf8) => Ok(TextValue::Utf8(s.clone())),
        (Value::String(s), TextEncoding::Ascii) => Ok(TextValue::Bytes(s.clone().into_bytes())),
        (Value::Object(map), _) => match map.get("bytes") {
            Some(Value::String(hex)) => decode_hex(hex).map(TextValue::Bytes),
            _ => Err(ReadError::Decode(
                "text element object needs a 'bytes' hex string".to_string(),
            )),
        },
        (other, _) => Err(ReadError::Decode(format!("{other} is not a text element"))),
    }
}

fn decode_hex(text: &str) -> std::result::Result<Vec<u8>, ReadError> {
    hex::decode(text).map_err(|e| ReadError::Decode(format!("bad byte string '{text}': {e}")))
}

fn scalar_to_f64(value: Scalar) -> f64 {
    match value {
        Scalar::Bool(b) => f64::from(u8::from(b)),
        #[allow(clippy::cast_precision_loss)]
        Scalar::Int(i) => i as f64,
        #[allow(clippy::cast_precision_loss)]
        Scalar::UInt(u) => u as f64,
        Scalar::Float(f) => f,
    }
}

fn scalar_element(value: &Value) -> std::result::Result<Scalar, ReadError> {
    match value {
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(Scalar::Int)
            .or_else(|| n.as_u64().map(Scalar::UInt))
            .or_else(|| n.as_f64().map(Scalar::Float))
            .ok_or_else(|| ReadError::Decode(format!("number {n} is not representable"))),
        Value::String(s) => parse_special_float(s)
            .map(Scalar::Float)
            .ok_or_else(|| ReadError::Unsupported {
                what: "array element",
                detail: format!("string '{s}' in a numeric array"),
            }),
        other => Err(ReadError::Unsupported {
            what: "array element",
            detail: other.to_string(),
        }),
    }
}

fn infer_dtype(values: &[Scalar]) -> Dtype {
    if values.is_empty() || values.iter().any(|v| matches!(v, Scalar::Float(_))) {
        Dtype::Float(8)
    } else if values.iter().all(|v| matches!(v, Scalar::Bool(_))) {
        Dtype::Bool
    } else if values.iter().any(|v| matches!(v, Scalar::UInt(_))) {
        Dtype::UInt(8)
    } else {
        Dtype::Int(8)
    }
}

/// Shape of a nested JSON array, taken along the first element of each level.
fn infer_shape(value: &Value) -> Vec<usize> {
    let mut shape = Vec::new();
    let mut cursor = value;
    while let Value::Array(items) = cursor {
        shape.push(items.len());
        match items.first() {
            Some(first) => cursor = first,
            None => break,
        }
    }
    shape
}

/// Collect leaves in row-major order, rejecting anything not exactly `shape`.
fn collect_rectangular<'a>(value: &'a Value, shape: &[usize], out: &mut Vec<&'a Value>) -> bool {
    match (value, shape.split_first()) {
        (Value::Array(items), Some((&len, rest))) => {
            items.len() == len && items.iter().all(|item| collect_rectangular(item, rest, out))
        }
        (Value::Array(_), None) | (_, Some(_)) => false,
        (leaf, None) => {
            out.push(leaf);
            true
        }
    }
}

fn decode_array(value: &Value, dtype: Option<Dtype>) -> std::result::Result<NdArray, ReadError> {
    let shape = infer_shape(value);
    let mut leaves = Vec::new();
    if !collect_rectangular(value, &shape, &mut leaves) {
        return Err(ReadError::Decode("ragged nested array".to_string()));
    }
    let values = leaves
        .into_iter()
        .map(scalar_element)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let dtype = dtype.unwrap_or_else(|| infer_dtype(&values));
    NdArray::new(shape, dtype, values)
}

fn decode_attribute(value: &Value) -> std::result::Result<AttributeValue, ReadError> {
    match value {
        Value::String(s) => Ok(AttributeValue::Text(TextValue::Utf8(s.clone()))),
        Value::Bool(_) | Value::Number(_) => {
            let scalar = scalar_element(value)?;
            let dtype = infer_dtype(std::slice::from_ref(&scalar));
            Ok(AttributeValue::Scalar {
                value: scalar,
                dtype,
            })
        }
        Value::Array(_) => decode_array(value, None).map(AttributeValue::Array),
        Value::Object(map) => decode_attribute_object(map),
        Value::Null => Err(ReadError::Unsupported {
            what: "attribute value",
            detail: "null".to_string(),
        }),
    }
}

/// Explicit attribute forms:
/// - `{"bytes": "<hex>"}`: raw byte string
/// - `{"error": "<message>"}`: a value the decoder cannot read
/// - `{"dtype": .., "value": ..}`: typed scalar or text
/// - `{"dtype": .., "data": [..]}`: typed array
/// - `{"dtype": .., "shape": [..], "fill": ..}`: uniformly filled array
fn decode_attribute_object(
    map: &serde_json::Map<String, Value>,
) -> std::result::Result<AttributeValue, ReadError> {
    if let Some(Value::String(hex)) = map.get("bytes") {
        return decode_hex(hex).map(|b| AttributeValue::Text(TextValue::Bytes(b)));
    }
    if let Some(error) = map.get("error") {
        return Err(ReadError::Decode(
            error.as_str().map_or_else(|| error.to_string(), ToString::to_string),
        ));
    }
    let Some(Value::String(dtype)) = map.get("dtype") else {
        return Err(ReadError::Unsupported {
            what: "attribute value",
            detail: "object without a recognised form".to_string(),
        });
    };
    let dtype = Dtype::parse(dtype);

    if let Some(value) = map.get("value") {
        return match (value, &dtype) {
            (Value::String(s), Dtype::FixedText { encoding, .. } | Dtype::VarText(encoding)) => {
                Ok(AttributeValue::Text(match encoding {
                    TextEncoding::Utf8 => TextValue::Utf8(s.clone()),
                    TextEncoding::Ascii => TextValue::Bytes(s.clone().into_bytes()),
                }))
            }
            _ => Ok(AttributeValue::Scalar {
                value: scalar_element(value)?,
                dtype,
            }),
        };
    }
    if let Some(data) = map.get("data") {
        return decode_array(data, Some(dtype)).map(AttributeValue::Array);
    }
    if let Some(shape) = map.get("shape") {
        let shape: Vec<usize> = serde_json::from_value(shape.clone())
            .map_err(|e| ReadError::Decode(format!("bad attribute shape: {e}")))?;
        let fill = map
            .get("fill")
            .map_or(Ok(Scalar::Int(0)), scalar_element)?;
        return NdArray::filled(shape, dtype, fill).map(AttributeValue::Array);
    }

    Err(ReadError::Unsupported {
        what: "attribute value",
        detail: "typed object needs 'value', 'data' or 'shape'".to_string(),
    })
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
