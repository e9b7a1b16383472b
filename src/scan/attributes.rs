use serde_json::json;

use crate::reader::{FormatReader, ObjectId};

use super::context::ScanContext;
use super::finding::{Code, Level, extra};
use super::links::is_safe_name;

/// Size and name checks over every attribute of one object.
///
/// A value that fails to decode still has its name checked.
pub fn inspect_attributes(
    ctx: &mut ScanContext,
    reader: &dyn FormatReader,
    object: ObjectId,
    path: &str,
    huge_threshold: u64,
) {
    let attributes = match reader.attributes(object) {
        Ok(attributes) => attributes,
        Err(e) => {
            ctx.emit(
                Level::Error,
                Code::AttrReadFail,
                path,
                "failed to list attributes",
                extra([("error", json!(e.to_string()))]),
            );
            return;
        }
    };

    for (name, value) in attributes {
        match value {
            Ok(value) => {
                let size = u64::try_from(value.byte_size()).unwrap_or(u64::MAX);
                if size > huge_threshold {
                    ctx.emit(
                        Level::Warn,
                        Code::HugeAttribute,
                        path,
                        format!("attribute '{name}' is very large ({size} bytes)"),
                        extra([("attribute", json!(name)), ("size", json!(size))]),
                    );
                }
            }
            Err(e) => ctx.emit(
                Level::Error,
                Code::AttrReadFail,
                path,
                format!("failed to read attribute '{name}'"),
                extra([
                    ("attribute", json!(name)),
                    ("error", json!(e.to_string())),
                ]),
            ),
        }

        if !is_safe_name(&name) {
            ctx.emit(
                Level::Safety,
                Code::SuspiciousAttrName,
                path,
                format!("suspicious attribute name: {name}"),
                extra([("attribute", json!(name))]),
            );
        }
    }
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
