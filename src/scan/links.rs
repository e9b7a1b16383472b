use serde_json::json;

use crate::reader::{FormatReader, Link, ObjectId};

use super::context::ScanContext;
use super::finding::{Code, Level, extra};

/// Names containing `..`, `//` or a NUL byte are unsafe.
#[must_use]
pub fn is_safe_name(name: &str) -> bool {
    !(name.contains("..") || name.contains("//") || name.contains('\0'))
}

/// Check member names and link classes of one group.
///
/// Returns the names of hard-linked members, in member order; only these are
/// descended into.
pub fn inspect_members(
    ctx: &mut ScanContext,
    reader: &dyn FormatReader,
    group: ObjectId,
    path: &str,
    members: &[String],
) -> Vec<String> {
    let mut hard = Vec::with_capacity(members.len());

    for member in members {
        if !is_safe_name(member) {
            ctx.emit(
                Level::Safety,
                Code::SuspiciousName,
                path,
                format!("suspicious member name: {member}"),
                extra([("member", json!(member))]),
            );
        }

        match reader.resolve_link(group, member) {
            Ok(Link::Hard) => hard.push(member.clone()),
            Ok(Link::Soft { target }) => {
                ctx.summary_mut().num_links_soft += 1;
                ctx.emit(
                    Level::Safety,
                    Code::SoftLink,
                    path,
                    format!("soft link -> {target}"),
                    extra([("target", json!(target)), ("member", json!(member))]),
                );
            }
            Ok(Link::External { file, path: target }) => {
                ctx.summary_mut().num_links_external += 1;
                ctx.emit(
                    Level::Safety,
                    Code::ExternalLink,
                    path,
                    format!("external link -> {file}:{target}"),
                    extra([
                        ("target_file", json!(file)),
                        ("target_path", json!(target)),
                        ("member", json!(member)),
                    ]),
                );
            }
            Err(e) => ctx.emit(
                Level::Error,
                Code::LinkInspectFail,
                path,
                "failed to inspect link",
                extra([("member", json!(member)), ("error", json!(e.to_string()))]),
            ),
        }
    }

    hard
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
