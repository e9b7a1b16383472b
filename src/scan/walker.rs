use std::collections::HashSet;

use serde_json::json;

use crate::output::ScanProgress;
use crate::reader::{FormatReader, Node, NodeKind, ObjectId};

use super::attributes::inspect_attributes;
use super::context::ScanContext;
use super::dataset::DatasetInspector;
use super::finding::{Code, Level, extra};
use super::links::inspect_members;

/// A hard-linked member waiting to be opened.
struct Pending {
    path: String,
    parent: ObjectId,
    name: String,
}

/// Depth-first, pre-order traversal over hard links.
///
/// Uses an explicit stack, so nesting depth is bounded by memory rather than
/// the call stack, and a visited set keyed by [`ObjectId`], so shared objects
/// and cycles are visited once.
pub struct Walker<'a> {
    reader: &'a dyn FormatReader,
    datasets: DatasetInspector<'a>,
    huge_attribute_bytes: u64,
    progress: Option<&'a ScanProgress>,
    visited: HashSet<ObjectId>,
}

impl<'a> Walker<'a> {
    #[must_use]
    pub fn new(
        reader: &'a dyn FormatReader,
        datasets: DatasetInspector<'a>,
        huge_attribute_bytes: u64,
        progress: Option<&'a ScanProgress>,
    ) -> Self {
        Self {
            reader,
            datasets,
            huge_attribute_bytes,
            progress,
            visited: HashSet::new(),
        }
    }

    /// Visit `root` and everything reachable from it.
    pub fn walk(&mut self, ctx: &mut ScanContext, root: Node) {
        let mut stack = Vec::new();
        self.visited.insert(root.id);
        self.visit(ctx, "/", &root, &mut stack);

        while let Some(pending) = stack.pop() {
            let node = match self.reader.member(pending.parent, &pending.name) {
                Ok(node) => node,
                Err(e) => {
                    ctx.emit(
                        Level::Error,
                        Code::ObjectOpenFail,
                        &pending.path,
                        "failed to open object",
                        extra([("error", json!(e.to_string()))]),
                    );
                    continue;
                }
            };
            if !self.visited.insert(node.id) {
                tracing::debug!(path = %pending.path, id = node.id, "already visited, skipping");
                continue;
            }
            self.visit(ctx, &pending.path, &node, &mut stack);
        }
    }

    fn visit(&self, ctx: &mut ScanContext, path: &str, node: &Node, stack: &mut Vec<Pending>) {
        tracing::debug!(path, id = node.id, "visiting");
        if let Some(progress) = self.progress {
            progress.inc(path);
        }
        ctx.summary_mut().num_objects += 1;

        match &node.kind {
            NodeKind::Group { members } => {
                ctx.summary_mut().num_groups += 1;
                if members.is_empty() {
                    ctx.emit(
                        Level::Info,
                        Code::EmptyGroup,
                        path,
                        "empty group",
                        serde_json::Map::new(),
                    );
                }
                inspect_attributes(ctx, self.reader, node.id, path, self.huge_attribute_bytes);

                let hard = inspect_members(ctx, self.reader, node.id, path, members);
                // Reversed so the first member is popped first.
                stack.extend(hard.into_iter().rev().map(|name| Pending {
                    path: child_path(path, &name),
                    parent: node.id,
                    name,
                }));
            }
            NodeKind::Dataset(info) => {
                ctx.summary_mut().num_datasets += 1;
                self.datasets.inspect(ctx, self.reader, node.id, path, info);
                inspect_attributes(ctx, self.reader, node.id, path, self.huge_attribute_bytes);
            }
        }
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
