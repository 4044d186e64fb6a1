//! Path resolution against a tree instance.
//!
//! Paths need not come from a [`crate::index::PathIndex`]; any input is
//! handled and a miss is reported as [`NotFound`], never a panic.

use crate::error::{Miss, NotFound};
use crate::tree::{KeyPath, Node, Scalar, SEPARATOR};

/// Resolve a dotted path string.
pub fn resolve<'t>(tree: &'t Node, path: &str) -> Result<&'t Scalar, NotFound> {
    if path.is_empty() {
        return Err(miss(path, 0, Miss::EmptyPath));
    }
    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    descend(tree, &segments, 0).map_err(|(at, m)| miss(path, at, m))
}

/// Resolve an already-split path.
pub fn resolve_segments<'t, S: AsRef<str>>(
    tree: &'t Node,
    segments: &[S],
) -> Result<&'t Scalar, NotFound> {
    if segments.is_empty() {
        return Err(miss("", 0, Miss::EmptyPath));
    }
    descend(tree, segments, 0).map_err(|(at, m)| {
        let joined = segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(".");
        miss(&joined, at, m)
    })
}

pub fn resolve_path<'t>(tree: &'t Node, path: &KeyPath) -> Result<&'t Scalar, NotFound> {
    resolve_segments(tree, path.segments())
}

/// `resolve` without the miss details.
pub fn get<'t>(tree: &'t Node, path: &str) -> Option<&'t Scalar> {
    resolve(tree, path).ok()
}

/// Cursor descent: `segments[cursor..]` are still to be consumed at `node`.
fn descend<'t, S: AsRef<str>>(
    node: &'t Node,
    segments: &[S],
    cursor: usize,
) -> Result<&'t Scalar, (usize, Miss)> {
    let Some(segment) = segments.get(cursor) else {
        return match node {
            Node::Leaf(leaf) => Ok(&leaf.value),
            Node::Branch(_) => Err((cursor, Miss::EndsAtBranch)),
        };
    };
    let segment = segment.as_ref();
    if segment.is_empty() {
        return Err((cursor, Miss::EmptySegment));
    }
    match node {
        Node::Leaf(_) => Err((cursor, Miss::ThroughLeaf)),
        Node::Branch(branch) => match branch.get(segment) {
            Some(child) => descend(child, segments, cursor + 1),
            None => Err((cursor, Miss::MissingKey)),
        },
    }
}

fn miss(path: &str, at: usize, miss: Miss) -> NotFound {
    tracing::debug!(path, at, %miss, "path did not resolve");
    NotFound {
        path: path.to_string(),
        at,
        miss,
    }
}
