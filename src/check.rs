//! Conformance of an instance against a shape.
//!
//! This is where presence matters: a required node of the shape that the
//! instance lacks is reported missing, an optional one is not.

use crate::index::enumerate_under;
use crate::tree::Node;
use crate::tree::path::join;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conformance {
    /// Required shape paths absent from the instance.
    pub missing: Vec<String>,
    /// Instance leaf paths the shape does not have, or the path of an
    /// extra branch that holds no leaves.
    pub unexpected: Vec<String>,
    /// Paths where one side is a leaf and the other a branch.
    pub mismatched: Vec<String>,
}

impl Conformance {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.mismatched.is_empty()
    }
}

pub fn check(shape: &Node, instance: &Node) -> Conformance {
    let mut report = Conformance::default();
    walk(shape, instance, "", &mut report);
    report
}

fn walk(shape: &Node, instance: &Node, at: &str, report: &mut Conformance) {
    match (shape, instance) {
        (Node::Leaf(_), Node::Leaf(_)) => {}
        (Node::Branch(s), Node::Branch(i)) => {
            for (key, child) in s.iter() {
                let path = join(at, key);
                match i.get(key) {
                    Some(found) => walk(child, found, &path, report),
                    None if child.presence().is_optional() => {}
                    None => report.missing.push(path),
                }
            }
            for (key, extra) in i.iter() {
                if !s.contains_key(key) {
                    let path = join(at, key);
                    let leaves = enumerate_under(extra, &path);
                    if leaves.is_empty() {
                        // a leafless branch is still extra structure
                        report.unexpected.push(path);
                    } else {
                        report.unexpected.extend(leaves);
                    }
                }
            }
        }
        _ => {
            tracing::debug!(
                path = at,
                shape = shape.kind(),
                instance = instance.kind(),
                "kind mismatch"
            );
            report.mismatched.push(at.to_string());
        }
    }
}
