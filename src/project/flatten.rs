//! Flatten: collapse trees describing the same paths into one.
//!
//! Rules per key:
//! - branch + branch  => merged recursively (union of children)
//! - leaf + leaf      => the later leaf wins
//! - leaf + branch    => SchemaConflict
//!
//! Keys already in `base` keep their position; keys only in `overlay` are
//! appended in overlay order. A merged node is required if either side is.

use crate::error::ProjectionError;
use crate::tree::path::join;
use crate::tree::{Branch, Leaf, Node};

pub fn merge(base: &Node, overlay: &Node) -> Result<Node, ProjectionError> {
    merge_at(base, overlay, "")
}

fn merge_at(base: &Node, overlay: &Node, at: &str) -> Result<Node, ProjectionError> {
    match (base, overlay) {
        (Node::Leaf(old), Node::Leaf(new)) => Ok(Node::Leaf(Leaf {
            value: new.value.clone(),
            presence: old.presence.join(new.presence),
        })),
        (Node::Branch(old), Node::Branch(new)) => {
            let mut out: Branch = old.clone();
            out.presence = old.presence.join(new.presence);
            for (key, incoming) in new.iter() {
                let merged = match old.get(key) {
                    Some(existing) => merge_at(existing, incoming, &join(at, key))?,
                    None => incoming.clone(),
                };
                out.insert(key, merged);
            }
            Ok(Node::Branch(out))
        }
        _ => {
            tracing::debug!(
                path = at,
                base = base.kind(),
                overlay = overlay.kind(),
                "flatten conflict"
            );
            Err(ProjectionError::SchemaConflict {
                path: at.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Presence, Scalar};
    use pretty_assertions::assert_eq;

    #[test]
    fn unions_sibling_branches() {
        let left: Node = Branch::new().with("a", Branch::new().with("p", Scalar::from(1_i64))).into();
        let right: Node = Branch::new().with("a", Branch::new().with("q", Scalar::from(2_i64))).into();

        let expected: Node = Branch::new()
            .with(
                "a",
                Branch::new()
                    .with("p", Scalar::from(1_i64))
                    .with("q", Scalar::from(2_i64)),
            )
            .into();
        assert_eq!(merge(&left, &right), Ok(expected));
    }

    #[test]
    fn leaf_against_branch_is_a_conflict() {
        let left: Node = Branch::new().with("a", Branch::new().with("p", Scalar::from(1_i64))).into();
        let right: Node = Branch::new().with("a", "leaf").into();

        assert_eq!(
            merge(&left, &right),
            Err(ProjectionError::SchemaConflict {
                path: "a".to_string()
            })
        );
        assert!(merge(&right, &left).is_err());
    }

    #[test]
    fn conflict_reports_nested_path() {
        let left: Node = Branch::new()
            .with("x", Branch::new().with("y", Branch::new().with("z", "1")))
            .into();
        let right: Node = Branch::new()
            .with("x", Branch::new().with("y", "flat"))
            .into();
        assert_eq!(
            merge(&left, &right).unwrap_err(),
            ProjectionError::SchemaConflict {
                path: "x.y".to_string()
            }
        );
    }

    #[test]
    fn last_write_wins_in_place() {
        let left: Node = Branch::new().with("a", "1").with("b", "2").into();
        let right: Node = Branch::new().with("c", "3").with("a", "one").into();

        let out = merge(&left, &right).unwrap();
        let expected: Node = Branch::new().with("a", "one").with("b", "2").with("c", "3").into();
        assert_eq!(out, expected);
    }

    #[test]
    fn required_survives_merge() {
        let mut optional = Node::leaf("x");
        optional.set_presence(Presence::Optional);
        let left: Node = Branch::new().with("a", optional.clone()).into();
        let right: Node = Branch::new().with("a", "y").into();

        let out = merge(&left, &right).unwrap();
        let a = out.as_branch().and_then(|b| b.get("a")).unwrap();
        assert_eq!(a.presence(), Presence::Required);

        let both = merge(&left, &Branch::new().with("a", optional).into()).unwrap();
        let a = both.as_branch().and_then(|b| b.get("a")).unwrap();
        assert_eq!(a.presence(), Presence::Optional);
    }

    #[test]
    fn root_conflict_has_empty_path() {
        let err = merge(&Node::leaf("x"), &Node::Branch(Branch::new())).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::SchemaConflict {
                path: String::new()
            }
        );
    }
}
