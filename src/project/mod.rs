//! Structural projections: derive a tree with the same topology but
//! rewritten leaves or presence.
//!
//! Every transform rebuilds depth-first and never reorders siblings.

pub mod flatten;
pub mod optional;
pub mod strip;

use crate::error::ProjectionError;
use crate::tree::Node;

pub use flatten::merge;

/// A named projection strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Remove null leaves and branches emptied by that removal.
    StripNullish,
    /// Mark every leaf and branch as not required.
    MarkAllOptional,
    /// Merge the input with each part in order, last write wins.
    Flatten(Vec<Node>),
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::StripNullish => "strip-nullish",
            Transform::MarkAllOptional => "mark-all-optional",
            Transform::Flatten(_) => "flatten",
        }
    }
}

pub fn project(tree: &Node, transform: &Transform) -> Result<Node, ProjectionError> {
    tracing::trace!(transform = transform.name(), "projecting tree");
    match transform {
        Transform::StripNullish => Ok(strip::strip_nullish(tree)),
        Transform::MarkAllOptional => Ok(optional::mark_all_optional(tree)),
        Transform::Flatten(parts) => {
            let mut out = tree.clone();
            for part in parts {
                out = merge(&out, part)?;
            }
            Ok(out)
        }
    }
}

/// Apply transforms left to right.
pub fn project_all(tree: &Node, transforms: &[Transform]) -> Result<Node, ProjectionError> {
    let mut out = tree.clone();
    for transform in transforms {
        out = project(&out, transform)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::enumerate;
    use crate::tree::{Branch, Presence};
    use pretty_assertions::assert_eq;

    #[test]
    fn flatten_without_parts_is_identity() {
        let tree: Node = Branch::new().with("a", Branch::new().with("p", "1")).into();
        assert_eq!(project(&tree, &Transform::Flatten(vec![])), Ok(tree));
    }

    #[test]
    fn transforms_compose_in_order() {
        let base: Node = Branch::new()
            .with("a", Branch::new().with("p", Node::null()))
            .with("b", "keep")
            .into();
        let part: Node = Branch::new().with("a", Branch::new().with("q", "2")).into();

        let out = project_all(
            &base,
            &[
                Transform::Flatten(vec![part]),
                Transform::StripNullish,
                Transform::MarkAllOptional,
            ],
        )
        .unwrap();

        assert_eq!(enumerate(&out), vec!["a.q", "b"]);
        assert_eq!(out.presence(), Presence::Optional);
    }

    #[test]
    fn conflicts_stop_the_pipeline() {
        let base: Node = Branch::new().with("a", "leaf").into();
        let part: Node = Branch::new().with("a", Branch::new().with("x", "1")).into();
        let err = project_all(&base, &[Transform::Flatten(vec![part]), Transform::StripNullish])
            .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::SchemaConflict {
                path: "a".to_string()
            }
        );
    }
}
