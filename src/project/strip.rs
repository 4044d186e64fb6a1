use crate::tree::{Branch, Node};

/// Remove null leaves, then any branch left empty by the removal.
///
/// A branch that was empty to begin with is kept, which makes the
/// transform idempotent. A pruned root comes back as an empty branch
/// with the root's presence.
pub fn strip_nullish(tree: &Node) -> Node {
    strip(tree).unwrap_or_else(|| {
        let mut root = Branch::new();
        root.presence = tree.presence();
        Node::Branch(root)
    })
}

fn strip(node: &Node) -> Option<Node> {
    match node {
        Node::Leaf(leaf) if leaf.value.is_null() => None,
        Node::Leaf(_) => Some(node.clone()),
        Node::Branch(branch) => {
            let mut out = Branch::new();
            out.presence = branch.presence;
            for (key, child) in branch.iter() {
                if let Some(kept) = strip(child) {
                    out.insert(key, kept);
                }
            }
            if out.is_empty() && !branch.is_empty() {
                tracing::trace!("pruned branch emptied by strip-nullish");
                None
            } else {
                Some(Node::Branch(out))
            }
        }
    }
}
