use crate::tree::{Branch, Node, Presence};

/// Mark every node optional. Values and topology are untouched.
pub fn mark_all_optional(tree: &Node) -> Node {
    match tree {
        Node::Leaf(leaf) => {
            let mut leaf = leaf.clone();
            leaf.presence = Presence::Optional;
            Node::Leaf(leaf)
        }
        Node::Branch(branch) => {
            let mut out: Branch = branch
                .iter()
                .map(|(key, child)| (key, mark_all_optional(child)))
                .collect();
            out.presence = Presence::Optional;
            Node::Branch(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::enumerate;
    use pretty_assertions::assert_eq;

    fn all_optional(node: &Node) -> bool {
        node.presence().is_optional()
            && node
                .as_branch()
                .map(|b| b.iter().all(|(_, child)| all_optional(child)))
                .unwrap_or(true)
    }

    #[test]
    fn marks_every_level() {
        let tree: Node = Branch::new()
            .with("name", "Saoirse")
            .with("location", Branch::new().with("country", "Ireland").with("city", "Dublin"))
            .into();
        let out = mark_all_optional(&tree);

        assert!(all_optional(&out));
        assert_eq!(enumerate(&out), enumerate(&tree));
        assert_eq!(crate::tree::to_json(&out), crate::tree::to_json(&tree));
    }
}
