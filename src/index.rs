//! Path enumeration: every dotted path that reaches a leaf.

use crate::error::TreeError;
use crate::tree::Node;
use crate::tree::path::join;
use regex::Regex;
use std::collections::HashSet;

/// Enumerate every valid path of `tree`, in depth-first key order.
///
/// Only the shape is read. An empty branch contributes nothing; a bare leaf
/// root yields the single empty path.
pub fn enumerate(tree: &Node) -> Vec<String> {
    enumerate_under(tree, "")
}

/// Enumerate paths of `tree` as if it were mounted at `prefix`.
pub(crate) fn enumerate_under(tree: &Node, prefix: &str) -> Vec<String> {
    let mut out = Vec::new();
    collect(tree, prefix, &mut out);
    out
}

fn collect(node: &Node, prefix: &str, out: &mut Vec<String>) {
    match node {
        Node::Leaf(_) => out.push(prefix.to_string()),
        Node::Branch(branch) => {
            for (key, child) in branch.iter() {
                collect(child, &join(prefix, key), out);
            }
        }
    }
}

/// Enumerated paths plus a membership set.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    paths: Vec<String>,
    members: HashSet<String>,
}

impl PathIndex {
    /// Index a tree. The root must be a branch.
    pub fn build(tree: &Node) -> Result<Self, TreeError> {
        if tree.is_leaf() {
            return Err(TreeError::RootIsLeaf);
        }
        let paths = enumerate(tree);
        let members = paths.iter().cloned().collect();
        tracing::debug!(paths = paths.len(), "built path index");
        Ok(Self { paths, members })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.members.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Paths whose full string matches `re`, in index order.
    pub fn matching<'a>(&'a self, re: &'a Regex) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |p| re.is_match(p))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Branch;
    use pretty_assertions::assert_eq;

    #[test]
    fn follows_key_order() {
        let tree: Node = Branch::new()
            .with("a", Branch::new().with("b", "X").with("c", "Y"))
            .with("d", "Z")
            .into();
        assert_eq!(enumerate(&tree), vec!["a.b", "a.c", "d"]);
    }

    #[test]
    fn empty_branches_contribute_nothing() {
        let tree: Node = Branch::new()
            .with("empty", Branch::new())
            .with("x", Branch::new().with("y", Branch::new()))
            .into();
        assert!(enumerate(&tree).is_empty());
    }

    #[test]
    fn leaf_root_is_degenerate() {
        let leaf = Node::leaf("x");
        assert_eq!(enumerate(&leaf), vec![""]);
        assert!(matches!(PathIndex::build(&leaf), Err(TreeError::RootIsLeaf)));
    }

    #[test]
    fn index_membership_and_filter() {
        let tree: Node = Branch::new()
            .with("home", "Home")
            .with("greetings", Branch::new().with("morning", "M").with("evening", "E"))
            .into();
        let index = PathIndex::build(&tree).unwrap();

        assert_eq!(index.len(), 3);
        assert!(index.contains("greetings.evening"));
        assert!(!index.contains("greetings"));

        let re = Regex::new(r"^greetings\.").unwrap();
        assert_eq!(
            index.matching(&re).collect::<Vec<_>>(),
            vec!["greetings.morning", "greetings.evening"]
        );
    }
}
