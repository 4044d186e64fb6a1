//! The recursive leaf-or-branch node shared by every component.

use serde_json::Number;
use std::collections::HashMap;
use std::fmt;

/// Opaque scalar held by a leaf. `Null` is the nullish sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
        }
    }
}

/// Strings are shown bare; everything else in its JSON spelling.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

/// Whether a node must be present in a conforming instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Required,
    Optional,
}

impl Presence {
    pub fn is_optional(self) -> bool {
        self == Presence::Optional
    }

    /// Presence of a node merged from two sides: required wins.
    pub fn join(self, other: Presence) -> Presence {
        if self == Presence::Required || other == Presence::Required {
            Presence::Required
        } else {
            Presence::Optional
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub value: Scalar,
    pub presence: Presence,
}

impl Leaf {
    pub fn new(value: impl Into<Scalar>) -> Self {
        Self {
            value: value.into(),
            presence: Presence::Required,
        }
    }
}

/// Insertion-ordered mapping from segment key to child node.
///
/// Keys are unique. Re-inserting a key replaces the child in place, so
/// sibling order never changes once a key exists.
#[derive(Debug, Clone, Default)]
pub struct Branch {
    entries: Vec<(String, Node)>,
    slots: HashMap<String, usize>,
    pub presence: Presence,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literal trees.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(key, node);
        self
    }

    /// Insert or replace a child. Returns the previous child for `key`.
    ///
    /// Keys are expected to be non-empty and free of `.`; trees loaded
    /// through [`crate::tree::from_json`] are checked for that.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        let node = node.into();
        match self.slots.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, node)),
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, node));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.slots.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order-sensitive: two branches are equal only if their keys appear in
/// the same order.
impl PartialEq for Branch {
    fn eq(&self, other: &Self) -> bool {
        self.presence == other.presence && self.entries == other.entries
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Branch {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut branch = Branch::new();
        for (k, n) in iter {
            branch.insert(k, n);
        }
        branch
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Branch(Branch),
}

impl Node {
    pub fn leaf(value: impl Into<Scalar>) -> Self {
        Node::Leaf(Leaf::new(value))
    }

    pub fn null() -> Self {
        Node::Leaf(Leaf::new(Scalar::Null))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Node::Branch(b) => Some(b),
            Node::Leaf(_) => None,
        }
    }

    pub fn presence(&self) -> Presence {
        match self {
            Node::Leaf(l) => l.presence,
            Node::Branch(b) => b.presence,
        }
    }

    pub fn set_presence(&mut self, presence: Presence) {
        match self {
            Node::Leaf(l) => l.presence = presence,
            Node::Branch(b) => b.presence = presence,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::Leaf(_) => "leaf",
            Node::Branch(_) => "branch",
        }
    }
}

impl From<Leaf> for Node {
    fn from(l: Leaf) -> Self {
        Node::Leaf(l)
    }
}

impl From<Branch> for Node {
    fn from(b: Branch) -> Self {
        Node::Branch(b)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::leaf(s)
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::leaf(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_replaces_in_place() {
        let mut b = Branch::new().with("a", "1").with("b", "2").with("c", "3");
        let prev = b.insert("b", "two");

        assert_eq!(prev, Some(Node::leaf("2")));
        assert_eq!(b.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(b.get("b"), Some(&Node::leaf("two")));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab = Branch::new().with("a", "1").with("b", "2");
        let ba = Branch::new().with("b", "2").with("a", "1");
        assert_ne!(ab, ba);
    }

    #[test]
    fn presence_join_prefers_required() {
        assert_eq!(Presence::Optional.join(Presence::Required), Presence::Required);
        assert_eq!(Presence::Optional.join(Presence::Optional), Presence::Optional);
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::from("hi").to_string(), "hi");
        assert_eq!(Scalar::from(3_i64).to_string(), "3");
        assert_eq!(Scalar::Null.to_string(), "null");
    }
}
