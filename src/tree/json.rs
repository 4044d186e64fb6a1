//! JSON <-> tree conversion.
//!
//! JSON shape:
//! {
//!   "home": "Home",                 // leaf
//!   "greetings": {                  // branch
//!     "morning": "Good Morning",
//!     "evening": null               // leaf holding the nullish sentinel
//!   },
//!   "retries": 3                    // numbers and bools are leaves too
//! }
//!
//! Object key order is kept (serde_json `preserve_order`). Arrays are not
//! part of the model and are rejected, as are keys that could not be a
//! path segment.

use crate::error::TreeError;
use crate::tree::node::{Branch, Node, Scalar};
use crate::tree::path::{is_valid_key, join};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Build a tree from any JSON value. The root may be a leaf here; see
/// [`branch_from_json`] for the stricter variant.
pub fn from_json(value: &Value) -> Result<Node, TreeError> {
    build(value, "")
}

/// Build a tree whose root must be an object.
pub fn branch_from_json(value: &Value) -> Result<Node, TreeError> {
    match value {
        Value::Object(_) => build(value, ""),
        _ => Err(TreeError::RootIsLeaf),
    }
}

fn build(value: &Value, at: &str) -> Result<Node, TreeError> {
    let scalar = match value {
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => Scalar::Number(n.clone()),
        Value::String(s) => Scalar::String(s.clone()),
        Value::Array(_) => {
            return Err(TreeError::UnsupportedValue {
                path: at.to_string(),
                kind: "array",
            });
        }
        Value::Object(map) => {
            let mut branch = Branch::new();
            for (key, child) in map {
                if !is_valid_key(key) {
                    return Err(TreeError::InvalidKey {
                        parent: at.to_string(),
                        key: key.clone(),
                    });
                }
                branch.insert(key.as_str(), build(child, &join(at, key))?);
            }
            return Ok(Node::Branch(branch));
        }
    };
    Ok(Node::leaf(scalar))
}

/// Render a tree back to JSON. Presence is not part of the JSON form.
pub fn to_json(node: &Node) -> Value {
    match node {
        Node::Leaf(leaf) => match &leaf.value {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::String(s) => Value::String(s.clone()),
        },
        Node::Branch(branch) => {
            let mut map = Map::new();
            for (key, child) in branch.iter() {
                map.insert(key.to_string(), to_json(child));
            }
            Value::Object(map)
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_json(&value).map_err(serde::de::Error::custom)
    }
}
