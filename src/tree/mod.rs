//! Tree layer: the node model, key paths, and JSON conversion.
//!
//! This module is separate from indexing, resolution and projection.
//! It owns:
//! - Node / Branch / Leaf / Scalar (the data model)
//! - KeyPath (dotted path type)
//! - JSON loading and rendering

pub mod json;
pub mod node;
pub mod path;

pub use json::{branch_from_json, from_json, to_json};
pub use node::{Branch, Leaf, Node, Presence, Scalar};
pub use path::{KeyPath, SEPARATOR};
