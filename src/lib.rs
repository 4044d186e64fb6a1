//! Dotted-path addressing over nested keyed trees.
//!
//! - [`index`]: enumerate every valid path of a tree's shape
//! - [`resolve`]: walk an instance along a path, or report [`NotFound`]
//! - [`project`]: strip nulls, mark everything optional, flatten merged trees
//! - [`check`]: compare an instance against a shape
//! - [`catalog`]: per-locale message trees

pub mod catalog;
pub mod check;
pub mod error;
pub mod index;
pub mod project;
pub mod render;
pub mod resolve;
pub mod tree;

pub use catalog::{Catalog, Messages};
pub use check::{Conformance, check};
pub use error::{CatalogError, Miss, NotFound, ProjectionError, TreeError};
pub use index::{PathIndex, enumerate};
pub use project::{Transform, project, project_all};
pub use resolve::{get, resolve, resolve_segments};
pub use tree::{Branch, KeyPath, Leaf, Node, Presence, Scalar};
