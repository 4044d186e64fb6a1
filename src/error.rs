//! Error types for tree construction, resolution, projection and catalogs.
//!
//! None of these are fatal by themselves: callers decide whether a miss is a
//! bug (mandatory config key) or a fallback (default display string).

use std::fmt;
use thiserror::Error;

/// Why a path failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// The path had no segments at all.
    EmptyPath,
    /// A segment was empty (leading, trailing or doubled separator).
    EmptySegment,
    /// The branch has no child with this key.
    MissingKey,
    /// Segments remain but a leaf was reached.
    ThroughLeaf,
    /// Every segment was consumed but the node reached is a branch.
    EndsAtBranch,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Miss::EmptyPath => "empty path",
            Miss::EmptySegment => "empty segment",
            Miss::MissingKey => "no such key",
            Miss::ThroughLeaf => "path continues past a leaf",
            Miss::EndsAtBranch => "path ends at a branch",
        };
        f.write_str(s)
    }
}

/// A path that does not reach a leaf in the given tree.
///
/// `at` is the index of the segment where descent stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("path {path:?} not found ({miss} at segment {at})")]
pub struct NotFound {
    pub path: String,
    pub at: usize,
    pub miss: Miss,
}

/// Errors raised while deriving a projected tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// One side holds a leaf and the other a branch at the same key.
    #[error("schema conflict at {path:?}: cannot merge a leaf with a branch")]
    SchemaConflict { path: String },
}

/// Errors raised while building a tree from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("invalid key {key:?} under {parent:?}: keys must be non-empty and must not contain '.'")]
    InvalidKey { parent: String, key: String },

    #[error("unsupported value at {path:?}: {kind} cannot be a tree node")]
    UnsupportedValue { path: String, kind: &'static str },

    #[error("root of a tree must be a branch, found a leaf")]
    RootIsLeaf,
}

/// Errors raised by [`crate::catalog::Catalog`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown locale {0:?}")]
    UnknownLocale(String),

    #[error("locale {locale:?}: {source}")]
    NotFound {
        locale: String,
        #[source]
        source: NotFound,
    },
}
