//! Text renderings of trees for the command line.

pub mod outline;

pub use outline::render_outline;

use crate::tree::Node;

/// Pretty JSON rendering (presence is not part of the JSON form).
pub fn render_json(tree: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}
