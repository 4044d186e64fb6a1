use crate::tree::Node;
use crate::tree::path::join;

/// One line per leaf: `path: kind = value`. A leaf root prints as
/// `kind = value`.
///
/// Optional nodes carry a `?` after their segment, e.g.
/// `location?.city?: string = "Dublin"`. Empty branches are listed as
/// `path: {}` so the outline shows the whole shape.
pub fn render_outline(tree: &Node) -> String {
    let mut out = String::new();
    line(tree, "", &mut out);
    out
}

fn line(node: &Node, prefix: &str, out: &mut String) {
    match node {
        Node::Leaf(leaf) => {
            let value = crate::tree::to_json(node);
            if prefix.is_empty() {
                out.push_str(&format!("{} = {}\n", leaf.value.kind(), value));
            } else {
                out.push_str(&format!("{}: {} = {}\n", prefix, leaf.value.kind(), value));
            }
        }
        Node::Branch(branch) if branch.is_empty() => {
            if !prefix.is_empty() {
                out.push_str(&format!("{}: {{}}\n", prefix));
            }
        }
        Node::Branch(branch) => {
            for (key, child) in branch.iter() {
                let segment = if child.presence().is_optional() {
                    format!("{}?", key)
                } else {
                    key.to_string()
                };
                line(child, &join(prefix, &segment), out);
            }
        }
    }
}
