//! Indented terminal rendering.

use std::fmt::Write;

use crate::repr::{DecisionNode, DecisionTree};
use crate::training::Tint;

/// Render `tree` as an indented outline, one node per line.
///
/// With `color`, attributes, branch values and decisions are tinted with ANSI
/// escapes.
///
/// ```text
/// 📦 Attribute: Weather
///   ├── [Overcast]
///   │   📌 Decision: ✅ Yes
///   └── [Sunny]
///       📌 Decision: ✅ No
/// ```
pub fn render_tree(tree: &DecisionTree, color: bool) -> String {
    let mut out = String::new();
    write_node(&mut out, tree.root(), "", color);
    out
}

fn tint(text: &str, tint: Tint, color: bool) -> String {
    if color {
        tint.apply(text)
    } else {
        text.to_string()
    }
}

fn write_node(out: &mut String, node: &DecisionNode, prefix: &str, color: bool) {
    match node {
        DecisionNode::Leaf { label } => {
            let line = tint(&format!("📌 Decision: ✅ {label}"), Tint::Green, color);
            let _ = writeln!(out, "{prefix}{line}");
        }
        DecisionNode::Split { attribute, .. } => {
            let line = tint(&format!("📦 Attribute: {attribute}"), Tint::Blue, color);
            let _ = writeln!(out, "{prefix}{line}");

            let last = node.n_children().saturating_sub(1);
            for (i, (value, child)) in node.children().enumerate() {
                let (connector, child_prefix) = if i == last {
                    ("└──", format!("{prefix}      "))
                } else {
                    ("├──", format!("{prefix}  │   "))
                };
                let value = tint(&format!("[{value}]"), Tint::Yellow, color);
                let _ = writeln!(out, "{prefix}  {connector} {value}");
                write_node(out, child, &child_prefix, color);
            }
        }
    }
}
