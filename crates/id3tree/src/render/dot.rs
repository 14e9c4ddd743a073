//! Graphviz DOT export.
//!
//! Split nodes are yellow boxes, branch values blue ellipses and leaves green
//! boxes. Every edge goes split → value → child, so value labels stay
//! readable in large trees.

use std::fmt::Write;

use crate::inference::Trace;
use crate::repr::{DecisionNode, DecisionTree};

const SPLIT_STYLE: &str = r##"shape=box, style="rounded,filled", fillcolor="#fef0b3", color="#e6ac00", penwidth=2"##;
const SPLIT_STYLE_PATH: &str = r##"shape=box, style="rounded,filled", fillcolor="#fef0b3", color=red, penwidth=2.4"##;
const LEAF_STYLE: &str = r##"shape=box, style="rounded,filled", fillcolor="#b3f3b3", color="#2e8b57", penwidth=2"##;
const LEAF_STYLE_PATH: &str = r##"shape=box, style="rounded,filled", fillcolor="#b3f3b3", color=red, penwidth=2.4"##;
const VALUE_STYLE: &str = r##"shape=ellipse, style=filled, fillcolor="#eaf4ff", color="#6495ed", fontcolor="#1e3f66", penwidth=1.6"##;
const VALUE_STYLE_PATH: &str = r##"shape=ellipse, style=filled, fillcolor="#eaf4ff", color=red, fontcolor="#1e3f66", penwidth=2.4"##;

/// Escape a label for use inside a double-quoted DOT string.
fn escape(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

fn header(out: &mut String, name: &str, title: &str, edge: &str, fontsize: u32, ranksep: f64) {
    let _ = writeln!(out, "digraph {name} {{");
    out.push_str("  fontname=\"Helvetica,Arial,sans-serif\";\n");
    out.push_str("  labelfontname=\"Georgia\";\n");
    out.push_str("  node [fontname=\"Helvetica\", style=filled, fontcolor=black];\n");
    let _ = writeln!(out, "  edge [{edge}];");
    out.push_str("  rankdir=TB;\n");
    out.push_str("  bgcolor=\"white\";\n");
    let _ = writeln!(out, "  label=\"{title}\";");
    out.push_str("  labelloc=top;\n");
    out.push_str("  labeljust=center;\n");
    let _ = writeln!(out, "  fontsize={fontsize};");
    out.push_str("  nodesep=0.7;\n");
    let _ = writeln!(out, "  ranksep={ranksep};");
}

/// Ids handed out in visiting order.
#[derive(Default)]
struct Ids {
    next: usize,
}

impl Ids {
    fn node(&mut self) -> String {
        let id = format!("node{}", self.next);
        self.next += 1;
        id
    }

    fn value(&mut self) -> String {
        let id = format!("cond{}", self.next);
        self.next += 1;
        id
    }
}

/// DOT graph of the whole tree.
pub fn tree_to_dot(tree: &DecisionTree) -> String {
    let mut out = String::new();
    header(
        &mut out,
        "DecisionTree",
        "Decision Tree",
        "fontname=\"Helvetica\", penwidth=2",
        24,
        0.8,
    );

    fn walk(out: &mut String, ids: &mut Ids, node: &DecisionNode) -> String {
        let id = ids.node();
        let style = if node.is_leaf() { LEAF_STYLE } else { SPLIT_STYLE };
        let _ = writeln!(out, "  {id} [label=\"{}\", {style}];", escape(node.display_name()));

        for (value, child) in node.children() {
            let cond = ids.value();
            let _ = writeln!(out, "  {cond} [label=\"{}\", {VALUE_STYLE}];", escape(value));
            let child_id = walk(out, ids, child);
            let _ = writeln!(out, "  {id} -> {cond} [color=gray50];");
            let _ = writeln!(out, "  {cond} -> {child_id} [color=gray50];");
        }
        id
    }

    walk(&mut out, &mut Ids::default(), tree.root());
    out.push_str("}\n");
    out
}

/// DOT graph of the whole tree with the branches in `trace` drawn in red.
///
/// When the trace ended on an unseen value, the path stops at the last split
/// reached and no leaf is highlighted.
pub fn prediction_path_to_dot(tree: &DecisionTree, trace: &Trace<'_>) -> String {
    let mut out = String::new();
    header(
        &mut out,
        "PredictionPath",
        "Prediction Path",
        "fontname=\"Helvetica\", color=gray50, fontcolor=gray30, penwidth=1.6",
        22,
        0.9,
    );

    fn walk(out: &mut String, ids: &mut Ids, node: &DecisionNode, trace: &Trace<'_>, on_path: bool) {
        let id = ids.node();
        let style = match (node.is_leaf(), on_path) {
            (true, false) => LEAF_STYLE,
            (true, true) => LEAF_STYLE_PATH,
            (false, false) => SPLIT_STYLE,
            (false, true) => SPLIT_STYLE_PATH,
        };
        let _ = writeln!(out, "  {id} [label=\"{}\", {style}];", escape(node.display_name()));

        let attribute = node.attribute().unwrap_or_default();
        for (value, child) in node.children() {
            let taken = on_path && trace.took(attribute, value);
            let cond = ids.value();
            let style = if taken { VALUE_STYLE_PATH } else { VALUE_STYLE };
            let _ = writeln!(out, "  {cond} [label=\"{}\", {style}];", escape(value));
            let _ = writeln!(out, "  {id} -> {cond};");
            // The child takes the next id.
            let _ = writeln!(out, "  {cond} -> node{};", ids.next);
            walk(out, ids, child, trace, taken);
        }
    }

    walk(&mut out, &mut Ids::default(), tree.root(), trace, true);
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::inference::Assignment;

    fn tree() -> DecisionTree {
        let mut root = BTreeMap::new();
        root.insert("Overcast".to_string(), DecisionNode::leaf("Yes"));
        root.insert("Sunny".to_string(), DecisionNode::leaf("No"));
        DecisionTree::new(DecisionNode::split("Weather", 0, root), vec!["Weather".into()], "Play")
    }

    #[test]
    fn tree_graph_links_split_value_child() {
        let dot = tree_to_dot(&tree());
        assert!(dot.starts_with("digraph DecisionTree {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("  node0 [label=\"Weather\", shape=box"));
        assert!(dot.contains("  cond1 [label=\"Overcast\", shape=ellipse"));
        assert!(dot.contains("  node2 [label=\"Yes\", shape=box"));
        assert!(dot.contains("  node0 -> cond1 [color=gray50];"));
        assert!(dot.contains("  cond1 -> node2 [color=gray50];"));
        assert!(dot.contains("  cond3 -> node4 [color=gray50];"));
        assert!(!dot.contains("color=red"));
    }

    #[test]
    fn prediction_graph_highlights_taken_branch_only() {
        let tree = tree();
        let sample = Assignment::new().with("Weather", "Sunny");
        let dot = prediction_path_to_dot(&tree, &tree.trace(&sample));

        assert!(dot.starts_with("digraph PredictionPath {\n"));
        assert!(dot.contains("  node0 [label=\"Weather\", shape=box, style=\"rounded,filled\", fillcolor=\"#fef0b3\", color=red"));
        assert!(dot.contains("  cond3 [label=\"Sunny\", shape=ellipse, style=filled, fillcolor=\"#eaf4ff\", color=red"));
        assert!(dot.contains("  node4 [label=\"No\", shape=box, style=\"rounded,filled\", fillcolor=\"#b3f3b3\", color=red"));
        assert!(dot.contains("  cond1 [label=\"Overcast\", shape=ellipse, style=filled, fillcolor=\"#eaf4ff\", color=\"#6495ed\""));
        assert!(dot.contains("  node2 [label=\"Yes\", shape=box, style=\"rounded,filled\", fillcolor=\"#b3f3b3\", color=\"#2e8b57\""));
        assert!(dot.contains("  cond3 -> node4;"));
    }

    #[test]
    fn unseen_value_highlights_only_the_root() {
        let tree = tree();
        let sample = Assignment::new().with("Weather", "Snow");
        let dot = prediction_path_to_dot(&tree, &tree.trace(&sample));
        assert_eq!(dot.matches("color=red").count(), 1);
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape(r#"say "hi"\"#), r#"say \"hi\"\\"#);
    }
}
