//! Text and DOT rendering of trained trees.

use id3tree::inference::Assignment;
use id3tree::render::{prediction_path_to_dot, render_tree, tree_to_dot};
use id3tree::testing;
use id3tree::training::{ConflictPolicy, NullSink, TreeConfig, build_tree, detect_conflicts};
use id3tree::{DecisionNode, DecisionTree};

fn play_tennis_tree() -> DecisionTree {
    let ds = testing::play_tennis();
    let resolution = detect_conflicts(&ds, |_| ConflictPolicy::MostCommon);
    build_tree(&ds, &TreeConfig::default(), &resolution, &mut NullSink)
}

fn count_nodes(node: &DecisionNode) -> usize {
    1 + node.children().map(|(_, c)| count_nodes(c)).sum::<usize>()
}

#[test]
fn dot_declares_every_node_and_branch() {
    let tree = play_tennis_tree();
    let dot = tree_to_dot(&tree);

    let nodes = count_nodes(tree.root());
    let branches = nodes - 1;
    assert_eq!(dot.matches("shape=box").count(), nodes);
    assert_eq!(dot.matches("shape=ellipse").count(), branches);
    assert_eq!(dot.matches(" -> ").count(), 2 * branches);

    for label in ["Outlook", "Humidity", "Wind", "Overcast", "Sunny", "Rain", "High", "Normal"] {
        assert!(dot.contains(&format!("[label=\"{label}\"")), "missing {label}");
    }
}

#[test]
fn prediction_dot_highlights_exactly_the_path() {
    let tree = play_tennis_tree();
    let sample = Assignment::new()
        .with("Outlook", "Sunny")
        .with("Temperature", "Mild")
        .with("Humidity", "High")
        .with("Wind", "Weak");
    let traced = tree.trace(&sample);
    let dot = prediction_path_to_dot(&tree, &traced);

    // Outlook, [Sunny], Humidity, [High], No
    assert_eq!(dot.matches("color=red").count(), 5);
    let red: Vec<&str> = dot.lines().filter(|l| l.contains("color=red")).collect();
    for label in ["Outlook", "Sunny", "Humidity", "High", "No"] {
        assert!(
            red.iter().any(|l| l.contains(&format!("[label=\"{label}\""))),
            "{label} not highlighted"
        );
    }
}

#[test]
fn text_outline_lists_all_leaves() {
    let tree = play_tennis_tree();
    let text = render_tree(&tree, false);
    assert!(text.starts_with("📦 Attribute: Outlook\n"));
    assert_eq!(text.matches("📌 Decision: ✅").count(), tree.stats().n_leaves);
    assert_eq!(text.matches("└──").count(), 3);
}
