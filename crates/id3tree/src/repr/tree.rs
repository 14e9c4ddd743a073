//! Trained decision tree.

use super::node::DecisionNode;

/// Shape summary of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub n_nodes: usize,
    pub n_leaves: usize,
    /// Number of split levels on the longest root-to-leaf path.
    pub depth: usize,
}

/// A trained categorical decision tree.
///
/// Carries the attribute and outcome names of the training data so that
/// predictions can be made from name-keyed assignments. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    root: DecisionNode,
    attributes: Vec<String>,
    outcome: String,
}

impl DecisionTree {
    pub fn new(root: DecisionNode, attributes: Vec<String>, outcome: impl Into<String>) -> Self {
        Self {
            root,
            attributes,
            outcome: outcome.into(),
        }
    }

    #[inline]
    pub fn root(&self) -> &DecisionNode {
        &self.root
    }

    /// Feature attribute names the tree was trained on, in header order.
    pub fn attribute_names(&self) -> &[String] {
        &self.attributes
    }

    /// Name of the outcome column.
    pub fn outcome_name(&self) -> &str {
        &self.outcome
    }

    /// Count nodes, leaves and depth in one pass.
    pub fn stats(&self) -> TreeStats {
        fn visit(node: &DecisionNode, level: usize, stats: &mut TreeStats) {
            stats.n_nodes += 1;
            if node.is_leaf() {
                stats.n_leaves += 1;
                stats.depth = stats.depth.max(level);
            }
            for (_, child) in node.children() {
                visit(child, level + 1, stats);
            }
        }

        let mut stats = TreeStats::default();
        visit(&self.root, 0, &mut stats);
        stats
    }

    /// Leaf labels in depth-first order (branches visited in value order).
    pub fn leaf_labels(&self) -> Vec<&str> {
        fn collect<'a>(node: &'a DecisionNode, out: &mut Vec<&'a str>) {
            match node {
                DecisionNode::Leaf { label } => out.push(label),
                DecisionNode::Split { children, .. } => {
                    for child in children.values() {
                        collect(child, out);
                    }
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }
}
