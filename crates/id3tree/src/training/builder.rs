//! Recursive ID3 tree induction.
//!
//! For every node the builder:
//!
//! 1. returns a leaf when all rows share one outcome;
//! 2. returns a policy leaf when the node's first row is a registered conflict;
//! 3. otherwise splits on the unused attribute with the highest information
//!    gain (first in header order on ties) and recurses into one child per
//!    observed value, or returns a majority leaf when no attribute is left.
//!
//! Each recursion consumes one attribute, so depth is bounded by the number
//! of attributes.
//!
//! # Example
//!
//! ```
//! use id3tree::data::Dataset;
//! use id3tree::training::{NullSink, TreeBuilder, TreeConfig, detect_conflicts};
//!
//! let dataset = Dataset::new(
//!     ["Weather", "Play"],
//!     [["Sunny", "No"], ["Rain", "Yes"]],
//! ).unwrap();
//! let resolution = detect_conflicts(&dataset, |_| unreachable!());
//! let config = TreeConfig::default();
//!
//! let tree = TreeBuilder::new(&config, &resolution).build(&dataset, &mut NullSink);
//! assert_eq!(tree.root().attribute(), Some("Weather"));
//! ```

use std::collections::BTreeMap;

use crate::data::{Dataset, Record};
use crate::repr::{DecisionNode, DecisionTree};

use super::config::TreeConfig;
use super::conflict::{ConflictPolicy, ConflictResolution};
use super::entropy::{OutcomeCounts, information_gain, partition, report_entropy};
use super::report::{ReportSink, Tint};
use super::usage::AttributeUsage;

/// Branch that led to the node being built, for the report.
#[derive(Clone, Copy)]
struct Branch<'a> {
    parent: &'a str,
    value: &'a str,
}

/// ID3 tree builder.
///
/// Borrows its configuration and the conflict resolution computed for the
/// dataset; [`build`](Self::build) may be called any number of times.
pub struct TreeBuilder<'a> {
    config: &'a TreeConfig,
    resolution: &'a ConflictResolution,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a TreeConfig, resolution: &'a ConflictResolution) -> Self {
        Self { config, resolution }
    }

    /// Induce a tree from `dataset`, writing the gain breakdown to `sink`.
    pub fn build(&self, dataset: &Dataset, sink: &mut dyn ReportSink) -> DecisionTree {
        let rows: Vec<&Record> = dataset.records().iter().collect();
        let usage = AttributeUsage::new(dataset.n_attributes());

        let root = self.build_node(dataset, &rows, &usage, None, sink);
        let tree = DecisionTree::new(
            root,
            dataset.attribute_names().to_vec(),
            dataset.outcome_name(),
        );

        let stats = tree.stats();
        tracing::info!(
            nodes = stats.n_nodes,
            leaves = stats.n_leaves,
            depth = stats.depth,
            "decision tree built"
        );
        tree
    }

    fn build_node(
        &self,
        dataset: &Dataset,
        rows: &[&Record],
        usage: &AttributeUsage,
        branch: Option<Branch<'_>>,
        sink: &mut dyn ReportSink,
    ) -> DecisionNode {
        debug_assert!(!rows.is_empty());

        let counts = OutcomeCounts::from_rows(rows);
        if self.config.report_nodes && sink.enabled() {
            self.report_node_header(rows, branch, sink);
        }

        // Pure subset.
        if counts.is_pure() {
            let label = rows[0].outcome();
            if self.config.report_nodes && sink.enabled() {
                sink.write_line(&format!("All {label} -> Leaf Node"));
            }
            return DecisionNode::leaf(label);
        }

        // Conflicting feature vector: no split can separate these rows.
        if self.resolution.registry.contains(rows[0].features()) {
            let key = rows[0].features().join(",");
            let label = match self.resolution.policy {
                ConflictPolicy::FallbackLabel => self.config.fallback_label.as_str(),
                ConflictPolicy::MostCommon => counts.most_common().unwrap_or_default(),
            };
            tracing::debug!(%key, %label, "conflicting node resolved");
            if self.config.report_nodes && sink.enabled() {
                sink.write_line(&format!("Conflicting inputs ({key}) -> Leaf Node: {label}"));
            }
            return DecisionNode::leaf(label);
        }

        // Attribute selection: strictly greater gain replaces the best.
        let mut best: Option<(usize, f64)> = None;
        for index in usage.unused() {
            let gain = information_gain(rows, index, dataset.attribute_name(index), sink);
            if best.is_none_or(|(_, best_gain)| gain > best_gain) {
                best = Some((index, gain));
            }
        }

        let Some((index, gain)) = best else {
            let label = counts.most_common().unwrap_or_default();
            tracing::debug!(%label, "attributes exhausted, majority leaf");
            if self.config.report_nodes && sink.enabled() {
                sink.write_line(&format!(
                    "No attribute left to split on -> Leaf Node: {label}"
                ));
            }
            return DecisionNode::leaf(label);
        };

        let name = dataset.attribute_name(index);
        tracing::debug!(
            attribute = name,
            gain,
            rows = rows.len(),
            depth = usage.n_used(),
            "split selected"
        );
        if sink.enabled() {
            let line = format!("Highest Gain is: {name} ({gain:.4}) Split based on: {name}");
            let line = sink.paint(&line, Tint::Blue);
            sink.write_line(&line);
        }

        let next = usage.with(index);
        let mut children = BTreeMap::new();
        for (value, subset) in partition(rows, index) {
            let branch = Branch {
                parent: name,
                value,
            };
            let child = self.build_node(dataset, &subset, &next, Some(branch), sink);
            children.insert(value.to_string(), child);
        }

        DecisionNode::split(name, index, children)
    }

    fn report_node_header(
        &self,
        rows: &[&Record],
        branch: Option<Branch<'_>>,
        sink: &mut dyn ReportSink,
    ) {
        sink.write_line("");
        match branch {
            None => sink.write_line(&format!("----- Finding root ({} rows) -----", rows.len())),
            Some(Branch { parent, value }) => sink.write_line(&format!(
                "----- Subtree for: {parent} = {value} ({} rows) -----",
                rows.len()
            )),
        }
        report_entropy(rows, sink);
    }
}

/// Build a tree from `dataset` using an already computed conflict resolution.
pub fn build_tree(
    dataset: &Dataset,
    config: &TreeConfig,
    resolution: &ConflictResolution,
    sink: &mut dyn ReportSink,
) -> DecisionTree {
    TreeBuilder::new(config, resolution).build(dataset, sink)
}
