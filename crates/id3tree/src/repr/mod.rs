//! Decision tree representation.
//!
//! The tree is an owned out-tree: every split node owns its children through
//! a value-keyed map, so no arena or node ids are needed.

pub mod node;
pub mod tree;

pub use node::{DecisionNode, NodeKind};
pub use tree::{DecisionTree, TreeStats};
