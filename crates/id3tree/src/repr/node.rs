//! Tree node types.

use std::collections::BTreeMap;

/// Kind of a tree node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Split,
}

/// A node of a categorical decision tree.
///
/// Children of a split are keyed by the attribute value observed in the
/// training subset that reached the node. `BTreeMap` keeps iteration order
/// stable for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionNode {
    /// Terminal node carrying the predicted label.
    Leaf { label: String },
    /// Internal node branching on one attribute.
    Split {
        /// Attribute name.
        attribute: String,
        /// Column index of the attribute in the training headers.
        index: usize,
        children: BTreeMap<String, DecisionNode>,
    },
}

impl DecisionNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
        }
    }

    pub fn split(
        attribute: impl Into<String>,
        index: usize,
        children: BTreeMap<String, DecisionNode>,
    ) -> Self {
        Self::Split {
            attribute: attribute.into(),
            index,
            children,
        }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Leaf { .. } => NodeKind::Leaf,
            Self::Split { .. } => NodeKind::Split,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Leaf label, or `None` for split nodes.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf { label } => Some(label),
            Self::Split { .. } => None,
        }
    }

    /// Split attribute name, or `None` for leaves.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::Split { attribute, .. } => Some(attribute),
            Self::Leaf { .. } => None,
        }
    }

    /// Text shown for this node: the label of a leaf, the attribute of a split.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Leaf { label } => label,
            Self::Split { attribute, .. } => attribute,
        }
    }

    /// Child reached through `value`, if the branch exists.
    pub fn child(&self, value: &str) -> Option<&DecisionNode> {
        match self {
            Self::Split { children, .. } => children.get(value),
            Self::Leaf { .. } => None,
        }
    }

    /// Iterate `(branch value, child)` pairs. Empty for leaves.
    pub fn children(&self) -> impl Iterator<Item = (&str, &DecisionNode)> {
        let children = match self {
            Self::Split { children, .. } => Some(children),
            Self::Leaf { .. } => None,
        };
        children
            .into_iter()
            .flat_map(|map| map.iter().map(|(value, child)| (value.as_str(), child)))
    }

    /// Number of direct children.
    pub fn n_children(&self) -> usize {
        match self {
            Self::Split { children, .. } => children.len(),
            Self::Leaf { .. } => 0,
        }
    }
}
