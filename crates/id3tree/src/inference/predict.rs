//! Tree traversal.

use std::fmt;

use crate::repr::{DecisionNode, DecisionTree};

use super::accessor::AttributeAccessor;

/// Label reported when a sample reaches a split with no branch for its value.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Result of classifying one sample.
///
/// Borrows the leaf label from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction<'t> {
    /// A leaf was reached.
    Label(&'t str),
    /// A split attribute's value was unseen during training (or absent).
    Unknown,
}

impl<'t> Prediction<'t> {
    /// Predicted label; [`UNKNOWN_LABEL`] for the sentinel.
    pub fn label(&self) -> &'t str {
        match self {
            Prediction::Label(label) => label,
            Prediction::Unknown => UNKNOWN_LABEL,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Prediction::Unknown)
    }
}

impl fmt::Display for Prediction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One branch taken during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep<'t> {
    pub attribute: &'t str,
    pub value: &'t str,
}

/// Prediction together with the branches followed to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<'t> {
    pub prediction: Prediction<'t>,
    pub path: Vec<PathStep<'t>>,
}

impl<'t> Trace<'t> {
    /// Whether the branch `value` of the split on `attribute` was taken.
    pub fn took(&self, attribute: &str, value: &str) -> bool {
        self.path
            .iter()
            .any(|step| step.attribute == attribute && step.value == value)
    }
}

/// Classify `sample` with `tree`.
///
/// Never fails: an unseen or missing value yields [`Prediction::Unknown`].
pub fn predict<'t, A>(tree: &'t DecisionTree, sample: &A) -> Prediction<'t>
where
    A: AttributeAccessor + ?Sized,
{
    fn walk<'t, A: AttributeAccessor + ?Sized>(node: &'t DecisionNode, sample: &A) -> Prediction<'t> {
        match node {
            DecisionNode::Leaf { label } => Prediction::Label(label),
            DecisionNode::Split {
                attribute,
                index,
                children,
            } => match sample
                .value(attribute, *index)
                .and_then(|value| children.get(value))
            {
                Some(child) => walk(child, sample),
                None => Prediction::Unknown,
            },
        }
    }

    walk(tree.root(), sample)
}

/// Like [`predict`], but also records the path taken.
pub fn trace<'t, A>(tree: &'t DecisionTree, sample: &A) -> Trace<'t>
where
    A: AttributeAccessor + ?Sized,
{
    let mut node = tree.root();
    let mut path = Vec::new();

    loop {
        match node {
            DecisionNode::Leaf { label } => {
                return Trace {
                    prediction: Prediction::Label(label),
                    path,
                };
            }
            DecisionNode::Split {
                attribute,
                index,
                children,
            } => {
                let next = sample.value(attribute, *index).and_then(|value| {
                    children
                        .get_key_value(value)
                        .map(|(value, child)| (value.as_str(), child))
                });
                match next {
                    Some((value, child)) => {
                        path.push(PathStep {
                            attribute: attribute.as_str(),
                            value,
                        });
                        node = child;
                    }
                    None => {
                        tracing::debug!(
                            attribute = attribute.as_str(),
                            value = sample.value(attribute, *index),
                            "no branch for value"
                        );
                        return Trace {
                            prediction: Prediction::Unknown,
                            path,
                        };
                    }
                }
            }
        }
    }
}

impl DecisionTree {
    /// Classify `sample`. See [`predict`].
    pub fn predict<A: AttributeAccessor + ?Sized>(&self, sample: &A) -> Prediction<'_> {
        predict(self, sample)
    }

    /// Classify `sample`, keeping the path. See [`trace`].
    pub fn trace<A: AttributeAccessor + ?Sized>(&self, sample: &A) -> Trace<'_> {
        trace(self, sample)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::inference::Assignment;

    fn tree() -> DecisionTree {
        let mut outlook = BTreeMap::new();
        outlook.insert("Hot".to_string(), DecisionNode::leaf("No"));
        outlook.insert("Mild".to_string(), DecisionNode::leaf("Yes"));

        let mut weather = BTreeMap::new();
        weather.insert("Overcast".to_string(), DecisionNode::leaf("Yes"));
        weather.insert("Sunny".to_string(), DecisionNode::split("Outlook", 1, outlook));

        DecisionTree::new(
            DecisionNode::split("Weather", 0, weather),
            vec!["Weather".into(), "Outlook".into()],
            "Play",
        )
    }

    #[test]
    fn follows_matching_branches_to_a_leaf() {
        let tree = tree();
        let sample = Assignment::new().with("Weather", "Sunny").with("Outlook", "Mild");
        assert_eq!(predict(&tree, &sample), Prediction::Label("Yes"));

        let sample = Assignment::new().with("Weather", "Overcast").with("Outlook", "Hot");
        assert_eq!(tree.predict(&sample).label(), "Yes");
    }

    #[test]
    fn unseen_value_yields_unknown() {
        let tree = tree();
        let sample = Assignment::new().with("Weather", "Snow").with("Outlook", "Hot");
        let prediction = predict(&tree, &sample);
        assert!(prediction.is_unknown());
        assert_eq!(prediction.to_string(), UNKNOWN_LABEL);
    }

    #[test]
    fn missing_attribute_yields_unknown() {
        let tree = tree();
        let sample = Assignment::new().with("Weather", "Sunny");
        assert_eq!(predict(&tree, &sample), Prediction::Unknown);
    }

    #[test]
    fn positional_samples_use_column_index() {
        let tree = tree();
        let row = ["Sunny", "Hot"];
        assert_eq!(predict(&tree, &row[..]), Prediction::Label("No"));
    }

    #[test]
    fn trace_records_taken_branches() {
        let tree = tree();
        let sample = Assignment::new().with("Weather", "Sunny").with("Outlook", "Hot");
        let trace = trace(&tree, &sample);

        assert_eq!(trace.prediction, Prediction::Label("No"));
        assert_eq!(
            trace.path,
            vec![
                PathStep { attribute: "Weather", value: "Sunny" },
                PathStep { attribute: "Outlook", value: "Hot" },
            ]
        );
        assert!(trace.took("Weather", "Sunny"));
        assert!(!trace.took("Weather", "Overcast"));
    }

    #[test]
    fn trace_stops_at_unseen_value() {
        let tree = tree();
        let sample = Assignment::new().with("Weather", "Sunny").with("Outlook", "Cold");
        let trace = tree.trace(&sample);
        assert!(trace.prediction.is_unknown());
        assert_eq!(trace.path.len(), 1);
    }
}
