//! Prediction with a trained [`DecisionTree`](crate::repr::DecisionTree).
//!
//! - [`AttributeAccessor`]: how a sample exposes its attribute values
//! - [`Assignment`]: name-keyed sample, as entered by a user
//! - [`predict`] / [`trace`]: walk the tree to a label, optionally keeping the path

mod accessor;
mod predict;

pub use accessor::{Assignment, AttributeAccessor};
pub use predict::{PathStep, Prediction, Trace, UNKNOWN_LABEL, predict, trace};
