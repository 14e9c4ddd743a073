//! id3tree: categorical decision trees with the ID3 algorithm.
//!
//! Trees are induced greedily by information gain over string-valued
//! attributes. Rows that share every feature value but disagree on the
//! outcome are detected up front and resolved with a [`ConflictPolicy`].
//!
//! # Key Types
//!
//! - [`Dataset`] - Header plus rectangular rows of categorical values
//! - [`TreeConfig`] - Induction settings (builder with validation)
//! - [`DecisionTree`] / [`DecisionNode`] - The trained model
//! - [`Prediction`] / [`Trace`] - Classification results
//! - [`ReportSink`] - Destination of the entropy and gain breakdown
//!
//! # Training
//!
//! ```
//! use id3tree::testing;
//! use id3tree::training::{NullSink, TreeConfig, build_tree, detect_conflicts};
//! use id3tree::inference::Assignment;
//!
//! let dataset = testing::weather();
//! let resolution = detect_conflicts(&dataset, |_| Default::default());
//! let tree = build_tree(&dataset, &TreeConfig::default(), &resolution, &mut NullSink);
//!
//! let sample = Assignment::new().with("Weather", "Overcast").with("Outlook", "Hot");
//! assert_eq!(tree.predict(&sample).label(), "Yes");
//! ```

pub mod data;
pub mod inference;
pub mod render;
pub mod repr;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Data loading
pub use data::io::{DatasetLoadError, read_delimited};
pub use data::{Dataset, DatasetError, Record};

// Model
pub use repr::{DecisionNode, DecisionTree, TreeStats};

// Training
pub use training::{
    ConflictPolicy, ConflictRegistry, ConflictResolution, ReportMode, ReportSink, TreeBuilder,
    TreeConfig, build_tree, detect_conflicts,
};

// Prediction
pub use inference::{Assignment, Prediction, Trace, UNKNOWN_LABEL, predict, trace};
