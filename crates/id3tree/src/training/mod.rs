//! ID3 tree induction.
//!
//! - [`entropy`]: Shannon entropy, information gain, outcome counts
//! - [`conflict`]: detection and resolution of contradictory rows
//! - [`TreeBuilder`]: recursive best-gain partitioning
//! - [`report`]: sinks for the human-readable gain breakdown
//!
//! Typical flow:
//!
//! ```
//! use id3tree::data::Dataset;
//! use id3tree::training::{BufferSink, ConflictPolicy, TreeConfig, build_tree, detect_conflicts};
//!
//! let dataset = Dataset::new(
//!     ["Weather", "Outlook", "Play"],
//!     [
//!         ["Sunny", "Hot", "No"],
//!         ["Sunny", "Hot", "No"],
//!         ["Overcast", "Hot", "Yes"],
//!         ["Rain", "Mild", "Yes"],
//!     ],
//! )
//! .unwrap();
//!
//! let resolution = detect_conflicts(&dataset, |_| ConflictPolicy::FallbackLabel);
//! let mut report = BufferSink::new();
//! let tree = build_tree(&dataset, &TreeConfig::default(), &resolution, &mut report);
//!
//! assert_eq!(tree.root().attribute(), Some("Weather"));
//! assert!(report.contents().contains("Information Gain"));
//! ```

mod builder;
mod config;
pub mod conflict;
pub mod entropy;
pub mod report;
mod usage;

pub use builder::{TreeBuilder, build_tree};
pub use config::{ConfigError, DEFAULT_FALLBACK_LABEL, TreeConfig, TreeConfigBuilder};
pub use conflict::{
    Conflict, ConflictPolicy, ConflictRegistry, ConflictResolution, ParseConflictPolicyError,
    detect_conflicts,
};
pub use entropy::{OutcomeCounts, entropy, information_gain};
pub use report::{
    BufferSink, NullSink, ParseReportModeError, ReportMode, ReportSink, Reporter, TerminalSink,
    Tint,
};
pub use usage::AttributeUsage;
