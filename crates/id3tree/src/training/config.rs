//! Tree induction configuration.
//!
//! ```
//! use id3tree::training::TreeConfig;
//!
//! let config = TreeConfig::builder().build().unwrap();
//! assert_eq!(config.fallback_label, "Can't decide");
//!
//! let config = TreeConfig::builder().fallback_label("Undecided").build().unwrap();
//! assert_eq!(config.fallback_label, "Undecided");
//! ```

use bon::Builder;

use crate::inference::UNKNOWN_LABEL;

/// Label given to conflicting nodes under [`ConflictPolicy::FallbackLabel`].
///
/// [`ConflictPolicy::FallbackLabel`]: super::ConflictPolicy::FallbackLabel
pub const DEFAULT_FALLBACK_LABEL: &str = "Can't decide";

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("fallback label must not be empty")]
    EmptyFallbackLabel,

    #[error("fallback label '{0}' is reserved for unseen values at prediction time")]
    ReservedFallbackLabel(String),
}

/// Configuration for [`TreeBuilder`](super::TreeBuilder).
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct TreeConfig {
    /// Leaf label for conflicting rows under the fallback policy.
    /// Default: `"Can't decide"`.
    #[builder(into, default = DEFAULT_FALLBACK_LABEL.to_string())]
    pub fallback_label: String,

    /// Echo each node's position in the tree into the report. Default: `true`.
    #[builder(default = true)]
    pub report_nodes: bool,
}

impl<S: tree_config_builder::IsComplete> TreeConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the fallback label is blank or collides
    /// with the prediction sentinel.
    pub fn build(self) -> Result<TreeConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl TreeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let label = self.fallback_label.trim();
        if label.is_empty() {
            return Err(ConfigError::EmptyFallbackLabel);
        }
        if label == UNKNOWN_LABEL {
            return Err(ConfigError::ReservedFallbackLabel(label.to_string()));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}
