//! Detection of contradictory training rows.
//!
//! Two rows conflict when their feature values are identical but their
//! outcomes differ. No split can separate them, so the builder resolves any
//! node whose rows share such a feature vector with a [`ConflictPolicy`]
//! chosen once for the whole dataset.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::data::Dataset;

/// How nodes made of conflicting rows are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Use the configured fallback label (e.g. "Can't decide").
    FallbackLabel,
    /// Use the most frequent outcome among the node's rows.
    #[default]
    MostCommon,
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConflictPolicy::FallbackLabel => "fallback",
            ConflictPolicy::MostCommon => "most-common",
        })
    }
}

/// Error returned when parsing an unknown conflict policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conflict policy '{0}' (expected fallback or most-common)")]
pub struct ParseConflictPolicyError(String);

impl FromStr for ConflictPolicy {
    type Err = ParseConflictPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "fallback" | "fallback-label" => Ok(ConflictPolicy::FallbackLabel),
            "2" | "most-common" | "majority" => Ok(ConflictPolicy::MostCommon),
            _ => Err(ParseConflictPolicyError(s.to_string())),
        }
    }
}

// =============================================================================
// Conflict
// =============================================================================

/// One feature vector observed with several outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    features: Vec<String>,
    /// Outcome → one-based file lines, in order of first appearance.
    outcomes: Vec<(String, Vec<usize>)>,
}

impl Conflict {
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Distinct outcomes with the file lines they appear on.
    pub fn outcomes(&self) -> &[(String, Vec<usize>)] {
        &self.outcomes
    }

    /// Lines of `outcome`, if it was observed for this feature vector.
    pub fn lines_of(&self, outcome: &str) -> Option<&[usize]> {
        self.outcomes
            .iter()
            .find(|(o, _)| o == outcome)
            .map(|(_, lines)| lines.as_slice())
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " - Features: {}", self.features.join(","))?;
        for (outcome, lines) in &self.outcomes {
            let lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
            writeln!(f, "   - Outcome '{}' at lines: [{}]", outcome, lines.join(" "))?;
        }
        Ok(())
    }
}

// =============================================================================
// ConflictRegistry
// =============================================================================

/// Conflicting feature vectors of a dataset, keyed by the vector itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictRegistry {
    conflicts: BTreeMap<Vec<String>, Conflict>,
}

impl ConflictRegistry {
    /// Scan every row of `dataset` for conflicting feature vectors.
    pub fn detect(dataset: &Dataset) -> Self {
        let mut groups: BTreeMap<Vec<String>, Conflict> = BTreeMap::new();
        for record in dataset.records() {
            let line = record.line();
            let entry = groups
                .entry(record.features().to_vec())
                .or_insert_with(|| Conflict {
                    features: record.features().to_vec(),
                    outcomes: Vec::new(),
                });
            match entry.outcomes.iter_mut().find(|(o, _)| o.as_str() == record.outcome()) {
                Some((_, lines)) => lines.push(line),
                None => entry.outcomes.push((record.outcome().to_string(), vec![line])),
            }
        }

        groups.retain(|_, c| c.outcomes.len() > 1);
        Self { conflicts: groups }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Whether `features` is a conflicting feature vector.
    #[inline]
    pub fn contains(&self, features: &[String]) -> bool {
        self.conflicts.contains_key(features)
    }

    pub fn get(&self, features: &[String]) -> Option<&Conflict> {
        self.conflicts.get(features)
    }

    /// Conflicts in feature-vector order.
    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts.values()
    }
}

/// Registry plus the policy chosen for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictResolution {
    pub registry: ConflictRegistry,
    pub policy: ConflictPolicy,
}

impl ConflictResolution {
    pub fn new(registry: ConflictRegistry, policy: ConflictPolicy) -> Self {
        Self { registry, policy }
    }
}

/// Detect conflicts in `dataset` and settle on a policy.
///
/// `choose` is called exactly once when at least one conflict exists, and
/// never otherwise (the default policy is kept since it cannot matter).
pub fn detect_conflicts<F>(dataset: &Dataset, choose: F) -> ConflictResolution
where
    F: FnOnce(&ConflictRegistry) -> ConflictPolicy,
{
    let registry = ConflictRegistry::detect(dataset);
    if registry.is_empty() {
        return ConflictResolution::new(registry, ConflictPolicy::default());
    }

    for conflict in registry.iter() {
        tracing::info!(
            features = %conflict.features().join(","),
            outcomes = conflict.outcomes().len(),
            "conflicting rows: identical features, different outcomes"
        );
    }

    let policy = choose(&registry);
    tracing::info!(conflicts = registry.len(), %policy, "conflict policy selected");
    ConflictResolution::new(registry, policy)
}
