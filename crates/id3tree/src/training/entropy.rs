//! Shannon entropy and information gain over categorical rows.
//!
//! ```text
//! H(S)        = -Σ p_i · log2(p_i)                 (p_i = count_i / |S|)
//! Gain(S, A)  = H(S) - Σ_v |S_v| / |S| · H(S_v)
//! ```
//!
//! Functions taking a [`ReportSink`] write a tabular breakdown of the
//! computation to it. The returned values never depend on the sink.

use std::borrow::Borrow;

use crate::data::Record;

use super::report::{ReportSink, Tint};

const RULE_HEAVY: &str = "══════════════════════════════════════════════════════════════════════";
const RULE_LIGHT: &str = "──────────────────────────────────────────────────────────────────────";
const RULE_DASH: &str = "----------------------------------------------------------------------";

// =============================================================================
// OutcomeCounts
// =============================================================================

/// Outcome label frequencies of a set of rows, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeCounts<'a> {
    counts: Vec<(&'a str, usize)>,
    total: usize,
}

impl<'a> OutcomeCounts<'a> {
    pub fn from_rows<R: Borrow<Record>>(rows: &'a [R]) -> Self {
        let mut counts: Vec<(&'a str, usize)> = Vec::new();
        for row in rows {
            let outcome = row.borrow().outcome();
            match counts.iter_mut().find(|(label, _)| *label == outcome) {
                Some((_, n)) => *n += 1,
                None => counts.push((outcome, 1)),
            }
        }
        Self {
            counts,
            total: rows.len(),
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct outcomes.
    #[inline]
    pub fn n_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// True when at most one outcome occurs.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.counts.len() <= 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Count for `label` (0 when absent).
    pub fn count(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| *l == label)
            .map_or(0, |(_, n)| *n)
    }

    /// Most frequent outcome; the earliest seen wins ties.
    pub fn most_common(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(label, n) in &self.counts {
            if best.is_none_or(|(_, best_n)| n > best_n) {
                best = Some((label, n));
            }
        }
        best.map(|(label, _)| label)
    }

    /// Shannon entropy in bits. Zero counts contribute nothing.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|&(_, n)| {
                let p = n as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

// =============================================================================
// Entropy & Gain
// =============================================================================

/// Entropy (bits) of the outcome distribution of `rows`.
///
/// `rows` must be non-empty.
pub fn entropy<R: Borrow<Record>>(rows: &[R]) -> f64 {
    debug_assert!(!rows.is_empty(), "entropy of an empty row set");
    OutcomeCounts::from_rows(rows).entropy()
}

/// Entropy of `rows`, with the per-outcome table written to `sink`.
pub fn report_entropy<R: Borrow<Record>>(rows: &[R], sink: &mut dyn ReportSink) -> f64 {
    debug_assert!(!rows.is_empty(), "entropy of an empty row set");
    let counts = OutcomeCounts::from_rows(rows);
    let value = counts.entropy();

    if sink.enabled() {
        let total = counts.total() as f64;
        sink.write_line("");
        sink.write_line("📊 Entropy Calculation");
        sink.write_line(RULE_HEAVY);
        sink.write_line(&format!(
            "{:<12} | {:<6} | {:<11} | {:<13}",
            "Outcome", "Count", "Probability", "Contribution"
        ));
        sink.write_line(RULE_LIGHT);
        for (label, n) in counts.iter() {
            let p = n as f64 / total;
            sink.write_line(&format!(
                "{:<12} | {:<6} | {:<11.4} | {:<13.4}",
                label,
                n,
                p,
                -p * p.log2()
            ));
        }
        sink.write_line(RULE_LIGHT);
        sink.write_line(&format!("🔹 Total Entropy = {value:.4}"));
    }

    value
}

/// Group `rows` by their value of `attribute`, in order of first appearance.
pub fn partition<'a, R: Borrow<Record>>(rows: &'a [R], attribute: usize) -> Vec<(&'a str, Vec<&'a Record>)> {
    let mut groups: Vec<(&'a str, Vec<&'a Record>)> = Vec::new();
    for row in rows {
        let row = row.borrow();
        let value = row.feature(attribute);
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, members)) => members.push(row),
            None => groups.push((value, vec![row])),
        }
    }
    groups
}

/// Information gain of splitting `rows` on the attribute at `attribute`.
///
/// `name` labels the attribute in the report. The result is never negative.
pub fn information_gain<R: Borrow<Record>>(
    rows: &[R],
    attribute: usize,
    name: &str,
    sink: &mut dyn ReportSink,
) -> f64 {
    debug_assert!(!rows.is_empty(), "information gain of an empty row set");

    if sink.enabled() {
        sink.write_line("");
        sink.write_line(RULE_HEAVY);
        sink.write_line(&format!("📊 Information Gain for attribute: {name}"));
        sink.write_line(RULE_HEAVY);
    }

    let parent = report_entropy(rows, sink);
    if sink.enabled() {
        let marker = sink.paint("🔸 Entropy before split:", Tint::Yellow);
        sink.write_line(&format!("{marker} {parent:.4}"));
    }

    let total = rows.len() as f64;
    let mut rows_out = Vec::new();
    let mut weighted = 0.0;
    for (value, subset) in partition(rows, attribute) {
        let subset_entropy = report_entropy(&subset, sink);
        let weight = subset.len() as f64 / total;
        let contribution = weight * subset_entropy;
        weighted += contribution;
        rows_out.push((value, subset.len(), weight, subset_entropy, contribution));
    }

    // Floating error can push an exact zero slightly below it.
    let gain = (parent - weighted).max(0.0);

    if sink.enabled() {
        sink.write_line("");
        sink.write_line("📎 Attribute Value Splits");
        sink.write_line(RULE_DASH);
        sink.write_line(&format!(
            "{:<12} | {:<6} | {:<9} | {:<10} | {:<15}",
            "Value", "Count", "Weight", "Entropy", "Contribution"
        ));
        sink.write_line(RULE_DASH);
        for (value, n, weight, h, contribution) in rows_out {
            sink.write_line(&format!(
                "{value:<12} | {n:<6} | {weight:<9.4} | {h:<10.4} | {contribution:<15.4}"
            ));
        }
        sink.write_line(RULE_DASH);
        let line = format!("✅ Information Gain = {parent:.4} - {weighted:.4} = {gain:.4}");
        let line = sink.paint(&line, Tint::Green);
        sink.write_line(&line);
    }

    gain
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::data::Dataset;
    use crate::training::report::{BufferSink, NullSink};

    fn weather() -> Dataset {
        Dataset::new(
            ["Weather", "Outlook", "Play"],
            [
                ["Sunny", "Hot", "No"],
                ["Sunny", "Hot", "No"],
                ["Overcast", "Hot", "Yes"],
                ["Rain", "Mild", "Yes"],
            ],
        )
        .unwrap()
    }

    #[test]
    fn entropy_of_pure_set_is_zero() {
        let ds = Dataset::new(["A", "Out"], [["x", "Yes"], ["y", "Yes"]]).unwrap();
        assert_eq!(entropy(ds.records()), 0.0);
    }

    #[test]
    fn entropy_of_even_split_is_one_bit() {
        assert_abs_diff_eq!(entropy(weather().records()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn entropy_of_skewed_split() {
        // 9 yes / 5 no: the classic play-tennis root entropy.
        let mut rows = vec![["a", "yes"]; 9];
        rows.extend(vec![["a", "no"]; 5]);
        let ds = Dataset::new(["A", "Play"], rows).unwrap();
        assert_abs_diff_eq!(entropy(ds.records()), 0.940_285_958, epsilon = 1e-6);
    }

    #[test]
    fn gain_of_perfect_split_equals_parent_entropy() {
        let ds = weather();
        let gain = information_gain(ds.records(), 0, "Weather", &mut NullSink);
        assert_abs_diff_eq!(gain, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn gain_of_partial_split() {
        let ds = weather();
        // Hot: {No, No, Yes} -> 0.9183, Mild: {Yes} -> 0
        let gain = information_gain(ds.records(), 1, "Outlook", &mut NullSink);
        assert_abs_diff_eq!(gain, 1.0 - 0.75 * 0.918_295_834, epsilon = 1e-6);
    }

    #[test]
    fn single_valued_attribute_has_zero_gain() {
        let ds = Dataset::new(["A", "B", "Out"], [["x", "p", "1"], ["x", "q", "2"]]).unwrap();
        assert_eq!(information_gain(ds.records(), 0, "A", &mut NullSink), 0.0);
    }

    #[test]
    fn report_does_not_change_the_result() {
        let ds = weather();
        let mut buffer = BufferSink::new();
        let reported = information_gain(ds.records(), 1, "Outlook", &mut buffer);
        let silent = information_gain(ds.records(), 1, "Outlook", &mut NullSink);
        assert_eq!(reported, silent);

        let text = buffer.contents();
        assert!(text.contains("Information Gain for attribute: Outlook"));
        assert!(text.contains("Entropy before split: 1.0000"));
        assert!(text.contains("Hot"));
        assert!(text.contains("Mild"));
    }

    #[test]
    fn outcome_counts_majority_prefers_first_seen_on_tie() {
        let ds = Dataset::new(
            ["A", "Out"],
            [["x", "b"], ["x", "a"], ["x", "a"], ["x", "b"], ["x", "c"]],
        )
        .unwrap();
        let counts = OutcomeCounts::from_rows(ds.records());
        assert_eq!(counts.most_common(), Some("b"));
        assert_eq!(counts.count("a"), 2);
        assert_eq!(counts.count("z"), 0);
        assert_eq!(counts.n_outcomes(), 3);
        assert!(!counts.is_pure());
    }

    #[test]
    fn partition_keeps_first_appearance_order() {
        let ds = weather();
        let groups = partition(ds.records(), 0);
        let values: Vec<&str> = groups.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec!["Sunny", "Overcast", "Rain"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
