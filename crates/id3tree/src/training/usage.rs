//! Attributes consumed along a root-to-node path.

use fixedbitset::FixedBitSet;

/// Set of attribute indices already split on along the current path.
///
/// Descending into a child produces a new set via [`AttributeUsage::with`];
/// the parent's set is never mutated, so sibling branches stay independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeUsage {
    used: FixedBitSet,
}

impl AttributeUsage {
    /// Empty usage set for `n_attributes` attributes.
    pub fn new(n_attributes: usize) -> Self {
        Self {
            used: FixedBitSet::with_capacity(n_attributes),
        }
    }

    /// Number of attributes tracked.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.used.len()
    }

    #[inline]
    pub fn is_used(&self, index: usize) -> bool {
        self.used.contains(index)
    }

    /// Number of attributes already consumed.
    #[inline]
    pub fn n_used(&self) -> usize {
        self.used.count_ones(..)
    }

    /// Copy of this set with `index` marked as used.
    pub fn with(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.used.insert(index);
        next
    }

    /// Unused attribute indices in ascending (header) order.
    pub fn unused(&self) -> impl Iterator<Item = usize> + '_ {
        self.used.zeroes()
    }
}
