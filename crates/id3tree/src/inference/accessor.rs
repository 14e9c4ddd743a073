//! Attribute lookup for samples being classified.

use std::collections::{BTreeMap, HashMap};

use crate::data::Record;

/// Read access to the attribute values of a sample.
///
/// Split nodes know both the attribute name and its column index, so samples
/// can be keyed either way.
pub trait AttributeAccessor {
    /// Value of the attribute `name` (column `index`), if the sample has one.
    fn value(&self, name: &str, index: usize) -> Option<&str>;
}

impl AttributeAccessor for Record {
    #[inline]
    fn value(&self, _name: &str, index: usize) -> Option<&str> {
        self.features().get(index).map(String::as_str)
    }
}

impl AttributeAccessor for [String] {
    #[inline]
    fn value(&self, _name: &str, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl AttributeAccessor for [&str] {
    #[inline]
    fn value(&self, _name: &str, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

impl AttributeAccessor for HashMap<String, String> {
    #[inline]
    fn value(&self, name: &str, _index: usize) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeAccessor for BTreeMap<String, String> {
    #[inline]
    fn value(&self, name: &str, _index: usize) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Attribute name → value mapping for one prediction request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<String, String>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `attribute` to `value`, replacing any previous value.
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.values.insert(attribute.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl AttributeAccessor for Assignment {
    #[inline]
    fn value(&self, name: &str, _index: usize) -> Option<&str> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_is_keyed_by_name() {
        let assignment: Assignment = [("Weather", "Sunny"), ("Outlook", "Hot")].into_iter().collect();
        assert_eq!(assignment.value("Weather", 99), Some("Sunny"));
        assert_eq!(assignment.value("Wind", 0), None);
        assert_eq!(assignment.len(), 2);

        let assignment = assignment.with("Weather", "Rain");
        assert_eq!(assignment.get("Weather"), Some("Rain"));
    }

    #[test]
    fn slices_are_keyed_by_index() {
        let row = ["Sunny", "Hot"];
        assert_eq!(row[..].value("ignored", 1), Some("Hot"));
        assert_eq!(row[..].value("ignored", 2), None);
    }
}
