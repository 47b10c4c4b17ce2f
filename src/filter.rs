//! Client-side equality predicate over entry field values.

use std::collections::BTreeMap;

use crate::types::{Entry, FieldValue};

/// An equality predicate map used to select entries: field name to expected
/// value, combined with logical AND.
///
/// Distinct from [`Filter`](crate::types::Filter), which is schema metadata
/// about which fields may be filtered.
///
/// ```
/// use directorydock::EntryFilter;
///
/// let filter = EntryFilter::new()
///     .with("Name", "Acme")
///     .with("Featured", true);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryFilter {
    fields: BTreeMap<String, FieldValue>,
}

impl EntryFilter {
    /// An empty filter, which matches every entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an expected value for a field, replacing any previous expectation
    /// for the same field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns true when the filter carries no expectations.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields the filter constrains.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Decides whether an entry matches: every filter key must resolve to a
    /// descriptor in the entry's `data`, and that descriptor's value must be
    /// exactly equal to the expected value. No case folding, no substring
    /// matching, no coercion between text and boolean.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.fields.iter().all(|(name, expected)| {
            entry
                .data
                .get(name)
                .is_some_and(|descriptor| &descriptor.value == expected)
        })
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for EntryFilter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        EntryFilter {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
