//! Entry wire types and the transformed per-field view.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::filter::FilterableField;

/// A stored field value. The service only stores text and booleans.
///
/// Equality is exact: a `Text` never compares equal to a `Bool`, and text
/// comparison is case-sensitive with no partial matching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    /// Returns the text value, or `None` for a boolean field.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }

    /// Returns the boolean value, or `None` for a text field.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Bool(b) => Some(*b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Schema-driven descriptor for one named attribute of an entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Semantic kind of the value, e.g. `"text"` or `"boolean"`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// The stored value.
    pub value: FieldValue,
    /// Whether the schema mandates this field. The service omits this on some
    /// fields; absent means false.
    #[serde(default)]
    pub required: bool,
    /// Whether the schema permits filtering on this field.
    #[serde(default)]
    pub filterable: bool,
}

/// One raw directory-listing record as returned by `system/base.json`.
///
/// The `data` keys are schema-defined per directory; two entries in the same
/// document need not share a key set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub directory_id: String,
    pub schema_id: String,
    /// Field name to descriptor. Missing on some records; absent means empty.
    #[serde(default)]
    pub data: BTreeMap<String, FieldDescriptor>,
    /// Opaque timestamp string, never parsed.
    pub created_at: String,
    /// Opaque timestamp string, never parsed.
    pub updated_at: String,
    /// Revision counter.
    #[serde(rename = "__v", default)]
    pub revision: i64,
}

impl Entry {
    /// Wraps this entry in its per-field lookup view. Identity fields,
    /// timestamps, revision, and the `data` map are carried through untouched.
    pub fn transform(self) -> TransformedEntry {
        TransformedEntry { entry: self }
    }

    /// Shortcut for the conventional `Slug` field used for direct lookup.
    pub fn slug(&self) -> Option<&str> {
        self.data.get("Slug")?.value.as_str()
    }
}

/// An [`Entry`] with every `data` key also reachable by name through
/// [`field`](TransformedEntry::field).
///
/// This is a view over the raw entry, not a copy: `field(k)` and `data[k]`
/// resolve to the same descriptor, so a mutation through either path is
/// observed through the other. Derefs to the inner [`Entry`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransformedEntry {
    entry: Entry,
}

impl TransformedEntry {
    /// Looks up the descriptor for a named data field, reading the live `data`
    /// map. Never resolves the entry's own non-data fields.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.entry.data.get(name)
    }

    /// Mutable variant of [`field`](TransformedEntry::field).
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.entry.data.get_mut(name)
    }

    /// Names of all data fields on this entry.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entry.data.keys().map(String::as_str)
    }

    /// Unwraps back into the raw entry.
    pub fn into_inner(self) -> Entry {
        self.entry
    }
}

impl Deref for TransformedEntry {
    type Target = Entry;

    fn deref(&self) -> &Entry {
        &self.entry
    }
}

impl DerefMut for TransformedEntry {
    fn deref_mut(&mut self) -> &mut Entry {
        &mut self.entry
    }
}

/// Wire shape of `system/base.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntriesDocument {
    pub entries: Vec<Entry>,
}

impl EntriesDocument {
    /// Collects every distinct field name carrying `filterable = true`, paired
    /// with its type. Scans entries in document order; the first occurrence of
    /// a name wins. An empty document yields an empty list.
    pub fn filterable_fields(&self) -> Vec<FilterableField> {
        let mut seen: Vec<&str> = Vec::new();
        let mut fields = Vec::new();
        for entry in &self.entries {
            for (name, descriptor) in &entry.data {
                if descriptor.filterable && !seen.contains(&name.as_str()) {
                    seen.push(name.as_str());
                    fields.push(FilterableField {
                        name: name.clone(),
                        field_type: descriptor.field_type.clone(),
                    });
                }
            }
        }
        fields
    }
}

/// One page of transformed entries, as returned by [`Client::get_entries`].
///
/// `total_entries` is counted client-side from the fetched document; the
/// service's own pagination is advisory and never trusted.
///
/// [`Client::get_entries`]: crate::Client::get_entries
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesPage {
    pub total_entries: usize,
    pub entries: Vec<TransformedEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(value: FieldValue, filterable: bool) -> FieldDescriptor {
        let field_type = match value {
            FieldValue::Text(_) => "text",
            FieldValue::Bool(_) => "boolean",
        };
        FieldDescriptor {
            field_type: field_type.to_string(),
            value,
            required: false,
            filterable,
        }
    }

    fn entry(fields: &[(&str, FieldValue, bool)]) -> Entry {
        Entry {
            id: "entry-1".to_string(),
            directory_id: "dir-1".to_string(),
            schema_id: "schema-1".to_string(),
            data: fields
                .iter()
                .map(|(name, value, filterable)| {
                    (name.to_string(), descriptor(value.clone(), *filterable))
                })
                .collect(),
            created_at: "2024-05-01T09:00:00.000Z".to_string(),
            updated_at: "2024-05-02T09:00:00.000Z".to_string(),
            revision: 0,
        }
    }

    #[test]
    fn transform_exposes_every_data_key() {
        let raw = entry(&[
            ("Name", FieldValue::from("Acme"), true),
            ("Featured", FieldValue::from(true), false),
        ]);
        let transformed = raw.clone().transform();
        for (name, descriptor) in &raw.data {
            assert_eq!(transformed.field(name), Some(descriptor));
        }
        assert!(transformed.field("Missing").is_none());
    }

    #[test]
    fn transform_reads_are_live_not_snapshots() {
        let mut transformed = entry(&[("Name", FieldValue::from("Acme"), true)]).transform();

        // Mutate through the map, observe through the lookup.
        transformed.data.get_mut("Name").unwrap().value = FieldValue::from("Umbrella");
        assert_eq!(
            transformed.field("Name").unwrap().value,
            FieldValue::from("Umbrella")
        );

        // Mutate through the lookup, observe through the map.
        transformed.field_mut("Name").unwrap().value = FieldValue::from("Initech");
        assert_eq!(
            transformed.data["Name"].value,
            FieldValue::from("Initech")
        );
    }

    #[test]
    fn transform_preserves_non_data_fields() {
        let raw = entry(&[("Name", FieldValue::from("Acme"), true)]);
        let transformed = raw.clone().transform();
        assert_eq!(transformed.id, raw.id);
        assert_eq!(transformed.directory_id, raw.directory_id);
        assert_eq!(transformed.schema_id, raw.schema_id);
        assert_eq!(transformed.created_at, raw.created_at);
        assert_eq!(transformed.updated_at, raw.updated_at);
        assert_eq!(transformed.revision, raw.revision);
        assert_eq!(transformed.data, raw.data);
    }

    #[test]
    fn transform_tolerates_empty_data() {
        let transformed = entry(&[]).transform();
        assert!(transformed.field("Anything").is_none());
        assert_eq!(transformed.field_names().count(), 0);
    }

    #[test]
    fn transform_is_idempotent() {
        let raw = entry(&[("Name", FieldValue::from("Acme"), true)]);
        let once = raw.clone().transform();
        let twice = once.clone().into_inner().transform();
        assert_eq!(once, twice);
        assert_eq!(once.field("Name"), twice.field("Name"));
    }

    #[test]
    fn filterable_fields_keeps_only_filterable_descriptors() {
        let document = EntriesDocument {
            entries: vec![entry(&[
                ("Description", FieldValue::from("Widgets"), true),
                ("Name", FieldValue::from("Acme"), false),
            ])],
        };
        assert_eq!(
            document.filterable_fields(),
            vec![FilterableField {
                name: "Description".to_string(),
                field_type: "text".to_string(),
            }]
        );
    }

    #[test]
    fn filterable_fields_dedupes_across_entries_first_wins() {
        let mut first = entry(&[("Category", FieldValue::from("tools"), true)]);
        first.data.get_mut("Category").unwrap().field_type = "text".to_string();
        let mut second = entry(&[("Category", FieldValue::from(true), true)]);
        second.data.get_mut("Category").unwrap().field_type = "boolean".to_string();

        let document = EntriesDocument {
            entries: vec![first, second],
        };
        let fields = document.filterable_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Category");
        assert_eq!(fields[0].field_type, "text");
    }

    #[test]
    fn filterable_fields_on_empty_document() {
        let document = EntriesDocument { entries: vec![] };
        assert!(document.filterable_fields().is_empty());
    }

    #[test]
    fn slug_shortcut_reads_the_slug_field() {
        let raw = entry(&[("Slug", FieldValue::from("acme-tools"), false)]);
        assert_eq!(raw.slug(), Some("acme-tools"));
        assert_eq!(entry(&[]).slug(), None);

        // A boolean Slug is malformed data and resolves to no slug.
        let odd = entry(&[("Slug", FieldValue::from(true), false)]);
        assert_eq!(odd.slug(), None);
    }
}
