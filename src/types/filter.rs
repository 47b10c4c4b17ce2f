//! Schema-level filter metadata.
//!
//! Two shapes exist for "which fields can be filtered": the dedicated
//! `system/filters.json` records ([`Filter`]), and the pairs derived by
//! scanning entry data ([`FilterableField`]). The dedicated endpoint is
//! authoritative; the derived view is a fallback computed client-side.

use serde::{Deserialize, Serialize};

/// Filterable-field metadata as served by `system/filters.json`. Describes the
/// schema, not a stored value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub field_name: String,
    pub field_type: String,
    /// Allowed options, when the field is constrained to a fixed set.
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

/// A filterable field derived by scanning entry data: the field's name and
/// the type of the first descriptor seen for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterableField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}
