//! Directory taxonomy categories, passed through verbatim.

use serde::{Deserialize, Serialize};

/// One taxonomy node. Opaque to this client beyond pass-through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Wire shape of `system/categories.json`: the list is wrapped under a
/// `categories` key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}
