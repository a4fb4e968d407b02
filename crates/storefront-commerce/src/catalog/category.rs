//! Category types for product organization.

use serde::{Deserialize, Serialize};

/// A product category as the catalog reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of times the category page was viewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views_count: Option<u64>,
}

impl Category {
    /// Create a category.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            views_count: None,
        }
    }
}
