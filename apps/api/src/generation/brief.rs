//! Brand brief — the user-supplied descriptive fields driving generation.

use serde::Deserialize;

/// Free-text fields submitted from the brand kit form. Every field is
/// optional and unvalidated; prompt building substitutes placeholders for
/// anything absent or empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandBrief {
    pub brand_name: Option<String>,
    pub industry: Option<String>,
    pub adjectives: Option<String>,
    pub audience: Option<String>,
}
