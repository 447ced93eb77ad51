use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE_FIELD: &str = "title";
pub const DEFAULT_SEO_TITLE_FIELD: &str = "seo_title";
pub const DEFAULT_SEO_DESCRIPTION_FIELD: &str = "seo_description";

/// Names of the frontmatter fields the analyzers read.
///
/// The engine never looks these up anywhere else; callers thread one value
/// through each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Frontmatter key holding the article title, e.g. "title".
    pub title_field: String,
    /// Frontmatter key holding the title shown in search results, e.g. "seo_title".
    pub seo_title_field: String,
    /// Frontmatter key holding the search result snippet, e.g. "seo_description".
    pub seo_description_field: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            title_field: DEFAULT_TITLE_FIELD.to_string(),
            seo_title_field: DEFAULT_SEO_TITLE_FIELD.to_string(),
            seo_description_field: DEFAULT_SEO_DESCRIPTION_FIELD.to_string(),
        }
    }
}
