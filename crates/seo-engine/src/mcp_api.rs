use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Finding;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeDocumentParams {
    /// Full Markdown document text, frontmatter included.
    pub markdown: String,
    /// Keywords to check instead of the ones listed in the frontmatter, primary first.
    pub keywords: Option<Vec<String>>,
    /// Frontmatter key holding the article title (default from server config).
    pub title_field: Option<String>,
    /// Frontmatter key holding the SEO title (default from server config).
    pub seo_title_field: Option<String>,
    /// Frontmatter key holding the SEO description (default from server config).
    pub seo_description_field: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeFileParams {
    /// Path to a `.md` or `.mdx` file.
    pub path: String,
    /// Keywords to use when the file's frontmatter lists none.
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExtractKeywordsParams {
    /// Full Markdown document text, frontmatter included.
    pub markdown: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RenderPostTemplateParams {
    /// Template name such as "List Post" or "Beginners Guide".
    pub template: String,
    /// Keywords to pre-fill in the generated frontmatter.
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResponse {
    /// Keywords the document was checked against, primary first.
    pub keywords: Vec<String>,
    /// All findings in evaluation order.
    pub findings: Vec<Finding>,
    /// Findings about frontmatter fields.
    pub frontmatter: Vec<Finding>,
    /// Findings about the Markdown body.
    pub body: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PostTemplateListResponse {
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PostTemplateResponse {
    pub template: String,
    pub markdown: String,
}
