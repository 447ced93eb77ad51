use std::path::Path;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use seo_engine::mcp_api::{
    AnalysisResponse, AnalyzeDocumentParams, AnalyzeFileParams, ExtractKeywordsParams,
    KeywordsResponse, PostTemplateListResponse, PostTemplateResponse, RenderPostTemplateParams,
};
use seo_engine::{Document, FieldConfig};

use crate::config::Config;
use crate::error::AppError;
use crate::report::{analyze_text, ensure_markdown, KeywordSource};
use crate::templates::{find_template, template_names};

#[derive(Clone)]
pub struct BetterSeoServer {
    fields: FieldConfig,
    tool_router: ToolRouter<BetterSeoServer>,
}

impl BetterSeoServer {
    pub fn new(config: Config) -> Self {
        Self {
            fields: config.fields,
            tool_router: Self::tool_router(),
        }
    }

    fn fields_for(&self, params: &AnalyzeDocumentParams) -> Result<FieldConfig, String> {
        let pick = |name: &str, value: &Option<String>, default: &str| match value.as_deref().map(str::trim) {
            None => Ok(default.to_string()),
            Some("") => Err(format!("{name} must not be empty")),
            Some(value) => Ok(value.to_string()),
        };
        Ok(FieldConfig {
            title_field: pick("title_field", &params.title_field, &self.fields.title_field)?,
            seo_title_field: pick(
                "seo_title_field",
                &params.seo_title_field,
                &self.fields.seo_title_field,
            )?,
            seo_description_field: pick(
                "seo_description_field",
                &params.seo_description_field,
                &self.fields.seo_description_field,
            )?,
        })
    }
}

#[tool_router]
impl BetterSeoServer {
    #[tool(description = "Check a Markdown document with YAML frontmatter against SEO writing rules. Keywords come from the frontmatter 'keywords' list unless given explicitly.")]
    async fn analyze_document(
        &self,
        Parameters(params): Parameters<AnalyzeDocumentParams>,
    ) -> Result<Json<AnalysisResponse>, String> {
        if params.markdown.trim().is_empty() {
            return Err("markdown must not be empty".to_string());
        }
        let fields = self.fields_for(&params)?;

        let response = analyze_text(
            &params.markdown,
            &fields,
            KeywordSource::CallerFirst(params.keywords),
        )
        .map_err(|e| format!("analysis failed: {e}"))?;

        info!(
            keywords = response.keywords.len(),
            findings = response.findings.len(),
            "analyze_document finished"
        );
        Ok(Json(response))
    }

    #[tool(description = "Check a .md or .mdx file on disk against SEO writing rules. Requires keywords in the frontmatter or in the call.")]
    async fn analyze_file(
        &self,
        Parameters(params): Parameters<AnalyzeFileParams>,
    ) -> Result<Json<AnalysisResponse>, String> {
        let path = params.path.trim().to_string();
        if path.is_empty() {
            return Err("path must not be empty".to_string());
        }

        let response = self
            .analyze_path(Path::new(&path), params.keywords)
            .await
            .map_err(|e| format!("analysis failed: {e}"))?;

        info!(
            path = %path,
            keywords = response.keywords.len(),
            findings = response.findings.len(),
            "analyze_file finished"
        );
        Ok(Json(response))
    }

    #[tool(description = "List the ranked SEO keywords declared in a document's frontmatter, primary keyword first.")]
    async fn extract_keywords(
        &self,
        Parameters(params): Parameters<ExtractKeywordsParams>,
    ) -> Result<Json<KeywordsResponse>, String> {
        let document =
            Document::parse(&params.markdown).map_err(|e| format!("extract_keywords failed: {e}"))?;
        Ok(Json(KeywordsResponse {
            keywords: document.keywords(),
        }))
    }

    #[tool(description = "List the available blog post templates.")]
    async fn list_post_templates(&self) -> Result<Json<PostTemplateListResponse>, String> {
        Ok(Json(PostTemplateListResponse {
            templates: template_names(),
        }))
    }

    #[tool(description = "Render a blog post skeleton (e.g. 'List Post', 'Step by Step') with a frontmatter block for the configured SEO fields.")]
    async fn render_post_template(
        &self,
        Parameters(params): Parameters<RenderPostTemplateParams>,
    ) -> Result<Json<PostTemplateResponse>, String> {
        let template = find_template(&params.template).map_err(|e| {
            format!("{e}. Available templates: {}", template_names().join(", "))
        })?;
        let keywords = params.keywords.unwrap_or_default();
        Ok(Json(PostTemplateResponse {
            template: template.name.to_string(),
            markdown: template.render(&self.fields, &keywords),
        }))
    }
}

impl BetterSeoServer {
    async fn analyze_path(
        &self,
        path: &Path,
        keywords: Option<Vec<String>>,
    ) -> Result<AnalysisResponse, AppError> {
        ensure_markdown(path)?;
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| AppError::Read {
                path: path.display().to_string(),
                source,
            })?;
        analyze_text(&text, &self.fields, KeywordSource::DocumentFirst(keywords))
    }
}

#[tool_handler]
impl ServerHandler for BetterSeoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "better-seo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "SEO writing assistant for Markdown blog posts. Use analyze_document on raw text \
                 or analyze_file on a .md/.mdx path to get findings grouped into frontmatter and \
                 body. Keywords are read from the frontmatter 'keywords' list (primary first). \
                 Use extract_keywords to inspect them, and list_post_templates / \
                 render_post_template to start a new post."
                    .to_string(),
            ),
        }
    }
}
