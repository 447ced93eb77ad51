use seo_engine::FieldConfig;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontmatter field names used when a tool call does not override them.
    pub fields: FieldConfig,
    /// TCP address to serve MCP on instead of stdio, e.g. "127.0.0.1:7400".
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `SEO_TITLE_FIELD`: article title key (default: "title")
    /// - `SEO_SEO_TITLE_FIELD`: SEO title key (default: "seo_title")
    /// - `SEO_SEO_DESCRIPTION_FIELD`: SEO description key (default: "seo_description")
    /// - `MCP_TCP_LISTEN_ADDR`: serve on TCP instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = FieldConfig::default();
        let fields = FieldConfig {
            title_field: field_name(&lookup, "SEO_TITLE_FIELD", defaults.title_field)?,
            seo_title_field: field_name(&lookup, "SEO_SEO_TITLE_FIELD", defaults.seo_title_field)?,
            seo_description_field: field_name(
                &lookup,
                "SEO_SEO_DESCRIPTION_FIELD",
                defaults.seo_description_field,
            )?,
        };

        Ok(Self {
            fields,
            tcp_listen_addr: lookup("MCP_TCP_LISTEN_ADDR"),
        })
    }
}

fn field_name(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: String,
) -> Result<String, AppError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Err(AppError::Config(format!(
            "{key} must not be empty when set"
        ))),
        Some(value) => Ok(value.trim().to_string()),
    }
}
