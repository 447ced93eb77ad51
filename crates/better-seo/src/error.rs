use seo_engine::AnalysisError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("not a markdown file: {0} (expected .md or .mdx)")]
    NotMarkdown(String),

    #[error("no keywords found in frontmatter; pass keywords explicitly")]
    NoKeywords,

    #[error("unknown post template: '{0}'")]
    UnknownTemplate(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
