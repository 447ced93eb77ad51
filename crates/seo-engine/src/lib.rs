pub mod analysis;
pub mod ast;
pub mod body;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod keywords;
pub mod markdown;
pub mod matching;
pub mod mcp_api;
pub mod model;
pub mod seo_fields;
pub mod title;

pub use analysis::{analyze, run_analysis, run_analysis_with_keywords, Document};
pub use config::FieldConfig;
pub use error::AnalysisError;
pub use model::{Category, Finding, FindingKind, Position, SourceRange};
