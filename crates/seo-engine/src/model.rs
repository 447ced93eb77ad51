use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which part of the document a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Frontmatter,
    Body,
}

/// A point in the source text. Lines start at 1, columns at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

/// Whether a finding can be traced back to a node in the Markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    Plain,
    Positioned { location: SourceRange },
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub category: Category,
    /// Short slot label used for grouping, e.g. "Article Title" or a frontmatter field name.
    pub title: String,
    pub message: String,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    pub fn plain(category: Category, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            kind: FindingKind::Plain,
        }
    }

    pub fn positioned(
        category: Category,
        title: impl Into<String>,
        message: impl Into<String>,
        location: SourceRange,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            kind: FindingKind::Positioned { location },
        }
    }

    pub fn location(&self) -> Option<&SourceRange> {
        match &self.kind {
            FindingKind::Plain => None,
            FindingKind::Positioned { location } => Some(location),
        }
    }

    pub fn is_positioned(&self) -> bool {
        matches!(self.kind, FindingKind::Positioned { .. })
    }
}
