use std::path::Path;

use seo_engine::mcp_api::AnalysisResponse;
use seo_engine::{analyze, Category, Document, FieldConfig, Finding};

use crate::error::AppError;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];

pub fn ensure_markdown(path: &Path) -> Result<(), AppError> {
    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.iter().any(|md| ext.eq_ignore_ascii_case(md)));
    if is_markdown {
        Ok(())
    } else {
        Err(AppError::NotMarkdown(path.display().to_string()))
    }
}

/// Where a run takes its keywords from.
pub enum KeywordSource {
    /// Caller keywords when given, otherwise the document's own. May be empty.
    CallerFirst(Option<Vec<String>>),
    /// The document's own keywords, otherwise the caller's. Must not be empty.
    DocumentFirst(Option<Vec<String>>),
}

/// Analyzes `text` and groups the findings by category.
pub fn analyze_text(
    text: &str,
    fields: &FieldConfig,
    source: KeywordSource,
) -> Result<AnalysisResponse, AppError> {
    let document = Document::parse(text)?;
    let keywords = match source {
        KeywordSource::CallerFirst(Some(keywords)) => clean(keywords),
        KeywordSource::CallerFirst(None) => document.keywords(),
        KeywordSource::DocumentFirst(fallback) => {
            let own = document.keywords();
            let keywords = if own.is_empty() {
                clean(fallback.unwrap_or_default())
            } else {
                own
            };
            if keywords.is_empty() {
                return Err(AppError::NoKeywords);
            }
            keywords
        }
    };

    let findings = analyze(&document, fields, &keywords);
    let (frontmatter, body): (Vec<Finding>, Vec<Finding>) = findings
        .iter()
        .cloned()
        .partition(|finding| finding.category == Category::Frontmatter);

    Ok(AnalysisResponse {
        keywords,
        findings,
        frontmatter,
        body,
    })
}

fn clean(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|keyword| keyword.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---
seo_title: This is about SEO
seo_description: Learn how to seo perfectly
keywords: [SEO]
---
# How to do SEO

Explain how to SEO in the first paragraph";

    const NO_KEYWORDS: &str = "---
seo_title: This is about SEO
---
# How to do SEO

Explain how to SEO in the first paragraph";

    #[test]
    fn accepts_markdown_extensions_only() {
        assert!(ensure_markdown(Path::new("posts/hello.md")).is_ok());
        assert!(ensure_markdown(Path::new("posts/hello.MDX")).is_ok());
        assert!(matches!(
            ensure_markdown(Path::new("posts/hello.txt")),
            Err(AppError::NotMarkdown(_))
        ));
        assert!(ensure_markdown(Path::new("README")).is_err());
    }

    #[test]
    fn groups_findings_by_category() {
        let response = analyze_text(
            DOC,
            &FieldConfig::default(),
            KeywordSource::CallerFirst(Some(vec!["Banana".to_string()])),
        )
        .unwrap();
        assert_eq!(response.keywords, vec!["Banana"]);
        assert_eq!(response.findings.len(), 5);
        assert_eq!(response.frontmatter.len(), 2);
        assert_eq!(response.body.len(), 3);
        assert!(response.frontmatter.iter().all(|f| f.category == Category::Frontmatter));
        assert!(response.body.iter().all(|f| f.category == Category::Body));
    }

    #[test]
    fn document_keywords_win_when_document_first() {
        let response = analyze_text(
            DOC,
            &FieldConfig::default(),
            KeywordSource::DocumentFirst(Some(vec!["Banana".to_string()])),
        )
        .unwrap();
        assert_eq!(response.keywords, vec!["SEO"]);
    }

    #[test]
    fn document_first_requires_some_keyword() {
        let err = analyze_text(NO_KEYWORDS, &FieldConfig::default(), KeywordSource::DocumentFirst(None))
            .unwrap_err();
        assert!(matches!(err, AppError::NoKeywords));

        let err = analyze_text(
            NO_KEYWORDS,
            &FieldConfig::default(),
            KeywordSource::DocumentFirst(Some(vec!["  ".to_string()])),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::NoKeywords));

        let response = analyze_text(
            NO_KEYWORDS,
            &FieldConfig::default(),
            KeywordSource::DocumentFirst(Some(vec!["SEO".to_string()])),
        )
        .unwrap();
        assert_eq!(response.keywords, vec!["SEO"]);
    }

    #[test]
    fn caller_first_allows_empty_keywords() {
        let response =
            analyze_text(NO_KEYWORDS, &FieldConfig::default(), KeywordSource::CallerFirst(None)).unwrap();
        assert!(response.keywords.is_empty());
        let messages: Vec<&str> = response.findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Field not found",
                "Article is too short. Expected: At least 300 Characters. Actual Length: 8"
            ]
        );
    }
}
