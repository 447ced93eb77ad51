use tracing::debug;

use crate::ast::Node;
use crate::body::{validate_article_length, validate_first_paragraph, validate_paragraph_length};
use crate::config::FieldConfig;
use crate::error::AnalysisError;
use crate::frontmatter::{self, FrontMatter};
use crate::keywords::extract_keywords;
use crate::markdown;
use crate::model::Finding;
use crate::seo_fields::analyze_frontmatter;
use crate::title::{validate_header_structure, validate_title};

/// A document split into its decoded frontmatter and Markdown body tree.
#[derive(Debug, Clone)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn parse(text: &str) -> Result<Self, AnalysisError> {
        let front_matter = frontmatter::split(text)?;
        let nodes = markdown::parse(text, front_matter.body_offset);
        Ok(Self { front_matter, nodes })
    }

    pub fn keywords(&self) -> Vec<String> {
        extract_keywords(&self.front_matter)
    }
}

/// Runs every rule against `text` using the keywords from its frontmatter.
///
/// Frontmatter findings come first, then body findings, each in rule order.
pub fn run_analysis(text: &str, fields: &FieldConfig) -> Result<Vec<Finding>, AnalysisError> {
    let document = Document::parse(text)?;
    let keywords = document.keywords();
    Ok(analyze(&document, fields, &keywords))
}

/// Like [`run_analysis`], but with caller-supplied keywords replacing the
/// ones in the frontmatter.
pub fn run_analysis_with_keywords(
    text: &str,
    fields: &FieldConfig,
    keywords: &[String],
) -> Result<Vec<Finding>, AnalysisError> {
    let document = Document::parse(text)?;
    Ok(analyze(&document, fields, keywords))
}

pub fn analyze(document: &Document, fields: &FieldConfig, keywords: &[String]) -> Vec<Finding> {
    let mut findings = analyze_frontmatter(&document.front_matter, fields, keywords);
    let frontmatter_count = findings.len();
    findings.extend(analyze_body(document, fields, keywords));

    debug!(
        keywords = keywords.len(),
        frontmatter_findings = frontmatter_count,
        body_findings = findings.len() - frontmatter_count,
        "analysis complete"
    );
    findings
}

fn analyze_body(document: &Document, fields: &FieldConfig, keywords: &[String]) -> Vec<Finding> {
    let nodes = &document.nodes;
    let mut findings = validate_header_structure(nodes);
    findings.extend(validate_title(&document.front_matter, nodes, keywords, fields));
    for keyword in keywords {
        findings.extend(validate_first_paragraph(nodes, keyword));
    }
    findings.extend(validate_paragraph_length(nodes));
    findings.extend(validate_article_length(nodes));
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    const EXAMPLE: &str = "---
seo_title: \"This is about SEO\"
seo_description: \"Learn how to seo perfectly\"
keywords: [\"SEO\"]
---
# How to do SEO

Explain how to SEO in the first paragraph";

    fn filler(n: usize) -> String {
        (0..n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
    }

    fn well_formed(keywords: &str) -> String {
        format!(
            "---\nseo_title: Rust SEO tips\nseo_description: Practical SEO for rust blogs\nkeywords: {keywords}\n---\n\
             # SEO tips for your blog\n\nSEO for rust and blogging starts here.\n\n{}\n\n{}\n",
            filler(150),
            filler(150)
        )
    }

    fn summary(findings: &[Finding]) -> Vec<(Category, &str, &str)> {
        findings
            .iter()
            .map(|f| (f.category, f.title.as_str(), f.message.as_str()))
            .collect()
    }

    #[test]
    fn short_example_only_fails_article_length() {
        let findings = run_analysis(EXAMPLE, &FieldConfig::default()).unwrap();
        assert_eq!(
            summary(&findings),
            vec![(
                Category::Body,
                "Article Length",
                "Article is too short. Expected: At least 300 Characters. Actual Length: 8"
            )]
        );
    }

    #[test]
    fn unknown_keyword_is_reported_everywhere_frontmatter_first() {
        let text = EXAMPLE.replace("[\"SEO\"]", "[\"Banana\"]");
        let findings = run_analysis(&text, &FieldConfig::default()).unwrap();
        assert_eq!(
            summary(&findings),
            vec![
                (Category::Frontmatter, "seo_description", "Keyword 'Banana' not found"),
                (Category::Frontmatter, "seo_title", "Keyword 'Banana' not found"),
                (Category::Body, "Article Title", "Keyword Banana not found"),
                (Category::Body, "First Paragraph", "Keyword Banana not found"),
                (
                    Category::Body,
                    "Article Length",
                    "Article is too short. Expected: At least 300 Characters. Actual Length: 8"
                ),
            ]
        );
    }

    #[test]
    fn well_formed_document_has_no_findings() {
        let text = well_formed("[SEO, rust]");
        let findings = run_analysis(&text, &FieldConfig::default()).unwrap();
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn empty_keyword_list_runs_structural_checks_only() {
        let text = well_formed("[]");
        assert!(run_analysis(&text, &FieldConfig::default()).unwrap().is_empty());

        let text = text.replace("keywords: []\n", "");
        assert!(run_analysis(&text, &FieldConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn first_paragraph_is_checked_for_every_keyword() {
        let text = well_formed("[SEO, blog, gardening]");
        let findings = run_analysis(&text, &FieldConfig::default()).unwrap();
        assert_eq!(
            summary(&findings),
            vec![
                (Category::Body, "Article Title", "Article Title should only include the top keyword"),
                (Category::Body, "First Paragraph", "Keyword gardening not found"),
            ]
        );
    }

    #[test]
    fn duplicate_headers_are_positioned() {
        let text = format!(
            "---\nseo_title: SEO\nseo_description: SEO\n---\n# First\n\n{}\n\n# Second\n\n{}\n",
            filler(150),
            filler(150)
        );
        let findings = run_analysis(&text, &FieldConfig::default()).unwrap();
        let lines: Vec<usize> = findings
            .iter()
            .filter_map(|f| f.location().map(|loc| loc.start.line))
            .collect();
        assert_eq!(lines, vec![5, 9]);
        assert!(findings.iter().all(|f| f.category == Category::Body));
    }

    #[test]
    fn caller_keywords_replace_frontmatter_keywords() {
        let keywords = vec!["Banana".to_string()];
        let findings = run_analysis_with_keywords(EXAMPLE, &FieldConfig::default(), &keywords).unwrap();
        assert_eq!(findings.len(), 5);
        assert!(findings[0].message.contains("Banana"));
    }

    #[test]
    fn malformed_frontmatter_aborts_the_run() {
        let text = "---\nseo_title: [broken\n---\n# Title";
        assert!(matches!(
            run_analysis(text, &FieldConfig::default()),
            Err(AnalysisError::FrontmatterYaml(_))
        ));
    }

    #[test]
    fn runs_are_independent() {
        let fields = FieldConfig::default();
        let first = run_analysis(EXAMPLE, &fields).unwrap();
        let second = run_analysis(EXAMPLE, &fields).unwrap();
        assert_eq!(first, second);
    }
}
