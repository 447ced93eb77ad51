use crate::ast::{first_level_headers, Node};
use crate::config::FieldConfig;
use crate::frontmatter::FrontMatter;
use crate::matching::{contains_ignore_case, partial_match};
use crate::model::{Category, Finding};

pub const HEADER: &str = "Header";
pub const ARTICLE_TITLE: &str = "Article Title";

/// One finding per first-level heading when there is more than one of them.
pub fn validate_header_structure(nodes: &[Node]) -> Vec<Finding> {
    let headers: Vec<&Node> = first_level_headers(nodes).collect();
    if headers.len() <= 1 {
        return Vec::new();
    }

    headers
        .into_iter()
        .map(|header| {
            Finding::positioned(
                Category::Body,
                HEADER,
                "Inconsistent Header Structure. Only one first level Header allowed.",
                header.location,
            )
        })
        .collect()
}

/// Checks that the article has exactly one title source and that it carries
/// the primary keyword but no secondary ones.
///
/// The frontmatter title field wins over the first-level heading when both
/// are set; having both is reported as well.
pub fn validate_title(
    matter: &FrontMatter,
    nodes: &[Node],
    keywords: &[String],
    fields: &FieldConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let heading = first_level_headers(nodes).next();
    let frontmatter_title = matter.text(&fields.title_field);

    if heading.is_none() && frontmatter_title.is_none() {
        findings.push(Finding::plain(Category::Body, ARTICLE_TITLE, "Not found"));
    }

    if heading.is_some() && frontmatter_title.is_some() {
        findings.push(Finding::plain(
            Category::Body,
            ARTICLE_TITLE,
            "Found title in First-Level Headline and Frontmatter",
        ));
    }

    let Some(title) = frontmatter_title.or_else(|| heading.map(|node| node.raw.clone())) else {
        return findings;
    };

    if let Some(primary) = keywords.first() {
        // The literal check is case-sensitive; the partial match is not.
        if !title.contains(primary.as_str()) && !partial_match(primary, &title) {
            findings.push(Finding::plain(
                Category::Body,
                ARTICLE_TITLE,
                format!("Keyword {primary} not found"),
            ));
        }
    }

    if keywords
        .iter()
        .skip(1)
        .any(|keyword| contains_ignore_case(&title, keyword))
    {
        findings.push(Finding::plain(
            Category::Body,
            ARTICLE_TITLE,
            "Article Title should only include the top keyword",
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::split;
    use crate::markdown;

    fn run(text: &str, keywords: &[&str]) -> Vec<Finding> {
        let matter = split(text).unwrap();
        let nodes = markdown::parse(text, matter.body_offset);
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        validate_title(&matter, &nodes, &keywords, &FieldConfig::default())
    }

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn single_first_level_header_is_fine() {
        let nodes = markdown::parse("# One\n\n## Sub\n\n## Another", 0);
        assert!(validate_header_structure(&nodes).is_empty());
    }

    #[test]
    fn every_extra_first_level_header_is_reported() {
        let nodes = markdown::parse("# One\n\ntext\n\n# Two\n\n# Three\n", 0);
        let findings = validate_header_structure(&nodes);
        assert_eq!(findings.len(), 3);
        let lines: Vec<usize> = findings
            .iter()
            .map(|f| f.location().unwrap().start.line)
            .collect();
        assert_eq!(lines, vec![1, 5, 7]);
        assert!(findings.iter().all(|f| f.title == HEADER && f.category == Category::Body));
    }

    #[test]
    fn missing_title_is_reported_once() {
        let findings = run("## Only a subheading\n\nBody text", &["seo"]);
        assert_eq!(messages(&findings), vec!["Not found"]);
    }

    #[test]
    fn frontmatter_title_counts_as_title() {
        let findings = run("---\ntitle: All about SEO\n---\nBody text", &["SEO"]);
        assert!(findings.is_empty());
    }

    #[test]
    fn both_title_sources_are_reported() {
        let findings = run("---\ntitle: All about SEO\n---\n# SEO again\n\nBody", &["SEO"]);
        assert_eq!(
            messages(&findings),
            vec!["Found title in First-Level Headline and Frontmatter"]
        );
    }

    #[test]
    fn frontmatter_title_wins_for_keyword_checks() {
        let findings = run("---\ntitle: Gardening basics\n---\n# SEO heading\n\nBody", &["SEO"]);
        assert_eq!(
            messages(&findings),
            vec![
                "Found title in First-Level Headline and Frontmatter",
                "Keyword SEO not found"
            ]
        );
    }

    #[test]
    fn primary_keyword_falls_back_to_partial_match() {
        let findings = run(
            "# Selling consulting services: how to grow\n\nBody",
            &["How to Sell Consulting Services"],
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn missing_primary_keyword_is_reported() {
        let findings = run("# How to do SEO\n\nBody", &["Banana"]);
        assert_eq!(messages(&findings), vec!["Keyword Banana not found"]);
        assert_eq!(findings[0].title, ARTICLE_TITLE);
    }

    #[test]
    fn secondary_keywords_are_reported_once() {
        let findings = run("# SEO tips and blogging for rust\n\nBody", &["SEO", "blogging", "rust"]);
        assert_eq!(
            messages(&findings),
            vec!["Article Title should only include the top keyword"]
        );
    }

    #[test]
    fn secondary_keywords_match_regardless_of_case() {
        let findings = run("# seo tips for Rust\n\nBody", &["seo", "rust"]);
        assert_eq!(
            messages(&findings),
            vec!["Article Title should only include the top keyword"]
        );
    }

    #[test]
    fn primary_keyword_in_other_case_passes_via_partial_match() {
        let findings = run("# How to do seo\n\nBody", &["SEO"]);
        assert!(findings.is_empty());

        let findings = run("# selling consulting SERVICES\n\nBody", &["Consulting Services"]);
        assert!(findings.is_empty());
    }

    #[test]
    fn no_keywords_means_structure_only() {
        assert!(run("# Anything\n\nBody", &[]).is_empty());
    }
}
