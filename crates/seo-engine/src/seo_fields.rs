/// Rules for the search-engine metadata fields in the frontmatter.
///
/// Only the primary and secondary keywords belong in the description, only
/// the primary keyword is required in the title, and both fields have
/// length ceilings measured in characters.
use regex::RegexBuilder;

use crate::config::FieldConfig;
use crate::frontmatter::FrontMatter;
use crate::matching::{contains_ignore_case, partial_match};
use crate::model::{Category, Finding};

pub const MAX_SEO_TITLE_CHARS: usize = 60;
pub const MAX_SEO_DESCRIPTION_CHARS: usize = 160;

const FIELD_NOT_FOUND: &str = "Field not found";

pub fn analyze_frontmatter(matter: &FrontMatter, fields: &FieldConfig, keywords: &[String]) -> Vec<Finding> {
    let mut findings = Vec::new();

    let field = fields.seo_description_field.as_str();
    match matter.text(field) {
        Some(description) => findings.extend(validate_seo_description(field, &description, keywords)),
        None => findings.push(Finding::plain(Category::Frontmatter, field, FIELD_NOT_FOUND)),
    }

    let field = fields.seo_title_field.as_str();
    match matter.text(field) {
        Some(title) => findings.extend(validate_seo_title(field, &title, keywords)),
        None => findings.push(Finding::plain(Category::Frontmatter, field, FIELD_NOT_FOUND)),
    }

    findings
}

pub fn validate_seo_description(field: &str, description: &str, keywords: &[String]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(primary) = keywords.first() {
        if count_repetition_runs(description, primary) > 1 {
            findings.push(Finding::plain(
                Category::Frontmatter,
                field,
                "Should not contain primary keyword more than once",
            ));
        }
    }

    for keyword in keywords.iter().take(2) {
        if !contains_ignore_case(description, keyword) {
            findings.push(Finding::plain(
                Category::Frontmatter,
                field,
                format!("Keyword '{keyword}' not found"),
            ));
        }
    }

    if description.chars().count() > MAX_SEO_DESCRIPTION_CHARS {
        findings.push(Finding::plain(
            Category::Frontmatter,
            field,
            "SEO Description should 160 characters max.",
        ));
    }

    if keywords.len() >= 3
        && keywords[2..]
            .iter()
            .all(|keyword| contains_ignore_case(description, keyword))
    {
        findings.push(Finding::plain(
            Category::Frontmatter,
            field,
            "SEO Description should not contain more than the primary and secondary keyword",
        ));
    }

    findings
}

pub fn validate_seo_title(field: &str, title: &str, keywords: &[String]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(primary) = keywords.first() {
        if !contains_ignore_case(title, primary) && !partial_match(primary, title) {
            findings.push(Finding::plain(
                Category::Frontmatter,
                field,
                format!("Keyword '{primary}' not found"),
            ));
        }
    }

    if title.chars().count() > MAX_SEO_TITLE_CHARS {
        findings.push(Finding::plain(
            Category::Frontmatter,
            field,
            "SEO Title should have 60 Characters max.",
        ));
    }

    if keywords.len() >= 3 && keywords.iter().all(|keyword| contains_ignore_case(title, keyword)) {
        findings.push(Finding::plain(
            Category::Frontmatter,
            field,
            "SEO Title should only include two keywords maximum",
        ));
    }

    findings
}

/// Number of separate runs of one or more back-to-back occurrences of
/// `keyword`, ignoring case. "seo seo" is two runs, "seoseo" is one.
fn count_repetition_runs(text: &str, keyword: &str) -> usize {
    let pattern = format!("(?:{})+", regex::escape(keyword));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}
