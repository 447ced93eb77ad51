use crate::ast::{paragraphs, Node};
use crate::matching::contains_ignore_case;
use crate::model::{Category, Finding};

pub const FIRST_PARAGRAPH: &str = "First Paragraph";
pub const PARAGRAPH: &str = "Paragraph";
pub const ARTICLE_LENGTH: &str = "Article Length";

/// Paragraphs at or above this many words are flagged.
pub const MAX_PARAGRAPH_WORDS: usize = 200;
/// Articles below this many words are flagged.
pub const MIN_ARTICLE_WORDS: usize = 300;

const PREVIEW_CHARS: usize = 20;

/// Checks that the opening text of the first paragraph mentions `keyword`.
pub fn validate_first_paragraph(nodes: &[Node], keyword: &str) -> Vec<Finding> {
    let text = paragraphs(nodes)
        .next()
        .and_then(|paragraph| paragraph.text_children().next());

    match text {
        None => vec![Finding::plain(Category::Body, FIRST_PARAGRAPH, "Not found")],
        Some(text) if !contains_ignore_case(&text.value, keyword) => vec![Finding::plain(
            Category::Body,
            FIRST_PARAGRAPH,
            format!("Keyword {keyword} not found"),
        )],
        Some(_) => Vec::new(),
    }
}

pub fn validate_paragraph_length(nodes: &[Node]) -> Vec<Finding> {
    paragraphs(nodes)
        .filter(|paragraph| word_count(&paragraph.raw) >= MAX_PARAGRAPH_WORDS)
        .map(|paragraph| {
            let preview: String = paragraph.raw.chars().take(PREVIEW_CHARS).collect();
            Finding::positioned(
                Category::Body,
                PARAGRAPH,
                format!(
                    "Paragraph starting with {preview} has more than {MAX_PARAGRAPH_WORDS} characters({}). Consider breaking it up",
                    paragraph.raw.chars().count()
                ),
                paragraph.location,
            )
        })
        .collect()
}

pub fn validate_article_length(nodes: &[Node]) -> Vec<Finding> {
    let total = article_word_count(nodes);
    if total >= MIN_ARTICLE_WORDS {
        return Vec::new();
    }
    vec![Finding::plain(
        Category::Body,
        ARTICLE_LENGTH,
        format!(
            "Article is too short. Expected: At least {MIN_ARTICLE_WORDS} Characters. Actual Length: {total}"
        ),
    )]
}

/// Words in the plain text directly under top-level paragraphs.
pub fn article_word_count(nodes: &[Node]) -> usize {
    paragraphs(nodes)
        .flat_map(Node::text_children)
        .map(|text| word_count(&text.raw))
        .sum()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
