use serde_yaml::Value;
use tracing::warn;

use crate::frontmatter::FrontMatter;

const KEYWORD_FIELDS: [&str; 2] = ["keywords", "Keywords"];

/// Ranked target keywords from the frontmatter, primary keyword first.
///
/// `keywords` wins over `Keywords`; a key holding `null` or an empty string
/// counts as absent.
/// A sequence yields its scalar entries, a plain string is read as a comma
/// separated list. Blank entries are dropped. Never fails: an unusable value
/// simply yields no keywords.
pub fn extract_keywords(matter: &FrontMatter) -> Vec<String> {
    let Some(value) = KEYWORD_FIELDS
        .iter()
        .filter_map(|field| matter.get(field))
        .find(|value| !is_blank(value))
    else {
        return Vec::new();
    };

    match value {
        Value::Sequence(entries) => entries.iter().filter_map(scalar_keyword).collect(),
        Value::String(list) => parse_comma_list(list),
        other => {
            warn!(value = ?other, "keywords field is neither a list nor a string, ignoring");
            Vec::new()
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn scalar_keyword(entry: &Value) -> Option<String> {
    let keyword = match entry {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => {
            warn!(entry = ?other, "skipping non-scalar keyword entry");
            return None;
        }
    };
    (!keyword.is_empty()).then_some(keyword)
}

fn parse_comma_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::split;

    fn keywords_of(text: &str) -> Vec<String> {
        extract_keywords(&split(text).unwrap())
    }

    #[test]
    fn reads_capitalized_key() {
        let text = "---\nKeywords:\n  - Foo\n  - Bar\nseo_title: This is about seo\n---\n# Foo";
        assert_eq!(keywords_of(text), vec!["Foo", "Bar"]);
    }

    #[test]
    fn lowercase_key_takes_precedence() {
        let text = "---\nkeywords: [first]\nKeywords: [second]\n---\n";
        assert_eq!(keywords_of(text), vec!["first"]);
    }

    #[test]
    fn null_lowercase_key_falls_back() {
        let text = "---\nkeywords:\nKeywords: [second]\n---\n";
        assert_eq!(keywords_of(text), vec!["second"]);
    }

    #[test]
    fn empty_string_lowercase_key_falls_back() {
        let text = "---\nkeywords: \"\"\nKeywords: [a]\n---\n";
        assert_eq!(keywords_of(text), vec!["a"]);
    }

    #[test]
    fn empty_list_lowercase_key_does_not_fall_back() {
        let text = "---\nkeywords: []\nKeywords: [a]\n---\n";
        assert!(keywords_of(text).is_empty());
    }

    #[test]
    fn missing_key_yields_empty_list() {
        let text = "---\nseo_title: This is about seo\nseo_description: Learn how to seo perfectly\n---\n# Foo";
        assert!(keywords_of(text).is_empty());
    }

    #[test]
    fn empty_list_yields_empty_list() {
        assert!(keywords_of("---\nkeywords: []\n---\n").is_empty());
    }

    #[test]
    fn no_frontmatter_yields_empty_list() {
        assert!(keywords_of("# Title\n\nBody").is_empty());
    }

    #[test]
    fn string_value_is_a_comma_list() {
        let text = "---\nkeywords: \"seo tips, blogging ,  \"\n---\n";
        assert_eq!(keywords_of(text), vec!["seo tips", "blogging"]);
    }

    #[test]
    fn keeps_rank_order_and_skips_blank_entries() {
        let text = "---\nkeywords:\n  - primary\n  - \"  \"\n  - 2024\n  - [nested]\n  - tertiary\n---\n";
        assert_eq!(keywords_of(text), vec!["primary", "2024", "tertiary"]);
    }
}
