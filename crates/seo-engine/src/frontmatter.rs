/// Leading YAML metadata block extraction.
///
/// A document carries frontmatter when its first line is `---`. The block ends
/// at the next line that is exactly `---`; everything after that line is the
/// Markdown body. An unterminated opening fence is an ordinary thematic break,
/// not frontmatter.
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::AnalysisError;

const FENCE: &str = "---";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub data: Mapping,
    /// Byte offset of the Markdown body within the original text.
    pub body_offset: usize,
}

impl FrontMatter {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Textual value of `field`. Non-empty strings and numbers count as text;
    /// null, empty strings, booleans, sequences and mappings are absent.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Tagged(tagged) => match &tagged.value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

pub fn split(text: &str) -> Result<FrontMatter, AnalysisError> {
    let Some((yaml, body_offset)) = locate(text) else {
        return Ok(FrontMatter::default());
    };
    debug!(bytes = yaml.len(), body_offset, "frontmatter block found");

    if yaml.trim().is_empty() {
        return Ok(FrontMatter {
            data: Mapping::new(),
            body_offset,
        });
    }

    let data = match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        other => {
            return Err(AnalysisError::FrontmatterNotMapping {
                found: value_kind(&other),
            })
        }
    };

    Ok(FrontMatter { data, body_offset })
}

/// Returns the YAML source and the body offset, or `None` without a complete block.
fn locate(text: &str) -> Option<(&str, usize)> {
    let start = if text.starts_with('\u{feff}') { '\u{feff}'.len_utf8() } else { 0 };

    let mut lines = LineSpans::new(text, start);
    let (first_start, first_end) = lines.next()?;
    if text[first_start..first_end].trim_end() != FENCE {
        return None;
    }
    let yaml_start = lines.position;

    while let Some((line_start, line_end)) = lines.next() {
        if text[line_start..line_end].trim_end() == FENCE {
            return Some((&text[yaml_start..line_start], lines.position));
        }
    }
    None
}

/// Iterates `(start, end)` byte spans of lines, excluding the newline.
/// `position` is the offset just past the last yielded line's terminator.
struct LineSpans<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> LineSpans<'a> {
    fn new(text: &'a str, position: usize) -> Self {
        Self { text, position }
    }
}

impl Iterator for LineSpans<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let start = self.position;
        match self.text[start..].find('\n') {
            Some(idx) => {
                self.position = start + idx + 1;
                Some((start, start + idx))
            }
            None => {
                self.position = self.text.len();
                Some((start, self.text.len()))
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
