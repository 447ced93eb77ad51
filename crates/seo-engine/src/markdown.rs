/// Markdown-to-AST adapter.
///
/// Folds the `pulldown-cmark` event stream into a tree of [`Node`]s whose
/// locations point into the full document, frontmatter included. Consecutive
/// text events under one parent (soft line breaks included) become a single
/// `Str` node, the way mdast-style parsers report paragraph text.
use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::ast::{Node, NodeKind};
use crate::model::{Position, SourceRange};

/// Parses the body of `text` starting at `body_offset`.
pub fn parse(text: &str, body_offset: usize) -> Vec<Node> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let body = &text[body_offset..];
    let mut builder = TreeBuilder::new(text);

    for (event, range) in Parser::new_ext(body, options).into_offset_iter() {
        let range = (range.start + body_offset)..(range.end + body_offset);
        match event {
            Event::Start(tag) => builder.open(kind_of(&tag), depth_of(&tag), range),
            Event::End(_) => builder.close(),
            Event::Text(value) => builder.text(&value, range),
            Event::SoftBreak => builder.text("\n", range),
            Event::HardBreak => builder.leaf(NodeKind::Break, "\n", range),
            Event::Code(value) => builder.leaf(NodeKind::Code, &value, range),
            Event::Html(value) | Event::InlineHtml(value) => builder.leaf(NodeKind::Html, &value, range),
            Event::Rule => builder.leaf(NodeKind::HorizontalRule, "", range),
            _ => builder.leaf(NodeKind::Other, "", range),
        }
    }

    builder.finish()
}

fn kind_of(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Heading { .. } => NodeKind::Header,
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Delete,
        Tag::Link { .. } => NodeKind::Link,
        Tag::Image { .. } => NodeKind::Image,
        Tag::HtmlBlock => NodeKind::Html,
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::ListItem,
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(_) => NodeKind::CodeBlock,
        Tag::Table(_) => NodeKind::Table,
        _ => NodeKind::Other,
    }
}

fn depth_of(tag: &Tag<'_>) -> Option<u8> {
    match tag {
        Tag::Heading { level, .. } => Some(*level as u8),
        _ => None,
    }
}

struct Frame {
    kind: NodeKind,
    depth: Option<u8>,
    range: Range<usize>,
    children: Vec<Node>,
}

struct TreeBuilder<'a> {
    text: &'a str,
    lines: LineIndex,
    stack: Vec<Frame>,
    roots: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: LineIndex::new(text),
            stack: Vec::new(),
            roots: Vec::new(),
        }
    }

    fn open(&mut self, kind: NodeKind, depth: Option<u8>, range: Range<usize>) {
        self.stack.push(Frame {
            kind,
            depth,
            range,
            children: Vec::new(),
        });
    }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let value = frame.children.iter().map(|child| child.value.as_str()).collect();
        let node = self.node(frame.kind, frame.depth, value, frame.range, frame.children);
        self.siblings().push(node);
    }

    fn text(&mut self, value: &str, range: Range<usize>) {
        let merged = match self.last_sibling() {
            Some(last) if last.kind == NodeKind::Str => {
                let start = self.offset_of(last.location.start);
                Some((start, format!("{}{value}", last.value)))
            }
            _ => None,
        };

        match merged {
            Some((start, value)) => {
                let node = self.node(NodeKind::Str, None, value, start..range.end, Vec::new());
                if let Some(last) = self.siblings().last_mut() {
                    *last = node;
                }
            }
            None => self.leaf(NodeKind::Str, value, range),
        }
    }

    fn leaf(&mut self, kind: NodeKind, value: &str, range: Range<usize>) {
        let node = self.node(kind, None, value.to_string(), range, Vec::new());
        self.siblings().push(node);
    }

    fn node(
        &self,
        kind: NodeKind,
        depth: Option<u8>,
        value: String,
        range: Range<usize>,
        children: Vec<Node>,
    ) -> Node {
        let raw = self.text[range.clone()].trim_end();
        let location = SourceRange {
            start: self.lines.position(self.text, range.start),
            end: self.lines.position(self.text, range.start + raw.len()),
        };
        Node {
            kind,
            depth,
            value,
            raw: raw.to_string(),
            location,
            children,
        }
    }

    fn last_sibling(&self) -> Option<&Node> {
        match self.stack.last() {
            Some(frame) => frame.children.last(),
            None => self.roots.last(),
        }
    }

    fn siblings(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.roots,
        }
    }

    fn offset_of(&self, position: Position) -> usize {
        self.lines.offset(self.text, position)
    }

    fn finish(mut self) -> Vec<Node> {
        // Unbalanced events should not happen, but never drop content.
        while !self.stack.is_empty() {
            self.close();
        }
        self.roots
    }
}

/// Byte offsets of line starts, for offset <-> line/column conversion.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(idx, _)| idx + 1));
        Self { starts }
    }

    fn position(&self, text: &str, offset: usize) -> Position {
        let line = self.starts.partition_point(|&start| start <= offset) - 1;
        let column = text[self.starts[line]..offset].chars().count();
        Position { line: line + 1, column }
    }

    fn offset(&self, text: &str, position: Position) -> usize {
        let line_start = self.starts[position.line - 1];
        text[line_start..]
            .char_indices()
            .nth(position.column)
            .map(|(idx, _)| line_start + idx)
            .unwrap_or(text.len())
    }
}
