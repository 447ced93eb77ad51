use crate::model::SourceRange;

/// Node types produced by the Markdown adapter. Only `Header`, `Paragraph` and
/// `Str` are inspected by the analyzers; the rest keep the tree faithful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Header,
    Paragraph,
    Str,
    Emphasis,
    Strong,
    Delete,
    Link,
    Image,
    Code,
    Html,
    Break,
    List,
    ListItem,
    BlockQuote,
    CodeBlock,
    HorizontalRule,
    Table,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Heading level, 1 for a top-level heading. `None` for non-headings.
    pub depth: Option<u8>,
    /// Rendered text. For `Str` the literal text, for containers the text of all descendants.
    pub value: String,
    /// Exact source slice, trailing whitespace trimmed.
    pub raw: String,
    pub location: SourceRange,
    pub children: Vec<Node>,
}

impl Node {
    pub fn is_first_level_header(&self) -> bool {
        self.kind == NodeKind::Header && self.depth == Some(1)
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == NodeKind::Paragraph
    }

    /// Direct `Str` children, in source order.
    pub fn text_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|child| child.kind == NodeKind::Str)
    }
}

pub fn first_level_headers(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    nodes.iter().filter(|node| node.is_first_level_header())
}

pub fn paragraphs(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    nodes.iter().filter(|node| node.is_paragraph())
}
