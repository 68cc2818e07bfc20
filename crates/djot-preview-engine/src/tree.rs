//! # Document Tree
//!
//! The intermediate representation handed from the block parser to the HTML
//! renderer: an ordered tree of typed [`Node`]s rooted at a single
//! [`NodeKind::Document`].
//!
//! ## Invariants
//!
//! - Ownership is strictly hierarchical: every node owns its children, there
//!   are no back-references and no sharing.
//! - Block containers (`Document`, `BlockQuote`, `ListItem`,
//!   `FootnoteDefinition`) only hold block nodes; lists only hold `ListItem`s;
//!   tables only hold rows and rows only hold cells.
//! - `Heading`, `Paragraph`, `TableCell` and every inline container only hold
//!   inline nodes.
//! - Leaf kinds never have children.
//!
//! A tree is built fresh for every conversion and is not mutated once its
//! subtree is complete. See `parsing::snapshot::invariants` for the checks.

use serde::Serialize;

/// Column alignment of a table column, taken from its separator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` value, if the column is aligned.
    pub fn css(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

/// The kind of a document tree node, with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    // Blocks
    Document,
    Heading {
        /// 1 to 6.
        level: u8,
    },
    Paragraph,
    BulletList {
        /// No blank line separates items or their blocks.
        tight: bool,
    },
    OrderedList {
        start: u64,
        tight: bool,
    },
    ListItem,
    BlockQuote,
    CodeBlock {
        lang: Option<String>,
        text: String,
    },
    ThematicBreak,
    Table {
        alignments: Vec<Alignment>,
    },
    TableRow,
    TableCell {
        header: bool,
        align: Alignment,
    },
    FootnoteDefinition {
        label: String,
    },

    // Inlines
    Text(String),
    Emphasis,
    Strong,
    /// Verbatim code span content; never re-interpreted.
    Code(String),
    Mark,
    Insert,
    Delete,
    Superscript,
    Subscript,
    Link {
        dest: String,
        title: Option<String>,
    },
    Image {
        dest: String,
        alt: String,
        title: Option<String>,
    },
    FootnoteReference {
        label: String,
    },
    LineBreak,
    TaskMarker {
        checked: bool,
    },
}

impl NodeKind {
    /// Whether this kind lives at block level.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Document
                | NodeKind::Heading { .. }
                | NodeKind::Paragraph
                | NodeKind::BulletList { .. }
                | NodeKind::OrderedList { .. }
                | NodeKind::ListItem
                | NodeKind::BlockQuote
                | NodeKind::CodeBlock { .. }
                | NodeKind::ThematicBreak
                | NodeKind::Table { .. }
                | NodeKind::TableRow
                | NodeKind::TableCell { .. }
                | NodeKind::FootnoteDefinition { .. }
        )
    }

    /// Whether this kind lives at inline level.
    pub fn is_inline(&self) -> bool {
        !self.is_block()
    }

    /// Leaf kinds never own children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Text(_)
                | NodeKind::Code(_)
                | NodeKind::CodeBlock { .. }
                | NodeKind::ThematicBreak
                | NodeKind::Image { .. }
                | NodeKind::FootnoteReference { .. }
                | NodeKind::LineBreak
                | NodeKind::TaskMarker { .. }
        )
    }

    /// Whether children of this kind are inline nodes (as opposed to blocks).
    pub fn holds_inlines(&self) -> bool {
        matches!(
            self,
            NodeKind::Heading { .. } | NodeKind::Paragraph | NodeKind::TableCell { .. }
        ) || (self.is_inline() && !self.is_leaf())
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: vec![],
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(s.into()))
    }

    /// Concatenated text content with all markup removed.
    ///
    /// Used for image alt text. Line breaks become spaces.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_plain_text(&mut out);
        out
    }

    fn collect_plain_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(s) | NodeKind::Code(s) => out.push_str(s),
            NodeKind::Image { alt, .. } => out.push_str(alt),
            NodeKind::LineBreak => out.push(' '),
            _ => {
                for child in &self.children {
                    child.collect_plain_text(out);
                }
            }
        }
    }
}

/// Concatenated plain text of a run of inline nodes.
pub fn plain_text_of(nodes: &[Node]) -> String {
    let mut out = String::new();
    for n in nodes {
        n.collect_plain_text(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_markup() {
        let node = Node::with_children(
            NodeKind::Paragraph,
            vec![
                Node::text("a "),
                Node::with_children(NodeKind::Strong, vec![Node::text("b")]),
                Node::new(NodeKind::LineBreak),
                Node::new(NodeKind::Code("c".into())),
            ],
        );
        assert_eq!(node.plain_text(), "a b c");
    }

    #[test]
    fn block_and_inline_kinds_are_disjoint() {
        assert!(NodeKind::Paragraph.is_block());
        assert!(!NodeKind::Paragraph.is_inline());
        assert!(NodeKind::Strong.is_inline());
        assert!(NodeKind::Text(String::new()).is_leaf());
        assert!(NodeKind::Paragraph.holds_inlines());
        assert!(NodeKind::Strong.holds_inlines());
        assert!(!NodeKind::BlockQuote.holds_inlines());
        assert!(!NodeKind::LineBreak.holds_inlines());
    }

    #[test]
    fn alignment_css() {
        assert_eq!(Alignment::None.css(), None);
        assert_eq!(Alignment::Center.css(), Some("center"));
    }
}
