use crate::tree::{Node, NodeKind};

use super::{
    kinds::{BlockQuote, FootnoteDefinition, ListMarker},
    line::LineCursor,
};

/// Deepest container nesting; further markers on a line are paragraph text.
pub const MAX_CONTAINER_DEPTH: usize = 64;

/// One level of the container stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    Document,
    BlockQuote,
    List { marker: ListMarker, tight: bool },
    ListItem { content_indent: usize, task: Option<bool> },
    FootnoteDefinition { label: String },
}

impl ContainerFrame {
    /// Applies this container's continuation rule to the line at `cur`,
    /// consuming its prefix on success.
    pub fn continues(&self, cur: &mut LineCursor) -> bool {
        match self {
            ContainerFrame::Document | ContainerFrame::List { .. } => true,
            ContainerFrame::BlockQuote => BlockQuote::strip_marker(cur),
            ContainerFrame::ListItem { content_indent, .. } => {
                if cur.is_blank() {
                    true
                } else if cur.indent() >= *content_indent {
                    cur.advance_cols(*content_indent);
                    true
                } else {
                    false
                }
            }
            ContainerFrame::FootnoteDefinition { .. } => {
                if cur.is_blank() {
                    true
                } else if cur.indent() >= FootnoteDefinition::CONTINUATION_INDENT {
                    cur.skip_indent();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Builds the finished node for this container.
    pub fn into_node(self, mut children: Vec<Node>) -> Node {
        let kind = match self {
            ContainerFrame::Document => NodeKind::Document,
            ContainerFrame::BlockQuote => NodeKind::BlockQuote,
            ContainerFrame::List {
                marker: ListMarker::Bullet(_),
                tight,
            } => NodeKind::BulletList { tight },
            ContainerFrame::List {
                marker: ListMarker::Ordered { start, .. },
                tight,
            } => NodeKind::OrderedList { start, tight },
            ContainerFrame::ListItem { task, .. } => {
                if let Some(checked) = task {
                    insert_task_marker(&mut children, checked);
                }
                NodeKind::ListItem
            }
            ContainerFrame::FootnoteDefinition { label } => NodeKind::FootnoteDefinition { label },
        };
        Node::with_children(kind, children)
    }
}

/// The checkbox becomes the first inline of the item's first paragraph.
fn insert_task_marker(children: &mut Vec<Node>, checked: bool) {
    let marker = Node::new(NodeKind::TaskMarker { checked });
    match children.first_mut() {
        Some(first) if first.kind == NodeKind::Paragraph => first.children.insert(0, marker),
        _ => children.insert(0, Node::with_children(NodeKind::Paragraph, vec![marker])),
    }
}

/// A container on the stack with the blocks finished inside it so far.
#[derive(Debug)]
pub struct OpenContainer {
    pub frame: ContainerFrame,
    pub children: Vec<Node>,
}

impl OpenContainer {
    pub fn new(frame: ContainerFrame) -> Self {
        Self {
            frame,
            children: vec![],
        }
    }

    pub fn finish(self) -> Node {
        self.frame.into_node(self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_item_continuation_strips_content_indent() {
        let item = ContainerFrame::ListItem {
            content_indent: 2,
            task: None,
        };
        let mut cur = LineCursor::new("    nested");
        assert!(item.continues(&mut cur));
        assert_eq!(cur.rest(), "  nested");

        let mut cur = LineCursor::new(" short");
        assert!(!item.continues(&mut cur));
        assert_eq!(cur.rest(), " short");

        assert!(item.continues(&mut LineCursor::new("")));
    }

    #[test]
    fn footnote_continuation_needs_indent() {
        let def = ContainerFrame::FootnoteDefinition {
            label: "a".into(),
        };
        let mut cur = LineCursor::new("   more");
        assert!(def.continues(&mut cur));
        assert_eq!(cur.rest(), "more");
        assert!(!def.continues(&mut LineCursor::new("flush")));
    }

    #[test]
    fn task_marker_joins_first_paragraph() {
        let frame = ContainerFrame::ListItem {
            content_indent: 2,
            task: Some(true),
        };
        let node = frame.into_node(vec![Node::with_children(
            NodeKind::Paragraph,
            vec![Node::text("done")],
        )]);
        assert_eq!(
            node.children[0].children[0].kind,
            NodeKind::TaskMarker { checked: true }
        );
        assert_eq!(node.children[0].children.len(), 2);
    }

    #[test]
    fn task_marker_without_content_gets_a_paragraph() {
        let frame = ContainerFrame::ListItem {
            content_indent: 2,
            task: Some(false),
        };
        let node = frame.into_node(vec![]);
        assert_eq!(node.children[0].kind, NodeKind::Paragraph);
        assert_eq!(
            node.children[0].children,
            vec![Node::new(NodeKind::TaskMarker { checked: false })]
        );
    }

    #[test]
    fn ordered_list_keeps_start() {
        let frame = ContainerFrame::List {
            marker: ListMarker::Ordered {
                start: 4,
                delim: b'.',
            },
            tight: false,
        };
        assert_eq!(
            frame.into_node(vec![]).kind,
            NodeKind::OrderedList {
                start: 4,
                tight: false
            }
        );
    }
}
