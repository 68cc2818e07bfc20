use crate::{
    parsing::inline::parse_inline,
    tree::{Alignment, Node, NodeKind},
};

use super::{
    classify::LineClass,
    containers::{ContainerFrame, MAX_CONTAINER_DEPTH, OpenContainer},
    kinds::{CodeFence, FenceOpen, IndentedCode, ListItem, ListItemStart, Paragraph, Table},
    line::LineCursor,
    open::{BlockOpen, OpenContext, interrupts_paragraph, try_open},
};

/// The one leaf block that can still take lines.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<String>,
    },
    Fence {
        open: FenceOpen,
        lines: Vec<String>,
    },
    IndentedCode {
        lines: Vec<String>,
    },
    Table {
        alignments: Vec<Alignment>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Line-at-a-time block construction over an explicit container stack.
///
/// The stack always holds the `Document` frame at the bottom. Finished
/// blocks are appended to the innermost open container; closing a container
/// turns it into a node in its parent.
pub struct BlockBuilder {
    stack: Vec<OpenContainer>,
    leaf: LeafState,
    /// The previous line was blank.
    after_blank: bool,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![OpenContainer::new(ContainerFrame::Document)],
            leaf: LeafState::None,
            after_blank: false,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let mut cur = LineCursor::new(&c.text);
        let matched = self.match_containers(&mut cur);
        let all_matched = matched == self.stack.len();

        if all_matched && matches!(self.leaf, LeafState::Fence { .. }) {
            self.fence_line(cur);
            return;
        }

        if cur.is_blank() {
            self.blank_line(matched);
            return;
        }

        if !all_matched
            && self.paragraph_open()
            && !interrupts_paragraph(&cur)
            && !self.list_takes_item(matched - 1, &cur)
        {
            self.paragraph_line(cur.rest());
            return;
        }

        self.close_containers(matched);
        self.close_incompatible_list(&cur);
        if self.after_blank {
            self.mark_list_loose();
        }
        self.after_blank = false;
        self.open_blocks(cur);
    }

    /// Closes everything still open and returns the `Document` node.
    pub fn finish(mut self) -> Node {
        self.close_containers(1);
        self.close_leaf();
        match self.stack.pop() {
            Some(root) => root.finish(),
            None => Node::new(NodeKind::Document),
        }
    }

    /// Number of stack frames whose continuation rule accepts the line.
    fn match_containers(&self, cur: &mut LineCursor) -> usize {
        self.stack
            .iter()
            .take_while(|oc| oc.frame.continues(cur))
            .count()
    }

    fn fence_line(&mut self, mut cur: LineCursor) {
        let LeafState::Fence { open, lines } = &mut self.leaf else {
            return;
        };
        if CodeFence::closes(open, &cur) {
            self.close_leaf();
            return;
        }
        cur.advance_cols(open.indent);
        lines.push(cur.rest().to_string());
    }

    fn blank_line(&mut self, matched: usize) {
        if matched < self.stack.len() {
            self.close_containers(matched);
        } else if let LeafState::IndentedCode { lines } = &mut self.leaf {
            lines.push(String::new());
        } else if matches!(
            self.leaf,
            LeafState::Paragraph { .. } | LeafState::Table { .. }
        ) {
            self.close_leaf();
        }
        self.after_blank = true;
    }

    fn open_blocks(&mut self, mut cur: LineCursor) {
        loop {
            let ctx = self.open_context();
            let Some(open) = try_open(&mut cur, &ctx) else {
                self.paragraph_line(cur.rest());
                return;
            };
            let container = open.is_container();
            self.open(open, &cur);
            if !container || cur.is_blank() {
                return;
            }
        }
    }

    fn open(&mut self, open: BlockOpen, cur: &LineCursor) {
        match open {
            BlockOpen::ThematicBreak => {
                self.close_leaf();
                self.push_node(Node::new(NodeKind::ThematicBreak));
            }
            BlockOpen::Heading { level, text } => {
                self.close_leaf();
                self.push_node(Node::with_children(
                    NodeKind::Heading { level },
                    parse_inline(text),
                ));
            }
            BlockOpen::FencedCode(open) => {
                self.close_leaf();
                self.leaf = LeafState::Fence {
                    open,
                    lines: vec![],
                };
            }
            BlockOpen::IndentedCode => {
                let line = cur.rest().to_string();
                if let LeafState::IndentedCode { lines } = &mut self.leaf {
                    lines.push(line);
                } else {
                    self.close_leaf();
                    self.leaf = LeafState::IndentedCode { lines: vec![line] };
                }
            }
            BlockOpen::BlockQuote => {
                self.close_leaf();
                self.push_container(ContainerFrame::BlockQuote);
            }
            BlockOpen::ListItem(item) => {
                self.close_leaf();
                self.open_list_item(item);
            }
            BlockOpen::TableSeparator(alignments) => {
                let LeafState::Paragraph { lines } = std::mem::replace(&mut self.leaf, LeafState::None)
                else {
                    return;
                };
                let header = lines.first().map(|l| Table::split_row(l)).unwrap_or_default();
                let width = header.len();
                self.leaf = LeafState::Table {
                    alignments: Table::normalize(alignments, width),
                    header,
                    rows: vec![],
                };
            }
            BlockOpen::TableRow => {
                if let LeafState::Table { rows, .. } = &mut self.leaf {
                    rows.push(Table::split_row(cur.rest()));
                }
            }
            BlockOpen::FootnoteDefinition { label } => {
                self.close_leaf();
                self.push_container(ContainerFrame::FootnoteDefinition { label });
            }
        }
    }

    fn open_context(&self) -> OpenContext {
        let (paragraph_open, header_candidate) = match &self.leaf {
            LeafState::Paragraph { lines } => (
                true,
                lines.len() == 1 && lines.first().is_some_and(|l| Table::is_row(l)),
            ),
            _ => (false, false),
        };
        OpenContext {
            paragraph_open,
            header_candidate,
            table_open: matches!(self.leaf, LeafState::Table { .. }),
            // A list item pushes two frames.
            can_nest: self.stack.len() + 2 <= MAX_CONTAINER_DEPTH,
        }
    }

    fn open_list_item(&mut self, item: ListItemStart) {
        let compatible = matches!(
            &self.top().frame,
            ContainerFrame::List { marker, .. } if marker.compatible(&item.marker)
        );
        if !compatible {
            if matches!(self.top().frame, ContainerFrame::List { .. }) {
                self.close_top();
            }
            self.push_container(ContainerFrame::List {
                marker: item.marker,
                tight: true,
            });
        }
        self.push_container(ContainerFrame::ListItem {
            content_indent: item.content_indent,
            task: item.task,
        });
    }

    /// A list left on top of the stack only survives a compatible item.
    fn close_incompatible_list(&mut self, cur: &LineCursor) {
        let top = self.stack.len() - 1;
        if matches!(self.stack[top].frame, ContainerFrame::List { .. })
            && !self.list_takes_item(top, cur)
        {
            self.close_top();
        }
    }

    /// Whether the frame at `idx` is a list and the line starts an item that
    /// belongs to it. Such an item may follow a paragraph whatever its number.
    fn list_takes_item(&self, idx: usize, cur: &LineCursor) -> bool {
        let ContainerFrame::List { marker, .. } = &self.stack[idx].frame else {
            return false;
        };
        ListItem::parse(&mut cur.clone()).is_some_and(|item| item.marker.compatible(marker))
    }

    /// A blank line followed by more content inside a list makes it loose.
    fn mark_list_loose(&mut self) {
        let deepest = self
            .stack
            .iter_mut()
            .rev()
            .find_map(|oc| match &mut oc.frame {
                ContainerFrame::List { tight, .. } => Some(tight),
                _ => None,
            });
        if let Some(tight) = deepest {
            *tight = false;
        }
    }

    fn paragraph_open(&self) -> bool {
        matches!(self.leaf, LeafState::Paragraph { .. })
    }

    fn paragraph_line(&mut self, rest: &str) {
        let line = Paragraph::line(rest);
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(line);
        } else {
            self.close_leaf();
            self.leaf = LeafState::Paragraph { lines: vec![line] };
        }
    }

    fn close_leaf(&mut self) {
        let node = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { lines } => Node::with_children(
                NodeKind::Paragraph,
                parse_inline(&Paragraph::join(&lines)),
            ),
            LeafState::Fence { open, lines } => {
                let mut text = String::new();
                for line in &lines {
                    text.push_str(line);
                    text.push('\n');
                }
                Node::new(NodeKind::CodeBlock {
                    lang: open.lang,
                    text,
                })
            }
            LeafState::IndentedCode { lines } => Node::new(NodeKind::CodeBlock {
                lang: None,
                text: IndentedCode::text(&lines),
            }),
            LeafState::Table {
                alignments,
                header,
                rows,
            } => table_node(alignments, header, rows),
        };
        self.push_node(node);
    }

    fn close_containers(&mut self, keep: usize) {
        while self.stack.len() > keep.max(1) {
            self.close_top();
        }
    }

    fn close_top(&mut self) {
        self.close_leaf();
        if self.stack.len() <= 1 {
            return;
        }
        if let Some(oc) = self.stack.pop() {
            let node = oc.finish();
            self.push_node(node);
        }
    }

    fn push_container(&mut self, frame: ContainerFrame) {
        self.stack.push(OpenContainer::new(frame));
    }

    fn push_node(&mut self, node: Node) {
        let last = self.stack.len() - 1;
        self.stack[last].children.push(node);
    }

    fn top(&self) -> &OpenContainer {
        &self.stack[self.stack.len() - 1]
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn table_node(alignments: Vec<Alignment>, header: Vec<String>, rows: Vec<Vec<String>>) -> Node {
    let width = header.len();
    let row = |cells: Vec<String>, header: bool| {
        let cells = Table::normalize(cells, width)
            .into_iter()
            .zip(&alignments)
            .map(|(text, &align)| {
                Node::with_children(NodeKind::TableCell { header, align }, parse_inline(&text))
            })
            .collect();
        Node::with_children(NodeKind::TableRow, cells)
    };
    let mut children = vec![row(header, true)];
    children.extend(rows.into_iter().map(|r| row(r, false)));
    Node::with_children(NodeKind::Table { alignments }, children)
}
