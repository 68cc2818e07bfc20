use std::collections::HashSet;

use crate::{
    parsing::rope::Span,
    tree::{Node, NodeKind, plain_text_of},
};

use super::{
    cursor::Cursor,
    kinds::{Autolink, CodeSpan, Escape, FootnoteRef, LinkTarget, Marker},
    types::{Item, Opener},
};

/// Inline spans nested deeper than this are not formed; their delimiters
/// stay literal.
pub const MAX_INLINE_DEPTH: usize = 64;

/// Scans inline content into a sequence of inline [`Node`]s.
///
/// Never fails: constructs that do not close are emitted as the literal
/// text they were written as. Adjacent text is merged into one node.
///
/// # Raw Zone Precedence
/// Code spans are resolved first and suppress all other parsing inside
/// them: `` `*not strong*` `` is a single code node.
pub fn parse_inline(s: &str) -> Vec<Node> {
    let mut scanner = Scanner::new(s);
    scanner.run();
    scanner.finish()
}

struct Scanner<'a> {
    cur: Cursor<'a>,
    items: Vec<Item>,
    /// Pending openers, one stack per marker slot, each in source order.
    openers: [Vec<Opener>; Marker::SLOTS],
    /// Pending literal text not yet pushed as an item.
    text: String,
    /// `depth_marks[d - 1]`: highest item index holding a node at least `d`
    /// levels deep.
    depth_marks: [Option<usize>; MAX_INLINE_DEPTH],
    /// Item index of the latest link. Link openers before it are spent.
    last_link: Option<usize>,
    /// Backtick run lengths known to have no closing run further on.
    unclosed_ticks: HashSet<usize>,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            cur: Cursor::new(s),
            items: vec![],
            openers: std::array::from_fn(|_| vec![]),
            text: String::new(),
            depth_marks: [None; MAX_INLINE_DEPTH],
            last_link: None,
            unclosed_ticks: HashSet::new(),
        }
    }

    fn run(&mut self) {
        while let Some(b) = self.cur.peek() {
            match b {
                Escape::BACKSLASH => self.escape(),
                CodeSpan::TICK => self.code_span(),
                b'\n' => {
                    self.cur.bump();
                    self.text.push(' ');
                }
                b'*' | b'_' | b'^' | b'~' => self.symmetric(b),
                b'{' => self.brace_open(),
                b'=' | b'+' | b'-' if self.cur.peek_at(1) == Some(b'}') => self.brace_close(b),
                b'!' if self.cur.peek_at(1) == Some(b'[') => {
                    let start = self.cur.pos();
                    self.cur.bump_n(2);
                    self.push_opener(Marker::ImageOpen, Span { start, end: start + 2 });
                }
                b'[' => self.bracket_open(),
                b']' => self.bracket_close(),
                Autolink::OPEN => self.autolink(),
                _ => self.literal_char(),
            }
        }
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush_text();
        let src = self.cur.s;
        merge_text(self.items.into_iter().map(|i| i.into_node(src)).collect())
    }

    fn escape(&mut self) {
        self.cur.bump();
        match self.cur.peek() {
            Some(b'\n') => {
                self.cur.bump();
                self.push_node(Node::new(NodeKind::LineBreak), 0);
            }
            Some(c) if Escape::is_escapable(c) => {
                self.cur.bump();
                self.text.push(c as char);
            }
            _ => self.text.push('\\'),
        }
    }

    fn code_span(&mut self) {
        let start = self.cur.pos();
        let n = self.cur.run_len(CodeSpan::TICK);
        self.cur.bump_n(n);

        if !self.unclosed_ticks.contains(&n) {
            let rest = self.cur.rest();
            if let Some(off) = CodeSpan::find_closer(rest, n) {
                let content = CodeSpan::content(&rest[..off]);
                self.cur.bump_n(off + n);
                self.push_node(Node::new(NodeKind::Code(content)), 0);
                return;
            }
            // No run of this length further on, so later runs of the same
            // length cannot close either.
            self.unclosed_ticks.insert(n);
        }
        self.text.push_str(&self.cur.s[start..start + n]);
    }

    fn symmetric(&mut self, b: u8) {
        let Some(marker) = Marker::from_char(b) else {
            self.literal_char();
            return;
        };
        let start = self.cur.pos();
        let can_close = self.cur.prev_char().is_some_and(|c| !c.is_whitespace());
        let can_open = self.cur.char_after(1).is_some_and(|c| !c.is_whitespace());

        self.cur.bump();
        if can_close && self.try_close(marker) {
            return;
        }
        if can_open {
            self.push_opener(marker, Span { start, end: start + 1 });
        } else {
            self.text.push(b as char);
        }
    }

    fn brace_open(&mut self) {
        match self.cur.peek_at(1).and_then(Marker::from_brace) {
            Some(marker) => {
                let start = self.cur.pos();
                self.cur.bump_n(2);
                self.push_opener(marker, Span { start, end: start + 2 });
            }
            None => self.literal_char(),
        }
    }

    fn brace_close(&mut self, b: u8) {
        if let Some(marker) = Marker::from_brace(b)
            && self.try_close(marker)
        {
            self.cur.bump_n(2);
            return;
        }
        // Leave the `}` to be scanned on its own.
        self.cur.bump();
        self.text.push(b as char);
    }

    fn bracket_open(&mut self) {
        if let Some((label, n)) = FootnoteRef::parse(self.cur.rest()) {
            self.cur.bump_n(n);
            let label = label.to_string();
            self.push_node(Node::new(NodeKind::FootnoteReference { label }), 0);
            return;
        }
        let start = self.cur.pos();
        self.cur.bump();
        self.push_opener(Marker::LinkOpen, Span { start, end: start + 1 });
    }

    fn bracket_close(&mut self) {
        let slot = Marker::LinkOpen.slot();
        let Some(opener) = self.find_opener(slot) else {
            self.literal_char();
            return;
        };
        // Links do not nest: a link opener before the latest link is spent.
        let spent = opener.marker == Marker::LinkOpen
            && self.last_link.is_some_and(|link| opener.item < link);
        let target = if spent {
            None
        } else {
            LinkTarget::parse(&self.cur.rest()[1..])
        };
        let Some(target) = target else {
            self.openers[slot].pop();
            self.literal_char();
            return;
        };
        let depth = self.depth_after(opener.item) + 1;
        if depth > MAX_INLINE_DEPTH {
            self.openers[slot].pop();
            self.literal_char();
            return;
        }

        self.cur.bump_n(1 + target.len);
        self.flush_text();
        self.discard_openers_from(opener.item);
        let children = self.take_after(opener.item);

        let node = if opener.marker == Marker::ImageOpen {
            Node::new(NodeKind::Image {
                dest: target.dest,
                alt: plain_text_of(&children),
                title: target.title,
            })
        } else {
            self.last_link = Some(opener.item);
            Node::with_children(
                NodeKind::Link {
                    dest: target.dest,
                    title: target.title,
                },
                children,
            )
        };
        self.replace_with_node(opener.item, node, depth);
    }

    fn autolink(&mut self) {
        match Autolink::parse(self.cur.rest()) {
            Some((label, dest, n)) => {
                let node = Node::with_children(
                    NodeKind::Link { dest, title: None },
                    vec![Node::text(label)],
                );
                self.cur.bump_n(n);
                self.push_node(node, 1);
            }
            None => self.literal_char(),
        }
    }

    fn literal_char(&mut self) {
        if let Some(c) = self.cur.bump_char() {
            self.text.push(c);
        }
    }

    /// Closes the nearest opener of `marker`, wrapping everything after it.
    ///
    /// Fails when there is no opener, when the span would be empty, or when
    /// it would nest too deep. Only the last case drops the opener.
    fn try_close(&mut self, marker: Marker) -> bool {
        let Some(kind) = marker.span_kind() else {
            return false;
        };
        let Some(opener) = self.find_opener(marker.slot()) else {
            return false;
        };
        self.flush_text();
        if opener.item + 1 == self.items.len() {
            return false;
        }
        let depth = self.depth_after(opener.item) + 1;
        if depth > MAX_INLINE_DEPTH {
            // Content after an opener only ever gets deeper.
            self.openers[marker.slot()].pop();
            return false;
        }

        // Openers above the match are inside the new span and stay literal.
        self.discard_openers_from(opener.item);
        let children = self.take_after(opener.item);
        self.replace_with_node(opener.item, Node::with_children(kind, children), depth);
        true
    }

    fn find_opener(&self, slot: usize) -> Option<Opener> {
        self.openers[slot].last().copied()
    }

    /// Drops every pending opener at or after item `idx`.
    fn discard_openers_from(&mut self, idx: usize) {
        for stack in &mut self.openers {
            while stack.last().is_some_and(|o| o.item >= idx) {
                stack.pop();
            }
        }
    }

    /// Deepest node among the items after `idx`.
    fn depth_after(&self, idx: usize) -> usize {
        (1..=MAX_INLINE_DEPTH)
            .rev()
            .find(|&d| self.depth_marks[d - 1].is_some_and(|at| at > idx))
            .unwrap_or(0)
    }

    /// Records a node `depth` levels deep at `idx`, which must be the
    /// highest item index.
    fn mark_depth(&mut self, idx: usize, depth: usize) {
        for mark in self.depth_marks.iter_mut().take(depth) {
            *mark = Some(idx);
        }
    }

    fn take_after(&mut self, idx: usize) -> Vec<Node> {
        let src = self.cur.s;
        let nodes = self
            .items
            .drain(idx + 1..)
            .map(|i| i.into_node(src))
            .collect();
        // A link now inside the item at `idx` still spends earlier openers.
        self.last_link = self.last_link.map(|link| link.min(idx));
        merge_text(nodes)
    }

    /// Puts `node` in place of the opener item at `idx`, the last item.
    fn replace_with_node(&mut self, idx: usize, node: Node, depth: usize) {
        self.items[idx] = Item::Node(node);
        self.mark_depth(idx, depth);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.items.push(Item::Text(std::mem::take(&mut self.text)));
        }
    }

    fn push_node(&mut self, node: Node, depth: usize) {
        self.flush_text();
        self.mark_depth(self.items.len(), depth);
        self.items.push(Item::Node(node));
    }

    fn push_opener(&mut self, marker: Marker, span: Span) {
        self.flush_text();
        self.openers[marker.slot()].push(Opener {
            marker,
            item: self.items.len(),
        });
        self.items.push(Item::Delim { marker, span });
    }
}

impl Item {
    /// Finished node for this item; unmatched delimiters become their
    /// literal source text.
    fn into_node(self, src: &str) -> Node {
        match self {
            Item::Text(t) => Node::text(t),
            Item::Node(node) => node,
            Item::Delim { span, .. } => Node::text(span.slice(src)),
        }
    }
}

/// Merges runs of adjacent text nodes.
fn merge_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let NodeKind::Text(t) = &node.kind
            && let Some(Node {
                kind: NodeKind::Text(prev),
                ..
            }) = out.last_mut()
        {
            prev.push_str(t);
            continue;
        }
        out.push(node);
    }
    out
}
