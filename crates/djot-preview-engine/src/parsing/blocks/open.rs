use crate::tree::Alignment;

use super::{
    kinds::{
        BlockQuote, CodeFence, FenceOpen, FootnoteDefinition, Heading, IndentedCode, ListItem,
        ListItemStart, Table, ThematicBreak,
    },
    line::LineCursor,
};

/// A block start detected at the beginning of a line's unclaimed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    ThematicBreak,
    Heading { level: u8, text: &'a str },
    FencedCode(FenceOpen),
    IndentedCode,
    BlockQuote,
    ListItem(ListItemStart),
    /// The header row already sits in a one-line paragraph.
    TableSeparator(Vec<Alignment>),
    TableRow,
    FootnoteDefinition { label: String },
}

impl BlockOpen<'_> {
    /// Container starts are followed by more blocks on the same line.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            BlockOpen::BlockQuote | BlockOpen::ListItem(_) | BlockOpen::FootnoteDefinition { .. }
        )
    }
}

/// What the builder has open, as far as block detection cares.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenContext {
    pub paragraph_open: bool,
    /// The open paragraph is a single line that reads as a table row.
    pub header_candidate: bool,
    pub table_open: bool,
    /// Below the container depth cap.
    pub can_nest: bool,
}

impl OpenContext {
    /// Context for asking whether a line would interrupt a paragraph.
    fn interrupting() -> Self {
        Self {
            paragraph_open: true,
            can_nest: true,
            ..Self::default()
        }
    }
}

/// Detects the block that starts at `cur`, in precedence order.
///
/// On success `cur` is advanced past the block's marker; for leaf blocks it
/// is left at the start of the line's remaining indentation.
pub fn try_open<'a>(cur: &mut LineCursor<'a>, ctx: &OpenContext) -> Option<BlockOpen<'a>> {
    let indent = cur.indent();
    if indent >= IndentedCode::INDENT {
        if ctx.paragraph_open {
            return None;
        }
        cur.advance_cols(IndentedCode::INDENT);
        return Some(BlockOpen::IndentedCode);
    }

    let mut probe = cur.clone();
    probe.skip_indent();
    let rest = probe.rest();

    if ThematicBreak::matches(rest) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some((level, text)) = Heading::parse(rest) {
        return Some(BlockOpen::Heading { level, text });
    }
    if let Some(fence) = CodeFence::open(rest, indent) {
        return Some(BlockOpen::FencedCode(fence));
    }
    if ctx.can_nest {
        if BlockQuote::strip_marker(cur) {
            return Some(BlockOpen::BlockQuote);
        }
        let mut c = cur.clone();
        if let Some(item) = ListItem::parse(&mut c)
            && (!ctx.paragraph_open || item.can_interrupt_paragraph())
        {
            *cur = c;
            return Some(BlockOpen::ListItem(item));
        }
    }
    if ctx.header_candidate
        && let Some(alignments) = Table::separator(rest)
    {
        return Some(BlockOpen::TableSeparator(alignments));
    }
    if ctx.table_open && Table::is_row(rest) {
        return Some(BlockOpen::TableRow);
    }
    if ctx.can_nest
        && let Some((label, n)) = FootnoteDefinition::parse(rest)
    {
        probe.bump_n(n);
        probe.skip_indent();
        *cur = probe;
        return Some(BlockOpen::FootnoteDefinition { label });
    }
    None
}

/// Whether the line at `cur` starts a block that closes an open paragraph.
pub fn interrupts_paragraph(cur: &LineCursor) -> bool {
    try_open(&mut cur.clone(), &OpenContext::interrupting()).is_some()
}
