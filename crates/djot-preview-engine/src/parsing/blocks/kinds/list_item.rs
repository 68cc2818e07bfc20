use crate::parsing::blocks::line::LineCursor;

/// The marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `+`.
    Bullet(u8),
    /// Digits followed by `.` or `)`.
    Ordered { start: u64, delim: u8 },
}

impl ListMarker {
    /// Items with compatible markers belong to the same list.
    pub fn compatible(&self, other: &ListMarker) -> bool {
        match (self, other) {
            (ListMarker::Bullet(a), ListMarker::Bullet(b)) => a == b,
            (ListMarker::Ordered { delim: a, .. }, ListMarker::Ordered { delim: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// A detected list item start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemStart {
    pub marker: ListMarker,
    /// Columns from the start of the item's nesting level to its content.
    pub content_indent: usize,
    /// `[ ]` / `[x]` on a bullet item.
    pub task: Option<bool>,
    /// Nothing follows the marker on this line.
    pub empty: bool,
}

impl ListItemStart {
    /// Empty items and ordered items not starting at 1 cannot interrupt a
    /// paragraph.
    pub fn can_interrupt_paragraph(&self) -> bool {
        !self.empty
            && match self.marker {
                ListMarker::Bullet(_) => true,
                ListMarker::Ordered { start, .. } => start == 1,
            }
    }
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMS: [u8; 2] = [b'.', b')'];
    pub const MAX_DIGITS: usize = 9;
    pub const MAX_INDENT: usize = 3;
    /// Content indented further than this after the marker is indented code
    /// inside the item, and the content column falls back to one space.
    pub const MAX_PADDING: usize = 4;

    /// Detects an item at the cursor. On success the cursor is advanced to
    /// the item's content (past any task marker).
    pub fn parse(cur: &mut LineCursor) -> Option<ListItemStart> {
        if cur.indent() > Self::MAX_INDENT {
            return None;
        }
        let level_start = cur.col();
        let mut c = cur.clone();
        c.skip_indent();

        let rest = c.rest();
        let first = *rest.as_bytes().first()?;
        let (marker, len) = if Self::BULLETS.contains(&first) {
            (ListMarker::Bullet(first), 1)
        } else {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let delim = *rest.as_bytes().get(digits)?;
            if !Self::ORDERED_DELIMS.contains(&delim) {
                return None;
            }
            let start = rest[..digits].parse().ok()?;
            (ListMarker::Ordered { start, delim }, digits + 1)
        };
        if !matches!(rest.as_bytes().get(len), None | Some(b' ' | b'\t')) {
            return None;
        }
        c.bump_n(len);

        if c.is_blank() {
            let content_indent = c.col() - level_start + 1;
            *cur = c;
            return Some(ListItemStart {
                marker,
                content_indent,
                task: None,
                empty: true,
            });
        }

        let padding = c.indent();
        if padding > Self::MAX_PADDING {
            c.advance_cols(1);
        } else {
            c.advance_cols(padding);
        }
        let content_indent = c.col() - level_start;

        let mut task = None;
        if matches!(marker, ListMarker::Bullet(_))
            && let Some(checked) = Self::task_marker(c.rest())
        {
            task = Some(checked);
            c.bump_n(3);
            c.skip_indent();
        }
        let empty = c.is_blank();
        *cur = c;
        Some(ListItemStart {
            marker,
            content_indent,
            task,
            empty,
        })
    }

    fn task_marker(rest: &str) -> Option<bool> {
        let checked = match rest.get(..3)? {
            "[ ]" => false,
            "[x]" | "[X]" => true,
            _ => return None,
        };
        matches!(rest.as_bytes().get(3), None | Some(b' ' | b'\t')).then_some(checked)
    }
}
