use crate::parsing::blocks::line::LineCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }

    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(FenceKind::Backticks),
            b'~' => Some(FenceKind::Tildes),
            _ => None,
        }
    }
}

/// An open fence: what closes it and how much indentation its content loses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    /// Length of the opening run; the closer must be at least this long.
    pub len: usize,
    /// Indentation of the opener, stripped from each content line.
    pub indent: usize,
    /// First word of the info string.
    pub lang: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;
    pub const MAX_INDENT: usize = 3;

    /// Detects an opener. `rest` starts after `indent` columns of whitespace.
    pub fn open(rest: &str, indent: usize) -> Option<FenceOpen> {
        if indent > Self::MAX_INDENT {
            return None;
        }
        let kind = FenceKind::from_byte(*rest.as_bytes().first()?)?;
        let len = rest.bytes().take_while(|&b| b == kind.byte()).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = rest[len..].trim();
        // A backtick in a backtick fence's info string makes it inline code.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceOpen {
            kind,
            len,
            indent,
            lang: info.split_whitespace().next().map(str::to_string),
        })
    }

    /// Whether the line at `cur` closes `fence`.
    pub fn closes(fence: &FenceOpen, cur: &LineCursor) -> bool {
        if cur.indent() > Self::MAX_INDENT {
            return false;
        }
        let mut c = cur.clone();
        c.skip_indent();
        let rest = c.rest();
        let run = rest.bytes().take_while(|&b| b == fence.kind.byte()).count();
        run >= fence.len && rest[run..].trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence_with_lang() {
        let open = CodeFence::open("```rust extra", 0).unwrap();
        assert_eq!(open.kind, FenceKind::Backticks);
        assert_eq!(open.len, 3);
        assert_eq!(open.lang.as_deref(), Some("rust"));
    }

    #[test]
    fn detect_tilde_fence() {
        let open = CodeFence::open("~~~~", 2).unwrap();
        assert_eq!(open.kind, FenceKind::Tildes);
        assert_eq!(open.len, 4);
        assert_eq!(open.indent, 2);
        assert_eq!(open.lang, None);
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("hello", 0), None);
        assert_eq!(CodeFence::open("``", 0), None);
        assert_eq!(CodeFence::open("```", 4), None);
        assert_eq!(CodeFence::open("``` a`b", 0), None);
    }

    #[test]
    fn closes_matching_fence() {
        let open = CodeFence::open("````", 0).unwrap();
        assert!(CodeFence::closes(&open, &LineCursor::new("````")));
        assert!(CodeFence::closes(&open, &LineCursor::new("  `````  ")));
    }

    #[test]
    fn does_not_close_short_or_mismatched_fence() {
        let open = CodeFence::open("````", 0).unwrap();
        assert!(!CodeFence::closes(&open, &LineCursor::new("```")));
        assert!(!CodeFence::closes(&open, &LineCursor::new("~~~~")));
        assert!(!CodeFence::closes(&open, &LineCursor::new("```` x")));
    }
}
