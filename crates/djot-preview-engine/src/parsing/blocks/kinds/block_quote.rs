use crate::parsing::blocks::line::LineCursor;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// builder code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';
    /// More indentation than this makes the line indented code instead.
    pub const MAX_INDENT: usize = 3;

    /// Consumes one `>` marker and the single optional space after it.
    ///
    /// Leaves the cursor untouched and returns false if the line does not
    /// start with a marker at this nesting level.
    pub fn strip_marker(cur: &mut LineCursor) -> bool {
        if cur.indent() > Self::MAX_INDENT {
            return false;
        }
        let mut c = cur.clone();
        c.skip_indent();
        if c.peek() != Some(Self::PREFIX) {
            return false;
        }
        c.bump_n(1);
        if matches!(c.peek(), Some(b' ' | b'\t')) {
            c.advance_cols(1);
        }
        *cur = c;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> Option<&str> {
        let mut cur = LineCursor::new(s);
        BlockQuote::strip_marker(&mut cur).then(|| cur.rest())
    }

    #[test]
    fn strip_no_quote() {
        assert_eq!(strip("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(strip("> hello"), Some("hello"));
    }

    #[test]
    fn strips_one_level_at_a_time() {
        assert_eq!(strip("> > hello"), Some("> hello"));
        assert_eq!(strip(">> hello"), Some("> hello"));
    }

    #[test]
    fn marker_without_space() {
        assert_eq!(strip(">hello"), Some("hello"));
        assert_eq!(strip(">"), Some(""));
    }

    #[test]
    fn too_much_indent_is_not_a_quote() {
        assert_eq!(strip("   > ok"), Some("ok"));
        assert_eq!(strip("    > code"), None);
    }
}
