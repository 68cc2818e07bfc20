use crate::parsing::rope::{LineRef, Span};

use super::line::TAB_WIDTH;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text without its newline, leading tabs expanded to spaces.
    pub text: String,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim_end_matches('\n');
        LineClass {
            line: lr.span,
            text: expand_leading_tabs(trimmed),
            is_blank: trimmed.trim().is_empty(),
        }
    }
}

/// Replaces tabs in the leading whitespace with spaces up to the next stop.
fn expand_leading_tabs(s: &str) -> String {
    let indent_len = s.len() - s.trim_start_matches([' ', '\t']).len();
    if !s[..indent_len].contains('\t') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + TAB_WIDTH);
    let mut col = 0;
    for b in s[..indent_len].bytes() {
        let width = if b == b'\t' { TAB_WIDTH - col % TAB_WIDTH } else { 1 };
        out.extend(std::iter::repeat_n(' ', width));
        col += width;
    }
    out.push_str(&s[indent_len..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> LineRef {
        LineRef {
            span: Span {
                start: 0,
                end: text.len(),
            },
            text: text.to_string(),
        }
    }

    #[test]
    fn strips_newline_and_flags_blank() {
        let c = LineClassifier.classify(&line("  \n"));
        assert!(c.is_blank);
        assert_eq!(c.text, "  ");
        let c = LineClassifier.classify(&line("text\n"));
        assert!(!c.is_blank);
        assert_eq!(c.text, "text");
        assert_eq!(c.line.end, 5);
    }

    #[test]
    fn expands_leading_tabs_only() {
        assert_eq!(expand_leading_tabs("\tcode\tx"), "    code\tx");
        assert_eq!(expand_leading_tabs("  \tx"), "    x");
        assert_eq!(expand_leading_tabs("none"), "none");
    }
}
