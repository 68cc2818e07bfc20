use xi_rope::Rope;

use super::span::Span;

/// A single source line with its byte span in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to keep newline characters so spans stay contiguous.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_contiguous() {
        let rope = Rope::from("ab\n\ncd");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span { start: 0, end: 3 });
        assert_eq!(lines[1].span, Span { start: 3, end: 4 });
        assert_eq!(lines[2].span, Span { start: 4, end: 6 });
        assert_eq!(lines[2].text, "cd");
    }
}
