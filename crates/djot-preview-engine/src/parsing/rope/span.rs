/// A byte range `[start, end)` into source text.
///
/// Used for line positions in the block parser and, transiently, for
/// delimiter runs in the inline scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The text this span covers in `s`.
    #[must_use]
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
