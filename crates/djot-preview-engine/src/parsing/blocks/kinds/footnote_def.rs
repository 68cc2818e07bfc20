use crate::parsing::inline::kinds::FootnoteRef;

/// Footnote definition `[^label]: content`.
///
/// The label syntax is shared with inline references.
pub struct FootnoteDefinition;

impl FootnoteDefinition {
    pub const COLON: u8 = b':';
    /// Continuation lines need at least this much indentation.
    pub const CONTINUATION_INDENT: usize = 1;

    /// Returns the label and the bytes consumed through the colon.
    pub fn parse(rest: &str) -> Option<(String, usize)> {
        let (label, n) = FootnoteRef::parse(rest)?;
        (rest.as_bytes().get(n) == Some(&Self::COLON)).then(|| (label.to_string(), n + 1))
    }
}
