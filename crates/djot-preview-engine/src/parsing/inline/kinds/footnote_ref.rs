/// Footnote reference `[^label]`.
pub struct FootnoteRef;

impl FootnoteRef {
    pub const OPEN: &'static [u8; 2] = b"[^";
    pub const CLOSE: u8 = b']';
    /// Labels longer than this are not scanned for.
    pub const MAX_LABEL: usize = 256;

    /// Parses a reference at the start of `s`, returning the label and the
    /// number of bytes consumed.
    pub fn parse(s: &str) -> Option<(&str, usize)> {
        let rest = s.strip_prefix("[^")?;
        let end = rest
            .bytes()
            .take(Self::MAX_LABEL + 1)
            .position(|b| b == Self::CLOSE || b == b'[' || b.is_ascii_whitespace())?;
        if end == 0 || rest.as_bytes()[end] != Self::CLOSE {
            return None;
        }
        Some((&rest[..end], end + 3))
    }
}
