/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing, and no escape
/// processing, occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds a closing run of exactly `n` backticks in `s`.
    ///
    /// Returns the byte offset where the closing run starts.
    pub fn find_closer(s: &str, n: usize) -> Option<usize> {
        let b = s.as_bytes();
        let mut i = 0;
        while i < b.len() {
            if b[i] == Self::TICK {
                let start = i;
                while i < b.len() && b[i] == Self::TICK {
                    i += 1;
                }
                if i - start == n {
                    return Some(start);
                }
            } else {
                i += 1;
            }
        }
        None
    }

    /// Verbatim content of a span: soft breaks become spaces, and a single
    /// padding space is removed next to a backtick at either edge.
    pub fn content(raw: &str) -> String {
        let mut s = raw.replace('\n', " ");
        if s.ends_with("` ") {
            s.pop();
        }
        if s.starts_with(" `") {
            s.remove(0);
        }
        s
    }
}
