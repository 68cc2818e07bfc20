/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// All delimiter bytes the scanner cares about are ASCII, so byte positions
/// stopped at by the scanner are always char boundaries. Other text is
/// consumed a whole char at a time with [`Cursor::bump_char`].
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead without advancing.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Remaining input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// The char just before the cursor, if any.
    pub fn prev_char(&self) -> Option<char> {
        self.s[..self.i].chars().next_back()
    }

    /// The char starting `n` bytes after the cursor. `n` must land on a char
    /// boundary, which holds when it skips ASCII delimiters only.
    pub fn char_after(&self, n: usize) -> Option<char> {
        self.s.get(self.i + n..)?.chars().next()
    }

    /// Length of the run of `b` starting at the cursor.
    pub fn run_len(&self, b: u8) -> usize {
        self.s.as_bytes()[self.i..]
            .iter()
            .take_while(|&&c| c == b)
            .count()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one whole char, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }
}
