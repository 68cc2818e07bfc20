/// Tab stops are every four columns.
pub const TAB_WIDTH: usize = 4;

/// A cursor over one classified line, tracking the visual column as well as
/// the byte index so container prefixes can be stripped by column count.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    s: &'a str,
    i: usize,
    col: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0, col: 0 }
    }

    /// Current visual column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Remaining text from the cursor.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// True when nothing but whitespace remains.
    pub fn is_blank(&self) -> bool {
        self.rest().trim().is_empty()
    }

    /// Columns of whitespace ahead of the cursor.
    pub fn indent(&self) -> usize {
        let mut col = self.col;
        for b in self.rest().bytes() {
            match b {
                b' ' => col += 1,
                b'\t' => col += TAB_WIDTH - col % TAB_WIDTH,
                _ => break,
            }
        }
        col - self.col
    }

    /// Consumes up to `n` columns of whitespace. A tab that would overshoot
    /// is consumed whole.
    pub fn advance_cols(&mut self, n: usize) {
        let target = self.col + n;
        while self.col < target {
            match self.peek() {
                Some(b' ') => self.col += 1,
                Some(b'\t') => self.col += TAB_WIDTH - self.col % TAB_WIDTH,
                _ => break,
            }
            self.i += 1;
        }
    }

    /// Consumes all leading whitespace.
    pub fn skip_indent(&mut self) {
        let n = self.indent();
        self.advance_cols(n);
    }

    /// Consumes `n` bytes of ASCII, one column each.
    pub fn bump_n(&mut self, n: usize) {
        let n = n.min(self.s.len() - self.i);
        self.i += n;
        self.col += n;
    }
}
