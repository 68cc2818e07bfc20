//! Source text handling: newline normalisation and line iteration over an
//! `xi_rope::Rope`.

pub mod lines;
pub mod span;

use std::borrow::Cow;

use xi_rope::Rope;

pub use lines::{LineRef, lines_with_spans};
pub use span::Span;

/// Document source with `\r\n` and lone `\r` normalised to `\n`.
pub struct Source {
    pub rope: Rope,
}

impl Source {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from(normalize_newlines(text).as_ref()),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        lines_with_spans(&self.rope)
    }
}

/// Rewrites `\r\n` and `\r` line endings to `\n`, borrowing when there is
/// nothing to rewrite.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
