/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Whether `c` may follow a backslash to be taken literally.
    pub fn is_escapable(c: u8) -> bool {
        c.is_ascii_punctuation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_escapable() {
        assert!(Escape::is_escapable(b'*'));
        assert!(Escape::is_escapable(b'{'));
        assert!(!Escape::is_escapable(b'a'));
        assert!(!Escape::is_escapable(b' '));
    }
}
