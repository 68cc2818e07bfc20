/// The `(destination "title")` part that turns a closed bracket into a link
/// or image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub dest: String,
    pub title: Option<String>,
    /// Bytes consumed, parentheses included.
    pub len: usize,
}

impl LinkTarget {
    pub const OPEN: u8 = b'(';
    pub const CLOSE: u8 = b')';
    /// Destinations are only searched this far, which bounds lookahead.
    pub const MAX_LEN: usize = 2048;

    /// Parses a target at the start of `s` (which must begin with `(`).
    ///
    /// Returns `None` for a missing `)`, an empty destination, or anything
    /// other than a quoted title after the destination.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.strip_prefix('(')?;
        let end = rest
            .bytes()
            .take(Self::MAX_LEN + 1)
            .position(|b| b == Self::CLOSE)?;
        let inner = rest[..end].trim();
        let (dest, tail) = match inner.find(char::is_whitespace) {
            Some(ws) => (&inner[..ws], inner[ws..].trim()),
            None => (inner, ""),
        };
        if dest.is_empty() {
            return None;
        }
        let title = if tail.is_empty() {
            None
        } else {
            Some(Self::quoted(tail)?.to_string())
        };
        Some(Self {
            dest: dest.to_string(),
            title,
            len: end + 2,
        })
    }

    fn quoted(s: &str) -> Option<&str> {
        let b = s.as_bytes();
        let q = *b.first()?;
        if b.len() >= 2 && (q == b'"' || q == b'\'') && b[b.len() - 1] == q {
            Some(&s[1..s.len() - 1])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_only() {
        let t = LinkTarget::parse("(https://x.y) after").unwrap();
        assert_eq!(t.dest, "https://x.y");
        assert_eq!(t.title, None);
        assert_eq!(t.len, 13);
    }

    #[test]
    fn destination_with_title() {
        let t = LinkTarget::parse("(/a \"The A\")").unwrap();
        assert_eq!(t.dest, "/a");
        assert_eq!(t.title.as_deref(), Some("The A"));
    }

    #[test]
    fn malformed_targets() {
        assert_eq!(LinkTarget::parse("(no close"), None);
        assert_eq!(LinkTarget::parse("()"), None);
        assert_eq!(LinkTarget::parse("(  )"), None);
        assert_eq!(LinkTarget::parse("(a b)"), None);
    }
}
