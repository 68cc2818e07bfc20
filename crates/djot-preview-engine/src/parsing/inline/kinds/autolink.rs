/// Autolinks: `<https://example.com>` and `<user@example.com>`.
pub struct Autolink;

impl Autolink {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const MAX_LEN: usize = 2048;

    /// Parses an autolink at the start of `s`.
    ///
    /// Returns `(label, destination, consumed)`; email addresses get a
    /// `mailto:` destination.
    pub fn parse(s: &str) -> Option<(&str, String, usize)> {
        let rest = s.strip_prefix('<')?;
        let end = rest
            .bytes()
            .take(Self::MAX_LEN + 1)
            .position(|b| b == Self::CLOSE || b == b'<' || b.is_ascii_whitespace())?;
        if rest.as_bytes()[end] != Self::CLOSE {
            return None;
        }
        let addr = &rest[..end];
        let dest = if Self::has_scheme(addr) {
            addr.to_string()
        } else if Self::is_email(addr) {
            format!("mailto:{addr}")
        } else {
            return None;
        };
        Some((addr, dest, end + 2))
    }

    fn has_scheme(addr: &str) -> bool {
        match addr.split_once(':') {
            Some((scheme, rest)) => {
                scheme.len() >= 2
                    && scheme.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'.' || b == b'-')
                    && scheme.as_bytes()[0].is_ascii_alphabetic()
                    && !rest.is_empty()
            }
            None => false,
        }
    }

    fn is_email(addr: &str) -> bool {
        match addr.split_once('@') {
            Some((user, host)) => !user.is_empty() && host.contains('.') && !host.ends_with('.'),
            None => false,
        }
    }
}
