/// ATX heading: one to six `#` followed by a space or the end of the line.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the trimmed heading text.
    pub fn parse(rest: &str) -> Option<(u8, &str)> {
        let n = rest.bytes().take_while(|&b| b == Self::MARKER).count();
        if n == 0 || n > Self::MAX_LEVEL {
            return None;
        }
        let after = &rest[n..];
        if !after.is_empty() && !after.starts_with([' ', '\t']) {
            return None;
        }
        Some((n as u8, after.trim()))
    }
}
