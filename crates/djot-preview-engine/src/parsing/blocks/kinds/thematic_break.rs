/// Thematic break: three or more `*` or `-`, spaces allowed between them.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 2] = [b'*', b'-'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(rest: &str) -> bool {
        let mut n = 0;
        for b in rest.bytes() {
            match b {
                b' ' | b'\t' => {}
                b if Self::MARKERS.contains(&b) => n += 1,
                _ => return false,
            }
        }
        n >= Self::MIN_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_runs_and_spaced_markers() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("* * *"));
        assert!(ThematicBreak::matches("-*-"));
    }

    #[test]
    fn rejects_short_or_mixed_text() {
        assert!(!ThematicBreak::matches("--"));
        assert!(!ThematicBreak::matches("--- x"));
        assert!(!ThematicBreak::matches("___"));
    }
}
