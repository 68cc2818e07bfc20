/// Indented code: lines indented four or more columns outside a paragraph.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: usize = 4;

    /// Content text with trailing blank lines dropped and a final newline.
    pub fn text(lines: &[String]) -> String {
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let mut text = String::new();
        for line in &lines[..end] {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_trailing_blank_lines() {
        let lines: Vec<String> = ["a", "", "  b", "", ""].map(String::from).into();
        assert_eq!(IndentedCode::text(&lines), "a\n\n  b\n");
    }

    #[test]
    fn all_blank_is_empty() {
        assert_eq!(IndentedCode::text(&[String::new()]), "");
    }
}
