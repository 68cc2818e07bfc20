/// Paragraph line handling.
///
/// Lines are stored trimmed and joined with `\n`; the inline scanner turns
/// each join into a soft break (a space) or, after a backslash, a hard break.
pub struct Paragraph;

impl Paragraph {
    pub fn line(rest: &str) -> String {
        rest.trim().to_string()
    }

    pub fn join(lines: &[String]) -> String {
        lines.join("\n")
    }
}
