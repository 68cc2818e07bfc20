//! # Fallback Conversion
//!
//! A deliberately small, line-oriented converter used when the primary
//! parser and renderer cannot run. It understands headings, strong,
//! emphasis, code spans, mark/insert/delete spans and thematic breaks, and
//! wraps everything else in paragraphs. There are no lists, tables, links,
//! footnotes or nesting.
//!
//! Text is escaped before any substitution, so every tag in the output was
//! produced by a rule. Each rule is a linear-time `regex`, compiled once.

use std::{borrow::Cow, sync::OnceLock};

use html_escape::encode_double_quoted_attribute;
use regex::Regex;

use crate::parsing::rope::normalize_newlines;

/// `(pattern, replacement)` pairs, applied in order.
const RULES: &[(&str, &str)] = &[
    (r"(?m)^###### (.+)$", "<h6>$1</h6>"),
    (r"(?m)^##### (.+)$", "<h5>$1</h5>"),
    (r"(?m)^#### (.+)$", "<h4>$1</h4>"),
    (r"(?m)^### (.+)$", "<h3>$1</h3>"),
    (r"(?m)^## (.+)$", "<h2>$1</h2>"),
    (r"(?m)^# (.+)$", "<h1>$1</h1>"),
    (r"\*([^*\n]+)\*", "<strong>$1</strong>"),
    (r"_([^_\n]+)_", "<em>$1</em>"),
    (r"`([^`\n]+)`", "<code>$1</code>"),
    (r"\{=([^=\n]+)=\}", "<mark>$1</mark>"),
    (r"\{\+([^+\n]+)\+\}", "<ins>$1</ins>"),
    (r"\{-([^-\n]+)-\}", "<del>$1</del>"),
    (r"(?m)^---+$", "<hr>"),
    (r"(?m)^\*\*\*+$", "<hr>"),
];

fn rules() -> &'static [(Regex, &'static str)] {
    static RULES_RE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES_RE.get_or_init(|| {
        RULES
            .iter()
            .map(|&(pat, rep)| (Regex::new(pat).expect("Invalid fallback regex"), rep))
            .collect()
    })
}

/// Converts `text` to an HTML fragment with the fallback rules. Never fails.
pub fn fallback_convert(text: &str) -> String {
    let text = normalize_newlines(text);
    let mut html = encode_double_quoted_attribute(text.as_ref()).into_owned();
    for (re, rep) in rules() {
        if let Cow::Owned(s) = re.replace_all(&html, *rep) {
            html = s;
        }
    }
    let out = wrap_paragraphs(&html);
    log::debug!("fallback conversion: {} bytes in, {} bytes out", text.len(), out.len());
    out
}

/// Blank-line separated chunks become paragraphs; heading and break lines
/// stand alone; empty paragraphs are dropped.
fn wrap_paragraphs(html: &str) -> String {
    let mut out = String::new();
    let mut para: Vec<&str> = vec![];
    for line in html.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut out, &mut para);
        } else if is_standalone(line) {
            flush_paragraph(&mut out, &mut para);
            out.push_str(line);
            out.push('\n');
        } else {
            para.push(line.trim());
        }
    }
    flush_paragraph(&mut out, &mut para);
    out
}

fn flush_paragraph(out: &mut String, para: &mut Vec<&str>) {
    if para.is_empty() {
        return;
    }
    out.push_str("<p>");
    out.push_str(&para.join("\n"));
    out.push_str("</p>\n");
    para.clear();
}

/// Lines produced by the heading and break rules.
fn is_standalone(line: &str) -> bool {
    let b = line.as_bytes();
    line == "<hr>"
        || (b.len() > 3 && b.starts_with(b"<h") && b[2].is_ascii_digit() && b[3] == b'>')
}
