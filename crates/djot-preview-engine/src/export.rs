//! # Export and Preview Pages
//!
//! Wraps rendered fragments in complete HTML documents: a standalone export
//! page, and the live preview shell whose content region is replaced in
//! place as the source changes.

use html_escape::encode_double_quoted_attribute;
use serde::{Deserialize, Serialize};

/// Colour scheme of the preview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Dark when the background's relative luminance is below one half.
    pub fn from_background(r: u8, g: u8, b: u8) -> Self {
        let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
        if luminance < 0.5 {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Body class selecting the stylesheet variant.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Shared stylesheet. Dark colours apply under `prefers-color-scheme: dark`
/// unless the body is explicitly `light`, and always under `body.dark`.
pub const STYLESHEET: &str = r#"
:root {
  --fg: #24292f; --bg: #ffffff; --muted: #57606a; --border: #d0d7de;
  --code-bg: #f6f8fa; --link: #0969da; --mark: #fff8c5;
  --ins: #dafbe1; --del: #ffebe9;
}
@media (prefers-color-scheme: dark) {
  body:not(.light) {
    --fg: #c9d1d9; --bg: #0d1117; --muted: #8b949e; --border: #30363d;
    --code-bg: #161b22; --link: #58a6ff; --mark: #bb800926;
    --ins: #2ea04326; --del: #f8514926;
  }
}
body.dark {
  --fg: #c9d1d9; --bg: #0d1117; --muted: #8b949e; --border: #30363d;
  --code-bg: #161b22; --link: #58a6ff; --mark: #bb800926;
  --ins: #2ea04326; --del: #f8514926;
}
body {
  color: var(--fg); background: var(--bg);
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  line-height: 1.6; max-width: 50em; margin: 0 auto; padding: 1em 2em;
}
h1, h2, h3, h4, h5, h6 { line-height: 1.25; margin: 1.5em 0 0.5em; }
h1, h2 { border-bottom: 1px solid var(--border); padding-bottom: 0.3em; }
a { color: var(--link); }
code, pre { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
code { background: var(--code-bg); padding: 0.1em 0.3em; border-radius: 4px; }
pre { background: var(--code-bg); padding: 1em; overflow: auto; border-radius: 6px; }
pre code { background: none; padding: 0; }
blockquote { margin: 0; padding: 0 1em; color: var(--muted); border-left: 0.25em solid var(--border); }
table { border-collapse: collapse; }
th, td { border: 1px solid var(--border); padding: 0.3em 0.8em; }
hr { border: 0; border-top: 1px solid var(--border); }
mark { background: var(--mark); color: inherit; }
ins { background: var(--ins); text-decoration: none; }
del { background: var(--del); }
ul.task-list { list-style: none; padding-left: 1.2em; }
ul.task-list input { margin: 0 0.4em 0 -1.2em; }
section[role="doc-endnotes"] { font-size: 0.9em; color: var(--muted); }
a[role="doc-noteref"], a[role="doc-backlink"] { text-decoration: none; }
"#;

/// Writes the shared document head up to and including `<body …>`.
fn head(out: &mut String, title: &str, body_class: Option<&str>, extra_css: Option<&str>) {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>");
    out.push_str(&encode_double_quoted_attribute(title));
    out.push_str("</title>\n<style>");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n");
    if let Some(css) = extra_css {
        out.push_str("<style>\n");
        // Keep user CSS from closing the element early.
        out.push_str(&css.replace("</", "<\\/"));
        out.push_str("\n</style>\n");
    }
    out.push_str("</head>\n");
    match body_class {
        Some(class) => {
            out.push_str("<body class=\"");
            out.push_str(class);
            out.push_str("\">\n");
        }
        None => out.push_str("<body>\n"),
    }
}

/// A complete HTML5 document around `html`, with an escaped `title`.
pub fn render_full_document(html: &str, title: &str) -> String {
    render_full_document_with_css(html, title, None)
}

/// [`render_full_document`] with an additional stylesheet after the
/// built-in one.
pub fn render_full_document_with_css(html: &str, title: &str, extra_css: Option<&str>) -> String {
    let mut out = String::with_capacity(html.len() + STYLESHEET.len() + 512);
    head(&mut out, title, None, extra_css);
    out.push_str(html);
    if !html.is_empty() && !html.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// The live preview page: `html` inside `<div id="content">`, and an
/// `updateContent(html)` function that replaces that region.
pub fn preview_shell(html: &str, theme: Theme) -> String {
    preview_shell_with_css(html, theme, None)
}

pub fn preview_shell_with_css(html: &str, theme: Theme, extra_css: Option<&str>) -> String {
    let mut out = String::with_capacity(html.len() + STYLESHEET.len() + 1024);
    head(&mut out, "Preview", Some(theme.class()), extra_css);
    out.push_str("<div id=\"content\">\n");
    out.push_str(html);
    out.push_str("</div>\n<script>\n");
    out.push_str(UPDATE_SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

const UPDATE_SCRIPT: &str = r#"function updateContent(html) {
  var content = document.getElementById('content');
  var scroll = window.scrollY;
  content.innerHTML = html;
  window.scrollTo(0, scroll);
}
function setTheme(theme) {
  document.body.className = theme;
}
"#;
