use djot_preview_engine::{
    ConversionPath, Converter, PreviewSession, PreviewUpdate, Theme, convert, fallback_convert,
    parsing::{parse_document, snapshot},
    render, render_full_document,
};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn fixture_basics() {
    assert_fixture("basics");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_tables_and_notes() {
    assert_fixture("tables_and_notes");
}

fn read_fixture(file: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{file}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

/// Renders `tests/fixtures/{name}.dj` and compares it with `{name}.html`,
/// ignoring line breaks between tags.
fn assert_fixture(name: &str) {
    init_logging();
    let source = read_fixture(&format!("{name}.dj"));
    let expected = read_fixture(&format!("{name}.html"));

    let doc = parse_document(&source);
    snapshot::invariants(&doc);

    let conversion = convert(&source);
    assert_eq!(conversion.path, ConversionPath::Primary);
    assert_eq!(
        conversion.html.replace('\n', ""),
        expected.replace('\n', "")
    );
}

#[test]
fn basics_html_snapshot() {
    let html = convert(&read_fixture("basics.dj")).html;
    insta::assert_snapshot!(html, @r#"
    <h1>Title</h1>
    <p>Some <strong>bold</strong>, <em>emphasis</em> and <code>code</code>.</p>
    <blockquote>
    <p>q</p>
    </blockquote>
    <hr>
    <pre><code class="language-rust">fn main() {}
    </code></pre>
    "#);
}

#[test]
fn document_tree_snapshot() {
    insta::assert_yaml_snapshot!(parse_document("# Hi\n\n*x*"), @r"
    kind: Document
    children:
      - kind:
          Heading:
            level: 1
        children:
          - kind:
              Text: Hi
            children: []
      - kind: Paragraph
        children:
          - kind: Strong
            children:
              - kind:
                  Text: x
                children: []
    ");
}

#[test]
fn rerendering_is_idempotent() {
    let source = "# A\n\n- x[^1]\n- y\n\n| a |\n|---|\n| b |\n\n[^1]: *n*";
    let first = render(&parse_document(source)).unwrap();
    let second = render(&parse_document(source)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn special_characters_are_escaped_everywhere() {
    let html = convert("<x> & \"q\"\n\n`<x> & \"q\"`\n\n```\n<x> & \"q\"\n```").html;
    assert!(!html.contains("<x>"));
    assert_eq!(html.matches("&lt;x&gt; &amp; &quot;q&quot;").count(), 3);
}

#[test]
fn fallback_and_primary_agree_on_simple_input() {
    init_logging();
    for source in ["*a*", "###### x", "_e_ `c`", "{=m=}"] {
        let primary = convert(source).html;
        let fallback = Converter::fallback_only("test").convert(source);
        assert_eq!(fallback.path, ConversionPath::Fallback);
        assert_eq!(fallback.html, primary, "source: {source:?}");
        assert_eq!(fallback_convert(source), primary);
    }
}

#[test]
fn unclosed_markers_are_literal() {
    assert_eq!(convert("*a").html, "<p>*a</p>\n");
}

#[test]
fn pathological_nesting_does_not_fail() {
    init_logging();
    let deep_quotes = ">".repeat(10_000);
    let deep_brackets = "[".repeat(10_000);
    let deep_strong = "*_".repeat(5_000);
    for source in [deep_quotes, deep_brackets, deep_strong] {
        let conversion = convert(&source);
        assert_eq!(conversion.path, ConversionPath::Primary);
        snapshot::invariants(&parse_document(&source));
    }
}

#[test]
fn mixed_unmatched_openers_convert_quickly() {
    init_logging();
    let n = 20_000;
    let inputs = [
        format!("{}{}{}", "[".repeat(n), "_a ".repeat(n), "]".repeat(n)),
        format!("{}{}{}", "![".repeat(n), "{=b ".repeat(n), "]x".repeat(n)),
        "*a _b [c](d {+e ^f".repeat(n / 4),
    ];
    for source in &inputs {
        let start = Instant::now();
        let conversion = convert(source);
        assert!(
            start.elapsed() < Duration::from_secs(1),
            "took {:?} for {} bytes",
            start.elapsed(),
            source.len()
        );
        assert_eq!(conversion.path, ConversionPath::Primary);
    }
}

#[test]
fn emphasis_after_a_closed_span_still_forms() {
    assert_eq!(
        convert("_a _b c* d_ *e*").html,
        "<p>_a <em>b c* d</em> <strong>e</strong></p>\n"
    );
}

#[test]
fn export_and_preview_pages() {
    let html = convert("# Notes").html;
    let page = render_full_document(&html, "Notes");
    assert!(page.contains("<title>Notes</title>"));
    assert!(page.contains("<h1>Notes</h1>"));

    let t0 = Instant::now();
    let session = PreviewSession::new(Converter::new(), Theme::Light, Duration::from_millis(10));
    assert!(session.open("x").contains("<div id=\"content\">\n<p>x</p>\n</div>"));
    session.edit("y", t0);
    assert_eq!(
        session.tick(t0 + Duration::from_millis(10)),
        Some(PreviewUpdate::Fragment("<p>y</p>\n".to_string()))
    );
}
