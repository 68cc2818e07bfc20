//! Block and document tests for the parsing module.
//!
//! Each test parses a document, checks tree invariants and compares the
//! outline produced by `snapshot::normalize`, either directly or as an
//! `insta` inline snapshot.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    parsing::{
        blocks::MAX_CONTAINER_DEPTH,
        parse_document,
        snapshot::{invariants, outline},
    },
    tree::{Node, NodeKind},
};

fn parse(src: &str) -> String {
    let doc = parse_document(src);
    invariants(&doc);
    outline(&doc)
}

fn lines(ls: &[&str]) -> String {
    let mut s = ls.join("\n");
    s.push('\n');
    s
}

#[test]
fn heading_then_paragraph() {
    assert_eq!(
        parse("# Title\n\nSome *bold* and `code`."),
        lines(&[
            "Document",
            "  Heading(1)",
            "    Text \"Title\"",
            "  Paragraph",
            "    Text \"Some \"",
            "    Strong",
            "      Text \"bold\"",
            "    Text \" and \"",
            "    Code \"code\"",
            "    Text \".\"",
        ])
    );
}

#[test]
fn soft_and_hard_breaks() {
    assert_eq!(
        parse("one\ntwo\\\nthree"),
        lines(&[
            "Document",
            "  Paragraph",
            "    Text \"one two\"",
            "    LineBreak",
            "    Text \"three\"",
        ])
    );
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("   \n\t\n")]
fn empty_and_blank_documents(#[case] src: &str) {
    assert_eq!(parse(src), "Document\n");
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse("a\r\nb\r\n\r\nc"),
        lines(&[
            "Document",
            "  Paragraph",
            "    Text \"a b\"",
            "  Paragraph",
            "    Text \"c\"",
        ])
    );
}

#[test]
fn block_quote_lazy_continuation() {
    assert_eq!(
        parse("> a\nb\n> c"),
        lines(&[
            "Document",
            "  BlockQuote",
            "    Paragraph",
            "      Text \"a b c\"",
        ])
    );
}

#[test]
fn nested_quotes_close_on_blank_marker_line() {
    assert_eq!(
        parse("> > deep\n>\n> shallow"),
        lines(&[
            "Document",
            "  BlockQuote",
            "    BlockQuote",
            "      Paragraph",
            "        Text \"deep\"",
            "    Paragraph",
            "      Text \"shallow\"",
        ])
    );
}

#[test]
fn fenced_code_is_raw() {
    assert_eq!(
        parse("```rust\nlet x = 1;\n\n  *no*\n```\nafter"),
        lines(&[
            "Document",
            "  CodeBlock(rust) \"let x = 1;\\n\\n  *no*\\n\"",
            "  Paragraph",
            "    Text \"after\"",
        ])
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        parse("~~~\ncode"),
        lines(&["Document", "  CodeBlock \"code\\n\""])
    );
}

#[test]
fn fence_indent_is_stripped_from_content() {
    assert_eq!(
        parse("  ```\n  code\n    more\n  ```"),
        lines(&["Document", "  CodeBlock \"code\\n  more\\n\""])
    );
}

#[test]
fn fence_inside_block_quote() {
    assert_eq!(
        parse("> ```\n> code\n> ```\n"),
        lines(&["Document", "  BlockQuote", "    CodeBlock \"code\\n\""])
    );
}

#[test]
fn indented_code_keeps_inner_blank_lines() {
    assert_eq!(
        parse("    a\n\n    b\n\nc"),
        lines(&[
            "Document",
            "  CodeBlock \"a\\n\\nb\\n\"",
            "  Paragraph",
            "    Text \"c\"",
        ])
    );
}

#[test]
fn leading_tab_is_indented_code() {
    assert_eq!(
        parse("\tcode"),
        lines(&["Document", "  CodeBlock \"code\\n\""])
    );
}

#[test]
fn indented_line_continues_paragraph() {
    assert_eq!(
        parse("para\n    more"),
        lines(&["Document", "  Paragraph", "    Text \"para more\""])
    );
}

#[test]
fn interrupting_blocks() {
    assert_eq!(
        parse("para\n***\n## h"),
        lines(&[
            "Document",
            "  Paragraph",
            "    Text \"para\"",
            "  ThematicBreak",
            "  Heading(2)",
            "    Text \"h\"",
        ])
    );
}

#[test]
fn tight_bullet_list() {
    assert_eq!(
        parse("- a\n- b"),
        lines(&[
            "Document",
            "  BulletList(tight)",
            "    ListItem",
            "      Paragraph",
            "        Text \"a\"",
            "    ListItem",
            "      Paragraph",
            "        Text \"b\"",
        ])
    );
}

#[test]
fn blank_between_items_makes_list_loose() {
    assert_eq!(
        parse("- a\n\n- b"),
        lines(&[
            "Document",
            "  BulletList(loose)",
            "    ListItem",
            "      Paragraph",
            "        Text \"a\"",
            "    ListItem",
            "      Paragraph",
            "        Text \"b\"",
        ])
    );
}

#[test]
fn trailing_blank_keeps_list_tight() {
    assert!(parse("- a\n- b\n\npara").contains("BulletList(tight)"));
}

#[test]
fn ordered_list_records_start() {
    assert!(parse("3. x\n4. y").starts_with("Document\n  OrderedList(3, tight)\n"));
}

#[test]
fn marker_change_starts_new_list() {
    let out = parse("- a\n+ b");
    assert_eq!(out.matches("BulletList").count(), 2);
}

#[test]
fn nested_list() {
    assert_eq!(
        parse("- a\n  - b\n- c"),
        lines(&[
            "Document",
            "  BulletList(tight)",
            "    ListItem",
            "      Paragraph",
            "        Text \"a\"",
            "      BulletList(tight)",
            "        ListItem",
            "          Paragraph",
            "            Text \"b\"",
            "    ListItem",
            "      Paragraph",
            "        Text \"c\"",
        ])
    );
}

#[test]
fn list_item_lazy_continuation() {
    assert_eq!(
        parse("- a\nlazy"),
        lines(&[
            "Document",
            "  BulletList(tight)",
            "    ListItem",
            "      Paragraph",
            "        Text \"a lazy\"",
        ])
    );
}

#[test]
fn heading_inside_list_item() {
    assert_eq!(
        parse("- # h"),
        lines(&[
            "Document",
            "  BulletList(tight)",
            "    ListItem",
            "      Heading(1)",
            "        Text \"h\"",
        ])
    );
}

#[test]
fn task_list_items() {
    insta::assert_snapshot!(parse("- [ ] todo\n- [x] done"), @r#"
    Document
      BulletList(tight)
        ListItem
          Paragraph
            TaskMarker(false)
            Text "todo"
        ListItem
          Paragraph
            TaskMarker(true)
            Text "done"
    "#);
}

#[test]
fn ordered_item_not_at_one_does_not_interrupt() {
    assert_eq!(
        parse("text\n2. not a list"),
        lines(&["Document", "  Paragraph", "    Text \"text 2. not a list\""])
    );
}

#[test]
fn table_with_alignment_and_ragged_rows() {
    assert_eq!(
        parse("| a | b |\n|:--|--:|\n| 1 | 2 | 3 |\n| 4 |"),
        lines(&[
            "Document",
            "  Table[left,right]",
            "    TableRow",
            "      Cell(th, left)",
            "        Text \"a\"",
            "      Cell(th, right)",
            "        Text \"b\"",
            "    TableRow",
            "      Cell(td, left)",
            "        Text \"1\"",
            "      Cell(td, right)",
            "        Text \"2\"",
            "    TableRow",
            "      Cell(td, left)",
            "        Text \"4\"",
            "      Cell(td, right)",
        ])
    );
}

#[test]
fn separator_without_header_is_text() {
    assert_eq!(
        parse("|---|"),
        lines(&["Document", "  Paragraph", "    Text \"|---|\""])
    );
}

#[test]
fn table_ends_at_non_row_line() {
    let out = parse("| a |\n|---|\n| 1 |\nafter");
    assert!(out.contains("Table[-]"));
    assert!(out.ends_with("  Paragraph\n    Text \"after\"\n"));
}

#[test]
fn footnote_definition_with_continuation() {
    assert_eq!(
        parse("Note[^1].\n\n[^1]: The *note*.\n    More.\n\nAfter"),
        lines(&[
            "Document",
            "  Paragraph",
            "    Text \"Note\"",
            "    FootnoteReference(1)",
            "    Text \".\"",
            "  FootnoteDefinition(1)",
            "    Paragraph",
            "      Text \"The \"",
            "      Strong",
            "        Text \"note\"",
            "      Text \". More.\"",
            "  Paragraph",
            "    Text \"After\"",
        ])
    );
}

fn quote_depth(node: &Node) -> usize {
    node.children
        .iter()
        .find(|c| c.kind == NodeKind::BlockQuote)
        .map_or(0, |c| 1 + quote_depth(c))
}

#[test]
fn container_depth_is_capped() {
    let src = format!("{} x", ">".repeat(200));
    let doc = parse_document(&src);
    invariants(&doc);
    let depth = quote_depth(&doc);
    assert!(depth < MAX_CONTAINER_DEPTH);
    assert!(depth > MAX_CONTAINER_DEPTH / 2);
    assert!(doc.plain_text().ends_with("> x"));
}

#[test]
fn deeply_nested_lists_are_capped() {
    let src: String = (0..100)
        .map(|i| format!("{}- item\n", "  ".repeat(i)))
        .collect();
    let doc = parse_document(&src);
    invariants(&doc);
    assert!(doc.plain_text().contains("item"));
}
