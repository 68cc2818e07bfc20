use std::fmt::Write;

use crate::tree::{Alignment, Node, NodeKind};

/// Renders `node` as an outline, one node per line, children indented by
/// two spaces.
///
/// ```text
/// Document
///   Paragraph
///     Text "a "
///     Strong
///       Text "b"
/// ```
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&label(&node.kind));
    out.push('\n');
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}

/// Short, stable label for a node kind.
pub fn label(kind: &NodeKind) -> String {
    let mut s = String::new();
    // Writing to a String cannot fail.
    let _ = match kind {
        NodeKind::Heading { level } => write!(s, "Heading({level})"),
        NodeKind::BulletList { tight } => write!(s, "BulletList({})", tightness(*tight)),
        NodeKind::OrderedList { start, tight } => {
            write!(s, "OrderedList({start}, {})", tightness(*tight))
        }
        NodeKind::CodeBlock { lang, text } => match lang {
            Some(lang) => write!(s, "CodeBlock({lang}) {text:?}"),
            None => write!(s, "CodeBlock {text:?}"),
        },
        NodeKind::Table { alignments } => {
            let cols: Vec<_> = alignments.iter().map(|a| align(*a)).collect();
            write!(s, "Table[{}]", cols.join(","))
        }
        NodeKind::TableCell { header, align: a } => {
            let tag = if *header { "th" } else { "td" };
            match a {
                Alignment::None => write!(s, "Cell({tag})"),
                _ => write!(s, "Cell({tag}, {})", align(*a)),
            }
        }
        NodeKind::FootnoteDefinition { label } => write!(s, "FootnoteDefinition({label})"),
        NodeKind::Text(t) => write!(s, "Text {t:?}"),
        NodeKind::Code(t) => write!(s, "Code {t:?}"),
        NodeKind::Link { dest, title } => match title {
            Some(title) => write!(s, "Link({dest}, {title:?})"),
            None => write!(s, "Link({dest})"),
        },
        NodeKind::Image { dest, alt, .. } => write!(s, "Image({dest}, alt={alt:?})"),
        NodeKind::FootnoteReference { label } => write!(s, "FootnoteReference({label})"),
        NodeKind::TaskMarker { checked } => write!(s, "TaskMarker({checked})"),
        other => write!(s, "{other:?}"),
    };
    s
}

fn tightness(tight: bool) -> &'static str {
    if tight { "tight" } else { "loose" }
}

fn align(a: Alignment) -> &'static str {
    match a {
        Alignment::None => "-",
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}
