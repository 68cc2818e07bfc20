//! # HTML Rendering
//!
//! Serialises a document tree to an HTML fragment in one depth-first pass.
//!
//! Text and attribute values are escaped; code content is escaped and never
//! interpreted. Footnotes referenced anywhere in the document are collected
//! into a single endnotes section after the last block.

mod footnotes;
mod writer;

use std::fmt;

use crate::tree::Node;

use footnotes::Footnotes;
use writer::HtmlWriter;

/// Renders `node` to an HTML string.
///
/// Only fails if formatting fails, which writing to a `String` never does;
/// the conversion layer still treats it as a failed primary conversion.
pub fn render(node: &Node) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render_to(&mut out, node)?;
    Ok(out)
}

/// Renders `node` into any [`fmt::Write`] sink.
pub fn render_to<W: fmt::Write>(writer: W, node: &Node) -> fmt::Result {
    let notes = Footnotes::collect(node);
    HtmlWriter::new(writer, notes).run(node)
}
