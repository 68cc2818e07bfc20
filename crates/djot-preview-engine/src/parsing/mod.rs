//! # Parsing
//!
//! Source text to document tree. [`parse_document`] runs the block phase
//! line by line; every paragraph, heading and table cell is handed to
//! [`parse_inline`] as it closes.
//!
//! Both phases are total: any input produces a tree, and text that does not
//! form valid markup stays literal.

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, LineClassifier};
use rope::Source;

use crate::tree::Node;

pub use inline::parse_inline;

/// Parses a whole document into a tree rooted at `NodeKind::Document`.
pub fn parse_document(text: &str) -> Node {
    let source = Source::new(text);
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in source.lines() {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let doc = builder.finish();
    log::trace!("parsed document: {} top-level blocks", doc.children.len());
    doc
}
