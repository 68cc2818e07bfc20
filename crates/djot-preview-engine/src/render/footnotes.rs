use std::collections::HashMap;

use crate::tree::{Node, NodeKind};

/// Footnote bookkeeping for one render.
///
/// Notes are numbered in the order their first reference is rendered, so a
/// reference that only appears inside another note gets the next number when
/// that note is written.
#[derive(Debug, Default)]
pub struct Footnotes<'a> {
    definitions: HashMap<&'a str, &'a Node>,
    numbers: HashMap<&'a str, usize>,
    order: Vec<&'a str>,
}

impl<'a> Footnotes<'a> {
    /// Gathers every definition in the tree. The first definition of a
    /// label wins.
    pub fn collect(root: &'a Node) -> Self {
        let mut notes = Self::default();
        notes.visit(root);
        notes
    }

    fn visit(&mut self, node: &'a Node) {
        if let NodeKind::FootnoteDefinition { label } = &node.kind {
            self.definitions.entry(label.as_str()).or_insert(node);
        }
        for child in &node.children {
            self.visit(child);
        }
    }

    /// Number for `label`, and whether this is its first reference.
    pub fn reference(&mut self, label: &'a str) -> (usize, bool) {
        if let Some(&n) = self.numbers.get(label) {
            return (n, false);
        }
        self.order.push(label);
        let n = self.order.len();
        self.numbers.insert(label, n);
        (n, true)
    }

    /// Label of the note numbered `index + 1`.
    pub fn label_at(&self, index: usize) -> Option<&'a str> {
        self.order.get(index).copied()
    }

    pub fn definition(&self, label: &str) -> Option<&'a Node> {
        self.definitions.get(label).copied()
    }

    /// No note has been referenced yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
