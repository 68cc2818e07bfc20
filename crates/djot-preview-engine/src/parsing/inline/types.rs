use crate::{parsing::rope::Span, tree::Node};

use super::kinds::Marker;

/// An entry of the scanner's working sequence.
///
/// Scanner-internal: delimiters stay in the sequence until they are either
/// matched (and their run of items is wrapped into a node) or the scan ends,
/// at which point they degrade to the literal text their span covers.
#[derive(Debug, Clone)]
pub enum Item {
    /// Literal text.
    Text(String),
    /// A finished inline node.
    Node(Node),
    /// A potential opener.
    Delim { marker: Marker, span: Span },
}

/// A pending opener on the delimiter stack.
#[derive(Debug, Clone, Copy)]
pub struct Opener {
    pub marker: Marker,
    /// Index of the opener's [`Item::Delim`] in the working sequence.
    pub item: usize,
}
