use crate::tree::NodeKind;

/// A delimiter that is resolved on the opener stack.
///
/// Convention: `*` is strong and `_` is emphasis, everywhere (the fallback
/// converter uses the same mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Strong,
    Emphasis,
    Superscript,
    Subscript,
    Mark,
    Insert,
    Delete,
    LinkOpen,
    ImageOpen,
}

impl Marker {
    /// Number of distinct stack-search slots (see [`Marker::slot`]).
    pub const SLOTS: usize = 8;

    /// The single-character delimiter for the symmetric markers.
    pub fn from_char(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Marker::Strong),
            b'_' => Some(Marker::Emphasis),
            b'^' => Some(Marker::Superscript),
            b'~' => Some(Marker::Subscript),
            _ => None,
        }
    }

    /// The braced marker introduced by `{` + `b` or closed by `b` + `}`.
    pub fn from_brace(b: u8) -> Option<Self> {
        match b {
            b'=' => Some(Marker::Mark),
            b'+' => Some(Marker::Insert),
            b'-' => Some(Marker::Delete),
            _ => None,
        }
    }

    /// Openers that a closer of this marker may match share a slot; both
    /// bracket kinds are closed by `]`.
    pub fn slot(self) -> usize {
        match self {
            Marker::Strong => 0,
            Marker::Emphasis => 1,
            Marker::Superscript => 2,
            Marker::Subscript => 3,
            Marker::Mark => 4,
            Marker::Insert => 5,
            Marker::Delete => 6,
            Marker::LinkOpen | Marker::ImageOpen => 7,
        }
    }

    /// Node kind produced when a span of this marker closes. Brackets build
    /// links and images from their target instead.
    pub fn span_kind(self) -> Option<NodeKind> {
        match self {
            Marker::Strong => Some(NodeKind::Strong),
            Marker::Emphasis => Some(NodeKind::Emphasis),
            Marker::Superscript => Some(NodeKind::Superscript),
            Marker::Subscript => Some(NodeKind::Subscript),
            Marker::Mark => Some(NodeKind::Mark),
            Marker::Insert => Some(NodeKind::Insert),
            Marker::Delete => Some(NodeKind::Delete),
            Marker::LinkOpen | Marker::ImageOpen => None,
        }
    }
}
