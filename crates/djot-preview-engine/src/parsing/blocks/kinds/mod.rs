//! # Block Kinds
//!
//! Block-specific types that own their delimiters and line-level syntax.
//! The builder asks these types questions; it never inspects marker bytes
//! itself.

pub mod block_quote;
pub mod code_fence;
pub mod footnote_def;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use footnote_def::FootnoteDefinition;
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list_item::{ListItem, ListItemStart, ListMarker};
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
