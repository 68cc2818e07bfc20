//! # Inline Scanning
//!
//! Cursor-based inline scanning with explicit raw zones and one delimiter
//! stack per marker slot.
//!
//! ## Architecture
//!
//! Inline scanning is separate from block parsing and runs over the joined
//! text of inline-eligible blocks (paragraphs, headings, table cells).
//!
//! The scanner makes a single left-to-right pass:
//! - Escapes and code spans are resolved on the spot; code spans are raw
//!   zones that suppress all other parsing inside them
//! - Footnote references and autolinks are resolved on the spot with bounded
//!   lookahead
//! - Emphasis-family markers and brackets push openers; closers pop the
//!   nearest compatible opener and wrap the items in between
//! - Anything left open at the end is literal text
//!
//! ## Modules
//!
//! - **`types`**: scanner-internal `Item` and `Opener`
//! - **`kinds`**: inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{MAX_INLINE_DEPTH, parse_inline};
