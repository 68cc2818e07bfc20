//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: backtick runs; raw zone that suppresses other parsing
//! - **`Marker`**: the delimiter family resolved on the opener stack
//!   (`*`, `_`, `^`, `~`, `{=`/`=}`, `{+`/`+}`, `{-`/`-}`, `[`, `![`)
//! - **`LinkTarget`**: `(dest "title")` following a closing bracket
//! - **`FootnoteRef`**: `[^label]`
//! - **`Autolink`**: `<https://…>` and `<user@host>`
//! - **`Escape`**: backslash escapes
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod autolink;
pub mod code_span;
pub mod escape;
pub mod footnote_ref;
pub mod link;
pub mod marker;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use escape::Escape;
pub use footnote_ref::FootnoteRef;
pub use link::LinkTarget;
pub use marker::Marker;
