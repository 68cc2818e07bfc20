pub mod convert;
pub mod export;
pub mod fallback;
pub mod parsing;
pub mod preview;
pub mod render;
pub mod tree;

// Re-export key types for easier usage
pub use convert::{Conversion, ConversionPath, ConvertError, Converter, Primary, convert};
pub use export::{
    STYLESHEET, Theme, preview_shell, preview_shell_with_css, render_full_document,
    render_full_document_with_css,
};
pub use fallback::fallback_convert;
pub use parsing::{parse_document, parse_inline};
pub use preview::{DEFAULT_DEBOUNCE, PendingEdit, PreviewSession, PreviewUpdate};
pub use render::{render, render_to};
pub use tree::{Alignment, Node, NodeKind};
