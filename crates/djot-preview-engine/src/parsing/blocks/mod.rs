//! # Block Parsing
//!
//! Two-phase block parsing over an explicit container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts only (span, tab-expanded text, blank status).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the stack of
//!    open containers (block quotes, lists, list items, footnote definitions)
//!    and one open leaf, and appends finished nodes to the innermost
//!    container as blocks close.
//!
//! ## Modules
//!
//! - **`kinds`**: block types that own their delimiters and line syntax
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`line`**: `LineCursor`, column-aware prefix stripping
//! - **`containers`**: `ContainerFrame` continuation rules and node building
//! - **`open`**: `try_open` dispatch for block starts, in precedence order
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Container nesting is capped at [`MAX_CONTAINER_DEPTH`]; deeper markers
//!   are paragraph text
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - No line is ever rejected; the builder has no error state

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod line;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use containers::{ContainerFrame, MAX_CONTAINER_DEPTH};
