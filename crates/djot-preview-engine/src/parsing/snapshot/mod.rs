//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via outline comparisons and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a tree as a stable, indented text outline for
//!   assertions and `insta` snapshots
//! - **`invariants`**: structural checks (block and inline nesting, leaf
//!   kinds childless, tables well formed, depth bounded)
//!
//! Parsing behavior is pinned down by these tests rather than a separate
//! formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
