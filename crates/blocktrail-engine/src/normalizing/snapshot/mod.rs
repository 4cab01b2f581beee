//! # Snapshot Testing Support
//!
//! Utilities for testing normalization via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`render`**: Renders a document as an indented markup outline, stable
//!   enough for `insta` snapshots
//! - **`invariants`**: Runtime checks for tree shape (no childless elements)
//!   and for append-only changes

pub mod invariants;
pub mod render;

pub use invariants::{check as invariants, check_append_only};
pub use render::render;
