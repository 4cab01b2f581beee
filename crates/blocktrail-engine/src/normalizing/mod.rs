//! # Normalization Rules
//!
//! Rules that repair structural invariants of the document after a mutation.
//!
//! ## Modules
//!
//! - **`trailing_node`**: keeps an editable default block at the end of the
//!   document
//! - **`snapshot`**: outline rendering and invariant checks used by tests
//!
//! ## Dispatch
//!
//! A rule implements [`NormalizeNode`] and is registered on the
//! [`Editor`](crate::editing::Editor). The editor calls every rule for each
//! path it normalizes; a rule decides for itself which paths it cares about
//! and returns without touching the tree for the rest.

pub mod snapshot;
pub mod trailing_node;

#[cfg(test)]
mod tests;

pub use trailing_node::{MatchFn, TrailingNode, TrailingNodeOptions, with_trailing_node};

use crate::editing::{EditorError, Transforms};
use crate::models::Path;

/// A normalization rule.
pub trait NormalizeNode: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Normalize the node at `path`, mutating only through `tx`.
    fn normalize_node(&self, tx: &mut Transforms<'_>, path: &Path) -> Result<(), EditorError>;
}
