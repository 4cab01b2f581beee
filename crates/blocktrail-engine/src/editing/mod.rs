/*!
 * # Editing Host
 *
 * The host side of normalization: an [`Editor`] owns the document tree and
 * the normalization plugins registered on it.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Owner
 * - The [`Editor`] owns the [`Document`](crate::models::Document); plugins
 *   never hold on to nodes between calls
 * - Nodes are borrowed for inspection and mutated in place
 *
 * ### 2. Transforms and Operations
 * - Every mutation goes through [`Transforms`], which records an
 *   [`Operation`] in the editor's log
 * - The log lets callers observe exactly what normalization changed
 *
 * ### 3. Normalization Dispatch
 * - `normalize_node(path)` runs every plugin, in registration order, for one
 *   path; it reports whether anything changed
 * - `normalize()` repeats passes over all element paths (children first,
 *   root last) until a pass changes nothing
 * - A pass cap turns a rule that never converges into
 *   [`EditorError::NoFixedPoint`] instead of a hang
 *
 * ## Module Structure
 *
 * - **`editor`**: the `Editor` host and its dispatch loop
 * - **`transforms`**: `Transforms` handle and the `insert_node` primitive
 * - **`operation`**: recorded mutations
 *
 * ## Usage Pattern
 *
 * ```rust
 * use blocktrail_engine::editing::Editor;
 * use blocktrail_engine::models::{Document, Path};
 * use blocktrail_engine::normalizing::{TrailingNodeOptions, with_trailing_node};
 *
 * let doc = Document::builder().paragraph("hello").build();
 * let mut editor = with_trailing_node(Editor::new(doc), TrailingNodeOptions::default());
 *
 * let changed = editor.normalize_node(&Path::root()).unwrap();
 * assert!(!changed);
 * ```
 */

pub mod editor;
pub mod operation;
pub mod transforms;

pub use editor::{DEFAULT_MAX_PASSES, Editor};
pub use operation::Operation;
pub use transforms::Transforms;

use crate::models::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Invalid path: {path}")]
    InvalidPath { path: Path },
    #[error("Node at {path} is not an element")]
    NotAnElement { path: Path },
    #[error("Normalization still changing the document after {passes} passes")]
    NoFixedPoint { passes: usize },
}
