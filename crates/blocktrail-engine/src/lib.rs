pub mod editing;
pub mod io;
pub mod models;
pub mod normalizing;

// Re-export key types for easier usage
pub use editing::{Editor, EditorError, Operation, Transforms};
pub use io::*;
pub use models::*;
pub use normalizing::{NormalizeNode, TrailingNode, TrailingNodeOptions, with_trailing_node};
