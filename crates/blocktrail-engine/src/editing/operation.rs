use crate::models::{Node, Path};

/// A mutation applied to the document through the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    InsertNode { path: Path, node: Node },
}

impl Operation {
    pub fn path(&self) -> &Path {
        match self {
            Operation::InsertNode { path, .. } => path,
        }
    }
}
