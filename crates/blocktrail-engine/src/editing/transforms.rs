use crate::editing::{EditorError, Operation};
use crate::models::{Document, Node, Path};

/// Mutable access to the document handed to normalization plugins.
///
/// Every change goes through here so it lands in the editor's operation log.
pub struct Transforms<'a> {
    document: &'a mut Document,
    operations: &'a mut Vec<Operation>,
}

impl<'a> Transforms<'a> {
    pub(crate) fn new(document: &'a mut Document, operations: &'a mut Vec<Operation>) -> Self {
        Self {
            document,
            operations,
        }
    }

    pub fn document(&self) -> &Document {
        self.document
    }

    /// Insert `node` so that it ends up at `at`.
    ///
    /// `at` may point one past the last child of its parent to append.
    pub fn insert_node(&mut self, at: &Path, node: Node) -> Result<(), EditorError> {
        insert_node(self.document, at, node.clone())?;
        log::trace!("insert_node at {at}");
        self.operations.push(Operation::InsertNode {
            path: at.clone(),
            node,
        });
        Ok(())
    }

    /// Append `node` as the last child of the document.
    pub fn append_to_root(&mut self, node: Node) -> Result<Path, EditorError> {
        let at = Path::from([self.document.children.len()]);
        self.insert_node(&at, node)?;
        Ok(at)
    }
}

pub(crate) fn insert_node(
    document: &mut Document,
    at: &Path,
    node: Node,
) -> Result<(), EditorError> {
    let (Some(index), Some(parent)) = (at.last(), at.parent()) else {
        return Err(EditorError::InvalidPath { path: at.clone() });
    };

    if !parent.is_root() && document.node(&parent).is_none() {
        return Err(EditorError::InvalidPath { path: at.clone() });
    }

    let children = document
        .children_at_mut(&parent)
        .ok_or(EditorError::NotAnElement { path: parent })?;

    if index > children.len() {
        return Err(EditorError::InvalidPath { path: at.clone() });
    }

    children.insert(index, node);
    Ok(())
}
