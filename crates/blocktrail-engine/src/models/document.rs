use serde::{Deserialize, Serialize};

use super::{BlockType, Element, ElementBuilder, Node, Path};

/// Root of the editable tree.
///
/// The document owns every node. It is itself addressed by the empty
/// [`Path`]; its children are addressed by `[i]`, their children by
/// `[i, j]` and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Parse a document from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Node at `path`, or `None` for the root and for paths that do not
    /// resolve.
    pub fn node(&self, path: &Path) -> Option<&Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.children.get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    /// Children of the node at `path`. The root path yields the document's
    /// own children; text leaves yield `None`.
    pub fn children_at(&self, path: &Path) -> Option<&[Node]> {
        if path.is_root() {
            return Some(&self.children);
        }
        self.node(path)?.as_element().map(|e| e.children.as_slice())
    }

    pub(crate) fn children_at_mut(&mut self, path: &Path) -> Option<&mut Vec<Node>> {
        let mut children = &mut self.children;
        for index in path.indices() {
            children = &mut children.get_mut(*index)?.as_element_mut()?.children;
        }
        Some(children)
    }

    /// Last top-level child with its path.
    pub fn last_child(&self) -> Option<(&Node, Path)> {
        let index = self.children.len().checked_sub(1)?;
        Some((&self.children[index], Path::from([index])))
    }

    /// Paths of every element, children before their parents, in document
    /// order otherwise. The root is not included.
    pub fn element_paths(&self) -> Vec<Path> {
        let mut out = Vec::new();
        collect_element_paths(&self.children, &Path::root(), &mut out);
        out
    }

    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.children)
    }
}

fn collect_element_paths(children: &[Node], parent: &Path, out: &mut Vec<Path>) {
    for (index, child) in children.iter().enumerate() {
        if let Node::Element(element) = child {
            let path = parent.child(index);
            collect_element_paths(&element.children, &path, out);
            out.push(path);
        }
    }
}

/// Fluent builder for documents.
///
/// ```rust
/// # use blocktrail_engine::models::{BlockType, Document, Node};
/// let doc = Document::builder()
///     .block(BlockType::H1, |h| h.child(Node::paragraph("test")))
///     .block(BlockType::H1, |h| h.child(Node::paragraph("test2")))
///     .build();
/// assert_eq!(doc.children.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    children: Vec<Node>,
}

impl DocumentBuilder {
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn block(
        self,
        kind: BlockType,
        build: impl FnOnce(ElementBuilder) -> ElementBuilder,
    ) -> Self {
        let element: Element = build(Element::builder(kind)).build();
        self.child(element)
    }

    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.child(Node::paragraph(text))
    }

    pub fn build(self) -> Document {
        Document::new(self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_headings() -> Document {
        Document::builder()
            .block(BlockType::H1, |h| h.child(Node::paragraph("test")))
            .block(BlockType::H1, |h| h.child(Node::paragraph("test2")))
            .build()
    }

    #[test]
    fn test_node_lookup() {
        let doc = two_headings();

        assert_eq!(doc.node(&Path::root()), None);
        assert_eq!(doc.node(&Path::from([1, 0])), Some(&Node::paragraph("test2")));
        assert_eq!(doc.node(&Path::from([1, 0, 0])), Some(&Node::text("test2")));
        assert_eq!(doc.node(&Path::from([2])), None);
        assert_eq!(doc.node(&Path::from([0, 0, 0, 0])), None);
    }

    #[test]
    fn test_children_at() {
        let doc = two_headings();

        assert_eq!(doc.children_at(&Path::root()).map(<[Node]>::len), Some(2));
        assert_eq!(doc.children_at(&Path::from([0])).map(<[Node]>::len), Some(1));
        assert_eq!(doc.children_at(&Path::from([0, 0, 0])), None);
    }

    #[test]
    fn test_last_child() {
        let doc = two_headings();
        let (node, path) = doc.last_child().unwrap();
        assert_eq!(path, Path::from([1]));
        assert_eq!(node.string(), "test2");

        assert!(Document::default().last_child().is_none());
    }

    #[test]
    fn test_element_paths_children_first() {
        let doc = two_headings();
        assert_eq!(
            doc.element_paths(),
            vec![
                Path::from([0, 0]),
                Path::from([0]),
                Path::from([1, 0]),
                Path::from([1]),
            ]
        );
    }

    #[test]
    fn test_node_count() {
        assert_eq!(two_headings().node_count(), 6);
        assert_eq!(Document::default().node_count(), 0);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let doc = two_headings();
        let bytes = doc.to_bytes().unwrap();
        assert_eq!(Document::from_bytes(&bytes).unwrap(), doc);
    }

    #[test]
    fn test_from_bytes_invalid_utf8() {
        let invalid = vec![0xFF, 0xFE, 0xFD];
        assert!(Document::from_bytes(&invalid).is_err());
    }
}
