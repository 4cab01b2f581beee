use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Structural type tag of a block.
///
/// The set is closed: rules match on variants rather than on free-form
/// strings. Each variant has a short key (`p`, `h1`, `blockquote`, ...) used
/// for serialization and configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlockType {
    #[default]
    Paragraph,
    Heading(HeadingLevel),
    Blockquote,
    CodeBlock,
    BulletedList,
    NumberedList,
    ListItem,
    ActionItem,
}

impl BlockType {
    pub const H1: BlockType = BlockType::Heading(HeadingLevel(1));
    pub const H2: BlockType = BlockType::Heading(HeadingLevel(2));
    pub const H3: BlockType = BlockType::Heading(HeadingLevel(3));
    pub const H4: BlockType = BlockType::Heading(HeadingLevel(4));
    pub const H5: BlockType = BlockType::Heading(HeadingLevel(5));
    pub const H6: BlockType = BlockType::Heading(HeadingLevel(6));

    /// Heading of `level`, or `None` outside 1-6.
    pub fn heading(level: u8) -> Option<Self> {
        HeadingLevel::new(level).map(BlockType::Heading)
    }

    /// Short key for this block type, e.g. `"p"` or `"h2"`.
    pub fn key(&self) -> String {
        match self {
            BlockType::Paragraph => "p".to_string(),
            BlockType::Heading(level) => format!("h{}", level.get()),
            BlockType::Blockquote => "blockquote".to_string(),
            BlockType::CodeBlock => "code_block".to_string(),
            BlockType::BulletedList => "ul".to_string(),
            BlockType::NumberedList => "ol".to_string(),
            BlockType::ListItem => "li".to_string(),
            BlockType::ActionItem => "action_item".to_string(),
        }
    }
}

/// Heading level, always within 1-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block type: {0:?}")]
pub struct ParseBlockTypeError(pub String);

impl FromStr for BlockType {
    type Err = ParseBlockTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "p" => BlockType::Paragraph,
            "blockquote" => BlockType::Blockquote,
            "code_block" => BlockType::CodeBlock,
            "ul" => BlockType::BulletedList,
            "ol" => BlockType::NumberedList,
            "li" => BlockType::ListItem,
            "action_item" => BlockType::ActionItem,
            heading => heading
                .strip_prefix('h')
                .and_then(|level| level.parse::<u8>().ok())
                .and_then(BlockType::heading)
                .ok_or_else(|| ParseBlockTypeError(s.to_string()))?,
        };
        Ok(kind)
    }
}

impl TryFrom<String> for BlockType {
    type Error = ParseBlockTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlockType> for String {
    fn from(kind: BlockType) -> Self {
        kind.key()
    }
}

/// A block in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: BlockType,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(kind: BlockType, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn builder(kind: BlockType) -> ElementBuilder {
        ElementBuilder {
            kind,
            children: Vec::new(),
        }
    }

    /// Follows the last child down to the deepest element.
    ///
    /// For `h1 > p > "text"` this returns the paragraph.
    pub fn last_block(&self) -> &Element {
        let mut current = self;
        while let Some(Node::Element(child)) = current.children.last() {
            current = child;
        }
        current
    }
}

/// A run of text. Leaves have no children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Text {
    pub text: String,
}

/// A node of the document tree: either a block or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(Text { text: text.into() })
    }

    pub fn element(kind: BlockType, children: Vec<Node>) -> Self {
        Node::Element(Element::new(kind, children))
    }

    /// A block of `kind` holding a single text leaf.
    pub fn block_with_text(kind: BlockType, text: impl Into<String>) -> Self {
        Node::element(kind, vec![Node::text(text)])
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::block_with_text(BlockType::Paragraph, text)
    }

    /// A block of `kind` holding one empty text leaf, the shape inserted by
    /// normalization rules.
    pub fn empty_block(kind: BlockType) -> Self {
        Node::block_with_text(kind, "")
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn kind(&self) -> Option<BlockType> {
        self.as_element().map(|e| e.kind)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Concatenated text of all leaves below this node.
    pub fn string(&self) -> String {
        match self {
            Node::Text(t) => t.text.clone(),
            Node::Element(e) => e.children.iter().map(Node::string).collect(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Fluent builder for nested elements.
///
/// ```rust
/// # use blocktrail_engine::models::{BlockType, Element, Node};
/// let heading = Element::builder(BlockType::H1)
///     .child(Node::paragraph("test"))
///     .build();
/// assert_eq!(heading.children.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    kind: BlockType,
    children: Vec<Node>,
}

impl ElementBuilder {
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Appends a nested block built by `build`.
    pub fn block(
        self,
        kind: BlockType,
        build: impl FnOnce(ElementBuilder) -> ElementBuilder,
    ) -> Self {
        let nested = build(Element::builder(kind)).build();
        self.child(nested)
    }

    pub fn build(self) -> Element {
        Element::new(self.kind, self.children)
    }
}
