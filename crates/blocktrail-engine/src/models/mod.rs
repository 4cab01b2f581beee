pub mod document;
pub mod node;
pub mod path;

pub use document::{Document, DocumentBuilder};
pub use node::{
    BlockType, Element, ElementBuilder, HeadingLevel, Node, ParseBlockTypeError, Text,
};
pub use path::Path;
