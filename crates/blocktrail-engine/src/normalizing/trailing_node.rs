use std::fmt;
use std::sync::Arc;

use crate::editing::{Editor, EditorError, Transforms};
use crate::models::{BlockType, Document, Node, Path};
use crate::normalizing::NormalizeNode;

/// Predicate deciding whether a top-level node counts as a valid trailing
/// block.
pub type MatchFn = Arc<dyn Fn(&Node) -> bool + Send + Sync>;

/// Options for [`TrailingNode`]. Unset options fall back to editor defaults.
#[derive(Clone)]
pub struct TrailingNodeOptions {
    /// Number of compliant trailing blocks required.
    pub level: usize,
    /// Block type to insert; the editor's default block type when `None`.
    pub default_type: Option<BlockType>,
    /// Custom trailing-block predicate; see [`TrailingNode::bind`] for the
    /// default.
    pub matcher: Option<MatchFn>,
}

impl Default for TrailingNodeOptions {
    fn default() -> Self {
        Self {
            level: 1,
            default_type: None,
            matcher: None,
        }
    }
}

impl TrailingNodeOptions {
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_default_type(mut self, kind: BlockType) -> Self {
        self.default_type = Some(kind);
        self
    }

    pub fn with_match(mut self, matcher: impl Fn(&Node) -> bool + Send + Sync + 'static) -> Self {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    /// Accept top-level blocks whose type is one of `kinds`.
    pub fn with_match_types(self, kinds: Vec<BlockType>) -> Self {
        self.with_match(move |node| node.kind().is_some_and(|kind| kinds.contains(&kind)))
    }
}

impl fmt::Debug for TrailingNodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailingNodeOptions")
            .field("level", &self.level)
            .field("default_type", &self.default_type)
            .field("matcher", &self.matcher.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Keeps `level` editable blocks at the end of the document.
///
/// Acts only when the root is normalized. Counts the trailing top-level
/// children accepted by the predicate and appends one empty block of the
/// default type for every one that is missing. Existing children are never
/// touched.
#[derive(Clone)]
pub struct TrailingNode {
    level: usize,
    default_type: BlockType,
    matcher: MatchFn,
}

impl TrailingNode {
    /// Resolve `options` against the editor's default block type.
    ///
    /// Without a custom predicate a node is accepted when it is an element
    /// and the deepest element along its last children is of the default
    /// type: `p` and `h1 > p` are both accepted for a `p` default, `h1` with
    /// text directly inside is not.
    pub fn bind(options: TrailingNodeOptions, editor_default: BlockType) -> Self {
        let default_type = options.default_type.unwrap_or(editor_default);
        let matcher = options.matcher.unwrap_or_else(|| {
            Arc::new(move |node: &Node| ends_in_block_of(node, default_type)) as MatchFn
        });
        Self {
            level: options.level,
            default_type,
            matcher,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn default_type(&self) -> BlockType {
        self.default_type
    }

    pub fn matches(&self, node: &Node) -> bool {
        (self.matcher)(node)
    }

    /// Number of compliant blocks at the end of `children`.
    pub fn trailing_count(&self, children: &[Node]) -> usize {
        children
            .iter()
            .rev()
            .take_while(|node| self.matches(node))
            .count()
    }

    /// How many blocks the rule would append to `document`.
    pub fn missing(&self, document: &Document) -> usize {
        self.level.saturating_sub(self.trailing_count(&document.children))
    }
}

impl NormalizeNode for TrailingNode {
    fn name(&self) -> &'static str {
        "trailing_node"
    }

    fn normalize_node(&self, tx: &mut Transforms<'_>, path: &Path) -> Result<(), EditorError> {
        if !path.is_root() {
            return Ok(());
        }

        let missing = self.missing(tx.document());
        if missing == 0 {
            return Ok(());
        }

        log::debug!(
            "trailing_node: appending {missing} {} block(s) after {} children",
            self.default_type,
            tx.document().children.len()
        );
        for _ in 0..missing {
            tx.append_to_root(Node::empty_block(self.default_type))?;
        }
        Ok(())
    }
}

impl fmt::Debug for TrailingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailingNode")
            .field("level", &self.level)
            .field("default_type", &self.default_type)
            .finish_non_exhaustive()
    }
}

/// Register the trailing-node rule on `editor`.
pub fn with_trailing_node(editor: Editor, options: TrailingNodeOptions) -> Editor {
    let plugin = TrailingNode::bind(options, editor.default_block_type());
    editor.with_plugin(plugin)
}

fn ends_in_block_of(node: &Node, kind: BlockType) -> bool {
    node.as_element()
        .is_some_and(|element| element.last_block().kind == kind)
}
