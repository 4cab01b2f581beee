use crate::editing::{EditorError, Operation, Transforms};
use crate::models::{BlockType, Document, Node, Path};
use crate::normalizing::NormalizeNode;

/// `normalize` gives up once this many passes have changed the document
pub const DEFAULT_MAX_PASSES: usize = 42;

/// Host editor: owns the document and dispatches normalization plugins.
///
/// Plugins are applied in the order they were registered, the way a chain
/// of wrapped `normalize_node` handlers runs.
pub struct Editor {
    document: Document,
    default_block_type: BlockType,
    plugins: Vec<Box<dyn NormalizeNode>>,
    operations: Vec<Operation>,
    max_passes: usize,
}

impl Editor {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            default_block_type: BlockType::default(),
            plugins: Vec::new(),
            operations: Vec::new(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    pub fn with_default_block_type(mut self, kind: BlockType) -> Self {
        self.default_block_type = kind;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn with_plugin(mut self, plugin: impl NormalizeNode + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Block type inserted by rules that were not given one explicitly.
    pub fn default_block_type(&self) -> BlockType {
        self.default_block_type
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Operations applied so far, oldest first.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Host-side mutation; recorded like any other operation.
    pub fn insert_node(&mut self, at: &Path, node: Node) -> Result<(), EditorError> {
        Transforms::new(&mut self.document, &mut self.operations).insert_node(at, node)
    }

    /// Run every plugin for the node at `path`.
    ///
    /// Returns `true` when at least one operation was applied.
    pub fn normalize_node(&mut self, path: &Path) -> Result<bool, EditorError> {
        let before = self.operations.len();
        let mut tx = Transforms::new(&mut self.document, &mut self.operations);
        for plugin in &self.plugins {
            log::trace!("normalize_node {path} with {}", plugin.name());
            plugin.normalize_node(&mut tx, path)?;
        }
        Ok(self.operations.len() > before)
    }

    /// Normalize the whole document until nothing changes.
    ///
    /// Returns the number of passes that changed the document.
    pub fn normalize(&mut self) -> Result<usize, EditorError> {
        let mut changed_passes = 0;
        loop {
            let mut paths = self.document.element_paths();
            paths.push(Path::root());

            let mut changed = false;
            for path in &paths {
                changed |= self.normalize_node(path)?;
            }

            if !changed {
                return Ok(changed_passes);
            }
            changed_passes += 1;
            log::debug!("normalize pass {changed_passes} changed the document");
            if changed_passes >= self.max_passes {
                return Err(EditorError::NoFixedPoint {
                    passes: changed_passes,
                });
            }
        }
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("document", &self.document)
            .field("default_block_type", &self.default_block_type)
            .field("plugins", &self.plugin_names())
            .field("operations", &self.operations.len())
            .field("max_passes", &self.max_passes)
            .finish()
    }
}
