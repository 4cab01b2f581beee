use crate::models::{Document, Node, Path};

/// Validates document shape invariants.
///
/// Asserts that:
/// - Every element has at least one child
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(document: &Document) {
    for path in document.element_paths() {
        let Some(Node::Element(element)) = document.node(&path) else {
            continue;
        };
        assert!(
            !element.children.is_empty(),
            "element without children at {path} ({})",
            element.kind
        );
    }
}

/// Validates that `after` only differs from `before` by nodes appended to
/// the root.
///
/// # Panics
/// Panics if an existing top-level child was changed, removed or moved.
pub fn check_append_only(before: &Document, after: &Document) {
    assert!(
        after.children.len() >= before.children.len(),
        "children removed: {} before, {} after",
        before.children.len(),
        after.children.len()
    );
    for (index, (old, new)) in before.children.iter().zip(&after.children).enumerate() {
        assert!(
            old == new,
            "child at {} changed: {old:?} became {new:?}",
            Path::from([index])
        );
    }
}
