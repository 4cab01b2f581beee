//! Tests for the trailing-node rule driven through the editor.
//!
//! Uses inline `insta` snapshots of the rendered outline.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::editing::{Editor, EditorError, Operation};
use crate::models::{BlockType, Document, Node, Path};
use crate::normalizing::snapshot::{check_append_only, invariants, render};
use crate::normalizing::{TrailingNodeOptions, with_trailing_node};

fn editor_for(doc: Document, options: TrailingNodeOptions) -> Editor {
    with_trailing_node(Editor::new(doc), options)
}

fn headings_with_paragraphs() -> Document {
    Document::builder()
        .block(BlockType::H1, |h| h.child(Node::paragraph("test")))
        .block(BlockType::H1, |h| h.child(Node::paragraph("test2")))
        .build()
}

#[test]
fn compliant_document_is_unchanged() {
    let input = headings_with_paragraphs();
    let mut editor = editor_for(input.clone(), TrailingNodeOptions::default());

    let changed = editor.normalize_node(&Path::root()).unwrap();

    assert!(!changed);
    assert_eq!(editor.document().children, input.children);
    insta::assert_snapshot!(render(editor.document()), @r"
    <editor>
      <hh1>
        <hp>test</hp>
      </hh1>
      <hh1>
        <hp>test2</hp>
      </hh1>
    </editor>
    ");
}

#[test]
fn heading_with_text_gets_trailing_paragraph() {
    let input = Document::builder()
        .paragraph("intro")
        .block(BlockType::H2, |h| h.text("Title"))
        .build();
    let mut editor = editor_for(input.clone(), TrailingNodeOptions::default());

    assert!(editor.normalize_node(&Path::root()).unwrap());

    check_append_only(&input, editor.document());
    invariants(editor.document());
    insta::assert_snapshot!(render(editor.document()), @r"
    <editor>
      <hp>intro</hp>
      <hh2>Title</hh2>
      <hp></hp>
    </editor>
    ");
    assert_eq!(
        editor.operations(),
        &[Operation::InsertNode {
            path: Path::from([2]),
            node: Node::empty_block(BlockType::Paragraph),
        }]
    );
}

#[test]
fn empty_document_gets_level_blocks() {
    let mut editor = editor_for(
        Document::default(),
        TrailingNodeOptions::default().with_level(2),
    );

    editor.normalize_node(&Path::root()).unwrap();

    insta::assert_snapshot!(render(editor.document()), @r"
    <editor>
      <hp></hp>
      <hp></hp>
    </editor>
    ");
}

#[rstest]
#[case::first_child(Path::from([0]))]
#[case::nested(Path::from([0, 0]))]
#[case::missing(Path::from([7]))]
fn non_root_paths_are_ignored(#[case] path: Path) {
    let input = Document::builder().block(BlockType::CodeBlock, |c| c.text("x")).build();
    let mut editor = editor_for(input.clone(), TrailingNodeOptions::default());

    assert_eq!(editor.normalize_node(&path), Ok(false));
    assert_eq!(editor.document(), &input);
}

#[rstest]
#[case::already_two(vec![Node::paragraph("a"), Node::paragraph("b")], 0)]
#[case::one_of_two(vec![Node::block_with_text(BlockType::CodeBlock, "a"), Node::paragraph("b")], 1)]
#[case::none_of_two(vec![Node::paragraph("a"), Node::block_with_text(BlockType::H1, "b")], 2)]
fn level_counts_trailing_blocks(#[case] children: Vec<Node>, #[case] appended: usize) {
    let input = Document::new(children);
    let mut editor = editor_for(input.clone(), TrailingNodeOptions::default().with_level(2));

    editor.normalize_node(&Path::root()).unwrap();

    check_append_only(&input, editor.document());
    assert_eq!(
        editor.document().children.len(),
        input.children.len() + appended
    );
    assert_eq!(editor.operations().len(), appended);
}

#[test]
fn second_run_is_noop() {
    let input = Document::builder().block(BlockType::H1, |h| h.text("x")).build();
    let mut editor = editor_for(input, TrailingNodeOptions::default().with_level(3));

    assert!(editor.normalize_node(&Path::root()).unwrap());
    let after_first = editor.document().clone();

    assert!(!editor.normalize_node(&Path::root()).unwrap());
    assert_eq!(editor.document(), &after_first);
}

#[test]
fn custom_default_type_is_inserted() {
    let input = Document::builder().paragraph("body").build();
    let options = TrailingNodeOptions::default()
        .with_default_type(BlockType::ActionItem)
        .with_match_types(vec![BlockType::ActionItem]);
    let mut editor = editor_for(input, options);

    editor.normalize().unwrap();

    insta::assert_snapshot!(render(editor.document()), @r"
    <editor>
      <hp>body</hp>
      <haction_item></haction_item>
    </editor>
    ");
}

#[test]
fn editor_default_block_type_is_used() {
    let editor = Editor::new(Document::default()).with_default_block_type(BlockType::H3);
    let mut editor = with_trailing_node(editor, TrailingNodeOptions::default());

    editor.normalize().unwrap();

    assert_eq!(
        editor.document().children,
        vec![Node::empty_block(BlockType::H3)]
    );
}

#[test]
fn heading_default_type_survives_save_and_reload() {
    let editor = Editor::new(Document::default()).with_default_block_type(BlockType::H6);
    let mut editor = with_trailing_node(editor, TrailingNodeOptions::default().with_level(2));
    editor.normalize().unwrap();

    let bytes = editor.document().to_bytes().unwrap();
    let reloaded = Document::from_bytes(&bytes).unwrap();

    assert_eq!(&reloaded, editor.document());
    assert_eq!(reloaded.children[1].kind(), Some(BlockType::H6));
}

#[test]
#[should_panic(expected = "matcher exploded")]
fn panicking_match_propagates() {
    let options = TrailingNodeOptions::default().with_match(|_| panic!("matcher exploded"));
    let mut editor = editor_for(headings_with_paragraphs(), options);

    let _ = editor.normalize_node(&Path::root());
}

#[test]
fn predicate_rejecting_default_block_does_not_converge() {
    let options = TrailingNodeOptions::default().with_match(|_| false);
    let mut editor = editor_for(Document::default(), options).with_max_passes(3);

    assert_eq!(
        editor.normalize(),
        Err(EditorError::NoFixedPoint { passes: 3 })
    );
}

#[test]
fn full_normalize_converges_in_one_pass() {
    let mut editor = editor_for(
        Document::builder().block(BlockType::CodeBlock, |c| c.text("fn main() {}")).build(),
        TrailingNodeOptions::default(),
    );

    assert_eq!(editor.normalize(), Ok(1));
    assert_eq!(editor.normalize(), Ok(0));
}
