use crate::models::{Document, Node};

/// Renders `document` as an indented outline.
///
/// Elements become `<h{type}>` tags, an element holding exactly one text
/// leaf is written on a single line, other text leaves are quoted.
///
/// ```text
/// <editor>
///   <hh1>
///     <hp>test</hp>
///   </hh1>
/// </editor>
/// ```
pub fn render(document: &Document) -> String {
    if document.children.is_empty() {
        return "<editor />\n".to_string();
    }

    let mut out = String::from("<editor>\n");
    for child in &document.children {
        render_node(child, 1, &mut out);
    }
    out.push_str("</editor>\n");
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(t) => {
            out.push_str(&format!("{indent}{:?}\n", t.text));
        }
        Node::Element(e) => {
            let tag = format!("h{}", e.kind);
            match e.children.as_slice() {
                [] => out.push_str(&format!("{indent}<{tag} />\n")),
                [Node::Text(t)] => {
                    out.push_str(&format!("{indent}<{tag}>{}</{tag}>\n", t.text));
                }
                children => {
                    out.push_str(&format!("{indent}<{tag}>\n"));
                    for child in children {
                        render_node(child, depth + 1, out);
                    }
                    out.push_str(&format!("{indent}</{tag}>\n"));
                }
            }
        }
    }
}
