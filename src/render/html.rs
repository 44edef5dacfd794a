//! XHTML serialization of the document tree.

use super::tree::{Element, Node};

/// Write a node (and everything beneath it) as XHTML
pub fn to_html(node: &Node) -> String {
    let mut html = String::new();
    write_node(node, &mut html);
    html
}

fn write_node(node: &Node, html: &mut String) {
    match node {
        Node::Element(element) => write_element(element, html),
        Node::Text { text } => html.push_str(&html_escape::encode_text(text)),
        Node::Markup { markup } => html.push_str(markup),
        Node::Fragment { children, .. } => {
            for child in children {
                write_node(child, html);
            }
        }
    }
}

fn write_element(element: &Element, html: &mut String) {
    html.push('<');
    html.push_str(element.tag);

    if let Some(class) = &element.class {
        html.push_str(&format!(
            r#" class="{}""#,
            html_escape::encode_double_quoted_attribute(class)
        ));
    }
    for (key, value) in &element.attributes {
        html.push_str(&format!(
            r#" {}="{}""#,
            key,
            html_escape::encode_double_quoted_attribute(value)
        ));
    }

    // void elements are self-closed so the output stays well-formed XML
    if element.is_void() {
        html.push_str("/>");
        return;
    }

    html.push('>');
    for child in &element.children {
        write_node(child, html);
    }
    html.push_str("</");
    html.push_str(element.tag);
    html.push('>');
}
