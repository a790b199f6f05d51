//! DOT format serializer for Graphviz rendering.
//!
//! Turns a [`Document`] into `digraph` text. Clusters become `subgraph` blocks and
//! node names are generated so they stay unique across nested clusters.

use super::document::{Document, Style};

/// Serialize a document to Graphviz DOT.
pub fn to_dot(document: &Document) -> String {
    let mut output = String::new();

    output.push_str("digraph ");
    if let Some(id) = document.id() {
        output.push_str(&format_id(id));
        output.push(' ');
    }
    output.push_str("{\n");
    write_body(&mut output, document, "n", 1);
    output.push_str("}\n");

    output
}

fn write_body(output: &mut String, document: &Document, prefix: &str, depth: usize) {
    let indent = "    ".repeat(depth);

    for (key, value) in document.attributes().iter() {
        output.push_str(&format!(
            "{indent}{}=\"{}\";\n",
            format_id(key),
            escape_dot_label(value)
        ));
    }

    for (position, subgraph) in document.subgraphs().iter().enumerate() {
        output.push_str(&indent);
        output.push_str("subgraph ");
        if let Some(id) = subgraph.id() {
            output.push_str(&format_id(id));
            output.push(' ');
        }
        output.push_str("{\n");
        write_body(output, subgraph, &format!("{prefix}{position}_"), depth + 1);
        output.push_str(&indent);
        output.push_str("}\n");
    }

    for (index, node) in document.nodes().iter().enumerate() {
        output.push_str(&format!(
            "{indent}{prefix}{index} [{}];\n",
            format_attrs(&node.style, &node.label)
        ));
    }

    for edge in document.edges() {
        output.push_str(&format!(
            "{indent}{prefix}{} -> {prefix}{} [{}];\n",
            edge.source.index(),
            edge.target.index(),
            format_attrs(&edge.style, &edge.label)
        ));
    }
}

/// Style attributes followed by the label, as a DOT attribute list body.
fn format_attrs(style: &Style, label: &str) -> String {
    style
        .iter()
        .filter(|(key, _)| *key != "label")
        .map(|(key, value)| format!("{}=\"{}\"", format_id(key), escape_dot_label(value)))
        .chain(std::iter::once(format!("label=\"{}\"", escape_dot_label(label))))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bare identifiers pass through, anything else is quoted.
fn format_id(id: &str) -> String {
    let mut chars = id.chars();
    let bare = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        id.to_string()
    } else {
        format!("\"{}\"", escape_dot_label(id))
    }
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
