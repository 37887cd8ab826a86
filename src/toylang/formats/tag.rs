//! XML-like AST tag serialization
//!
//! ## Format
//!
//! - Node type → tag name
//! - Label (function name, operator, digits) → text content
//! - Sub-nodes → nested in a `<children>` tag
//!
//! ## Example
//!
//! ```text
//! <program>
//!   <function_call>methodname<children>
//!     <number>1</number>
//!     <number>3</number>
//!   </children></function_call>
//! </program>
//! ```

use crate::toylang::parser::{Node, Program};

/// Serialize a program to AST tag format
pub fn serialize_ast_tag(program: &Program) -> String {
    let mut result = String::new();
    result.push_str("<program>\n");
    for statement in &program.statements {
        serialize_node(statement, 1, &mut result);
    }
    result.push_str("</program>");
    result
}

fn serialize_node(node: &Node, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = node.node_type();
    let children = node.children();

    output.push_str(&format!("{}<{}>{}", indent, tag, escape_xml(&label(node))));

    if children.is_empty() {
        output.push_str(&format!("</{}>\n", tag));
        return;
    }

    output.push_str("<children>\n");
    for child in children {
        serialize_node(child, indent_level + 1, output);
    }
    output.push_str(&format!("{}</children></{}>\n", indent, tag));
}

fn label(node: &Node) -> String {
    match node {
        Node::FunctionCall { name, .. } => name.clone(),
        _ => node.display_label(),
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
