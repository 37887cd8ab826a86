//! Treeviz formatter for AST nodes

use crate::toylang::parser::{Node, Program};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(program: &Program) -> String {
    let mut result = String::new();
    let statements: Vec<&Node> = program.statements.iter().collect();
    append_children(&mut result, &statements, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 30);

    if display_label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, node.node_type()));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node.node_type(),
            display_label
        ));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[&Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toylang::parser::parse_program;

    #[test]
    fn test_treeviz_layout() {
        let program = parse_program("f(1 + 2)\nreturn 3").unwrap();
        assert_eq!(
            to_treeviz_str(&program),
            "├─ function_call: f (1 params)\n\
             │ └─ binary_operation: +\n\
             │   ├─ number: 1\n\
             │   └─ number: 2\n\
             └─ return\n\
             \x20\x20└─ number: 3\n"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(to_treeviz_str(&Program::default()), "");
    }
}
