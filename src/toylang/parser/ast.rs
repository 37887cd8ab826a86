//! AST node definitions for the toy language
//!
//! The tree is a closed sum type with one variant per grammar production.
//! Every node is fully reduced: it never refers back to tokens.
//!
//! Binary chains are built through [`Node::binary`], which returns a lone
//! operand unchanged, so no `BinaryOperation` ever holds fewer than two
//! operands.

use serde::Serialize;
use std::fmt;

/// A parsed program: one node per top-level statement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// `def name(arguments)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionHeader {
    pub name: String,
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Plus,
    Minus,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    FunctionDefinition {
        header: FunctionHeader,
        body: Vec<Node>,
    },
    If {
        condition: Box<Node>,
        body: Vec<Node>,
    },
    FunctionCall {
        name: String,
        params: Vec<Node>,
    },
    BinaryOperation {
        operator: BinaryOperator,
        operands: Vec<Node>,
    },
    Equals {
        first_operand: Box<Node>,
        second_operand: Box<Node>,
    },
    Return(Box<Node>),
    /// Raw digits as written in the source
    Number(String),
}

impl Node {
    pub fn number(digits: impl Into<String>) -> Self {
        Node::Number(digits.into())
    }

    pub fn function_call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::FunctionCall {
            name: name.into(),
            params,
        }
    }

    pub fn equals(first_operand: Node, second_operand: Node) -> Self {
        Node::Equals {
            first_operand: Box::new(first_operand),
            second_operand: Box::new(second_operand),
        }
    }

    pub fn return_statement(expression: Node) -> Self {
        Node::Return(Box::new(expression))
    }

    /// Fold a left-associative chain. A chain of one operand is that operand.
    pub fn binary(operator: BinaryOperator, first: Node, rest: Vec<Node>) -> Self {
        if rest.is_empty() {
            return first;
        }
        let mut operands = Vec::with_capacity(rest.len() + 1);
        operands.push(first);
        operands.extend(rest);
        Node::BinaryOperation { operator, operands }
    }

    /// Tag name used by the text formats
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::FunctionDefinition { .. } => "function_definition",
            Node::If { .. } => "if",
            Node::FunctionCall { .. } => "function_call",
            Node::BinaryOperation { .. } => "binary_operation",
            Node::Equals { .. } => "equals",
            Node::Return(_) => "return",
            Node::Number(_) => "number",
        }
    }

    /// Short label shown next to the node type
    pub fn display_label(&self) -> String {
        match self {
            Node::FunctionDefinition { header, .. } => {
                format!("{}({})", header.name, header.arguments.join(", "))
            }
            Node::FunctionCall { name, params } => format!("{} ({} params)", name, params.len()),
            Node::BinaryOperation { operator, .. } => operator.symbol().to_string(),
            Node::Equals { .. } => "==".to_string(),
            Node::Number(digits) => digits.clone(),
            Node::If { .. } | Node::Return(_) => String::new(),
        }
    }

    /// Direct sub-nodes in source order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::FunctionDefinition { body, .. } => body.iter().collect(),
            Node::If { condition, body } => {
                std::iter::once(condition.as_ref()).chain(body.iter()).collect()
            }
            Node::FunctionCall { params, .. } => params.iter().collect(),
            Node::BinaryOperation { operands, .. } => operands.iter().collect(),
            Node::Equals {
                first_operand,
                second_operand,
            } => vec![first_operand.as_ref(), second_operand.as_ref()],
            Node::Return(expression) => vec![expression.as_ref()],
            Node::Number(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_collapses_single_operand() {
        let node = Node::binary(BinaryOperator::Plus, Node::number("2"), vec![]);
        assert_eq!(node, Node::number("2"));
    }

    #[test]
    fn test_binary_keeps_operand_order() {
        let node = Node::binary(
            BinaryOperator::Minus,
            Node::number("5"),
            vec![Node::number("3"), Node::number("1")],
        );
        assert_eq!(
            node,
            Node::BinaryOperation {
                operator: BinaryOperator::Minus,
                operands: vec![Node::number("5"), Node::number("3"), Node::number("1")],
            }
        );
    }

    #[test]
    fn test_serializes_tagged() {
        let node = Node::function_call("methodname", vec![Node::number("1"), Node::number("3")]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "function_call": {
                    "name": "methodname",
                    "params": [{"number": "1"}, {"number": "3"}]
                }
            })
        );

        let json = serde_json::to_value(Node::return_statement(Node::number("2"))).unwrap();
        assert_eq!(json, serde_json::json!({"return": {"number": "2"}}));
    }

    #[test]
    fn test_children() {
        let node = Node::If {
            condition: Box::new(Node::equals(Node::number("1"), Node::number("2"))),
            body: vec![Node::number("3")],
        };
        let children = node.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].node_type(), "equals");
        assert_eq!(children[1], &Node::number("3"));
    }

    #[test]
    fn test_display_label() {
        let def = Node::FunctionDefinition {
            header: FunctionHeader {
                name: "fibbo".to_string(),
                arguments: vec!["number".to_string()],
            },
            body: vec![],
        };
        assert_eq!(def.display_label(), "fibbo(number)");
        assert_eq!(Node::number("42").display_label(), "42");
    }
}
