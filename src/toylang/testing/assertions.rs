//! Fluent assertion API for AST nodes

use crate::toylang::parser::{BinaryOperator, FunctionHeader, Node, Program};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a program
pub fn assert_ast(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run `assertion` on `nodes[index]`, failing with context if out of bounds
fn nth<'a, F>(nodes: &'a [Node], index: usize, context: &str, assertion: F)
where
    F: FnOnce(NodeAssertion<'a>),
{
    assert!(
        index < nodes.len(),
        "{}[{}] out of bounds ({} nodes: [{}])",
        context,
        index,
        nodes.len(),
        summarize(nodes)
    );
    assertion(NodeAssertion {
        node: &nodes[index],
        context: format!("{}[{}]", context, index),
    });
}

fn count(nodes: &[Node], expected: usize, context: &str) {
    assert_eq!(
        nodes.len(),
        expected,
        "{}: expected {} nodes, found {}: [{}]",
        context,
        expected,
        nodes.len(),
        summarize(nodes)
    );
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    pub fn statement_count(self, expected: usize) -> Self {
        count(&self.program.statements, expected, "statements");
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        nth(&self.program.statements, index, "statements", assertion);
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn wrong_type(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} '{}'",
            self.context,
            expected,
            self.node.node_type(),
            self.node.display_label()
        )
    }

    pub fn assert_number(self, digits: &str) {
        match self.node {
            Node::Number(actual) => assert_eq!(
                actual, digits,
                "{}: Expected number {}, found {}",
                self.context, digits, actual
            ),
            _ => self.wrong_type("number"),
        }
    }

    /// Assert this is a return statement and continue on its expression
    pub fn assert_return(self) -> NodeAssertion<'a> {
        match self.node {
            Node::Return(expression) => NodeAssertion {
                node: expression,
                context: format!("{}.return", self.context),
            },
            _ => self.wrong_type("return"),
        }
    }

    pub fn assert_function_call(self) -> FunctionCallAssertion<'a> {
        match self.node {
            Node::FunctionCall { name, params } => FunctionCallAssertion {
                name,
                params,
                context: self.context,
            },
            _ => self.wrong_type("function_call"),
        }
    }

    pub fn assert_binary(self, operator: BinaryOperator) -> BinaryAssertion<'a> {
        match self.node {
            Node::BinaryOperation {
                operator: actual,
                operands,
            } => {
                assert_eq!(
                    *actual, operator,
                    "{}: Expected operator {}, found {}",
                    self.context, operator, actual
                );
                BinaryAssertion {
                    operands,
                    context: self.context,
                }
            }
            _ => self.wrong_type("binary_operation"),
        }
    }

    pub fn assert_equals(self) -> EqualsAssertion<'a> {
        match self.node {
            Node::Equals {
                first_operand,
                second_operand,
            } => EqualsAssertion {
                first_operand,
                second_operand,
                context: self.context,
            },
            _ => self.wrong_type("equals"),
        }
    }

    pub fn assert_if(self) -> IfAssertion<'a> {
        match self.node {
            Node::If { condition, body } => IfAssertion {
                condition,
                body,
                context: self.context,
            },
            _ => self.wrong_type("if"),
        }
    }

    pub fn assert_function_definition(self) -> DefinitionAssertion<'a> {
        match self.node {
            Node::FunctionDefinition { header, body } => DefinitionAssertion {
                header,
                body,
                context: self.context,
            },
            _ => self.wrong_type("function_definition"),
        }
    }
}

// ============================================================================
// Variant Assertions
// ============================================================================

pub struct FunctionCallAssertion<'a> {
    name: &'a str,
    params: &'a [Node],
    context: String,
}

impl<'a> FunctionCallAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.name, expected, "{}: function name", self.context);
        self
    }

    pub fn param_count(self, expected: usize) -> Self {
        count(self.params, expected, &format!("{}.params", self.context));
        self
    }

    pub fn param<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        nth(self.params, index, &format!("{}.params", self.context), assertion);
        self
    }
}

pub struct BinaryAssertion<'a> {
    operands: &'a [Node],
    context: String,
}

impl<'a> BinaryAssertion<'a> {
    pub fn operand_count(self, expected: usize) -> Self {
        count(self.operands, expected, &format!("{}.operands", self.context));
        self
    }

    pub fn operand<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        nth(self.operands, index, &format!("{}.operands", self.context), assertion);
        self
    }
}

pub struct EqualsAssertion<'a> {
    first_operand: &'a Node,
    second_operand: &'a Node,
    context: String,
}

impl<'a> EqualsAssertion<'a> {
    pub fn first<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(NodeAssertion {
            node: self.first_operand,
            context: format!("{}.first_operand", self.context),
        });
        self
    }

    pub fn second<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(NodeAssertion {
            node: self.second_operand,
            context: format!("{}.second_operand", self.context),
        });
        self
    }
}

pub struct IfAssertion<'a> {
    condition: &'a Node,
    body: &'a [Node],
    context: String,
}

impl<'a> IfAssertion<'a> {
    pub fn condition<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(NodeAssertion {
            node: self.condition,
            context: format!("{}.condition", self.context),
        });
        self
    }

    pub fn body_count(self, expected: usize) -> Self {
        count(self.body, expected, &format!("{}.body", self.context));
        self
    }

    pub fn body<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        nth(self.body, index, &format!("{}.body", self.context), assertion);
        self
    }
}

pub struct DefinitionAssertion<'a> {
    header: &'a FunctionHeader,
    body: &'a [Node],
    context: String,
}

impl<'a> DefinitionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.header.name, expected, "{}: function name", self.context);
        self
    }

    pub fn arguments(self, expected: &[&str]) -> Self {
        assert_eq!(self.header.arguments, expected, "{}: arguments", self.context);
        self
    }

    pub fn body_count(self, expected: usize) -> Self {
        count(self.body, expected, &format!("{}.body", self.context));
        self
    }

    pub fn body<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        nth(self.body, index, &format!("{}.body", self.context), assertion);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toylang::parser::parse_program;
    use crate::toylang::testing::ToySources;

    #[test]
    fn test_function_calls_sample() {
        let source = ToySources::get_string("000-function-calls.toy").unwrap();
        let program = parse_program(&source).unwrap();

        assert_ast(&program)
            .statement_count(3)
            .statement(0, |node| {
                node.assert_function_call()
                    .name("methodname")
                    .param_count(2)
                    .param(0, |param| param.assert_number("1"))
                    .param(1, |param| param.assert_number("3"));
            })
            .statement(1, |node| {
                node.assert_function_call().name("run").param_count(0);
            })
            .statement(2, |node| {
                node.assert_function_call()
                    .name("sum")
                    .param(0, |param| {
                        param.assert_binary(BinaryOperator::Plus).operand_count(2);
                    })
                    .param(1, |param| {
                        param
                            .assert_binary(BinaryOperator::Minus)
                            .operand_count(3)
                            .operand(2, |operand| operand.assert_number("1"));
                    });
            });
    }

    #[test]
    fn test_returns_sample() {
        let source = ToySources::get_string("010-returns.toy").unwrap();
        let program = parse_program(&source).unwrap();

        assert_ast(&program)
            .statement_count(2)
            .statement(0, |node| node.assert_return().assert_number("2"))
            .statement(1, |node| {
                node.assert_return()
                    .assert_binary(BinaryOperator::Plus)
                    .operand(0, |operand| operand.assert_number("1"))
                    .operand(1, |operand| operand.assert_number("1"));
            });
    }

    #[test]
    fn test_conditionals_sample() {
        let source = ToySources::get_string("020-conditionals.toy").unwrap();
        let program = parse_program(&source).unwrap();

        assert_ast(&program)
            .statement_count(2)
            .statement(0, |node| {
                node.assert_if()
                    .condition(|condition| {
                        condition
                            .assert_equals()
                            .first(|first| first.assert_number("2"))
                            .second(|second| second.assert_number("3"));
                    })
                    .body_count(2)
                    .body(0, |expression| expression.assert_number("1"))
                    .body(1, |expression| {
                        expression.assert_binary(BinaryOperator::Plus);
                    });
            })
            .statement(1, |node| {
                node.assert_if()
                    .condition(|condition| {
                        condition.assert_equals().second(|second| {
                            second.assert_binary(BinaryOperator::Minus);
                        });
                    })
                    .body_count(1);
            });
    }

    #[test]
    fn test_function_definitions_sample() {
        let source = ToySources::get_string("030-function-definitions.toy").unwrap();
        let program = parse_program(&source).unwrap();

        assert_ast(&program)
            .statement_count(3)
            .statement(0, |node| {
                node.assert_function_definition()
                    .name("answer")
                    .arguments(&[])
                    .body_count(1)
                    .body(0, |expression| expression.assert_number("42"));
            })
            .statement(1, |node| {
                node.assert_function_definition()
                    .name("add")
                    .arguments(&["first", "second"])
                    .body_count(2);
            })
            .statement(2, |node| {
                node.assert_function_call().name("answer");
            });
    }

    #[test]
    fn test_comments_and_blank_lines_sample() {
        let source = ToySources::get_string("040-comments-and-blank-lines.toy").unwrap();
        let program = parse_program(&source).unwrap();

        assert_ast(&program).statement_count(1).statement(0, |node| {
            node.assert_function_call()
                .name("log")
                .param(0, |param| param.assert_number("1"));
        });
    }

    #[test]
    #[should_panic(expected = "Expected function_call, found number")]
    fn test_wrong_type_panics_with_context() {
        let program = Program::new(vec![Node::number("1")]);
        assert_ast(&program).statement(0, |node| {
            node.assert_function_call();
        });
    }
}
