//! Recursive-descent parser for the toy language
//!
//! Grammar (tokens upper case, rules lower case):
//!
//! ```text
//! program                 := statement*
//! statement               := function_definition | conditional_statement
//!                          | function_call | return_statement
//! function_definition     := function_header NEWLINE OPEN_BLOCK block_body CLOSE_BLOCK
//! function_header         := DEF IDENTIFIER OPEN_PARENTHESES argument_list CLOSE_PARENTHESES
//! argument_list           := (IDENTIFIER (COMMA IDENTIFIER)*)?
//! conditional_statement   := IF conditional_expression NEWLINE OPEN_BLOCK block_body CLOSE_BLOCK
//! conditional_expression  := expression EQUALS expression
//! block_body              := (expression (NEWLINE | &CLOSE_BLOCK))*
//! expression              := additive_expression
//! additive_expression     := substraction_expression (PLUS substraction_expression)*
//! substraction_expression := primary_expression (MINUS primary_expression)*
//! primary_expression      := NUMBER
//! function_call           := IDENTIFIER OPEN_PARENTHESES parameter_list CLOSE_PARENTHESES
//! parameter_list          := (expression (COMMA expression)*)?
//! return_statement        := RETURN expression
//! ```
//!
//! Probing
//!
//!     Rules that can be one of several alternatives return [`Probe`]:
//!     `Ok(None)` means the rule does not apply and nothing was consumed, so
//!     the caller tries the next alternative. Whether a rule applies is
//!     decided from lookahead alone. Once a rule consumes its first token it
//!     is committed and any later mismatch is an error; tokens are never
//!     given back.

use super::ast::{BinaryOperator, FunctionHeader, Node, Program};
use crate::toylang::config::ScannerConfig;
use crate::toylang::error::{Error, ParseError, Result};
use crate::toylang::lexer::{Scanner, Token, TokenKind};
use tracing::debug;

/// Result of a probing rule: matched, not applicable, or failed after commitment
pub type Probe<T> = Result<Option<T>>;

/// Parser over a single program. Owns its scanner.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    scanner: Scanner,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            scanner: Scanner::with_config(config),
        }
    }

    /// Start parsing `program` from the beginning
    pub fn set_program(&mut self, program: &str) {
        self.scanner.set_program(program);
    }

    /// program := statement*
    ///
    /// NewLine tokens between statements are skipped.
    pub fn program(&mut self) -> Result<Program> {
        let mut statements = Vec::new();
        loop {
            while self.token_is(TokenKind::NewLine)? {
                self.consume()?;
            }
            if self.token_is(TokenKind::Eof)? {
                return Ok(Program::new(statements));
            }
            statements.push(self.statement()?);
        }
    }

    /// Try each statement alternative in order. Fails only if none applies.
    pub fn statement(&mut self) -> Result<Node> {
        if let Some(node) = self.function_definition()? {
            return Ok(node);
        }
        if let Some(node) = self.conditional_statement()? {
            return Ok(node);
        }
        if let Some(node) = self.function_call()? {
            return Ok(node);
        }
        if let Some(node) = self.return_statement()? {
            return Ok(node);
        }

        let token = self.peek()?;
        Err(ParseError::NoStatement {
            found: token.kind,
            position: self.scanner.position_of(&token),
        }
        .into())
    }

    pub fn function_definition(&mut self) -> Probe<Node> {
        let Some(header) = self.function_header()? else {
            return Ok(None);
        };
        debug!(name = %header.name, "function definition");

        self.require(TokenKind::NewLine)?;
        self.require(TokenKind::OpenBlock)?;
        let body = self.block_body()?;
        self.require(TokenKind::CloseBlock)?;

        Ok(Some(Node::FunctionDefinition { header, body }))
    }

    pub fn function_header(&mut self) -> Probe<FunctionHeader> {
        if !self.token_is(TokenKind::Def)? {
            return Ok(None);
        }
        self.consume()?;

        let name = self.require_text(TokenKind::Id)?;
        self.require(TokenKind::OpenParentheses)?;
        let arguments = self.argument_list()?;
        self.require(TokenKind::CloseParentheses)?;

        Ok(Some(FunctionHeader { name, arguments }))
    }

    /// Identifiers separated by commas. An empty list is not an error.
    pub fn argument_list(&mut self) -> Result<Vec<String>> {
        let mut arguments = Vec::new();
        if !self.token_is(TokenKind::Id)? {
            return Ok(arguments);
        }
        arguments.push(self.require_text(TokenKind::Id)?);

        while self.token_is(TokenKind::Comma)? {
            self.consume()?;
            if !self.token_is(TokenKind::Id)? {
                return Err(self.missing_operand(",")?);
            }
            arguments.push(self.require_text(TokenKind::Id)?);
        }
        Ok(arguments)
    }

    pub fn conditional_statement(&mut self) -> Probe<Node> {
        if !self.token_is(TokenKind::If)? {
            return Ok(None);
        }
        self.consume()?;
        debug!("conditional statement");

        let Some(condition) = self.conditional_expression()? else {
            return Err(self.unexpected(TokenKind::Number)?);
        };
        self.require(TokenKind::NewLine)?;
        self.require(TokenKind::OpenBlock)?;
        let body = self.block_body()?;
        self.require(TokenKind::CloseBlock)?;

        Ok(Some(Node::If {
            condition: Box::new(condition),
            body,
        }))
    }

    /// expression EQUALS expression
    pub fn conditional_expression(&mut self) -> Probe<Node> {
        let Some(first_operand) = self.expression()? else {
            return Ok(None);
        };
        self.require(TokenKind::Equals)?;
        let Some(second_operand) = self.expression()? else {
            return Err(self.missing_operand("==")?);
        };
        Ok(Some(Node::equals(first_operand, second_operand)))
    }

    /// Expressions of a block, each ending its line. The last line of the
    /// program has no NewLine, so the block may close right after it.
    fn block_body(&mut self) -> Result<Vec<Node>> {
        let mut body = Vec::new();
        while let Some(expression) = self.expression()? {
            body.push(expression);
            if self.token_is(TokenKind::CloseBlock)? {
                break;
            }
            self.require(TokenKind::NewLine)?;
        }
        Ok(body)
    }

    pub fn expression(&mut self) -> Probe<Node> {
        self.additive_expression()
    }

    pub fn additive_expression(&mut self) -> Probe<Node> {
        self.binary_chain(
            TokenKind::Plus,
            BinaryOperator::Plus,
            Self::substraction_expression,
        )
    }

    pub fn substraction_expression(&mut self) -> Probe<Node> {
        self.binary_chain(
            TokenKind::Minus,
            BinaryOperator::Minus,
            Self::primary_expression,
        )
    }

    pub fn primary_expression(&mut self) -> Probe<Node> {
        if !self.token_is(TokenKind::Number)? {
            return Ok(None);
        }
        let token = self.consume()?;
        Ok(Some(Node::Number(token.text.unwrap_or_default())))
    }

    pub fn function_call(&mut self) -> Probe<Node> {
        if !self.tokens_are(&[TokenKind::Id, TokenKind::OpenParentheses])? {
            return Ok(None);
        }
        let name = self.require_text(TokenKind::Id)?;
        self.consume()?;
        debug!(name = %name, "function call");

        let params = self.parameter_list()?;
        self.require(TokenKind::CloseParentheses)?;

        Ok(Some(Node::function_call(name, params)))
    }

    /// Expressions separated by commas. An empty list is not an error.
    pub fn parameter_list(&mut self) -> Result<Vec<Node>> {
        let mut params = Vec::new();
        let Some(first) = self.expression()? else {
            return Ok(params);
        };
        params.push(first);

        while self.token_is(TokenKind::Comma)? {
            self.consume()?;
            match self.expression()? {
                Some(param) => params.push(param),
                None => return Err(self.missing_operand(",")?),
            }
        }
        Ok(params)
    }

    pub fn return_statement(&mut self) -> Probe<Node> {
        if !self.token_is(TokenKind::Return)? {
            return Ok(None);
        }
        self.consume()?;

        match self.expression()? {
            Some(expression) => Ok(Some(Node::return_statement(expression))),
            None => Err(self.missing_operand("return")?),
        }
    }

    /// operand (separator operand)*, folded into one node
    fn binary_chain(
        &mut self,
        separator: TokenKind,
        operator: BinaryOperator,
        operand: fn(&mut Self) -> Probe<Node>,
    ) -> Probe<Node> {
        let Some(first) = operand(self)? else {
            return Ok(None);
        };

        let mut rest = Vec::new();
        while self.token_is(separator)? {
            self.consume()?;
            match operand(self)? {
                Some(node) => rest.push(node),
                None => return Err(self.missing_operand(operator.symbol())?),
            }
        }
        Ok(Some(Node::binary(operator, first, rest)))
    }

    fn peek(&mut self) -> Result<Token> {
        Ok(self.scanner.look_ahead(1)?.clone())
    }

    fn token_is(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.scanner.look_ahead(1)?.is(kind))
    }

    /// Check a run of upcoming kinds. Stops at the first mismatch, so it
    /// never looks beyond an Eof.
    fn tokens_are(&mut self, kinds: &[TokenKind]) -> Result<bool> {
        for (index, kind) in kinds.iter().enumerate() {
            if self.scanner.look_ahead(index + 1)?.is_not(*kind) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn consume(&mut self) -> Result<Token> {
        Ok(self.scanner.next_token()?)
    }

    /// Consume a token of `kind` or fail
    fn require(&mut self, kind: TokenKind) -> Result<Token> {
        if !self.token_is(kind)? {
            return Err(self.unexpected(kind)?);
        }
        self.consume()
    }

    fn require_text(&mut self, kind: TokenKind) -> Result<String> {
        Ok(self.require(kind)?.text.unwrap_or_default())
    }

    /// Error for the upcoming token not being `expected`
    fn unexpected(&mut self, expected: TokenKind) -> Result<Error> {
        let token = self.peek()?;
        Ok(ParseError::UnexpectedToken {
            expected,
            found: token.kind,
            position: self.scanner.position_of(&token),
        }
        .into())
    }

    fn missing_operand(&mut self, operator: &'static str) -> Result<Error> {
        let token = self.peek()?;
        Ok(ParseError::MissingOperand {
            operator,
            position: self.scanner.position_of(&token),
        }
        .into())
    }
}
