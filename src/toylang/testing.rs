//! Testing utilities for parser tests
//!
//! Parser tests use two tools together:
//!
//! 1. **[ToySources](sources::ToySources)** - curated sample programs under
//!    `docs/samples/`. When the language changes, only the samples need
//!    revisiting, not every test that spells out a program inline.
//! 2. **[assert_ast](fn@assert_ast)** - a fluent API whose shape mirrors the
//!    AST, so a test states the whole expected tree instead of counting nodes.
//!
//! ```rust,ignore
//! let source = ToySources::get_string("000-function-calls.toy")?;
//! let program = parse_program(&source)?;
//!
//! assert_ast(&program)
//!     .statement_count(3)
//!     .statement(0, |node| {
//!         node.assert_function_call()
//!             .name("methodname")
//!             .param(0, |param| param.assert_number("1"));
//!     });
//! ```

mod assertions;
pub mod sources;

pub use assertions::{
    assert_ast, BinaryAssertion, DefinitionAssertion, EqualsAssertion, FunctionCallAssertion,
    IfAssertion, NodeAssertion, ProgramAssertion,
};
pub use sources::ToySources;
