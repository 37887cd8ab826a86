//! # toylang
//!
//! Front end for the toy language: an indentation-aware scanner and a
//! recursive-descent parser producing a structural AST.
//!
//! Layout
//!
//! src/toylang
//!   ├── lexer       Token definitions, the ordered pattern table and the pull scanner
//!   ├── parser      AST types and the probing recursive-descent parser
//!   ├── formats     Text renderings of the AST (tag, treeviz)
//!   ├── processor   Stage/format driven processing used by the CLI
//!   └── config      Layered configuration (embedded defaults + user files)
//!
//! There is no evaluator: the pipeline ends at the AST.
//!
//! For testing guidelines, see the [testing module](toylang::testing).

pub mod toylang;
