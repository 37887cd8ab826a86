//! Text renderings of the AST
//!
//! - [tag]: XML-like tags mirroring the node structure
//! - [treeviz]: a box-drawing tree for terminals

pub mod tag;
pub mod treeviz;

pub use tag::serialize_ast_tag;
pub use treeviz::to_treeviz_str;
