//! Parsing
//!
//!     Turns the lexer's token stream into a [LexTree] whose nesting mirrors indentation depth,
//!     and answers "which blocks enclose line N" through [Parser::context].
//!
//!     A [Parser] is meant to be short lived: build one per request (or [reset](Parser::reset)
//!     it), call [parse](Parser::parse), then query. Rebuilding the tree needs `&mut self`, so
//!     nodes borrowed from an earlier parse cannot outlive it.

pub mod parser;
pub mod tree;

pub use parser::{build_tree, parse, Parser};
pub use tree::{Label, LexNode, LexTree, NodeId};
