//! # pylex
//!
//! Structural lexing and parsing for indentation-based, Python-like source text.
//!
//! The library turns raw text into a line-based token stream, builds a tree of nested blocks
//! from it, and answers "where am I" questions about any line: the chain of enclosing blocks
//! and a readable sentence describing it. See [pylex] for the pipeline overview.
//!
//! ## Testing
//!
//! Tree-shaped expectations are written with the fluent helpers in the
//! [testing module](pylex::testing).

pub mod pylex;
