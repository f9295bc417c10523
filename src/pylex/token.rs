//! Core token types shared across the lexer, parser, and tooling.
//!
//! Token Layers
//!
//!     Word Tokens:
//!         Produced by the logos lexer over the content of a single line (keywords, identifiers,
//!         brackets, colons, string literals). They are only used to classify lines and never leave
//!         the lexing stage. See [words](words).
//!
//!     Line Tokens:
//!         One token per non-empty line, carrying the construct the line introduces (function,
//!         class, if, ..., or a plain statement) and its identifier or clause. See [core](core).
//!
//!     Structural Tokens:
//!         Indent, Dedent, Empty and Eof. Indent and Dedent represent indentation level changes,
//!         one per unit, like open/close braces in c-style languages. Empty marks a blank line and
//!         Eof the end of the stream. None of them has a block kind for display purposes.

pub mod core;
pub mod words;

pub use core::{Symbol, Token};
pub use words::WordToken;
