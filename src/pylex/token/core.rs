//! Line and structural tokens.
//!
//!     Every token the lexer hands to the parser is a [Token]: a [Symbol] plus an optional
//!     attribute and the 0-based line/column it was produced for. Block symbols open a nested
//!     level in the tree, `Statement` is a leaf, and the structural symbols only drive the
//!     parser's bookkeeping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Function,
    Class,
    If,
    Elif,
    Else,
    For,
    While,
    Try,
    Except,
    Finally,
    With,
    /// Any non-empty line that does not introduce a block.
    Statement,
    Indent,
    Dedent,
    Empty,
    Eof,
}

impl Symbol {
    /// Display name, as used in context sentences ("inside function f").
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Function => "function",
            Symbol::Class => "class",
            Symbol::If => "if",
            Symbol::Elif => "elif",
            Symbol::Else => "else",
            Symbol::For => "for",
            Symbol::While => "while",
            Symbol::Try => "try",
            Symbol::Except => "except",
            Symbol::Finally => "finally",
            Symbol::With => "with",
            Symbol::Statement => "statement",
            Symbol::Indent => "INDENT",
            Symbol::Dedent => "DEDENT",
            Symbol::Empty => "EMPTY",
            Symbol::Eof => "EOF",
        }
    }

    /// Structural symbols carry no block kind and are skipped when rendering context.
    pub fn is_structural(&self) -> bool {
        match self {
            Symbol::Indent | Symbol::Dedent | Symbol::Empty | Symbol::Eof => true,
            Symbol::Function
            | Symbol::Class
            | Symbol::If
            | Symbol::Elif
            | Symbol::Else
            | Symbol::For
            | Symbol::While
            | Symbol::Try
            | Symbol::Except
            | Symbol::Finally
            | Symbol::With
            | Symbol::Statement => false,
        }
    }

    /// Whether a line carrying this symbol opens a nested block.
    pub fn opens_block(&self) -> bool {
        match self {
            Symbol::Function
            | Symbol::Class
            | Symbol::If
            | Symbol::Elif
            | Symbol::Else
            | Symbol::For
            | Symbol::While
            | Symbol::Try
            | Symbol::Except
            | Symbol::Finally
            | Symbol::With => true,
            Symbol::Statement | Symbol::Indent | Symbol::Dedent | Symbol::Empty | Symbol::Eof => {
                false
            }
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub symbol: Symbol,
    /// Identifier or clause text declared by the construct, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(symbol: Symbol, attr: Option<String>, line: usize, column: usize) -> Self {
        Self {
            symbol,
            attr,
            line,
            column,
        }
    }

    /// A token with no attribute and no column, used for structural markers.
    pub fn structural(symbol: Symbol, line: usize) -> Self {
        Self::new(symbol, None, line, 0)
    }

    pub fn is_structural(&self) -> bool {
        self.symbol.is_structural()
    }

    /// "function f", "else", "if x > 0".
    pub fn describe(&self) -> String {
        match &self.attr {
            Some(attr) => format!("{} {}", self.symbol, attr),
            None => self.symbol.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attr {
            Some(attr) => write!(f, "{}({})@{}:{}", self.symbol, attr, self.line, self.column),
            None => write!(f, "{}@{}:{}", self.symbol, self.line, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_symbols() {
        assert!(Symbol::Empty.is_structural());
        assert!(Symbol::Indent.is_structural());
        assert!(Symbol::Dedent.is_structural());
        assert!(Symbol::Eof.is_structural());
        assert!(!Symbol::Function.is_structural());
        assert!(!Symbol::Statement.is_structural());
    }

    #[test]
    fn test_block_symbols() {
        assert!(Symbol::Class.opens_block());
        assert!(Symbol::Except.opens_block());
        assert!(!Symbol::Statement.opens_block());
        assert!(!Symbol::Indent.opens_block());
    }

    #[test]
    fn test_describe() {
        let def = Token::new(Symbol::Function, Some("f".to_string()), 0, 0);
        assert_eq!(def.describe(), "function f");
        assert_eq!(Token::new(Symbol::Else, None, 3, 4).describe(), "else");
    }

    #[test]
    fn test_display() {
        let def = Token::new(Symbol::Function, Some("f".to_string()), 2, 4);
        assert_eq!(def.to_string(), "function(f)@2:4");
        assert_eq!(Token::structural(Symbol::Indent, 1).to_string(), "INDENT@1:0");
    }
}
