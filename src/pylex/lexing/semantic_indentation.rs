//! Semantic indentation mapper
//!
//!     This mapper turns per-line indentation levels into semantic Indent and Dedent tokens. We
//!     don't want the parser to know how many spaces or tabs a line starts with, only about
//!     indentation level changes between consecutive lines. Indent/Dedent could be replaced by
//!     open/close braces in a c-style language with the same effect.
//!
//! Algorithm
//!
//!     1. Track the current indentation level (starting at 0)
//!     2. Empty lines are passed through and never change the level
//!     3. For every other line compare its level with the current one:
//!        - If greater: emit one Indent per additional level
//!        - If less: emit one Dedent per reduced level
//!        - If equal: no indentation tokens needed
//!     4. Emit the line token itself
//!     5. At the end, emit Dedents to close all open levels and a final Eof

use crate::pylex::token::{Symbol, Token};
use std::cmp::Ordering;

/// A classified line token together with its measured indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    pub token: Token,
    pub level: usize,
}

/// Converts measured line levels into a flat stream with Indent/Dedent tokens.
#[derive(Debug, Default)]
pub struct SemanticIndentationMapper {
    current_level: usize,
}

impl SemanticIndentationMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the lines of a document of `line_count` lines into the parser's token stream.
    ///
    /// # Example
    ///
    /// Levels `[0, 1, 1, 0]` map to
    /// `[Function, Indent, Statement, Statement, Dedent, Statement, Eof]`.
    pub fn map(&mut self, lines: Vec<LineToken>, line_count: usize) -> Vec<Token> {
        let mut result = Vec::with_capacity(lines.len() + 1);

        for LineToken { token, level } in lines {
            if token.symbol == Symbol::Empty {
                result.push(token);
                continue;
            }

            match level.cmp(&self.current_level) {
                Ordering::Greater => {
                    for _ in 0..(level - self.current_level) {
                        result.push(Token::structural(Symbol::Indent, token.line));
                    }
                }
                Ordering::Less => {
                    for _ in 0..(self.current_level - level) {
                        result.push(Token::structural(Symbol::Dedent, token.line));
                    }
                }
                Ordering::Equal => {}
            }

            self.current_level = level;
            result.push(token);
        }

        for _ in 0..self.current_level {
            result.push(Token::structural(Symbol::Dedent, line_count));
        }
        self.current_level = 0;
        result.push(Token::structural(Symbol::Eof, line_count));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(symbol: Symbol, line: usize, level: usize) -> LineToken {
        LineToken {
            token: Token::new(symbol, None, line, level * 4),
            level,
        }
    }

    fn symbols(tokens: &[Token]) -> Vec<Symbol> {
        tokens.iter().map(|t| t.symbol).collect()
    }

    #[test]
    fn test_simple_block() {
        let lines = vec![
            line(Symbol::Function, 0, 0),
            line(Symbol::Statement, 1, 1),
            line(Symbol::Statement, 2, 1),
            line(Symbol::Statement, 3, 0),
        ];
        let tokens = SemanticIndentationMapper::new().map(lines, 4);
        assert_eq!(
            symbols(&tokens),
            vec![
                Symbol::Function,
                Symbol::Indent,
                Symbol::Statement,
                Symbol::Statement,
                Symbol::Dedent,
                Symbol::Statement,
                Symbol::Eof,
            ]
        );
    }

    #[test]
    fn test_one_token_per_level() {
        let lines = vec![line(Symbol::Statement, 0, 0), line(Symbol::Statement, 1, 3)];
        let tokens = SemanticIndentationMapper::new().map(lines, 2);
        assert_eq!(
            symbols(&tokens),
            vec![
                Symbol::Statement,
                Symbol::Indent,
                Symbol::Indent,
                Symbol::Indent,
                Symbol::Statement,
                Symbol::Dedent,
                Symbol::Dedent,
                Symbol::Dedent,
                Symbol::Eof,
            ]
        );
        // closing dedents sit past the last line
        assert_eq!(tokens[5].line, 2);
    }

    #[test]
    fn test_empty_lines_do_not_change_level() {
        let lines = vec![
            line(Symbol::If, 0, 0),
            line(Symbol::Statement, 1, 1),
            line(Symbol::Empty, 2, 0),
            line(Symbol::Statement, 3, 1),
        ];
        let tokens = SemanticIndentationMapper::new().map(lines, 4);
        assert_eq!(
            symbols(&tokens),
            vec![
                Symbol::If,
                Symbol::Indent,
                Symbol::Statement,
                Symbol::Empty,
                Symbol::Statement,
                Symbol::Dedent,
                Symbol::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        let tokens = SemanticIndentationMapper::new().map(vec![], 0);
        assert_eq!(symbols(&tokens), vec![Symbol::Eof]);
    }
}
