//! Lexer
//!
//!     This module orchestrates tokenization of a whole document. Lexing is line based: the
//!     parser never needs anything finer than "what does this line introduce, and how deep is it".
//!
//! The Lexing Pipeline
//!
//!     1. Split the source into lines (`\n` or `\r\n`). A trailing newline does not start a new
//!        line, so `"a\n"` is one line and `""` is zero lines.
//!
//!     2. Classify each line. Blank lines become Empty tokens. Everything else is measured with
//!        [get_indent](indentation::get_indent) and classified from its word tokens, see
//!        [line_classification].
//!
//!     3. Semantic indentation, see [semantic_indentation]. Levels become one Indent or Dedent
//!        token per unit of change, and the stream is closed with Dedents and an Eof.
//!
//!     Mixed tabs and spaces are measured with the same [TabInfo] rule as everything else. They
//!     are logged, never rejected.

pub mod indentation;
pub mod line_classification;
pub mod semantic_indentation;

pub use indentation::{
    get_indent, get_leading_spaces, get_leading_spaces_by_arithmetic,
    get_leading_spaces_by_index, LeadingSpaceMethod,
};
pub use line_classification::{classify_line, LineKind};
pub use semantic_indentation::{LineToken, SemanticIndentationMapper};

use crate::pylex::tab_info::TabInfo;
use crate::pylex::token::{Symbol, Token};

/// Split a document into its lines.
pub fn source_lines(source: &str) -> Vec<&str> {
    source.lines().collect()
}

/// Line lexer for one document under one indentation convention.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    lines: Vec<&'a str>,
    tab_info: TabInfo,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, tab_info: TabInfo) -> Self {
        Self {
            lines: source_lines(source),
            tab_info,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn tab_info(&self) -> &TabInfo {
        &self.tab_info
    }

    /// Classify a single line. `number` is the 0-based line index stored in the token.
    pub fn lex_line(&self, number: usize, line: &str) -> LineToken {
        if indentation::is_blank(line) {
            return LineToken {
                token: Token::structural(Symbol::Empty, number),
                level: 0,
            };
        }

        if indentation::has_mixed_indentation(line) {
            tracing::warn!(line = number, "mixed tabs and spaces in indentation");
        }

        let column = get_leading_spaces_by_index(line);
        let level = get_indent(line, &self.tab_info);
        let LineKind { symbol, attr } = classify_line(line);
        tracing::trace!(line = number, level, %symbol, ?attr, "lexed line");

        LineToken {
            token: Token::new(symbol, attr, number, column),
            level,
        }
    }

    /// Classified lines with their indentation levels, before indentation mapping.
    pub fn line_tokens(&self) -> Vec<LineToken> {
        self.lines
            .iter()
            .enumerate()
            .map(|(number, line)| self.lex_line(number, line))
            .collect()
    }

    /// The full token stream consumed by the parser.
    pub fn tokenize(&self) -> Vec<Token> {
        let mut mapper = SemanticIndentationMapper::new();
        mapper.map(self.line_tokens(), self.line_count())
    }
}

/// Lex `source` into the parser's token stream.
pub fn lex(source: &str, tab_info: TabInfo) -> Vec<Token> {
    Lexer::new(source, tab_info).tokenize()
}
