//! Word tokens for a single line of source
//!
//!     The logos lexer splits the content of one line into keywords, identifiers, brackets and
//!     the like. It knows nothing about indentation or block structure: line classification
//!     consumes these tokens to decide what a line introduces. String literals and comments are
//!     lexed as single tokens so that colons and brackets inside them are never mistaken for
//!     structure. Identifiers follow the Unicode identifier rules (`XID_Start` then
//!     `XID_Continue`), so names like `café` stay one token.

use logos::Logos;

/// Tokens found within one line of Python-like source.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum WordToken {
    #[token("async")]
    Async,
    #[token("def")]
    Def,
    #[token("class")]
    Class,
    #[token("if")]
    If,
    #[token("elif")]
    Elif,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("try")]
    Try,
    #[token("except")]
    Except,
    #[token("finally")]
    Finally,
    #[token("with")]
    With,

    #[regex(r"[\p{XID_Start}_][\p{XID_Continue}]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[token(":")]
    Colon,
    #[token(":=")]
    Walrus,
    #[regex(r"[(\[{]")]
    OpenBracket,
    #[regex(r"[)\]}]")]
    CloseBracket,

    #[regex(r#""([^"\\]|\\.)*"|'([^'\\]|\\.)*'"#)]
    StringLiteral,
    #[regex(r"#[^\n]*")]
    Comment,

    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    // Numbers, operators, dots, commas...
    #[regex(r#"[^\s\p{XID_Start}_:()\[\]{}#'"]+"#)]
    Other,
}

impl WordToken {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, WordToken::Whitespace)
    }
}

/// Tokenize the content of one line, keeping byte spans into `content`.
///
/// Input the lexer cannot match (an unterminated string quote, for instance) is dropped.
pub fn tokenize_line(content: &str) -> Vec<(WordToken, logos::Span)> {
    let mut lexer = WordToken::lexer(content);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
