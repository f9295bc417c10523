//! Line Classification
//!
//!     Decides what a single non-blank line introduces, based on its word tokens. The order of
//!     checks follows the first significant token: a leading keyword selects the construct, and
//!     the rest of the line must match that construct's shape, otherwise the line is a plain
//!     statement. A statement is the safe fallback and never opens a block.
//!
//!     Shapes:
//!
//!         def NAME ( ...            -> Function(NAME), also `async def`
//!         class NAME ...            -> Class(NAME)
//!         if|elif|while CLAUSE :    -> kind(CLAUSE)
//!         for|with CLAUSE :         -> kind(CLAUSE), also `async for` / `async with`
//!         except [CLAUSE] :         -> Except(CLAUSE?)
//!         else|try|finally :        -> kind
//!
//!     The clause runs from the keyword up to the first colon outside brackets. String literals
//!     are opaque, a comment ends the search, and `:=` is never taken for a colon.

use crate::pylex::token::words::{tokenize_line, WordToken};
use crate::pylex::token::Symbol;
use logos::Span;

/// What a classified line introduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineKind {
    pub symbol: Symbol,
    pub attr: Option<String>,
}

impl LineKind {
    fn new(symbol: Symbol, attr: Option<String>) -> Self {
        Self { symbol, attr }
    }

    fn statement() -> Self {
        Self::new(Symbol::Statement, None)
    }
}

/// Classify the content of a non-blank line. Leading whitespace is ignored.
pub fn classify_line(line: &str) -> LineKind {
    let content = line.trim_start();
    let tokens: Vec<(WordToken, Span)> = tokenize_line(content)
        .into_iter()
        .filter(|(token, _)| !token.is_whitespace())
        .collect();

    let Some((first, _)) = tokens.first() else {
        return LineKind::statement();
    };

    match first {
        WordToken::Def => classify_function(&tokens[1..]),
        WordToken::Class => classify_class(&tokens[1..]),
        WordToken::If => classify_clause(Symbol::If, content, &tokens, 1),
        WordToken::Elif => classify_clause(Symbol::Elif, content, &tokens, 1),
        WordToken::While => classify_clause(Symbol::While, content, &tokens, 1),
        WordToken::For => classify_clause(Symbol::For, content, &tokens, 1),
        WordToken::With => classify_clause(Symbol::With, content, &tokens, 1),
        WordToken::Except => classify_except(content, &tokens),
        WordToken::Else => classify_bare(Symbol::Else, &tokens),
        WordToken::Try => classify_bare(Symbol::Try, &tokens),
        WordToken::Finally => classify_bare(Symbol::Finally, &tokens),
        WordToken::Async => match tokens.get(1) {
            Some((WordToken::Def, _)) => classify_function(&tokens[2..]),
            Some((WordToken::For, _)) => classify_clause(Symbol::For, content, &tokens, 2),
            Some((WordToken::With, _)) => classify_clause(Symbol::With, content, &tokens, 2),
            _ => LineKind::statement(),
        },
        _ => LineKind::statement(),
    }
}

fn classify_function(rest: &[(WordToken, Span)]) -> LineKind {
    match rest {
        [(WordToken::Identifier(name), _), (WordToken::OpenBracket, _), ..] => {
            LineKind::new(Symbol::Function, Some(name.clone()))
        }
        _ => LineKind::statement(),
    }
}

fn classify_class(rest: &[(WordToken, Span)]) -> LineKind {
    match rest.first() {
        Some((WordToken::Identifier(name), _)) => LineKind::new(Symbol::Class, Some(name.clone())),
        _ => LineKind::statement(),
    }
}

/// Keyword, a non-empty clause, then a block colon.
fn classify_clause(
    symbol: Symbol,
    content: &str,
    tokens: &[(WordToken, Span)],
    clause_start: usize,
) -> LineKind {
    match clause_text(content, tokens, clause_start) {
        Some(Some(clause)) => LineKind::new(symbol, Some(clause)),
        _ => LineKind::statement(),
    }
}

/// `except:` or `except CLAUSE:`.
fn classify_except(content: &str, tokens: &[(WordToken, Span)]) -> LineKind {
    match clause_text(content, tokens, 1) {
        Some(clause) => LineKind::new(Symbol::Except, clause),
        None => LineKind::statement(),
    }
}

/// Keyword immediately followed by the block colon.
fn classify_bare(symbol: Symbol, tokens: &[(WordToken, Span)]) -> LineKind {
    match tokens.get(1) {
        Some((WordToken::Colon, _)) => LineKind::new(symbol, None),
        _ => LineKind::statement(),
    }
}

/// Text between the keyword and the block colon.
///
/// Returns `None` when there is no block colon, `Some(None)` when the clause is empty.
fn clause_text(
    content: &str,
    tokens: &[(WordToken, Span)],
    clause_start: usize,
) -> Option<Option<String>> {
    let colon = find_block_colon(tokens, clause_start)?;
    let start = tokens[clause_start - 1].1.end;
    let end = tokens[colon].1.start;
    let clause = content[start..end].trim();
    if clause.is_empty() {
        Some(None)
    } else {
        Some(Some(clause.to_string()))
    }
}

/// Index of the first colon at bracket depth 0, starting at `from`.
fn find_block_colon(tokens: &[(WordToken, Span)], from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, (token, _)) in tokens.iter().enumerate().skip(from) {
        match token {
            WordToken::OpenBracket => depth += 1,
            WordToken::CloseBracket => depth = depth.saturating_sub(1),
            WordToken::Colon if depth == 0 => return Some(i),
            WordToken::Comment => return None,
            _ => {}
        }
    }
    None
}
