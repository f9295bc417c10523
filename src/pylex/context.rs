//! Context descriptions
//!
//!     Human-readable answers to "where am I": the block context of a line, rendered from a
//!     context path, and the window of words around a cursor.
//!
//! Line context
//!
//!     [create_context_string] walks a path returned by [context](crate::pylex::parsing::Parser::context)
//!     and produces sentences such as:
//!
//!         Line 2: function m inside class A in the Document Root
//!         Line 3 inside function m inside class A in the Document Root
//!
//!     The first form is used when the innermost block starts on the queried line.
//!
//! Cursor context
//!
//!     [cursor_context] splits a line into whitespace-delimited words and returns up to `window`
//!     words on each side of the word under the cursor. A cursor left of the content snaps to the
//!     first character and one right of it to the last. A cursor right after a word (on its end
//!     column) still counts as being on that word.

use crate::pylex::error::{PylexError, Result};
use crate::pylex::lexing::get_leading_spaces_by_arithmetic;
use crate::pylex::parsing::LexNode;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

const ROOT_PHRASE: &str = " in the Document Root";

/// Render the context path of the 0-based `line`.
pub fn create_context_string(path: &[&LexNode], line: usize) -> Result<String> {
    let (first, rest) = path.split_first().ok_or(PylexError::EmptyContext)?;

    let mut out = format!("Line {}", line + 1);
    match &first.token {
        _ if first.is_root() => out.push_str(ROOT_PHRASE),
        Some(token) if token.line == line && !token.is_structural() => {
            out.push_str(": ");
            out.push_str(&token.describe());
        }
        Some(token) if !token.is_structural() => {
            out.push_str(" inside ");
            out.push_str(&token.describe());
        }
        _ => {}
    }

    for node in rest {
        match &node.token {
            _ if node.is_root() => out.push_str(ROOT_PHRASE),
            Some(token) if !token.is_structural() => {
                out.push_str(" inside ");
                out.push_str(&token.describe());
            }
            _ => {}
        }
    }

    Ok(out)
}

/// A whitespace-delimited word and its character range in the original line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split a line into words, with ranges in characters.
pub fn words(line: &str) -> Vec<Word<'_>> {
    let mut out = Vec::new();
    let mut chars_before = 0;
    let mut last_byte = 0;

    for found in WORD_REGEX.find_iter(line) {
        chars_before += line[last_byte..found.start()].chars().count();
        let len = found.as_str().chars().count();
        out.push(Word {
            text: found.as_str(),
            start: chars_before,
            end: chars_before + len,
        });
        chars_before += len;
        last_byte = found.end();
    }

    out
}

/// Up to `window` words on each side of the word under `column`, each followed by one space.
///
/// Returns `None` when there is no word to anchor on: an empty or whitespace-only line, or a
/// cursor sitting in a gap wider than one character between two words.
pub fn cursor_context(line: &str, column: usize, window: usize) -> Option<String> {
    let leading = get_leading_spaces_by_arithmetic(line);
    let content_len = line.trim().chars().count();
    if content_len == 0 {
        return None;
    }

    let col = column.clamp(leading, leading + content_len - 1);
    let words = words(line);
    let index = words
        .iter()
        .position(|word| word.start <= col && col <= word.end)?;

    let start = index.saturating_sub(window);
    let end = words.len().min(index.saturating_add(window).saturating_add(1));
    let mut out = String::new();
    for word in &words[start..end] {
        out.push_str(word.text);
        out.push(' ');
    }
    Some(out)
}
