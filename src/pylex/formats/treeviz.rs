//! Treeviz formatter for block trees
//!
//! Treeviz is a one-line-per-node view of the tree, which enables quick scanning. Nesting is
//! encoded as indentation, with 2 white spaces per level.
//!
//! So the format is :
//! <indentation>(per level) <icon><space><label> [<lines>]
//!
//! Lines are 1-based and inclusive; a single line prints as `[n]`. Labels longer than 30
//! characters are truncated.
//!
//! Example:
//!
//!     ⧉ root [1-3]
//!       § function f [1-3]
//!         ¶ statement [2]
//!         ¶ statement [3]
//!
//! Icons
//!     Root: ⧉
//!     Block: §
//!     Statement: ¶

use crate::pylex::parsing::{Label, LexNode, LexTree};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(label: Label) -> &'static str {
    match label {
        Label::Root => "⧉",
        Label::Block => "§",
        Label::Statement => "¶",
    }
}

fn node_label(node: &LexNode) -> String {
    match &node.token {
        Some(token) => token.describe(),
        None => node.label.to_string(),
    }
}

fn line_range(node: &LexNode) -> String {
    match node.last_line() {
        Some(last) if last == node.lines.start => format!("[{}]", last + 1),
        Some(last) => format!("[{}-{}]", node.lines.start + 1, last + 1),
        None => "[]".to_string(),
    }
}

/// Render the whole tree, one node per line, without a trailing newline.
pub fn to_treeviz_str(tree: &LexTree) -> String {
    tree.walk()
        .into_iter()
        .map(|node| {
            format!(
                "{}{} {} {}",
                "  ".repeat(node.depth),
                get_icon(node.label),
                truncate(&node_label(node), MAX_LABEL_CHARS),
                line_range(node)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
