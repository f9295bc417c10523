//! Indentation measurement
//!
//!     Helpers that measure the leading whitespace of a single line. Indentation of blank lines
//!     carries no structural meaning: [get_indent] reports 0 for them, and line classification
//!     turns them into Empty tokens before any depth comparison happens.
//!
//!     Leading whitespace can be counted two ways. [get_leading_spaces_by_index] finds the index of
//!     the first non-whitespace character, [get_leading_spaces_by_arithmetic] subtracts the length
//!     of the left-trimmed line from the full length. They agree on every input (an all-whitespace
//!     line counts its full length under both) and both stay available through
//!     [LeadingSpaceMethod] so one can be cross-checked against the other.
//!
//!     All counts are in characters, not bytes, so they line up with editor columns.

use crate::pylex::tab_info::TabInfo;
use serde::{Deserialize, Serialize};

/// Strategy used to count leading whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadingSpaceMethod {
    /// Index of the first non-whitespace character.
    #[default]
    Index,
    /// Line length minus the length of the left-trimmed line.
    Arithmetic,
}

/// Index of the first non-whitespace character, or the line length if there is none.
pub fn get_leading_spaces_by_index(line: &str) -> usize {
    line.chars()
        .position(|c| !c.is_whitespace())
        .unwrap_or_else(|| line.chars().count())
}

/// `length(line) - length(trim_start(line))`.
pub fn get_leading_spaces_by_arithmetic(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}

pub fn get_leading_spaces(line: &str, method: LeadingSpaceMethod) -> usize {
    match method {
        LeadingSpaceMethod::Index => get_leading_spaces_by_index(line),
        LeadingSpaceMethod::Arithmetic => get_leading_spaces_by_arithmetic(line),
    }
}

/// Whether the line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Number of indentation units at the start of `line`. Blank lines report 0.
pub fn get_indent(line: &str, tab_info: &TabInfo) -> usize {
    if is_blank(line) {
        return 0;
    }
    tab_info.units(get_leading_spaces_by_index(line))
}

/// Whether the leading whitespace combines tabs and spaces.
pub fn has_mixed_indentation(line: &str) -> bool {
    let leading = line.chars().take_while(|c| c.is_whitespace());
    let (mut tabs, mut spaces) = (false, false);
    for c in leading {
        match c {
            '\t' => tabs = true,
            ' ' => spaces = true,
            _ => {}
        }
    }
    tabs && spaces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_spaces_methods() {
        for line in ["x", "    x", "\t\tx = 1", "  \t y", "", "   ", "\u{3000}z"] {
            assert_eq!(
                get_leading_spaces_by_index(line),
                get_leading_spaces_by_arithmetic(line),
                "methods disagree on {:?}",
                line
            );
        }
    }

    #[test]
    fn test_leading_spaces_values() {
        assert_eq!(get_leading_spaces_by_index("    return x"), 4);
        assert_eq!(get_leading_spaces_by_index("pass"), 0);
        assert_eq!(get_leading_spaces_by_index("   "), 3);
        assert_eq!(get_leading_spaces(" \tx", LeadingSpaceMethod::Arithmetic), 2);
    }

    #[test]
    fn test_get_indent_soft_tabs() {
        let tabs = TabInfo::spaces(4);
        assert_eq!(get_indent("x = 1", &tabs), 0);
        assert_eq!(get_indent("    x = 1", &tabs), 1);
        assert_eq!(get_indent("        x = 1", &tabs), 2);
        // partial units round up
        assert_eq!(get_indent("  x = 1", &tabs), 1);
        assert_eq!(get_indent("      x = 1", &tabs), 2);
    }

    #[test]
    fn test_get_indent_hard_tabs() {
        let tabs = TabInfo::hard_tabs(8);
        assert_eq!(get_indent("\tx", &tabs), 1);
        assert_eq!(get_indent("\t\tx", &tabs), 2);
    }

    #[test]
    fn test_get_indent_blank_line_is_zero() {
        let tabs = TabInfo::spaces(4);
        assert_eq!(get_indent("", &tabs), 0);
        assert_eq!(get_indent("        ", &tabs), 0);
    }

    #[test]
    fn test_mixed_indentation() {
        assert!(has_mixed_indentation(" \tx"));
        assert!(!has_mixed_indentation("\t\tx"));
        assert!(!has_mixed_indentation("    x"));
    }
}
