//! One-line reports about a single line, in the wording editor hosts show to users.
//!
//! Line numbers are 0-based on input and rendered 1-based.

use crate::pylex::lexing::indentation::is_blank;
use crate::pylex::lexing::{get_indent, get_leading_spaces, LeadingSpaceMethod};
use crate::pylex::tab_info::TabInfo;

pub fn line_number_message(line: usize) -> String {
    format!("Line {}", line + 1)
}

/// "Line 3: 2 indents", or "Line 3 is Empty" for a blank line.
pub fn indent_message(text: &str, line: usize, tab_info: &TabInfo) -> String {
    if is_blank(text) {
        return format!("Line {} is Empty", line + 1);
    }
    format!("Line {}: {} indents", line + 1, get_indent(text, tab_info))
}

/// "Line 3: 4 spaces" ("1 space" when singular), or "Line 3 is empty" for a blank line.
pub fn leading_spaces_message(text: &str, line: usize, method: LeadingSpaceMethod) -> String {
    if is_blank(text) {
        return format!("Line {} is empty", line + 1);
    }
    let spaces = get_leading_spaces(text, method);
    let noun = if spaces == 1 { "space" } else { "spaces" };
    format!("Line {}: {} {}", line + 1, spaces, noun)
}
