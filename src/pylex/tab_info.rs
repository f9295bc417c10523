//! Tab Info
//!
//!     A document's indentation convention, resolved once per document and applied to every line
//!     of the parse. With hard tabs each leading whitespace character is one indentation unit.
//!     With soft tabs, `size` whitespace characters make up one unit and partial units round up,
//!     so a line indented by 2 spaces under a size of 4 still sits one level deeper than its
//!     unindented neighbour.
//!
//!     Hosts frequently hand over the tab size as an untyped setting (a number, a string such as
//!     "auto", or nothing at all). Anything that is not a positive integer resolves to
//!     [DEFAULT_TAB_SIZE].

use serde::{Deserialize, Serialize};

pub const DEFAULT_TAB_SIZE: usize = 4;

/// Indentation convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTabInfo")]
pub struct TabInfo {
    pub size: usize,
    pub hard: bool,
}

/// Deserialized form of [TabInfo], normalized through [TabInfo::new].
#[derive(Deserialize)]
struct RawTabInfo {
    size: usize,
    hard: bool,
}

impl From<RawTabInfo> for TabInfo {
    fn from(raw: RawTabInfo) -> Self {
        TabInfo::new(raw.size, raw.hard)
    }
}

impl TabInfo {
    /// Create a TabInfo, replacing a zero size with the default.
    pub fn new(size: usize, hard: bool) -> Self {
        let size = if size == 0 { DEFAULT_TAB_SIZE } else { size };
        Self { size, hard }
    }

    /// Soft tabs of the given width.
    pub fn spaces(size: usize) -> Self {
        Self::new(size, false)
    }

    /// Hard tabs. The size only matters for display purposes.
    pub fn hard_tabs(size: usize) -> Self {
        Self::new(size, true)
    }

    /// Resolve a raw host setting into a TabInfo.
    ///
    /// `size` is whatever the host stores for its tab size; `insert_spaces` mirrors the common
    /// editor flag, so hard tabs are used when it is false.
    pub fn from_setting(size: Option<&str>, insert_spaces: bool) -> Self {
        let size = size
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_TAB_SIZE);
        Self::new(size, !insert_spaces)
    }

    /// Number of indentation units represented by `whitespace` leading characters.
    ///
    /// A zero size (only reachable by building the struct literally) counts as the default.
    pub fn units(&self, whitespace: usize) -> usize {
        if self.hard {
            return whitespace;
        }
        let size = if self.size == 0 {
            DEFAULT_TAB_SIZE
        } else {
            self.size
        };
        whitespace.div_ceil(size)
    }
}

impl Default for TabInfo {
    fn default() -> Self {
        Self::spaces(DEFAULT_TAB_SIZE)
    }
}
