//! Output formats for trees and token streams.
//!
//!     - treeviz: indented one-line-per-node view, see [treeviz]
//!     - json / yaml: serde serialization of the tree arena or the token list
//!     - simple: one `Display`ed token per line

pub mod treeviz;

pub use treeviz::to_treeviz_str;

use crate::pylex::parsing::LexTree;
use crate::pylex::token::Token;
use std::str::FromStr;

/// Formats a tree can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Treeviz,
    Json,
    Yaml,
}

/// Formats a token stream can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Simple,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for TreeFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "treeviz" => Ok(TreeFormat::Treeviz),
            "json" => Ok(TreeFormat::Json),
            "yaml" => Ok(TreeFormat::Yaml),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl FromStr for TokenFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(TokenFormat::Simple),
            "json" => Ok(TokenFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Errors raised by the serde-backed formats.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn format_tree(tree: &LexTree, format: TreeFormat) -> Result<String, FormatError> {
    match format {
        TreeFormat::Treeviz => Ok(to_treeviz_str(tree)),
        TreeFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
        TreeFormat::Yaml => Ok(serde_yaml::to_string(tree)?),
    }
}

pub fn format_tokens(tokens: &[Token], format: TokenFormat) -> Result<String, FormatError> {
    match format {
        TokenFormat::Simple => Ok(tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        TokenFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
    }
}
