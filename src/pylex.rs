//! Main module for pylex library functionality
//!
//!     raw text + [TabInfo](tab_info::TabInfo) -> [lexing] -> tokens -> [parsing] -> tree
//!     -> context path -> [context] rendering

pub mod config;
pub mod context;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod messages;
pub mod parsing;
pub mod tab_info;
pub mod testing;
pub mod token;

pub use context::{create_context_string, cursor_context};
pub use error::{PylexError, Result};
pub use lexing::{lex, Lexer};
pub use parsing::{parse, LexNode, LexTree, Parser};
pub use tab_info::TabInfo;
pub use token::{Symbol, Token};
