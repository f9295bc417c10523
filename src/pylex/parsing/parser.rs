//! Stack-based block parser
//!
//!     The parser consumes the lexer's flat token stream and builds the [LexTree]. It keeps a
//!     stack of open blocks (the current nesting path); the root is implicitly at the bottom and is
//!     never popped.
//!
//!     Indent and Dedent tokens move a working depth counter. For every line token, blocks whose
//!     own depth is greater than or equal to the working depth are popped and closed at that line.
//!     The line then becomes the last child of the block left on top (or the root). Block
//!     symbols are pushed so the following deeper lines nest inside them; statements stay leaves.
//!
//!     Because a statement is never pushed, a line indented deeper than its predecessor without a
//!     block-opening line in between (a continuation line) simply attaches to the current block.
//!     No spurious nesting level is created, whatever the depth difference.
//!
//!     Empty tokens neither open nor close anything. The line they stand for is covered by
//!     whichever block is still open, so trailing blank lines belong to the block above them. Eof
//!     closes every open block at the end of the document.

use crate::pylex::error::{PylexError, Result};
use crate::pylex::lexing::Lexer;
use crate::pylex::parsing::tree::{Label, LexNode, LexTree, NodeId};
use crate::pylex::tab_info::TabInfo;
use crate::pylex::token::{Symbol, Token};

/// Parser for one document. Owns the document text, its indentation convention, and the tree
/// produced by the latest [parse](Parser::parse).
#[derive(Debug, Clone, Default)]
pub struct Parser {
    text: String,
    tab_info: TabInfo,
    tree: Option<LexTree>,
}

/// An open block on the parser stack.
#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    id: NodeId,
    depth: usize,
}

impl Parser {
    pub fn new(text: impl Into<String>, tab_info: TabInfo) -> Self {
        Self {
            text: text.into(),
            tab_info,
            tree: None,
        }
    }

    /// Replace the document and convention, discarding any previous tree.
    pub fn reset(&mut self, text: impl Into<String>, tab_info: TabInfo) {
        self.text = text.into();
        self.tab_info = tab_info;
        self.tree = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tab_info(&self) -> &TabInfo {
        &self.tab_info
    }

    /// The tree built by the latest parse, if any.
    pub fn tree(&self) -> Option<&LexTree> {
        self.tree.as_ref()
    }

    /// Build (or rebuild) the tree from the configured text.
    pub fn parse(&mut self) -> &LexTree {
        let lexer = Lexer::new(&self.text, self.tab_info);
        let tree = build_tree(lexer.tokenize(), lexer.line_count());
        tracing::debug!(
            lines = tree.line_count(),
            nodes = tree.len(),
            "parsed document"
        );
        self.tree.insert(tree)
    }

    /// Enclosing blocks of `line`, deepest first, ending at the root.
    pub fn context(&self, line: usize) -> Result<Vec<&LexNode>> {
        self.tree.as_ref().ok_or(PylexError::NotParsed)?.context(line)
    }

    pub fn into_tree(self) -> Option<LexTree> {
        self.tree
    }
}

/// Parse `text` in one go.
pub fn parse(text: &str, tab_info: TabInfo) -> LexTree {
    let lexer = Lexer::new(text, tab_info);
    build_tree(lexer.tokenize(), lexer.line_count())
}

/// Build a tree of `line_count` lines from a token stream.
pub fn build_tree(tokens: Vec<Token>, line_count: usize) -> LexTree {
    let mut tree = LexTree::new(line_count);
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut depth = 0usize;

    for token in tokens {
        match token.symbol {
            Symbol::Indent => depth += 1,
            Symbol::Dedent => depth = depth.saturating_sub(1),
            Symbol::Empty => {}
            Symbol::Eof => break,
            Symbol::Statement => {
                close_until(&mut tree, &mut stack, depth, token.line);
                let parent = top(&stack);
                tree.push_child(parent, Label::Statement, token);
            }
            Symbol::Function
            | Symbol::Class
            | Symbol::If
            | Symbol::Elif
            | Symbol::Else
            | Symbol::For
            | Symbol::While
            | Symbol::Try
            | Symbol::Except
            | Symbol::Finally
            | Symbol::With => {
                close_until(&mut tree, &mut stack, depth, token.line);
                let parent = top(&stack);
                let id = tree.push_child(parent, Label::Block, token);
                stack.push(OpenBlock { id, depth });
            }
        }
    }

    while let Some(block) = stack.pop() {
        tree.close(block.id, line_count);
    }

    tree
}

fn top(stack: &[OpenBlock]) -> NodeId {
    stack.last().map(|block| block.id).unwrap_or(NodeId::ROOT)
}

/// Pop and close every open block at or below `depth`; the line `line` is outside them.
fn close_until(tree: &mut LexTree, stack: &mut Vec<OpenBlock>, depth: usize, line: usize) {
    while let Some(block) = stack.last().copied() {
        if depth > block.depth {
            break;
        }
        tree.close(block.id, line);
        stack.pop();
    }
}
