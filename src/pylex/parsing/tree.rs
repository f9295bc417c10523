//! Block tree
//!
//!     The parse result is an arena of [LexNode]s. Nodes refer to their children and to their
//!     parent by [NodeId]; the arena owns every node, so there is no reference cycle between a
//!     node and its parent. Index 0 is always the root.
//!
//!     Every node covers a half-open range of 0-based lines. The root covers the whole document.
//!     A block covers its introducing line up to the next non-empty line indented at or above the
//!     block's own level (or the end of the document), so blank lines at the end of a block
//!     belong to it. A statement covers its own line.

use crate::pylex::error::{PylexError, Result};
use crate::pylex::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Handle of a node inside its [LexTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Coarse node category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Root,
    Block,
    Statement,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Root => "root",
            Label::Block => "block",
            Label::Statement => "statement",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexNode {
    pub id: NodeId,
    pub label: Label,
    /// The introducing token. `None` only for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
    pub children: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    pub depth: usize,
    /// Covered lines, 0-based, end exclusive.
    pub lines: Range<usize>,
}

impl LexNode {
    pub fn is_root(&self) -> bool {
        self.label == Label::Root
    }

    pub fn is_block(&self) -> bool {
        self.label == Label::Block
    }

    /// Line of the introducing token, if any.
    pub fn start_line(&self) -> Option<usize> {
        self.token.as_ref().map(|token| token.line)
    }

    /// Last covered line (inclusive), `None` for an empty range.
    pub fn last_line(&self) -> Option<usize> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.end - 1)
        }
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }
}

/// A parsed document: an arena of nodes rooted at [NodeId::ROOT].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexTree {
    nodes: Vec<LexNode>,
    line_count: usize,
}

impl LexTree {
    /// A tree holding only the root, covering `line_count` lines.
    pub fn new(line_count: usize) -> Self {
        let root = LexNode {
            id: NodeId::ROOT,
            label: Label::Root,
            token: None,
            children: Vec::new(),
            parent: None,
            depth: 0,
            lines: 0..line_count,
        };
        Self {
            nodes: vec![root],
            line_count,
        }
    }

    pub fn root(&self) -> &LexNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn node(&self, id: NodeId) -> &LexNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&LexNode> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[LexNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn parent(&self, id: NodeId) -> Option<&LexNode> {
        self.node(id).parent.map(|parent| self.node(parent))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &LexNode> + '_ {
        self.node(id).children.iter().map(move |child| self.node(*child))
    }

    /// Append a node as the last child of `parent`. Its range starts and ends at the token line;
    /// blocks are widened by [close](Self::close).
    pub(crate) fn push_child(&mut self, parent: NodeId, label: Label, token: Token) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.node(parent).depth + 1;
        let line = token.line;
        self.nodes.push(LexNode {
            id,
            label,
            token: Some(token),
            children: Vec::new(),
            parent: Some(parent),
            depth,
            lines: line..line + 1,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Close a block's line range at `end` (exclusive).
    pub(crate) fn close(&mut self, id: NodeId, end: usize) {
        let node = &mut self.nodes[id.index()];
        node.lines.end = end.max(node.lines.start + 1);
    }

    /// The path of blocks enclosing `line`, deepest first, ending at the root.
    ///
    /// Statements are leaves and never part of the path: a statement line resolves to the
    /// block it lives in.
    pub fn context(&self, line: usize) -> Result<Vec<&LexNode>> {
        if line >= self.line_count {
            return Err(PylexError::out_of_bounds(line, self.line_count));
        }

        let mut path = vec![self.root()];
        let mut current = self.root();
        while let Some(child) = self
            .children(current.id)
            .find(|child| child.is_block() && child.contains_line(line))
        {
            path.push(child);
            current = child;
        }

        path.reverse();
        Ok(path)
    }

    /// The deepest block enclosing `line`, or the root.
    pub fn innermost(&self, line: usize) -> Result<&LexNode> {
        let path = self.context(line)?;
        Ok(path[0])
    }

    /// Depth-first, source-ordered traversal starting at the root.
    pub fn walk(&self) -> Vec<&LexNode> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            out.push(node);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }
}
