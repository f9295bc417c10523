//! Fluent assertion API for block trees
//!
//!     Tests describe the expected shape of a tree instead of walking the arena by hand. The
//!     walking code lives here once, so a change to the node layout only touches this module.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     let tree = parse("class A:\n    def m(self):\n        pass\n", TabInfo::default());
//!
//!     assert_tree(&tree).child_count(1).child(0, |class| {
//!         class
//!             .symbol(Symbol::Class)
//!             .attr("A")
//!             .child(0, |method| {
//!                 method.symbol(Symbol::Function).attr("m").lines(1..3);
//!             });
//!     });
//!     ```

use crate::pylex::parsing::{Label, LexNode, LexTree, NodeId};
use crate::pylex::token::Symbol;
use std::ops::Range;

/// Create an assertion builder for the root of a tree.
pub fn assert_tree(tree: &LexTree) -> NodeAssertion<'_> {
    NodeAssertion {
        tree,
        node: tree.root(),
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    tree: &'a LexTree,
    node: &'a LexNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn node(&self) -> &'a LexNode {
        self.node
    }

    pub fn label(self, expected: Label) -> Self {
        assert_eq!(
            self.node.label, expected,
            "{}: expected label {}, found {}",
            self.context, expected, self.node.label
        );
        self
    }

    pub fn symbol(self, expected: Symbol) -> Self {
        let actual = self.node.token.as_ref().map(|token| token.symbol);
        assert_eq!(
            actual,
            Some(expected),
            "{}: expected symbol {}",
            self.context,
            expected
        );
        self
    }

    pub fn attr(self, expected: &str) -> Self {
        let actual = self.node.token.as_ref().and_then(|token| token.attr.as_deref());
        assert_eq!(
            actual,
            Some(expected),
            "{}: expected attr {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn no_attr(self) -> Self {
        let actual = self.node.token.as_ref().and_then(|token| token.attr.as_deref());
        assert_eq!(actual, None, "{}: expected no attr", self.context);
        self
    }

    pub fn lines(self, expected: Range<usize>) -> Self {
        assert_eq!(
            self.node.lines, expected,
            "{}: unexpected line range",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: unexpected child count",
            self.context
        );
        self
    }

    pub fn child<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let Some(id) = self.node.children.get(index).copied() else {
            panic!(
                "{}: child {} requested but only {} children",
                self.context,
                index,
                self.node.children.len()
            );
        };
        check(NodeAssertion {
            tree: self.tree,
            node: self.tree.node(id),
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

/// Symbols along the context path of `line`, `None` standing for the root.
pub fn context_symbols(tree: &LexTree, line: usize) -> Vec<Option<Symbol>> {
    tree.context(line)
        .expect("line in range")
        .iter()
        .map(|node| node.token.as_ref().map(|token| token.symbol))
        .collect()
}

/// Check the structural invariants every parse must uphold, panicking on the first violation.
///
///     - the root is node 0, has no token, depth 0, and covers every line
///     - every other node has a token and sits one level below its parent
///     - children are ordered by line and earlier siblings end before later ones begin
///     - children stay inside their parent's range
pub fn assert_tree_invariants(tree: &LexTree) {
    let root = tree.root();
    assert_eq!(root.id, NodeId::ROOT);
    assert!(root.token.is_none(), "root must not carry a token");
    assert_eq!(root.depth, 0);
    assert_eq!(root.lines, 0..tree.line_count());

    for node in tree.nodes().iter().skip(1) {
        let parent = tree.parent(node.id).expect("non-root node without parent");
        assert!(node.token.is_some(), "node {:?} has no token", node.id);
        assert_eq!(node.depth, parent.depth + 1, "depth of {:?}", node.id);
        assert!(
            parent.lines.start <= node.lines.start && node.lines.end <= parent.lines.end,
            "node {:?} escapes its parent",
            node.id
        );
    }

    for node in tree.nodes() {
        let children: Vec<&LexNode> = tree.children(node.id).collect();
        for pair in children.windows(2) {
            let earlier_last = pair[0].last_line().expect("non-empty range");
            assert!(
                earlier_last < pair[1].lines.start,
                "siblings {:?} and {:?} overlap",
                pair[0].id,
                pair[1].id
            );
        }
    }
}
