//! Tree building and context queries over whole documents
//!
//! Small inline documents cover the basic shapes; `docs/samples/` holds the larger documents
//! that mix every block kind with blank and continuation lines.

use pylex::pylex::parsing::Label;
use pylex::pylex::testing::{assert_tree, assert_tree_invariants, context_symbols};
use pylex::pylex::{create_context_string, parse, Parser, PylexError, Symbol, TabInfo};
use std::fs;

fn read_sample_document(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read sample document")
}

fn context_string(tree: &pylex::pylex::LexTree, line: usize) -> String {
    let path = tree.context(line).expect("line in range");
    create_context_string(&path, line).expect("non-empty path")
}

#[test]
fn test_single_function() {
    let tree = parse("def f():\n    x = 1\n    return x\n", TabInfo::default());
    assert_tree_invariants(&tree);

    assert_tree(&tree)
        .label(Label::Root)
        .lines(0..3)
        .child_count(1)
        .child(0, |function| {
            function
                .label(Label::Block)
                .symbol(Symbol::Function)
                .attr("f")
                .lines(0..3)
                .child_count(2)
                .child(0, |first| {
                    first.symbol(Symbol::Statement).no_attr().lines(1..2);
                })
                .child(1, |second| {
                    second.symbol(Symbol::Statement).lines(2..3);
                });
        });

    assert_eq!(
        context_symbols(&tree, 1),
        vec![Some(Symbol::Function), None]
    );
}

#[test]
fn test_method_inside_class() {
    let tree = parse("class A:\n    def m(self):\n        pass\n", TabInfo::default());
    assert_tree_invariants(&tree);

    let path = tree.context(2).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[0].token.as_ref().unwrap().attr.as_deref(), Some("m"));
    assert_eq!(path[1].token.as_ref().unwrap().attr.as_deref(), Some("A"));
    assert!(path[2].is_root());
}

#[test]
fn test_blank_input() {
    let tree = parse("", TabInfo::default());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.line_count(), 0);
    assert!(matches!(
        tree.context(0),
        Err(PylexError::OutOfBounds { line: 0, line_count: 0 })
    ));
}

#[test]
fn test_context_past_the_end() {
    let tree = parse("x = 1\ny = 2", TabInfo::default());
    assert!(tree.context(1).is_ok());
    assert!(tree.context(2).is_err());
}

#[test]
fn test_top_level_statement_context_is_root() {
    let tree = parse("import os\n", TabInfo::default());
    assert_eq!(context_symbols(&tree, 0), vec![None]);
    assert_eq!(context_string(&tree, 0), "Line 1 in the Document Root");
}

#[test]
fn test_siblings_at_same_depth() {
    let tree = parse(
        "if a:\n    x()\nelif b:\n    y()\nelse:\n    z()\n",
        TabInfo::default(),
    );
    assert_tree_invariants(&tree);

    assert_tree(&tree)
        .child_count(3)
        .child(0, |branch| {
            branch.symbol(Symbol::If).attr("a").lines(0..2);
        })
        .child(1, |branch| {
            branch.symbol(Symbol::Elif).attr("b").lines(2..4);
        })
        .child(2, |branch| {
            branch.symbol(Symbol::Else).no_attr().lines(4..6);
        });
}

#[test]
fn test_dedent_by_several_levels() {
    let text = "def f():\n    for i in x:\n        if i:\n            go(i)\ndone()\n";
    let tree = parse(text, TabInfo::default());
    assert_tree_invariants(&tree);

    assert_tree(&tree)
        .child_count(2)
        .child(0, |function| {
            function.symbol(Symbol::Function).lines(0..4).child(0, |for_block| {
                for_block.symbol(Symbol::For).lines(1..4).child(0, |if_block| {
                    if_block.symbol(Symbol::If).attr("i").lines(2..4);
                });
            });
        })
        .child(1, |statement| {
            statement.symbol(Symbol::Statement).lines(4..5);
        });
}

#[test]
fn test_block_without_body() {
    let tree = parse("def f():\nx = 1\n", TabInfo::default());
    assert_tree(&tree)
        .child_count(2)
        .child(0, |function| {
            function.symbol(Symbol::Function).lines(0..1).child_count(0);
        });
}

#[test]
fn test_continuation_lines_do_not_nest() {
    let text = "def f():\n    total = add(\n            1,\n        2)\n    return total\n";
    let tree = parse(text, TabInfo::default());
    assert_tree_invariants(&tree);

    assert_tree(&tree).child_count(1).child(0, |function| {
        function.lines(0..5).child_count(4);
    });
    assert_eq!(
        context_symbols(&tree, 2),
        vec![Some(Symbol::Function), None]
    );
}

#[test]
fn test_trailing_blank_lines_stay_in_open_block() {
    let tree = parse("def f():\n    pass\n\n\n", TabInfo::default());
    assert_eq!(tree.line_count(), 4);
    assert_tree(&tree).child(0, |function| {
        function.lines(0..4);
    });
    assert_eq!(
        context_symbols(&tree, 3),
        vec![Some(Symbol::Function), None]
    );
}

#[test]
fn test_parser_requires_parse_before_context() {
    let mut parser = Parser::new("def f():\n    pass\n", TabInfo::default());
    assert!(matches!(parser.context(0), Err(PylexError::NotParsed)));

    parser.parse();
    assert_eq!(parser.context(1).unwrap().len(), 2);
}

#[test]
fn test_parser_reset_rebuilds() {
    let mut parser = Parser::new("x = 1\n", TabInfo::default());
    parser.parse();
    assert_eq!(parser.tree().unwrap().len(), 2);

    parser.reset("class A:\n    pass\n", TabInfo::default());
    assert!(parser.tree().is_none());
    let tree = parser.parse();
    assert_eq!(tree.root().children.len(), 1);
}

#[test]
fn test_nested_sample_structure() {
    let content = read_sample_document("docs/samples/nested.py");
    let tree = parse(&content, TabInfo::default());
    assert_tree_invariants(&tree);
    assert_eq!(tree.line_count(), 20);

    assert_tree(&tree)
        .child_count(2)
        .child(0, |class| {
            class
                .symbol(Symbol::Class)
                .attr("Shape")
                .lines(0..12)
                .child_count(2)
                .child(0, |init| {
                    init.attr("__init__").lines(1..4);
                })
                .child(1, |area| {
                    area.attr("area")
                        .lines(4..12)
                        .child(0, |branch| {
                            branch.symbol(Symbol::If).attr("self.sides == 0").lines(5..7);
                        })
                        .child(1, |branch| {
                            branch.symbol(Symbol::Else).lines(7..12).child_count(3);
                        });
                });
        })
        .child(1, |main| {
            main.attr("main").lines(12..20).child(0, |for_block| {
                for_block
                    .symbol(Symbol::For)
                    .attr("shape in shapes()")
                    .child_count(3)
                    .child(0, |handler| {
                        handler.symbol(Symbol::Try).lines(14..16);
                    })
                    .child(1, |handler| {
                        handler
                            .symbol(Symbol::Except)
                            .attr("ValueError as err")
                            .lines(16..18);
                    })
                    .child(2, |handler| {
                        handler.symbol(Symbol::Finally).lines(18..20);
                    });
            });
        });
}

#[test]
fn test_nested_sample_context_strings() {
    let content = read_sample_document("docs/samples/nested.py");
    let tree = parse(&content, TabInfo::default());

    assert_eq!(
        context_string(&tree, 0),
        "Line 1: class Shape in the Document Root"
    );
    assert_eq!(
        context_string(&tree, 3),
        "Line 4 inside function __init__ inside class Shape in the Document Root"
    );
    assert_eq!(
        context_string(&tree, 9),
        "Line 10 inside else inside function area inside class Shape in the Document Root"
    );
    assert_eq!(
        context_string(&tree, 16),
        "Line 17: except ValueError as err inside for shape in shapes() inside function main in the Document Root"
    );
}

#[test]
fn test_hard_tab_sample() {
    let content = read_sample_document("docs/samples/tabs.py");
    let tree = parse(&content, TabInfo::hard_tabs(4));
    assert_tree_invariants(&tree);

    assert_tree(&tree).child_count(1).child(0, |function| {
        function
            .lines(0..4)
            .child_count(2)
            .child(0, |branch| {
                branch.symbol(Symbol::If).attr("x").lines(1..3);
            })
            .child(1, |statement| {
                statement.symbol(Symbol::Statement).lines(3..4);
            });
    });
}

#[test]
fn test_unicode_names_keep_their_blocks() {
    let tree = parse("def café():\n    x = 1\nclass Größe:\n    pass\n", TabInfo::default());
    assert_tree_invariants(&tree);

    assert_tree(&tree)
        .child_count(2)
        .child(0, |function| {
            function.symbol(Symbol::Function).attr("café").lines(0..2);
        })
        .child(1, |class| {
            class.symbol(Symbol::Class).attr("Größe").lines(2..4);
        });
    assert_eq!(
        context_string(&tree, 1),
        "Line 2 inside function café in the Document Root"
    );
}
