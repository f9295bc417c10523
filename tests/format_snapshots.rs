//! Snapshot tests for the treeviz and token outputs of the sample documents

use pylex::pylex::formats::{format_tokens, to_treeviz_str, TokenFormat};
use pylex::pylex::{lex, parse, TabInfo};
use std::fs;

fn read_sample_document(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read sample document")
}

#[test]
fn test_nested_sample_treeviz() {
    let content = read_sample_document("docs/samples/nested.py");
    let tree = parse(&content, TabInfo::default());

    insta::assert_snapshot!(to_treeviz_str(&tree), @r###"
    ⧉ root [1-20]
      § class Shape [1-12]
        § function __init__ [2-4]
          ¶ statement [3]
        § function area [5-12]
          § if self.sides == 0 [6-7]
            ¶ statement [7]
          § else [8-12]
            ¶ statement [9]
            ¶ statement [10]
            ¶ statement [11]
      § function main [13-20]
        § for shape in shapes() [14-20]
          § try [15-16]
            ¶ statement [16]
          § except ValueError as err [17-18]
            ¶ statement [18]
          § finally [19-20]
            ¶ statement [20]
    "###);
}

#[test]
fn test_tabs_sample_tokens() {
    let content = read_sample_document("docs/samples/tabs.py");
    let tokens = lex(&content, TabInfo::hard_tabs(4));

    insta::assert_snapshot!(format_tokens(&tokens, TokenFormat::Simple).unwrap(), @r###"
    function(f)@0:0
    INDENT@1:0
    if(x)@1:1
    INDENT@2:0
    statement@2:2
    DEDENT@3:0
    statement@3:1
    DEDENT@4:0
    EOF@4:0
    "###);
}

#[test]
fn test_blank_lines_in_token_stream() {
    let tokens = lex("if a:\n\n    b()\n", TabInfo::default());

    insta::assert_snapshot!(format_tokens(&tokens, TokenFormat::Simple).unwrap(), @r###"
    if(a)@0:0
    EMPTY@1:0
    INDENT@2:0
    statement@2:4
    DEDENT@3:0
    EOF@3:0
    "###);
}
