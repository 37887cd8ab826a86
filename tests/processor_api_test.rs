//! Tests for the processing API across stages and formats

use toylang::toylang::config::ScannerConfig;
use toylang::toylang::processor::{process_source, process_source_with_config, ProcessingSpec};

fn process(source: &str, format: &str) -> String {
    let spec = ProcessingSpec::from_string(format).unwrap();
    process_source(source, &spec).unwrap()
}

#[test]
fn test_ast_tag_return() {
    insta::assert_snapshot!(process("return 2", "ast-tag"), @r###"
    <program>
      <return><children>
        <number>2</number>
      </children></return>
    </program>
    "###);
}

#[test]
fn test_ast_tag_conditional() {
    insta::assert_snapshot!(process("if 2 == 3\n  1 + 4\n", "ast-tag"), @r###"
    <program>
      <if><children>
        <equals>==<children>
          <number>2</number>
          <number>3</number>
        </children></equals>
        <binary_operation>+<children>
          <number>1</number>
          <number>4</number>
        </children></binary_operation>
      </children></if>
    </program>
    "###);
}

#[test]
fn test_ast_treeviz_definition() {
    insta::assert_snapshot!(process("def add(a, b)\n  1 - 2\n", "ast-treeviz"), @r###"
    └─ function_definition: add(a, b)
      └─ binary_operation: -
        ├─ number: 1
        └─ number: 2
    "###);
}

#[test]
fn test_token_simple_blocks() {
    insta::assert_snapshot!(process("if 1 == 1\n  2\n", "token-simple"), @r###"
    <if:if><number:1><equals><number:1><new_line>
    <open_block><number:2><close_block><eof>
    "###);
}

#[test]
fn test_indent_width_changes_tokens() {
    let spec = ProcessingSpec::from_string("token-simple").unwrap();
    let source = "if 1 == 1\n    2\n";

    assert!(process_source(source, &spec).is_err());

    let wide = ScannerConfig::with_indent_width(4).unwrap();
    let output = process_source_with_config(source, &spec, wide).unwrap();
    assert!(output.contains("<open_block><number:2>"));
}
