//! JSON 语法定义测试

mod common;

use common::{lex, rinpy_engine, BLOCK_GRAMMAR};
use rinpy_core::grammar::rinpy;
use rinpy_core::{Category, ConfigurationError, EngineConfig, GrammarDefinition};

#[test]
fn test_builtin_grammar_document() {
    let doc = rinpy::grammar();
    assert_eq!(doc.meta.line_comment.as_deref(), Some(rinpy::LINE_COMMENT));
    assert_eq!(doc.states.len(), 1);
    assert_eq!(doc.states["start"].len(), 12);

    let json = doc.to_json().unwrap();
    assert!(json.contains("\"lineComment\": \"#\""));
    assert!(json.contains("variable-2"));
}

#[test]
fn test_builtin_grammar_from_json_scans_identically() {
    let json = rinpy::grammar().to_json().unwrap();
    let engine = GrammarDefinition::from_json(&json)
        .unwrap()
        .build(&EngineConfig::default())
        .unwrap();

    let input = "var n = num(\"3\")\nif n > 2 { plot(n) } else { debug(n) } # ok";
    assert_eq!(lex(&engine, input), lex(rinpy_engine(), input));
}

#[test]
fn test_custom_start_state_from_config() {
    let doc = GrammarDefinition::from_json(BLOCK_GRAMMAR).unwrap();
    let config = EngineConfig {
        start_state: "comment".to_string(),
    };
    let engine = doc.build(&config).unwrap();
    let tokens = lex(&engine, "x */ if");
    assert_eq!(tokens[0], (Some(Category::Comment), "x */".to_string()));
    assert_eq!(tokens.last().unwrap().0, Some(Category::Keyword));
}

#[test]
fn test_grouped_count_mismatch_from_json() {
    let doc = GrammarDefinition::from_json(
        r#"{ "start": [ { "regex": "(a)(b)(c)", "token": ["atom", null] } ] }"#,
    )
    .unwrap();
    let err = doc.build(&EngineConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::GroupCountMismatch {
            state: "start".to_string(),
            index: 0,
            categories: 2,
            groups: 3,
        }
    );
}

#[test]
fn test_missing_start_in_document() {
    let doc = GrammarDefinition::from_json(r#"{ "main": [] }"#).unwrap();
    assert_eq!(
        doc.build(&EngineConfig::default()).unwrap_err(),
        ConfigurationError::MissingStartState("start".to_string())
    );
}

#[test]
fn test_syntax_error_location() {
    let json = "{\n  \"start\": [\n    { \"regex\" \"x\" }\n  ]\n}";
    let err = GrammarDefinition::from_json(json).unwrap_err();
    assert_eq!(err.location().map(|(line, _)| line), Some(3));
}
