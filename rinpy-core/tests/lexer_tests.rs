//! 规则引擎与内建 RinPy 语法的端到端测试

mod common;

use common::{assert_covers, block_engine, init_tracing, lex, rinpy_engine, CORPUS};
use rinpy_core::{Category, ConfigurationError, Rule, RuleEngine, RuleTable};

fn some(category: Category, text: &str) -> (Option<Category>, String) {
    (Some(category), text.to_string())
}

fn none(text: &str) -> (Option<Category>, String) {
    (None, text.to_string())
}

#[test]
fn test_if_print_comment_line() {
    init_tracing();
    let tokens = lex(rinpy_engine(), "if x == 1 { print(x) } # done");
    assert_eq!(
        tokens,
        vec![
            some(Category::Keyword, "if"),
            none(" "),
            none("x"),
            none(" "),
            some(Category::Operator, "=="),
            none(" "),
            none("1"),
            none(" "),
            some(Category::Bracket, "{"),
            none(" "),
            some(Category::BuiltinIo, "print"),
            some(Category::Bracket, "("),
            none("x"),
            some(Category::Bracket, ")"),
            none(" "),
            some(Category::Bracket, "}"),
            none(" "),
            some(Category::Comment, "# done"),
        ]
    );
}

#[test]
fn test_var_declaration_single_match() {
    let engine = rinpy_engine();
    let mut tokens = engine.tokenize("var count");
    let first = tokens.next().unwrap();
    // 分组命中一次性产出全部 token，游标已越过整个匹配
    assert_eq!(tokens.position().byte_offset, "var count".len());
    assert_eq!((first.category, first.text), (Some(Category::Keyword), "var"));

    let rest: Vec<_> = tokens.map(|t| (t.category, t.text)).collect();
    assert_eq!(rest, vec![(None, " "), (Some(Category::Variable), "count")]);
}

#[test]
fn test_unterminated_string_terminates() {
    let input = "\"unterminated";
    let tokens = lex(rinpy_engine(), input);
    assert_eq!(tokens.len(), input.chars().count());
    assert!(tokens.iter().all(|(category, text)| category.is_none() && text.chars().count() == 1));
}

#[test]
fn test_coverage_over_corpus() {
    for input in CORPUS {
        assert_covers(rinpy_engine(), input);
        assert_covers(&block_engine(), input);
    }
}

#[test]
fn test_deterministic() {
    let engine = rinpy_engine();
    for input in CORPUS {
        assert_eq!(lex(engine, input), lex(engine, input));
    }
}

#[test]
fn test_token_count_bounded_by_length() {
    for input in CORPUS {
        let count = rinpy_engine().tokenize(input).count();
        assert!(count <= input.chars().count());
    }
}

#[test]
fn test_earlier_rule_wins() {
    let table = |first: Category, second: Category| {
        RuleTable::new().state(
            "start",
            vec![Rule::plain("if", first), Rule::plain("i[a-z]", second)],
        )
    };
    let a = RuleEngine::new(table(Category::Keyword, Category::Variable)).unwrap();
    let b = RuleEngine::new(table(Category::Variable, Category::Keyword)).unwrap();
    assert_eq!(lex(&a, "if"), vec![some(Category::Keyword, "if")]);
    assert_eq!(lex(&b, "if"), vec![some(Category::Variable, "if")]);
}

#[test]
fn test_multi_state_scan() {
    let engine = block_engine();
    let tokens = lex(&engine, "if /* x */ \"s t\" y");
    assert_eq!(
        tokens,
        vec![
            some(Category::Keyword, "if"),
            none(" "),
            some(Category::Comment, "/*"),
            some(Category::Comment, " x */"),
            none(" "),
            some(Category::String, "\""),
            some(Category::String, "s t"),
            some(Category::String, "\""),
            none(" "),
            some(Category::Variable, "y"),
        ]
    );
}

#[test]
fn test_end_state_after_scan() {
    let engine = block_engine();
    let mut tokens = engine.tokenize("x /* open");
    tokens.by_ref().for_each(drop);
    assert_eq!(tokens.state_name(), "comment");

    let resumed: Vec<_> = engine
        .tokenize_with_state("still */ if", tokens.state())
        .map(|t| (t.category, t.text))
        .collect();
    assert_eq!(resumed[0], (Some(Category::Comment), "still */"));
    assert_eq!(resumed.last(), Some(&(Some(Category::Keyword), "if")));
}

#[test]
fn test_tokenize_from_named_state() {
    let engine = block_engine();
    let tokens: Vec<_> = engine
        .tokenize_from("abc\" if", "string")
        .unwrap()
        .map(|t| (t.category, t.text))
        .collect();
    assert_eq!(tokens[0], (Some(Category::String), "abc"));
    assert_eq!(tokens[1], (Some(Category::String), "\""));

    let err = engine.tokenize_from("abc", "heredoc").unwrap_err();
    assert_eq!(err, ConfigurationError::MissingStartState("heredoc".to_string()));
}

#[test]
fn test_construction_errors() {
    let undefined = RuleTable::new().state("start", vec![Rule::transition("<", "tag")]);
    assert!(matches!(
        RuleEngine::new(undefined),
        Err(ConfigurationError::UndefinedState { .. })
    ));

    let invalid = RuleTable::new().state("start", vec![Rule::plain("[", Category::Bracket)]);
    assert!(matches!(
        RuleEngine::new(invalid),
        Err(ConfigurationError::InvalidPattern { .. })
    ));

    let missing = RuleTable::new().state("default", vec![]);
    assert!(matches!(
        RuleEngine::new(missing),
        Err(ConfigurationError::MissingStartState(_))
    ));
}

#[test]
fn test_error_messages() {
    let err = ConfigurationError::UndefinedState {
        state: "start".to_string(),
        index: 2,
        target: "tag".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("tag"));
    assert!(message.contains("start"));
}
