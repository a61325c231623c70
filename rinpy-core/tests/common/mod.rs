//! 测试辅助工具
//!
//! 提供集成测试共用的扫描与断言辅助函数

#![allow(dead_code)]

use rinpy_core::grammar::rinpy;
use rinpy_core::{Category, GrammarDefinition, RuleEngine, Token};

/// 带块注释与字符串状态的多状态语法
pub const BLOCK_GRAMMAR: &str = r#"{
    "start": [
        { "regex": "/\\*", "token": "comment", "next": "comment" },
        { "regex": "\"", "token": "string", "next": "string" },
        { "regex": "if|else", "token": "keyword" },
        { "regex": "[a-z]+", "token": "variable" }
    ],
    "comment": [
        { "regex": ".*?\\*/", "token": "comment", "next": "start" },
        { "regex": ".+", "token": "comment" }
    ],
    "string": [
        { "regex": "[^\"]+", "token": "string" },
        { "regex": "\"", "token": "string", "next": "start" }
    ]
}"#;

/// 初始化测试日志（重复调用无副作用）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 内建 RinPy 引擎
pub fn rinpy_engine() -> &'static RuleEngine {
    rinpy::engine().expect("built-in grammar must compile")
}

/// 多状态测试引擎
pub fn block_engine() -> RuleEngine {
    GrammarDefinition::from_json(BLOCK_GRAMMAR)
        .and_then(|g| g.build(&Default::default()))
        .expect("test grammar must compile")
}

/// 扫描为 (分类, 文本) 列表
pub fn lex(engine: &RuleEngine, input: &str) -> Vec<(Option<Category>, String)> {
    engine.tokenize(input).map(pair).collect()
}

pub fn pair(token: Token<'_>) -> (Option<Category>, String) {
    (token.category, token.text.to_string())
}

/// 断言 token 连续、不重叠、无空 token，并能拼回原文
pub fn assert_covers(engine: &RuleEngine, input: &str) {
    let mut offset = 0;
    let mut rebuilt = String::new();
    for token in engine.tokenize(input) {
        assert!(!token.text.is_empty(), "empty token in {input:?}");
        assert_eq!(token.span.start.byte_offset, offset, "gap or overlap in {input:?}");
        assert_eq!(&input[token.span.bytes()], token.text);
        offset = token.span.end.byte_offset;
        rebuilt.push_str(token.text);
    }
    assert_eq!(offset, input.len());
    assert_eq!(rebuilt, input);
}

/// 用于覆盖性检查的输入集合
pub const CORPUS: &[&str] = &[
    "",
    " ",
    "if x == 1 { print(x) } # done",
    "var count = add(1, 2)\nprint(count)",
    "\"unterminated",
    "\"a\" + \"b\" # \"c\"",
    "def f(x) { return mult(x, x) }",
    "while not done and ready or !stop { debug(x) }",
    "var\tα = 3 # 注释",
    "var 123",
    "((([[[{{{",
    "/* not a comment here */",
    "😀 emoji and\r\nCRLF",
];
