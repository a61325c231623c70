//! 测试辅助工具

#![allow(dead_code)]

use rinpy::{Category, Token};

/// (分类, 文本) 对
pub fn pairs<'t>(tokens: &[Token<'t>]) -> Vec<(Option<Category>, &'t str)> {
    tokens.iter().map(|t| (t.category, t.text)).collect()
}

/// 拥有所有权的 (分类, 文本) 对
pub fn owned(tokens: &[Token<'_>]) -> Vec<(Option<Category>, String)> {
    tokens.iter().map(|t| (t.category, t.text.to_string())).collect()
}

/// 拼回原文
pub fn rebuild(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

/// 一段较完整的 RinPy 程序
pub const PROGRAM: &str = r#"# integrate and plot
var lo = 0
var hi = 10
def area(f) {
    return integ(f, lo, hi)
}
if area(fun) > 5 and not debug {
    print("big")
} else {
    plot([lo, hi])
}
"#;
