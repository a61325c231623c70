//! RinPy 语法高亮规则
//!
//! 单一 `start` 状态，规则顺序即优先级。没有通用标识符规则：
//! 普通变量名、数字、空白都按未分类文本逐字符输出。

use once_cell::sync::OnceCell;
use tracing::debug;

use super::definition::{GrammarDefinition, GrammarMeta};
use crate::kit::lexer::{Category, ConfigurationError, Rule, RuleEngine, RuleTable};

/// 语言名
pub const NAME: &str = "rinpy";

/// 行注释前缀
pub const LINE_COMMENT: &str = "#";

/// 保留字
pub const KEYWORDS: &[&str] = &["if", "else", "for", "while", "return", "var"];
/// 数值与运算内建
pub const NUMERIC_BUILTINS: &[&str] = &["num", "add", "integ", "div", "mult", "time", "fun"];
/// I/O 与工具内建
pub const IO_BUILTINS: &[&str] = &["print", "plot", "calc", "debug"];
/// 逻辑词
pub const LOGIC_WORDS: &[&str] = &["and", "or", "not"];

static ENGINE: OnceCell<RuleEngine> = OnceCell::new();

/// RinPy 规则表
///
/// `var` 声明规则放在保留字规则之前：两者都能匹配 `var`，
/// 先到先得的语义下只有这样分组规则才有机会命中。
pub fn rule_table() -> RuleTable {
    RuleTable::new().state(
        "start",
        vec![
            Rule::grouped(
                r"(var)(\s+)([a-zA-Z]+)",
                [Some(Category::Keyword), None, Some(Category::Variable)],
            ),
            Rule::plain(KEYWORDS.join("|"), Category::Keyword),
            Rule::plain(NUMERIC_BUILTINS.join("|"), Category::BuiltinNumeric),
            Rule::plain(IO_BUILTINS.join("|"), Category::BuiltinIo),
            Rule::plain(r"[-+/*=<>!]+", Category::Operator),
            Rule::plain(LOGIC_WORDS.join("|"), Category::Atom),
            Rule::plain("def", Category::Def),
            Rule::plain(r"\{|\}", Category::Bracket),
            Rule::plain(r"\(|\)", Category::Bracket),
            Rule::plain(r"\[|\]", Category::Bracket),
            Rule::plain(r#"".*?""#, Category::String),
            Rule::plain(r"#.*", Category::Comment),
        ],
    )
}

/// 构建一个新的 RinPy 引擎
pub fn build() -> Result<RuleEngine, ConfigurationError> {
    Ok(RuleEngine::new(rule_table())?.with_line_comment(LINE_COMMENT))
}

/// 进程内共享的 RinPy 引擎（首次调用时构建）
pub fn engine() -> Result<&'static RuleEngine, ConfigurationError> {
    ENGINE.get_or_try_init(|| {
        debug!(target: "rinpy::lexer", "Initializing shared RinPy engine");
        build()
    })
}

/// 文档形式的 RinPy 语法
pub fn grammar() -> GrammarDefinition {
    GrammarDefinition::from_table(
        &rule_table(),
        GrammarMeta {
            line_comment: Some(LINE_COMMENT.to_string()),
        },
    )
}
