//! RinPy Core - 词法规则引擎与高亮（纯逻辑，无 IO）
//!
//! 包含声明式规则引擎、RinPy 语法定义和逐行高亮缓存。
//! 只操作内存中的数据，不读写文件，不输出到终端。
//!
//! 配置通过参数显式传入，不依赖全局状态。

pub mod grammar;
pub mod highlight;
pub mod kit;

// 常用类型
pub use grammar::{GrammarDefinition, GrammarMeta, RuleDefinition, TokenSpec};
pub use highlight::LineHighlighter;
pub use kit::lexer::{
    Category, ConfigurationError, Rule, RuleEngine, RuleTable, RuleToken, SourcePosition,
    SourceSpan, StateId, Token, Tokens,
};

// 来自 rinpy-config 的配置类型
pub use rinpy_config::EngineConfig;
