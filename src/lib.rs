//! RinPy - editor support for the RinPy language
//!
//! 声明式词法规则引擎驱动的语法高亮，以及编辑器面板布局的持久化。
//!
//! # Architecture
//!
//! ```text
//! rinpy-config/  - 纯配置数据（引擎、布局、日志）
//! rinpy-core/    - 规则引擎、RinPy 语法、逐行高亮（纯逻辑，无 IO）
//! rinpy-store/   - 键值存储与布局加载/保存
//! rinpy-cli/     - 命令行（日志初始化在这里）
//! ```
//!
//! # Quick Start
//!
//! ```
//! use rinpy::{highlight, Category};
//!
//! let tokens = highlight("var count # total").unwrap();
//! assert_eq!(tokens[0].category, Some(Category::Keyword));
//! assert_eq!(tokens.last().unwrap().text, "# total");
//! ```

pub use rinpy_config;
pub use rinpy_core;
pub use rinpy_store;

// 重导出常用类型
pub use rinpy_config::{Direction, EngineConfig, LayoutConfig, LogConfig, LogLevel, SplitConfig};
pub use rinpy_core::grammar::rinpy::{engine, grammar};
pub use rinpy_core::{
    Category, ConfigurationError, GrammarDefinition, LineHighlighter, Rule, RuleEngine, RuleTable,
    SourceSpan, StateId, Token, Tokens,
};
pub use rinpy_store::{
    load_layout, on_drag_end, save_sizes, FileStore, KeyValueStore, Layout, MemoryStore,
    PanelSizes, StoreError,
};

/// 用内建 RinPy 语法扫描整段文本
pub fn highlight(source: &str) -> Result<Vec<Token<'_>>, ConfigurationError> {
    Ok(engine()?.tokenize(source).collect())
}

/// 只保留有分类的 token
pub fn highlight_classified(source: &str) -> Result<Vec<Token<'_>>, ConfigurationError> {
    Ok(engine()?.tokenize(source).classified().collect())
}
