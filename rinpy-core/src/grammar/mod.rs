//! 语法定义
//!
//! - [`definition`]：JSON 文档形式的规则表
//! - [`rinpy`]：内建的 RinPy 高亮规则

pub mod definition;
pub mod rinpy;

pub use definition::{GrammarDefinition, GrammarMeta, RuleDefinition, TokenSpec};
