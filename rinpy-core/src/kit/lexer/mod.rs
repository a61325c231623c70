//! RinPy 词法规则引擎
//!
//! 声明式、基于状态的规则表驱动的扫描器：
//! - 有序规则：状态内按声明顺序取第一条命中（不是最长匹配）
//! - 分组切分：一次命中按捕获组拆成多个 token
//! - 状态转移：命中后切换扫描模式
//! - 容错：无规则命中时吞一个字符作为未分类文本，永不报错

pub mod category;
pub mod core;
pub mod engine;
pub mod error;
pub mod rule;
pub mod scanner;

pub use category::Category;
pub use self::core::{SourcePosition, SourceSpan};
pub use engine::{RuleEngine, StateId};
pub use error::ConfigurationError;
pub use rule::{Rule, RuleTable, RuleToken};
pub use scanner::{Token, Tokens};
