//! 规则表配置错误
//!
//! 扫描本身不会失败（无法匹配的字符按未分类输出），
//! 所有错误都发生在构建规则引擎时。

use thiserror::Error;

/// 规则表配置错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// 起始状态不存在
    #[error("start state '{0}' is not defined")]
    MissingStartState(String),

    /// 同名状态重复定义
    #[error("state '{0}' is defined more than once")]
    DuplicateState(String),

    /// 转移目标不存在
    #[error("rule {index} of state '{state}' switches to undefined state '{target}'")]
    UndefinedState {
        state: String,
        index: usize,
        target: String,
    },

    /// 正则表达式非法
    #[error("rule {index} of state '{state}' has an invalid pattern: {message}")]
    InvalidPattern {
        state: String,
        index: usize,
        message: String,
    },

    /// 分组分类数量与捕获组数量不一致
    #[error(
        "rule {index} of state '{state}' names {categories} categories for {groups} capture groups"
    )]
    GroupCountMismatch {
        state: String,
        index: usize,
        categories: usize,
        groups: usize,
    },

    /// 未知分类名
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// 语法定义文档无法解析
    #[error("invalid grammar definition at {line}:{column}: {message}")]
    InvalidGrammar {
        message: String,
        line: usize,
        column: usize,
    },
}

impl ConfigurationError {
    /// 出错位置（仅语法定义文档错误带位置，1-based）
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ConfigurationError::InvalidGrammar { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::InvalidGrammar {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
