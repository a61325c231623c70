//! 规则引擎
//!
//! 把 [`RuleTable`] 编译成不可变的扫描表：正则锚定并编译，
//! 转移目标解析为状态下标。构建后只读，可在任意多个调用方之间共享。

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

use rinpy_config::{EngineConfig, DEFAULT_START_STATE};

use super::error::ConfigurationError;
use super::rule::{RuleTable, RuleToken};
use super::scanner::Tokens;

const TARGET: &str = "rinpy::lexer";

/// 状态下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);

/// 编译后的规则
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) regex: Regex,
    pub(crate) token: RuleToken,
    pub(crate) next: Option<StateId>,
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledState {
    pub(crate) name: String,
    pub(crate) rules: Vec<CompiledRule>,
}

/// 词法规则引擎
#[derive(Clone)]
pub struct RuleEngine {
    pub(crate) states: Vec<CompiledState>,
    index: HashMap<String, StateId>,
    pub(crate) start: StateId,
    line_comment: Option<String>,
}

impl RuleEngine {
    /// 以默认起始状态 `"start"` 构建
    pub fn new(table: RuleTable) -> Result<Self, ConfigurationError> {
        Self::with_start(table, DEFAULT_START_STATE)
    }

    /// 按引擎配置构建
    pub fn with_config(
        table: RuleTable,
        config: &EngineConfig,
    ) -> Result<Self, ConfigurationError> {
        Self::with_start(table, &config.start_state)
    }

    /// 指定起始状态构建
    pub fn with_start(table: RuleTable, start: &str) -> Result<Self, ConfigurationError> {
        trace!(target: TARGET, states = table.states.len(), start, "Building rule engine");

        let mut index = HashMap::new();
        for (i, (name, _)) in table.states.iter().enumerate() {
            if index.insert(name.clone(), StateId(i)).is_some() {
                return Err(ConfigurationError::DuplicateState(name.clone()));
            }
        }

        let start = *index
            .get(start)
            .ok_or_else(|| ConfigurationError::MissingStartState(start.to_string()))?;

        let mut states = Vec::with_capacity(table.states.len());
        for (name, rules) in table.states {
            let mut compiled = Vec::with_capacity(rules.len());
            for (i, rule) in rules.into_iter().enumerate() {
                let invalid = |e: regex::Error| ConfigurationError::InvalidPattern {
                    state: name.clone(),
                    index: i,
                    message: e.to_string(),
                };
                // 先单独编译：`q)|(z` 包进 `^(?:…)` 后能编译，但后半支不再锚定
                let standalone = Regex::new(&rule.pattern).map_err(invalid)?;
                let regex = Regex::new(&format!("^(?:{})", rule.pattern)).map_err(invalid)?;

                if let RuleToken::Grouped(categories) = &rule.token {
                    let groups = standalone.captures_len() - 1;
                    if categories.len() != groups {
                        return Err(ConfigurationError::GroupCountMismatch {
                            state: name.clone(),
                            index: i,
                            categories: categories.len(),
                            groups,
                        });
                    }
                }

                let next = match rule.next {
                    Some(target) => Some(*index.get(&target).ok_or_else(|| {
                        ConfigurationError::UndefinedState {
                            state: name.clone(),
                            index: i,
                            target: target.clone(),
                        }
                    })?),
                    None => None,
                };

                compiled.push(CompiledRule {
                    regex,
                    token: rule.token,
                    next,
                });
            }
            states.push(CompiledState {
                name,
                rules: compiled,
            });
        }

        debug!(
            target: TARGET,
            states = states.len(),
            rules = states.iter().map(|s| s.rules.len()).sum::<usize>(),
            "Rule engine ready"
        );

        Ok(Self {
            states,
            index,
            start,
            line_comment: None,
        })
    }

    /// 设置行注释前缀（供编辑器的注释快捷操作使用）
    pub fn with_line_comment(mut self, prefix: impl Into<String>) -> Self {
        self.line_comment = Some(prefix.into());
        self
    }

    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }

    /// 起始状态
    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// 按名字查找状态
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    /// 状态名；不属于本引擎的 id 返回起始状态名
    pub fn state_name(&self, id: StateId) -> &str {
        let state = self.states.get(id.0).unwrap_or(&self.states[self.start.0]);
        &state.name
    }

    /// 从起始状态扫描
    pub fn tokenize<'e, 't>(&'e self, text: &'t str) -> Tokens<'e, 't> {
        Tokens::new(self, text, self.start)
    }

    /// 从指定名字的状态扫描
    pub fn tokenize_from<'e, 't>(
        &'e self,
        text: &'t str,
        state: &str,
    ) -> Result<Tokens<'e, 't>, ConfigurationError> {
        let id = self
            .state_id(state)
            .ok_or_else(|| ConfigurationError::MissingStartState(state.to_string()))?;
        Ok(Tokens::new(self, text, id))
    }

    /// 从已知状态扫描（逐行高亮时携带上一行的结束状态）
    ///
    /// `state` 应来自本引擎；来自其他引擎且越界的 id 按起始状态处理。
    pub fn tokenize_with_state<'e, 't>(&'e self, text: &'t str, state: StateId) -> Tokens<'e, 't> {
        Tokens::new(self, text, state)
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("start", &self.state_name(self.start))
            .field("state_count", &self.states.len())
            .field("line_comment", &self.line_comment)
            .finish()
    }
}
