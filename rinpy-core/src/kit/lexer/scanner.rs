//! 扫描循环
//!
//! [`Tokens`] 是惰性迭代器：每一步在当前状态的规则中按声明顺序
//! 取第一条命中非空前缀的规则；都不命中时吞掉一个字符作为未分类
//! token。每步至少前进一个字符，所以对任意输入都会终止。

use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, trace};

use super::category::Category;
use super::core::{SourcePosition, SourceSpan};
use super::engine::{CompiledRule, RuleEngine, StateId};
use super::rule::RuleToken;

const TARGET: &str = "rinpy::lexer";

/// Token：一段分类后的源文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'t> {
    /// `None` 表示未分类文本
    pub category: Option<Category>,
    pub span: SourceSpan,
    pub text: &'t str,
}

impl<'t> Token<'t> {
    pub fn new(category: Option<Category>, span: SourceSpan, text: &'t str) -> Self {
        Self {
            category,
            span,
            text,
        }
    }

    /// 获取 token 的起始位置
    pub fn start(&self) -> SourcePosition {
        self.span.start
    }

    /// 获取 token 的结束位置
    pub fn end(&self) -> SourcePosition {
        self.span.end
    }

    pub fn is_classified(&self) -> bool {
        self.category.is_some()
    }
}

/// Token 流
///
/// 可克隆：克隆体从当前游标处独立继续，互不影响。
#[derive(Debug, Clone)]
pub struct Tokens<'e, 't> {
    engine: &'e RuleEngine,
    text: &'t str,
    position: SourcePosition,
    state: StateId,
    /// 分组规则一次命中产生的多个 token
    pending: VecDeque<Token<'t>>,
}

impl<'e, 't> Tokens<'e, 't> {
    pub(crate) fn new(engine: &'e RuleEngine, text: &'t str, state: StateId) -> Self {
        // 别的引擎产生的 StateId 可能越界：退回起始状态
        let state = if state.0 < engine.states.len() {
            state
        } else {
            debug!(target: TARGET, state = state.0, "Unknown state id, scanning from start state");
            engine.start
        };
        trace!(target: TARGET, len = text.len(), state = engine.state_name(state), "Starting scan");
        Self {
            engine,
            text,
            position: SourcePosition::start(),
            state,
            pending: VecDeque::new(),
        }
    }

    /// 当前状态；迭代耗尽后即为文本末尾的状态
    pub fn state(&self) -> StateId {
        self.state
    }

    /// 当前状态名
    pub fn state_name(&self) -> &'e str {
        self.engine.state_name(self.state)
    }

    /// 游标位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 只保留有分类的 token
    pub fn classified(self) -> std::iter::Filter<Self, fn(&Token<'t>) -> bool> {
        self.filter(Token::is_classified as fn(&Token<'t>) -> bool)
    }

    /// 切出 `len` 字节并推进游标
    fn take(&mut self, len: usize, category: Option<Category>) -> Token<'t> {
        let start = self.position;
        let source = self.text;
        let text = &source[start.byte_offset..start.byte_offset + len];
        self.position.advance_str(text);
        let token = Token::new(category, SourceSpan::range(start, self.position), text);
        trace!(
            target: TARGET,
            category = ?token.category,
            text = token.text,
            line = token.span.start.line,
            column = token.span.start.column,
            "Produced token"
        );
        token
    }

    /// 扫描一步，结果压入 pending
    fn step(&mut self) {
        let engine = self.engine;
        let source = self.text;
        let rest = &source[self.position.byte_offset..];

        for rule in &engine.states[self.state.0].rules {
            if self.apply(rule, rest) {
                if let Some(next) = rule.next {
                    debug!(
                        target: TARGET,
                        from = engine.state_name(self.state),
                        to = engine.state_name(next),
                        "Switching state"
                    );
                    self.state = next;
                }
                return;
            }
        }

        // 无规则命中：吞一个字符，保持状态
        if let Some(c) = rest.chars().next() {
            let token = self.take(c.len_utf8(), None);
            self.pending.push_back(token);
        }
    }

    /// 尝试一条规则；命中非空前缀时产出 token 并返回 true
    fn apply(&mut self, rule: &CompiledRule, rest: &'t str) -> bool {
        match &rule.token {
            RuleToken::Grouped(categories) => {
                let Some(caps) = rule.regex.captures(rest) else {
                    return false;
                };
                let whole = match caps.get(0) {
                    Some(m) if m.start() == 0 && !m.is_empty() => m,
                    _ => return false,
                };

                let mut cursor = 0;
                for (i, category) in categories.iter().enumerate() {
                    // 未参与匹配的组，或嵌套在已消费区域里的组，跳过
                    let Some(group) = caps.get(i + 1) else {
                        continue;
                    };
                    if group.start() < cursor || group.is_empty() {
                        continue;
                    }
                    if group.start() > cursor {
                        let gap = self.take(group.start() - cursor, None);
                        self.pending.push_back(gap);
                    }
                    let token = self.take(group.len(), *category);
                    self.pending.push_back(token);
                    cursor = group.end();
                }
                if whole.end() > cursor {
                    let tail = self.take(whole.end() - cursor, None);
                    self.pending.push_back(tail);
                }
                true
            }
            RuleToken::Plain(category) => self.apply_whole(rule, rest, Some(*category)),
            RuleToken::None => self.apply_whole(rule, rest, None),
        }
    }

    fn apply_whole(&mut self, rule: &CompiledRule, rest: &str, category: Option<Category>) -> bool {
        match rule.regex.find(rest) {
            Some(m) if m.start() == 0 && !m.is_empty() => {
                let token = self.take(m.end(), category);
                self.pending.push_back(token);
                true
            }
            _ => false,
        }
    }
}

impl<'e, 't> Iterator for Tokens<'e, 't> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            if self.position.byte_offset >= self.text.len() {
                return None;
            }
            self.step();
        }
        self.pending.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.position.byte_offset;
        let lower = self.pending.len() + usize::from(remaining > 0);
        (lower, Some(self.pending.len() + remaining))
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
