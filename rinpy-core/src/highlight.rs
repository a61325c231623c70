//! 逐行高亮缓存
//!
//! 编辑器按行重绘。每行从上一行结束时的状态开始扫描，
//! 这里缓存每行的起始状态；编辑某行只让该行之后的缓存失效。

use tracing::{debug, trace};

use crate::kit::lexer::{RuleEngine, StateId, Token};

const TARGET: &str = "rinpy::highlighter";

/// 逐行高亮器
#[derive(Debug, Clone)]
pub struct LineHighlighter<'e> {
    engine: &'e RuleEngine,
    lines: Vec<String>,
    /// `starts[i]` 为第 i 行的起始状态；只覆盖已计算的前缀
    starts: Vec<StateId>,
}

impl<'e> LineHighlighter<'e> {
    /// 创建空缓冲区（一行空行）
    pub fn new(engine: &'e RuleEngine) -> Self {
        Self {
            engine,
            lines: vec![String::new()],
            starts: vec![engine.start_state()],
        }
    }

    /// 以整段文本创建
    pub fn with_text(engine: &'e RuleEngine, text: &str) -> Self {
        let mut highlighter = Self::new(engine);
        highlighter.set_text(text);
        highlighter
    }

    /// 整体替换文本
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
        self.starts.truncate(1);
        debug!(target: TARGET, lines = self.lines.len(), "Buffer replaced");
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// 已缓存起始状态的行数
    pub fn cached_lines(&self) -> usize {
        self.starts.len()
    }

    /// 修改一行
    ///
    /// # Panics
    /// `index` 越界时 panic，与 `Vec` 下标一致
    pub fn edit_line(&mut self, index: usize, text: &str) {
        self.lines[index] = text.to_string();
        self.invalidate_after(index);
    }

    /// 在 `index` 处插入一行
    ///
    /// # Panics
    /// `index > line_count()` 时 panic
    pub fn insert_line(&mut self, index: usize, text: &str) {
        self.lines.insert(index, text.to_string());
        self.invalidate_after(index);
    }

    /// 删除一行；缓冲区至少保留一行
    ///
    /// # Panics
    /// `index` 越界时 panic
    pub fn remove_line(&mut self, index: usize) {
        self.lines.remove(index);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.invalidate_after(index);
    }

    /// 第 `index` 行的 token
    pub fn line_tokens(&mut self, index: usize) -> Option<Vec<Token<'_>>> {
        if index >= self.lines.len() {
            return None;
        }
        let state = self.start_of(index);
        Some(
            self.engine
                .tokenize_with_state(&self.lines[index], state)
                .collect(),
        )
    }

    /// 第 `index` 行结束时的状态（即下一行的起始状态）
    pub fn end_state_of(&mut self, index: usize) -> Option<StateId> {
        if index >= self.lines.len() {
            return None;
        }
        let state = self.start_of(index);
        Some(self.scan_line(index, state))
    }

    /// 所有行的 token，逐行返回
    pub fn all_tokens(&mut self) -> Vec<Vec<Token<'_>>> {
        if let Some(last) = self.lines.len().checked_sub(1) {
            self.start_of(last);
        }
        let engine = self.engine;
        self.lines
            .iter()
            .zip(&self.starts)
            .map(|(line, state)| engine.tokenize_with_state(line, *state).collect())
            .collect()
    }

    /// 第 i 行之后的起始状态失效（第 i 行自身的起始状态不变）
    fn invalidate_after(&mut self, index: usize) {
        let keep = (index + 1).min(self.starts.len()).max(1);
        if keep < self.starts.len() {
            trace!(
                target: TARGET,
                from = keep,
                dropped = self.starts.len() - keep,
                "Invalidating cached states"
            );
        }
        self.starts.truncate(keep);
    }

    /// 计算并缓存第 `index` 行的起始状态
    fn start_of(&mut self, index: usize) -> StateId {
        while self.starts.len() <= index {
            let previous = self.starts.len() - 1;
            let state = self.starts[previous];
            let end = self.scan_line(previous, state);
            self.starts.push(end);
        }
        self.starts[index]
    }

    fn scan_line(&self, index: usize, state: StateId) -> StateId {
        let mut tokens = self.engine.tokenize_with_state(&self.lines[index], state);
        tokens.by_ref().for_each(drop);
        tokens.state()
    }
}

/// 按 `\n` 切行，去掉行尾 `\r`；末尾换行产生一个空行
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
