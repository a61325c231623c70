//! 源代码位置追踪
//!
//! 编辑器和工具需要不同的坐标系：
//! - line/column: 人类可读的显示（1-based）
//! - byte_offset: 切片原文本（0-based）
//! - utf16_column: 浏览器编辑器和 LSP 通信（0-based，UTF-16单元）

use serde::Serialize;
use std::ops::Range;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based，UTF-8编码
    pub byte_offset: usize,
    /// 行内UTF-16偏移，0-based
    pub utf16_column: usize,
}

impl SourcePosition {
    /// 创建新位置
    pub fn new(line: usize, column: usize, byte_offset: usize, utf16_column: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
            utf16_column,
        }
    }

    /// 文本起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte_offset: 0,
            utf16_column: 0,
        }
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.utf16_column = 0;
        } else {
            self.column += 1;
            self.utf16_column += c.len_utf16();
        }

        self.byte_offset += c.len_utf8();
    }

    /// 越过一段文本
    pub fn advance_str(&mut self, text: &str) {
        for c in text.chars() {
            self.advance(c);
        }
    }
}

/// 源代码区间，左闭右开
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    /// 空区间
    pub fn at(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// 字节范围，可直接用于切片
    pub fn bytes(&self) -> Range<usize> {
        self.start.byte_offset..self.end.byte_offset
    }

    /// 字节长度
    pub fn len(&self) -> usize {
        self.end.byte_offset - self.start.byte_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
