//! Token 分类
//!
//! 分类名与编辑器样式名一一对应（`keyword`、`variable-2` 等），
//! 表现层用 [`Category::css_class`] 直接映射到样式。

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::ConfigurationError;

/// 高亮分类（封闭集合）
///
/// 没有分类的文本用 `Option<Category>::None` 表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    /// 保留字：`if else for while return var`
    #[serde(rename = "keyword")]
    Keyword,
    /// `var` 声明的变量名
    #[serde(rename = "variable")]
    Variable,
    /// I/O 与工具内建：`print plot calc debug`
    #[serde(rename = "variable-2")]
    BuiltinIo,
    /// 数值与运算内建：`num add integ div mult time fun`
    #[serde(rename = "variable-3")]
    BuiltinNumeric,
    #[serde(rename = "operator")]
    Operator,
    /// 逻辑词：`and or not`
    #[serde(rename = "atom")]
    Atom,
    /// 函数定义标记 `def`
    #[serde(rename = "def")]
    Def,
    #[serde(rename = "bracket")]
    Bracket,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "comment")]
    Comment,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Keyword,
        Category::Variable,
        Category::BuiltinIo,
        Category::BuiltinNumeric,
        Category::Operator,
        Category::Atom,
        Category::Def,
        Category::Bracket,
        Category::String,
        Category::Comment,
    ];

    /// 样式名
    pub fn style_name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Variable => "variable",
            Category::BuiltinIo => "variable-2",
            Category::BuiltinNumeric => "variable-3",
            Category::Operator => "operator",
            Category::Atom => "atom",
            Category::Def => "def",
            Category::Bracket => "bracket",
            Category::String => "string",
            Category::Comment => "comment",
        }
    }

    /// CSS 类名
    pub fn css_class(&self) -> String {
        format!("cm-{}", self.style_name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_name())
    }
}

impl FromStr for Category {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.style_name() == s)
            .ok_or_else(|| ConfigurationError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.style_name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "number".parse::<Category>().unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownCategory("number".to_string()));
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Category::BuiltinIo.css_class(), "cm-variable-2");
        assert_eq!(Category::Keyword.to_string(), "keyword");
    }

    #[test]
    fn test_serialize_as_style_name() {
        let json = serde_json::to_string(&Category::BuiltinNumeric).unwrap();
        assert_eq!(json, "\"variable-3\"");
    }
}
