//! 规则与规则表
//!
//! 规则只是数据：模式串 + 结果。正则在 [`RuleEngine`](super::RuleEngine)
//! 构建时统一编译和校验。

use super::category::Category;

/// 规则命中后产生的分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleToken {
    /// 不分类（通常配合状态转移使用）
    None,
    /// 整段命中文本一个分类
    Plain(Category),
    /// 按捕获组切分，每组一个可选分类
    Grouped(Vec<Option<Category>>),
}

/// 单条扫描规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// 正则表达式，匹配时自动锚定在剩余输入开头
    pub pattern: String,
    pub token: RuleToken,
    /// 命中后切换到的状态
    pub next: Option<String>,
}

impl Rule {
    /// 单分类规则
    pub fn plain(pattern: impl Into<String>, category: Category) -> Self {
        Self {
            pattern: pattern.into(),
            token: RuleToken::Plain(category),
            next: None,
        }
    }

    /// 捕获组切分规则
    pub fn grouped<I>(pattern: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = Option<Category>>,
    {
        Self {
            pattern: pattern.into(),
            token: RuleToken::Grouped(categories.into_iter().collect()),
            next: None,
        }
    }

    /// 仅切换状态的规则
    pub fn transition(pattern: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            token: RuleToken::None,
            next: Some(next.into()),
        }
    }

    /// 命中后切换到 `next`
    pub fn then(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }
}

/// 状态名到有序规则列表的映射
///
/// 状态按插入顺序保存，状态内规则按声明顺序尝试。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    pub(crate) states: Vec<(String, Vec<Rule>)>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个状态
    pub fn state(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.states.push((name.into(), rules));
        self
    }

    /// 按名字查找状态的规则
    pub fn rules(&self, name: &str) -> Option<&[Rule]> {
        self.states
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// 所有状态名
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|(n, _)| n.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
