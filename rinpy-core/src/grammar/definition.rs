//! Grammar definitions as data
//!
//! A grammar document maps state names to ordered rule lists, plus an
//! optional `meta` block:
//!
//! ```json
//! {
//!   "start": [
//!     { "regex": "(var)(\\s+)([a-zA-Z]+)", "token": ["keyword", null, "variable"] },
//!     { "regex": "if|else", "token": "keyword" },
//!     { "regex": "/\\*", "token": "comment", "next": "comment" }
//!   ],
//!   "comment": [
//!     { "regex": "\\*/", "token": "comment", "next": "start" },
//!     { "regex": "[^*]+", "token": "comment" }
//!   ],
//!   "meta": { "lineComment": "#" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use rinpy_config::EngineConfig;

use crate::kit::lexer::{Category, ConfigurationError, Rule, RuleEngine, RuleTable, RuleToken};

/// Token field of a rule: one style name or one per capture group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenSpec {
    Single(String),
    Grouped(Vec<Option<String>>),
}

/// One rule as written in a grammar document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub regex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Editor hints that do not affect scanning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_comment: Option<String>,
}

/// A whole grammar document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDefinition {
    #[serde(default)]
    pub meta: GrammarMeta,
    #[serde(flatten)]
    pub states: BTreeMap<String, Vec<RuleDefinition>>,
}

impl GrammarDefinition {
    /// Parse a JSON grammar document
    pub fn from_json(source: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve style names into a rule table
    pub fn to_table(&self) -> Result<RuleTable, ConfigurationError> {
        let mut table = RuleTable::new();
        for (name, rules) in &self.states {
            let rules = rules
                .iter()
                .map(RuleDefinition::to_rule)
                .collect::<Result<Vec<_>, _>>()?;
            table = table.state(name.clone(), rules);
        }
        Ok(table)
    }

    /// Build an engine from this document
    pub fn build(&self, config: &EngineConfig) -> Result<RuleEngine, ConfigurationError> {
        let engine = RuleEngine::with_config(self.to_table()?, config)?;
        Ok(match &self.meta.line_comment {
            Some(prefix) => engine.with_line_comment(prefix.clone()),
            None => engine,
        })
    }

    /// Document form of an in-code rule table
    pub fn from_table(table: &RuleTable, meta: GrammarMeta) -> Self {
        let states = table
            .states
            .iter()
            .map(|(name, rules)| (name.clone(), rules.iter().map(RuleDefinition::from).collect()))
            .collect();
        Self { meta, states }
    }
}

impl RuleDefinition {
    fn to_rule(&self) -> Result<Rule, ConfigurationError> {
        let token = match &self.token {
            None => RuleToken::None,
            Some(TokenSpec::Single(name)) => RuleToken::Plain(name.parse()?),
            Some(TokenSpec::Grouped(names)) => RuleToken::Grouped(
                names
                    .iter()
                    .map(|name| name.as_deref().map(str::parse::<Category>).transpose())
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        Ok(Rule {
            pattern: self.regex.clone(),
            token,
            next: self.next.clone(),
        })
    }
}

impl From<&Rule> for RuleDefinition {
    fn from(rule: &Rule) -> Self {
        let token = match &rule.token {
            RuleToken::None => None,
            RuleToken::Plain(category) => {
                Some(TokenSpec::Single(category.style_name().to_string()))
            }
            RuleToken::Grouped(categories) => Some(TokenSpec::Grouped(
                categories
                    .iter()
                    .map(|c| c.map(|c| c.style_name().to_string()))
                    .collect(),
            )),
        };
        Self {
            regex: rule.pattern.clone(),
            token,
            next: rule.next.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_COMMENTS: &str = r#"{
        "start": [
            { "regex": "(var)(\\s+)([a-z]+)", "token": ["keyword", null, "variable"] },
            { "regex": "/\\*", "token": "comment", "next": "comment" }
        ],
        "comment": [
            { "regex": "\\*/", "token": "comment", "next": "start" },
            { "regex": "[^*]+", "token": "comment" }
        ],
        "meta": { "lineComment": "//" }
    }"#;

    #[test]
    fn test_parse_document() {
        let grammar = GrammarDefinition::from_json(BLOCK_COMMENTS).unwrap();
        assert_eq!(grammar.states.len(), 2);
        assert_eq!(grammar.meta.line_comment.as_deref(), Some("//"));
        assert_eq!(
            grammar.states["start"][0].token,
            Some(TokenSpec::Grouped(vec![
                Some("keyword".to_string()),
                None,
                Some("variable".to_string()),
            ]))
        );
    }

    #[test]
    fn test_build_and_scan() {
        let grammar = GrammarDefinition::from_json(BLOCK_COMMENTS).unwrap();
        let engine = grammar.build(&EngineConfig::default()).unwrap();
        assert_eq!(engine.line_comment(), Some("//"));

        let mut tokens = engine.tokenize("/* x");
        let first = tokens.next().unwrap();
        assert_eq!(first.category, Some(Category::Comment));
        assert_eq!(tokens.state_name(), "comment");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{ "start": [ { "regex": "x", "token": "number" } ] }"#;
        let err = GrammarDefinition::from_json(json)
            .unwrap()
            .to_table()
            .unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownCategory("number".to_string()));
    }

    #[test]
    fn test_malformed_json_reports_location() {
        let err = GrammarDefinition::from_json("{ \"start\": [ { \"regex\": } ] }").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidGrammar { line: 1, .. }));
    }

    #[test]
    fn test_undefined_next_state() {
        let json = r#"{ "start": [ { "regex": "x", "next": "elsewhere" } ] }"#;
        let grammar = GrammarDefinition::from_json(json).unwrap();
        let err = grammar.build(&EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigurationError::UndefinedState { .. }));
    }

    #[test]
    fn test_table_round_trips_through_document() {
        let table = RuleTable::new().state(
            "start",
            vec![
                Rule::plain("if", Category::Keyword),
                Rule::grouped("(a)(b)", [Some(Category::Atom), None]),
                Rule::transition("<", "start"),
            ],
        );
        let doc = GrammarDefinition::from_table(&table, GrammarMeta::default());
        assert_eq!(doc.to_table().unwrap(), table);
    }
}
