//! Token 渲染
//!
//! - pretty：ANSI 彩色文本
//! - html：`cm-*` 类名的 span，与编辑器主题的样式名一致
//! - json：逐 token 记录
//! - listing：每行一个 token 的调试列表

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use rinpy_core::{Category, Token};

/// highlight 输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Html,
    Json,
}

/// 按格式渲染
pub fn render(
    tokens: &[Token<'_>],
    format: OutputFormat,
    color: bool,
) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Pretty => render_pretty(tokens, color),
        OutputFormat::Html => render_html(tokens),
        OutputFormat::Json => render_json(tokens)?,
    })
}

fn paint(text: &str, category: Category) -> ColoredString {
    match category {
        Category::Keyword => text.magenta().bold(),
        Category::Variable => text.blue(),
        Category::BuiltinIo => text.cyan(),
        Category::BuiltinNumeric => text.bright_cyan(),
        Category::Operator => text.yellow(),
        Category::Atom => text.red(),
        Category::Def => text.blue().bold(),
        Category::Bracket => text.bright_white(),
        Category::String => text.green(),
        Category::Comment => text.bright_black().italic(),
    }
}

/// 彩色终端文本；`color` 为假时原样输出
pub fn render_pretty(tokens: &[Token<'_>], color: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.category {
            Some(category) if color => {
                let _ = write!(out, "{}", paint(token.text, category));
            }
            _ => out.push_str(token.text),
        }
    }
    out
}

/// HTML 片段
pub fn render_html(tokens: &[Token<'_>]) -> String {
    let mut out = String::from("<pre class=\"cm-s-default\">");
    for token in tokens {
        match token.category {
            Some(category) => {
                let _ = write!(
                    out,
                    "<span class=\"{}\">{}</span>",
                    category.css_class(),
                    escape_html(token.text)
                );
            }
            None => out.push_str(&escape_html(token.text)),
        }
    }
    out.push_str("</pre>\n");
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON 输出的单条记录
#[derive(Debug, Serialize)]
struct TokenRecord<'t> {
    start: usize,
    end: usize,
    line: usize,
    column: usize,
    category: Option<Category>,
    text: &'t str,
}

/// JSON 数组，每个 token 一条记录
pub fn render_json(tokens: &[Token<'_>]) -> serde_json::Result<String> {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .map(|t| TokenRecord {
            start: t.span.start.byte_offset,
            end: t.span.end.byte_offset,
            line: t.span.start.line,
            column: t.span.start.column,
            category: t.category,
            text: t.text,
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

/// 调试列表：`行:列  分类  文本`
pub fn render_listing(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        let category = token.category.map_or("-", |c| c.style_name());
        let _ = writeln!(
            out,
            "{}:{}\t{:<10}\t{:?}",
            token.span.start.line, token.span.start.column, category, token.text
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rinpy_core::grammar::rinpy;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        rinpy::engine().unwrap().tokenize(input).collect()
    }

    #[test]
    fn test_pretty_without_color_is_source() {
        let input = "if x == 1 { print(x) } # done";
        assert_eq!(render_pretty(&tokens(input), false), input);
    }

    #[test]
    fn test_html_spans_and_escaping() {
        let html = render_html(&tokens("if a<b \"<i>\""));
        assert_eq!(
            html,
            "<pre class=\"cm-s-default\"><span class=\"cm-keyword\">if</span> a\
             <span class=\"cm-operator\">&lt;</span>b \
             <span class=\"cm-string\">&quot;&lt;i&gt;&quot;</span></pre>\n"
        );
    }

    #[test]
    fn test_json_records() {
        let json = render_json(&tokens("var n\nprint")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records[0]["category"], "keyword");
        assert_eq!(records[1]["category"], serde_json::Value::Null);
        assert_eq!(records[2]["category"], "variable");
        assert_eq!(records[2]["text"], "n");
        let print = records.last().unwrap();
        assert_eq!(print["category"], "variable-2");
        assert_eq!(print["line"], 2);
        assert_eq!(print["column"], 1);
        assert_eq!(print["start"], 6);
        assert_eq!(print["end"], 11);
    }

    #[test]
    fn test_listing() {
        let listing = render_listing(&tokens("if x"));
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1:1\tkeyword"));
        assert!(lines[0].ends_with("\"if\""));
        assert!(lines[2].starts_with("1:4\t-"));
    }
}
