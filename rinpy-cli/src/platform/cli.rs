//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use colored::Colorize;

use crate::error::CliError;

/// 打印错误；语法文件错误同时显示源代码上下文
pub fn print_error(e: &CliError) {
    eprintln!("{} {}", "error:".red().bold(), e);

    if let CliError::Grammar {
        source_text, error, ..
    } = e
    {
        if let Some((line, column)) = error.location() {
            eprint!("{}", source_context(source_text, line, column));
        }
    }
}

/// 错误行前后几行，带行号和列标记；位置越界时为空
pub fn source_context(source: &str, error_line: usize, error_col: usize) -> String {
    const CONTEXT_LINES: usize = 3; // 错误行前后显示的上下文行数

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号宽度，用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = format!("{separator}|--\n");
    for line_idx in start_line..=end_line {
        out.push_str(&format!("{line_idx:>width$} | {}\n", lines[line_idx - 1]));

        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{} | {marker}{}\n", " ".repeat(width), "^".red().bold()));
        }
    }
    out.push_str(&format!("{separator}|--\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_context_marks_column() {
        colored::control::set_override(false);
        let source = "{\n  \"start\": [\n    { \"regex\" \"x\" }\n  ]\n}";
        let out = source_context(source, 3, 15);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "--|--");
        assert!(lines.contains(&"3 |     { \"regex\" \"x\" }"));
        let marker = lines.iter().position(|l| l.starts_with("3 |")).unwrap() + 1;
        assert_eq!(lines[marker], format!("  | {}^", " ".repeat(14)));
    }

    #[test]
    fn test_source_context_out_of_range() {
        assert!(source_context("one line", 4, 1).is_empty());
        assert!(source_context("one line", 0, 1).is_empty());
    }
}
