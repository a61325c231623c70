//! CLI 错误类型

use std::path::PathBuf;
use thiserror::Error;

use rinpy_core::ConfigurationError;
use rinpy_store::StoreError;

/// CLI 错误
#[derive(Debug, Error)]
pub enum CliError {
    /// 无法读取输入文件
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// rinpy.json 无法解析
    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// 语法定义错误（带语法文件内容，用于显示上下文）
    #[error("grammar '{}': {error}", path.display())]
    Grammar {
        path: PathBuf,
        source_text: String,
        error: ConfigurationError,
    },

    /// 内建语法或起始状态错误
    #[error(transparent)]
    Engine(#[from] ConfigurationError),

    /// 布局存储错误
    #[error(transparent)]
    Store(#[from] StoreError),

    /// 输出编码失败
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}
