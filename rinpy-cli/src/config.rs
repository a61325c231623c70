//! CLI 配置
//!
//! 可选的 `rinpy.json`：日志、引擎、语法文件、布局存储位置和分栏选项。
//! 相对路径以配置文件所在目录为基准；命令行参数优先于配置文件。

use serde::Deserialize;
use std::path::{Path, PathBuf};

use rinpy_config::{EngineConfig, LayoutConfig, LogConfig};

use crate::error::CliError;
use crate::logging::LogFormat;
use crate::platform::OutputFormat;

/// 未指定时查找的配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "rinpy.json";

/// 未指定时的布局存储文件
pub const DEFAULT_LAYOUT_STORE: &str = ".rinpy/layout.json";

/// rinpy.json 结构
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    /// 日志级别（全局与分组件）
    pub log: LogConfig,
    /// 日志格式
    pub log_format: Option<LogFormat>,
    /// 引擎配置
    pub engine: EngineConfig,
    /// 自定义语法文件
    pub grammar: Option<PathBuf>,
    /// 布局存储文件
    pub layout_store: Option<PathBuf>,
    /// 分栏选项（gutter、snap、最小尺寸）
    pub layout: LayoutConfig,
    /// highlight 的默认输出格式
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// 读取配置
    ///
    /// 显式指定的文件必须存在；未指定时读取当前目录的 `rinpy.json`（若有）。
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(CliError::Config {
                    path,
                    message: "file not found".to_string(),
                });
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&content, &path)
    }

    /// 解析配置内容，相对路径以 `path` 所在目录为基准
    pub fn from_json(content: &str, path: &Path) -> Result<Self, CliError> {
        let mut config: CliConfig =
            serde_json::from_str(content).map_err(|e| CliError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let base_dir = path.parent().unwrap_or(Path::new("."));
        config.grammar = config.grammar.map(|p| base_dir.join(p));
        config.layout_store = config.layout_store.map(|p| base_dir.join(p));
        Ok(config)
    }

    /// 布局存储文件路径
    pub fn layout_store_path(&self) -> PathBuf {
        self.layout_store
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LAYOUT_STORE))
    }
}
