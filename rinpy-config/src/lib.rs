//! RinPy Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all RinPy crates.

use serde::{Deserialize, Serialize};

/// Name of the state every scan starts in unless told otherwise
pub const DEFAULT_START_STATE: &str = "start";

/// Configuration for the lexical rule engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// State a scan starts in when the caller does not pick one
    pub start_state: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_state: DEFAULT_START_STATE.to_string(),
        }
    }
}

/// Split direction of a resizable panel pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Code editor above, program output below
    Vertical,
    /// File explorer left, editor right
    Horizontal,
}

impl Direction {
    /// Storage key the sizes of this split are persisted under
    pub fn storage_key(&self) -> &'static str {
        match self {
            Direction::Vertical => "ver_sizes",
            Direction::Horizontal => "hor_sizes",
        }
    }

    /// Sizes used when nothing valid is stored
    pub fn default_sizes(&self) -> [f64; 2] {
        match self {
            Direction::Vertical => [75.0, 25.0],
            Direction::Horizontal => [25.0, 75.0],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        }
    }
}

/// Options of one draggable split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitConfig {
    pub direction: Direction,
    /// Gutter width in pixels
    pub gutter_size: u32,
    /// Snap distance in pixels, `None` keeps the split library default
    pub snap_offset: Option<u32>,
    /// Minimum panel sizes in pixels, `None` keeps the split library default
    pub min_size: Option<[u32; 2]>,
}

impl SplitConfig {
    /// Code / output split
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            gutter_size: 10,
            snap_offset: Some(0),
            min_size: None,
        }
    }

    /// Explorer / editor split
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            gutter_size: 10,
            snap_offset: None,
            min_size: Some([0, 0]),
        }
    }
}

/// Configuration for panel layout persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub vertical: SplitConfig,
    pub horizontal: SplitConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical: SplitConfig::vertical(),
            horizontal: SplitConfig::horizontal(),
        }
    }
}

/// Log verbosity, ordered from quietest to loudest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name; "silent" maps to errors only
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Component enum for component-specific log configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Lexer,
    Highlighter,
    Layout,
    Cli,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Lexer,
        Component::Highlighter,
        Component::Layout,
        Component::Cli,
    ];

    /// Get the string name of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Lexer => "lexer",
            Component::Highlighter => "highlighter",
            Component::Layout => "layout",
            Component::Cli => "cli",
        }
    }

    /// Get the log target name for this component
    pub fn target(&self) -> String {
        format!("rinpy::{}", self.as_str())
    }
}

/// Log configuration: a global level plus optional per-component overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub global: LogLevel,
    pub lexer: Option<LogLevel>,
    pub highlighter: Option<LogLevel>,
    pub layout: Option<LogLevel>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            lexer: None,
            highlighter: None,
            layout: None,
        }
    }
}

impl LogConfig {
    /// Effective level for a component
    pub fn level_for(&self, component: Component) -> LogLevel {
        let specific = match component {
            Component::Lexer => self.lexer,
            Component::Highlighter => self.highlighter,
            Component::Layout => self.layout,
            Component::Cli => None,
        };
        specific.unwrap_or(self.global)
    }
}
