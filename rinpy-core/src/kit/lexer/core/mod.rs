//! 词法分析基础设施

pub mod position;

pub use position::{SourcePosition, SourceSpan};
