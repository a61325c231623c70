//! 终端与文件输出

pub mod cli;
pub mod render;

pub use cli::print_error;
pub use render::{render, render_listing, OutputFormat};
