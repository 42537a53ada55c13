//! browsir 库模块
//!
//! 导出公开模块供集成测试和外部使用

pub mod assets;
pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod launcher;
pub mod preview;
pub mod prompt;
pub mod resolve;
pub mod shortcut;
pub mod store;
pub mod util;

pub use error::{BrowsirError, Result};
