pub mod links_file;
pub mod shortcuts_file;

use crate::error::{BrowsirError, Result};
use std::fs;
use std::path::Path;

pub use links_file::{Link, LinkFile};
pub use shortcuts_file::{ShortcutFile, ShortcutSink};

/// 先写临时文件再 rename 覆盖原文件
fn replace_file(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)
        .map_err(|e| BrowsirError::io(format!("failed to write temp file {:?}", tmp), e))?;
    fs::rename(&tmp, path)
        .map_err(|e| BrowsirError::io(format!("failed to replace {:?}", path), e))
}
