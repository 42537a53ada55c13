use super::Context;
use crate::error::{BrowsirError, Result};
use crate::resolve::is_literal_url;
use crate::util::remove_quotes;
use crate::info;

/// key 能否作为 shortcut：必须能从 `key=value` 行原样读回，且不会被当作网址
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = key.is_empty()
        || key.starts_with('-')
        || key.starts_with('#')
        || key.contains('=')
        || key.chars().any(char::is_whitespace)
        || is_literal_url(key);
    if invalid {
        return Err(BrowsirError::InvalidShortcutKey(key.to_string()));
    }
    Ok(())
}

/// 处理 `browsir add shortcut <key> <url>`
pub fn handle_add(key: &str, url: &str, ctx: &Context) -> Result<()> {
    validate_key(key)?;
    let url = remove_quotes(url);
    let mut file = ctx.shortcut_file();
    file.add(key, &url)?;
    info!("✅ Shortcut {} correctly saved -> {}", key, url);
    Ok(())
}

/// 处理 `browsir rm shortcut <key>`
pub fn handle_remove(key: &str, ctx: &Context) -> Result<()> {
    let mut file = ctx.shortcut_file();
    file.remove(key)?;
    info!("✅ Shortcut {} correctly removed!", key);
    Ok(())
}
