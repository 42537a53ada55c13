use super::Context;
use crate::error::{BrowsirError, Result};
use crate::resolve::normalize_url;
use crate::store::Link;
use crate::util::remove_quotes;
use crate::info;
use url::Url;

/// 校验书签地址，返回补全协议头后的 URL
pub fn validate_link(raw: &str) -> Result<String> {
    let normalized = normalize_url(&remove_quotes(raw));
    let invalid = |reason: String| BrowsirError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    // `|` 是链接文件里 URL 与分类的分隔符
    if normalized.contains('|') {
        return Err(invalid("'|' is not allowed in links".to_string()));
    }
    Ok(normalized)
}

/// 处理 `browsir add link <url> -c <categories>`
pub fn handle_add(url: &str, categories: &str, ctx: &Context) -> Result<()> {
    let url = validate_link(url)?;
    let link = Link::new(&url, categories);
    let mut file = ctx.link_file();
    file.add(&link)?;
    info!(
        "✅ Link {} saved in [{}]",
        link.url,
        link.categories.join(", ")
    );
    Ok(())
}

/// 处理 `browsir rm link <url>`
pub fn handle_remove(url: &str, ctx: &Context) -> Result<()> {
    let url = validate_link(url)?;
    let mut file = ctx.link_file();
    file.remove(&url)?;
    info!("✅ Link {} correctly removed!", url);
    Ok(())
}
