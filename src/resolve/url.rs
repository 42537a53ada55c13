/// 判断 token 是否直接就是网址：包含 `.` 或以 `http` 开头
pub fn is_literal_url(token: &str) -> bool {
    token.contains('.') || token.starts_with("http")
}

/// 补全 `https://` 前缀；已带 http:// 或 https:// 时原样返回，空串保持为空
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
