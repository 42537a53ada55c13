//! 网页预览：抓取页面并提取 title、meta description 和第一个 H1

use crate::constants::{PREVIEW_MAX_BODY_BYTES, PREVIEW_TIMEOUT_MS};
use crate::error::{BrowsirError, Result};
use crate::resolve::normalize_url;
use crate::util::http;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static META_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static META_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\b(?:name|property)\s*=\s*["'](?:og:)?description["']"#).expect("valid regex")
});
static META_CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid regex"));
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// 页面预览信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePreview {
    pub title: Option<String>,
    pub description: Option<String>,
    pub h1: Option<String>,
}

impl PagePreview {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.h1.is_none()
    }
}

/// 去掉内嵌标签、解码常见实体、折叠空白；结果为空时返回 None
fn clean_text(raw: &str) -> Option<String> {
    let text = TAG_RE.replace_all(raw, " ");
    let text = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");
    let text = SPACE_RE.replace_all(text.trim(), " ").to_string();
    if text.is_empty() { None } else { Some(text) }
}

/// 从 HTML 中提取预览信息
pub fn parse_preview(html: &str) -> PagePreview {
    let title = TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .and_then(|m| clean_text(m.as_str()));

    let description = META_RE
        .find_iter(html)
        .map(|m| m.as_str())
        .filter(|tag| META_NAME_RE.is_match(tag))
        .find_map(|tag| {
            let caps = META_CONTENT_RE.captures(tag)?;
            caps.get(1).or_else(|| caps.get(2))
        })
        .and_then(|m| clean_text(m.as_str()));

    let h1 = H1_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .and_then(|m| clean_text(m.as_str()));

    PagePreview {
        title,
        description,
        h1,
    }
}

/// 抓取页面并解析；请求在截止时间后以 `FetchTimeout` 失败
pub fn fetch_preview(url: &str) -> Result<PagePreview> {
    let url = normalize_url(url);
    let agent = http::agent(Duration::from_millis(PREVIEW_TIMEOUT_MS));

    let fetch_failed = |reason: String| BrowsirError::FetchFailed {
        url: url.clone(),
        reason,
    };
    let timed_out = || BrowsirError::FetchTimeout {
        url: url.clone(),
        millis: PREVIEW_TIMEOUT_MS,
    };

    let mut response = agent.get(&url).call().map_err(|e| match e {
        ureq::Error::Timeout(_) => timed_out(),
        other => fetch_failed(other.to_string()),
    })?;

    let body = response
        .body_mut()
        .with_config()
        .limit(PREVIEW_MAX_BODY_BYTES)
        .read_to_string()
        .map_err(|e| match e {
            ureq::Error::Timeout(_) => timed_out(),
            other => fetch_failed(other.to_string()),
        })?;

    Ok(parse_preview(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_fields() {
        let html = r#"
            <html><head>
              <TITLE> 404 &amp; Answer
                Not Found </TITLE>
              <meta charset="utf-8">
              <meta content="A blog about software" name="description">
            </head>
            <body><h1 class="hero">Hello <em>there</em></h1><h1>Second</h1></body></html>
        "#;
        let preview = parse_preview(html);
        assert_eq!(preview.title.as_deref(), Some("404 & Answer Not Found"));
        assert_eq!(preview.description.as_deref(), Some("A blog about software"));
        assert_eq!(preview.h1.as_deref(), Some("Hello there"));
    }

    #[test]
    fn falls_back_to_og_description() {
        let html = r#"<meta property='og:description' content='Open graph text'>"#;
        assert_eq!(
            parse_preview(html).description.as_deref(),
            Some("Open graph text")
        );
    }

    #[test]
    fn missing_fields_are_none() {
        let preview = parse_preview("<html><body><p>nothing</p><h1>  </h1></body></html>");
        assert!(preview.is_empty());
    }

    #[test]
    fn silent_server_times_out_instead_of_hanging() {
        // 接受连接但从不响应
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let started = std::time::Instant::now();
        let err = fetch_preview(&url).unwrap_err();
        let elapsed = started.elapsed();

        assert!(
            matches!(err, BrowsirError::FetchTimeout { millis: PREVIEW_TIMEOUT_MS, .. }),
            "unexpected error: {err}"
        );
        assert!(elapsed >= Duration::from_millis(PREVIEW_TIMEOUT_MS - 200));
        assert!(elapsed < Duration::from_millis(PREVIEW_TIMEOUT_MS * 3));
        drop(listener);
    }
}
