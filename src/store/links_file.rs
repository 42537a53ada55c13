//! 书签链接文件
//!
//! 一行一条 `url|分类1,分类2`。

use crate::constants::DEFAULT_LINK_CATEGORY;
use crate::error::{BrowsirError, Result};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 一条书签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub categories: Vec<String>,
}

impl Link {
    /// 分类字符串按逗号拆分，去掉空项；没有任何分类时归入 general
    pub fn new(url: &str, categories: &str) -> Self {
        let mut parsed: Vec<String> = categories
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        if parsed.is_empty() {
            parsed.push(DEFAULT_LINK_CATEGORY.to_string());
        }
        Self {
            url: url.trim().to_string(),
            categories: parsed,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    fn to_line(&self) -> String {
        format!("{}|{}", self.url, self.categories.join(","))
    }
}

/// 解析文件内容，保持文件中的顺序
pub fn parse(content: &str) -> Vec<Link> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('|'))
        .map(|(url, categories)| Link::new(url, categories))
        .collect()
}

/// 按分类建立索引
pub fn by_category(links: &[Link]) -> BTreeMap<String, Vec<String>> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for link in links {
        for category in &link.categories {
            index
                .entry(category.clone())
                .or_default()
                .push(link.url.clone());
        }
    }
    index
}

/// 基于文件的书签存储
#[derive(Debug, Clone)]
pub struct LinkFile {
    path: PathBuf,
}

impl LinkFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Link>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| BrowsirError::io(format!("failed to read links file {:?}", self.path), e))?;
        Ok(parse(&content))
    }

    /// 追加一条书签，URL 已存在时拒绝
    pub fn add(&mut self, link: &Link) -> Result<()> {
        if self.load()?.iter().any(|l| l.url == link.url) {
            return Err(BrowsirError::DuplicateLink(link.url.clone()));
        }
        let write_failed =
            |e| BrowsirError::io(format!("failed to write links file {:?}", self.path), e);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_failed)?;
        writeln!(file, "{}", link.to_line()).map_err(write_failed)
    }

    /// 删除一条书签：写入临时文件后替换原文件，注释和其他行原样保留
    pub fn remove(&mut self, url: &str) -> Result<()> {
        let content = if self.path.exists() {
            fs::read_to_string(&self.path).map_err(|e| {
                BrowsirError::io(format!("failed to read links file {:?}", self.path), e)
            })?
        } else {
            String::new()
        };

        let mut found = false;
        let mut kept = String::new();
        for line in content.lines() {
            let is_target = !line.trim_start().starts_with('#')
                && line.split_once('|').is_some_and(|(u, _)| u.trim() == url);
            if is_target {
                found = true;
                continue;
            }
            kept.push_str(line);
            kept.push('\n');
        }

        if !found {
            return Err(BrowsirError::LinkNotFound(url.to_string()));
        }
        super::replace_file(&self.path, &kept)
    }
}
