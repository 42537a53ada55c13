//! 本地 shortcut 文件
//!
//! 纯文本，一行一条 `key=value`；空行与 `#` 开头的行在读取时忽略。

use crate::error::{BrowsirError, Result};
use crate::shortcut::ShortcutMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 保存 shortcut 的写入端
pub trait ShortcutSink {
    fn save_shortcut(&mut self, key: &str, url: &str) -> Result<()>;
}

/// 解析文件内容
pub fn parse(content: &str) -> ShortcutMap {
    let mut shortcuts = ShortcutMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, url)) = line.split_once('=') {
            shortcuts.insert(key.trim().to_string(), url.trim().to_string());
        }
    }
    shortcuts
}

/// 读取 shortcut 文件；文件不存在时返回空表
pub fn load(path: &Path) -> Result<ShortcutMap> {
    if !path.exists() {
        return Ok(ShortcutMap::new());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| BrowsirError::io(format!("failed to read shortcuts file {:?}", path), e))?;
    Ok(parse(&content))
}

/// 基于文件的 shortcut 存储
#[derive(Debug, Clone)]
pub struct ShortcutFile {
    path: PathBuf,
}

impl ShortcutFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ShortcutMap> {
        load(&self.path)
    }

    /// 追加一条 shortcut，key 已存在时拒绝
    pub fn add(&mut self, key: &str, url: &str) -> Result<()> {
        if let Some(existing) = self.load()?.get(key) {
            return Err(BrowsirError::DuplicateShortcut {
                key: key.to_string(),
                url: existing.clone(),
            });
        }
        self.append(key, url)
    }

    /// 直接追加到文件末尾，必要时创建父目录
    pub fn append(&mut self, key: &str, url: &str) -> Result<()> {
        let save_failed = |source| BrowsirError::SaveFailed {
            key: key.to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(save_failed)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(save_failed)?;
        writeln!(file, "{}={}", key, url).map_err(save_failed)
    }

    /// 删除一条 shortcut：写入临时文件后替换原文件，其他行原样保留
    pub fn remove(&mut self, key: &str) -> Result<()> {
        let content = if self.path.exists() {
            fs::read_to_string(&self.path).map_err(|e| {
                BrowsirError::io(format!("failed to read shortcuts file {:?}", self.path), e)
            })?
        } else {
            String::new()
        };

        let mut found = false;
        let mut kept = String::new();
        for line in content.lines() {
            let is_target = line
                .split_once('=')
                .is_some_and(|(k, _)| !line.trim_start().starts_with('#') && k.trim() == key);
            if is_target {
                found = true;
                continue;
            }
            kept.push_str(line);
            kept.push('\n');
        }

        if !found {
            return Err(BrowsirError::ShortcutNotFound(key.to_string()));
        }
        super::replace_file(&self.path, &kept)
    }
}

impl ShortcutSink for ShortcutFile {
    fn save_shortcut(&mut self, key: &str, url: &str) -> Result<()> {
        self.append(key, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let map = parse("# comment\n\n gh = github.com \nnoequals\nq=a=b\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("gh").map(String::as_str), Some("github.com"));
        assert_eq!(map.get("q").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn append_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shortcuts");
        let mut file = ShortcutFile::new(&path);
        file.save_shortcut("gh", "github.com").unwrap();
        file.save_shortcut("mail", "gmail.com").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "gh=github.com\nmail=gmail.com\n");
    }

    #[test]
    fn add_rejects_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = ShortcutFile::new(dir.path().join("shortcuts"));
        file.add("gh", "github.com").unwrap();
        let err = file.add("gh", "gitlab.com").unwrap_err();
        assert!(matches!(err, BrowsirError::DuplicateShortcut { ref url, .. } if url == "github.com"));
    }

    #[test]
    fn remove_keeps_other_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortcuts");
        fs::write(&path, "# mine\ngh=github.com\nghe=github.example.com\n").unwrap();
        let mut file = ShortcutFile::new(&path);
        file.remove("gh").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# mine\nghe=github.example.com\n"
        );
        assert!(matches!(
            file.remove("gh").unwrap_err(),
            BrowsirError::ShortcutNotFound(_)
        ));
    }
}
