//! 配置文件查找
//!
//! 查找顺序（先找到的生效）：
//! 1. `/etc/browsir/<name>`
//! 2. `$XDG_CONFIG_HOME/browsir/<name>`（未设置时为 `$HOME/.config`）
//! 3. `$HOME/<home_name>`
//! 4. `./<cwd_name>`
//!
//! 所有路径都来自显式传入的 [`ConfigPaths`]，不读取任何进程级全局状态。

use super::yaml_config::BrowsirConfig;
use crate::constants::file;
use crate::error::Result;
use crate::shortcut::ShortcutMap;
use crate::store::shortcuts_file;
use std::path::{Path, PathBuf};

/// 查找配置文件所需的目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// 系统级目录，通常为 `/etc/browsir`
    pub system_dir: PathBuf,
    pub home: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
    pub cwd: PathBuf,
}

/// 一类文件在各个位置上使用的文件名
#[derive(Debug, Clone, Copy)]
pub struct FileNames {
    pub xdg: &'static str,
    pub home: &'static str,
    pub cwd: &'static str,
}

pub const CONFIG_FILE: FileNames = FileNames {
    xdg: file::CONFIG,
    home: file::HOME_CONFIG,
    cwd: file::CWD_CONFIG,
};

pub const SHORTCUTS_FILE: FileNames = FileNames {
    xdg: file::SHORTCUTS,
    home: file::HOME_SHORTCUTS,
    cwd: file::CWD_SHORTCUTS,
};

pub const LINKS_FILE: FileNames = FileNames {
    xdg: file::LINKS,
    home: file::HOME_LINKS,
    cwd: file::CWD_LINKS,
};

impl ConfigPaths {
    pub fn new(home: Option<PathBuf>, xdg_config_home: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self {
            system_dir: PathBuf::from(file::SYSTEM_DIR),
            home,
            xdg_config_home,
            cwd,
        }
    }

    /// 用于测试：把系统目录也放进给定根目录
    pub fn rooted(root: &Path) -> Self {
        Self {
            system_dir: root.join("etc").join("browsir"),
            home: Some(root.join("home")),
            xdg_config_home: None,
            cwd: root.join("cwd"),
        }
    }

    /// `$XDG_CONFIG_HOME/browsir`，XDG 未设置时退回 `$HOME/.config/browsir`
    pub fn xdg_dir(&self) -> Option<PathBuf> {
        let base = match (&self.xdg_config_home, &self.home) {
            (Some(xdg), _) if !xdg.as_os_str().is_empty() => xdg.clone(),
            (_, Some(home)) => home.join(".config"),
            _ => return None,
        };
        Some(base.join(file::XDG_SUBDIR))
    }

    /// 按优先级列出某类文件的所有候选路径
    pub fn candidates(&self, names: FileNames) -> Vec<PathBuf> {
        let mut paths = vec![self.system_dir.join(names.xdg)];
        if let Some(xdg) = self.xdg_dir() {
            paths.push(xdg.join(names.xdg));
        }
        if let Some(home) = &self.home {
            paths.push(home.join(names.home));
        }
        paths.push(self.cwd.join(names.cwd));
        paths
    }

    /// 找到第一个存在的文件
    pub fn find(&self, names: FileNames) -> Option<PathBuf> {
        self.candidates(names).into_iter().find(|p| p.is_file())
    }

    /// 写入时使用的路径：已存在的文件优先，否则落在 XDG 目录（没有 HOME 时落在当前目录）
    pub fn writable(&self, names: FileNames) -> PathBuf {
        if let Some(existing) = self.find(names) {
            return existing;
        }
        match self.xdg_dir() {
            Some(xdg) => xdg.join(names.xdg),
            None => self.cwd.join(names.cwd),
        }
    }
}

/// 配置来源：解析后的 profile 表与两层 shortcut
///
/// 解析逻辑不关心文件在哪里，测试里可以直接换成内存实现。
pub trait ConfigSource {
    fn load_config(&self) -> Result<BrowsirConfig>;
    fn load_local_shortcuts(&self) -> Result<ShortcutMap>;
}

/// 基于文件系统的配置来源
#[derive(Debug, Clone)]
pub struct FsConfigSource {
    pub paths: ConfigPaths,
}

impl FsConfigSource {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }
}

impl ConfigSource for FsConfigSource {
    fn load_config(&self) -> Result<BrowsirConfig> {
        match self.paths.find(CONFIG_FILE) {
            Some(path) => BrowsirConfig::load(&path),
            None => Ok(BrowsirConfig::default_config()),
        }
    }

    fn load_local_shortcuts(&self) -> Result<ShortcutMap> {
        match self.paths.find(SHORTCUTS_FILE) {
            Some(path) => shortcuts_file::load(&path),
            None => Ok(ShortcutMap::new()),
        }
    }
}
