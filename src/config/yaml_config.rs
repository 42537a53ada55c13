use crate::constants;
use crate::error::{BrowsirError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 浏览器 profile
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    #[serde(default)]
    pub name: String,

    /// 浏览器内部的 profile 目录名（如 `Profile 1`）
    #[serde(default, rename = "profile_dir")]
    pub profile_dir: String,

    #[serde(default)]
    pub description: String,
}

impl Profile {
    pub fn new(name: &str, profile_dir: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            profile_dir: profile_dir.to_string(),
            description: description.to_string(),
        }
    }
}

/// YAML 配置文件的完整结构
/// 使用 BTreeMap 保持 shortcuts 键的有序性，列表输出稳定
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct BrowsirConfig {
    #[serde(default)]
    pub app_name: String,

    #[serde(default)]
    pub browser_name: String,

    #[serde(default)]
    pub profiles: Vec<Profile>,

    /// 共享 shortcut（优先级低于本地 shortcut 文件）
    #[serde(default)]
    pub shortcuts: Option<BTreeMap<String, String>>,
}

impl BrowsirConfig {
    /// 从 YAML 文本解析，并补全缺省字段
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        // 空文件在 serde_yaml 中会被解析为 null，这里按全默认处理
        if content.trim().is_empty() {
            return Ok(Self::default_config());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| BrowsirError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config.with_defaults())
    }

    /// 从配置文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BrowsirError::io(format!("failed to read config file {:?}", path), e))?;
        Self::from_yaml(&content, path)
    }

    /// 创建默认配置（配置文件不存在时使用）
    pub fn default_config() -> Self {
        Self::default().with_defaults()
    }

    /// 补全缺省字段
    pub fn with_defaults(mut self) -> Self {
        if self.app_name.is_empty() {
            self.app_name = constants::APP_NAME.to_string();
        }
        if self.browser_name.is_empty() {
            self.browser_name = constants::DEFAULT_BROWSER.to_string();
        }
        if self.profiles.is_empty() {
            self.profiles = vec![Profile::new(
                constants::DEFAULT_PROFILE_NAME,
                constants::DEFAULT_PROFILE_DIR,
                constants::DEFAULT_PROFILE_DESCRIPTION,
            )];
        }
        // 只有完全缺失 shortcuts 时才写入默认值，显式的空 map 保持为空
        if self.shortcuts.is_none() {
            let (key, url) = constants::DEFAULT_SHORTCUT;
            let mut shortcuts = BTreeMap::new();
            shortcuts.insert(key.to_string(), url.to_string());
            self.shortcuts = Some(shortcuts);
        }
        self
    }

    /// 共享 shortcut 表
    pub fn shared_shortcuts(&self) -> BTreeMap<String, String> {
        self.shortcuts.clone().unwrap_or_default()
    }
}
