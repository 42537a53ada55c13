pub mod similar;

use std::collections::BTreeMap;
use std::fmt;

pub use similar::{similar_keys, suggestions, Suggestion};

/// shortcut 表：key -> 目标地址（可以不带协议头）
pub type ShortcutMap = BTreeMap<String, String>;

/// shortcut 的来源层级，本地优先于共享
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// 本地 shortcut 文件
    Local,
    /// 配置文件中的 shortcuts
    Shared,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Local => write!(f, "local"),
            Tier::Shared => write!(f, "shared"),
        }
    }
}

/// 两层 shortcut
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutStore {
    pub local: ShortcutMap,
    pub shared: ShortcutMap,
}

impl ShortcutStore {
    pub fn new(local: ShortcutMap, shared: ShortcutMap) -> Self {
        Self { local, shared }
    }

    /// 精确查找，本地优先
    pub fn lookup(&self, key: &str) -> Option<(&str, Tier)> {
        self.local
            .get(key)
            .map(|url| (url.as_str(), Tier::Local))
            .or_else(|| self.shared.get(key).map(|url| (url.as_str(), Tier::Shared)))
    }
}
