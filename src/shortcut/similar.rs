//! 相似 shortcut 查找
//!
//! 只做双向子串包含判断，大小写敏感，不做编辑距离。

use super::{ShortcutMap, ShortcutStore, Tier};
use std::collections::BTreeSet;

/// 一条 "did you mean" 候选
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Suggestion {
    pub key: String,
    pub url: String,
    pub tier: Tier,
}

/// key 与 token 之间是否存在子串关系（任一方向）
pub fn is_similar(key: &str, token: &str) -> bool {
    if token.is_empty() || key.is_empty() {
        return false;
    }
    key.contains(token) || token.contains(key)
}

/// 两层中与 token 相似的所有 key
pub fn similar_keys(token: &str, local: &ShortcutMap, shared: &ShortcutMap) -> BTreeSet<String> {
    local
        .keys()
        .chain(shared.keys())
        .filter(|key| is_similar(key, token))
        .cloned()
        .collect()
}

/// 带来源层级的候选列表；同一个 key 两层都有时只按本地展示
pub fn suggestions(token: &str, store: &ShortcutStore) -> Vec<Suggestion> {
    let mut found = Vec::new();
    for (key, url) in &store.local {
        if is_similar(key, token) {
            found.push(Suggestion {
                key: key.clone(),
                url: url.clone(),
                tier: Tier::Local,
            });
        }
    }
    for (key, url) in &store.shared {
        if is_similar(key, token) && !store.local.contains_key(key) {
            found.push(Suggestion {
                key: key.clone(),
                url: url.clone(),
                tier: Tier::Shared,
            });
        }
    }
    found
}
