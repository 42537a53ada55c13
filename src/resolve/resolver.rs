//! 参数解析：把位置参数和 flag 解析成一次启动的结果
//!
//! 第一个位置参数始终是 profile 名，不做"看起来像网址就用默认 profile"的推断。

use super::flags::FlagSet;
use super::search::{SearchEngine, clean_query};
use super::url::{is_literal_url, normalize_url};
use crate::config::Profile;
use crate::constants::{DEFAULT_SEARCH_ENGINE, flag};
use crate::shortcut::{ShortcutStore, Suggestion, suggestions};

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 可以直接启动；url 为空表示只打开浏览器
    Resolved { profile: Profile, url: String },
    /// profile 不存在
    UnknownProfile { name: String },
    /// 没有精确匹配，但存在相似的 shortcut
    Suggestions { candidates: Vec<Suggestion> },
    /// 没有任何匹配，需要询问用户是否保存
    PromptToSave { profile: Profile, token: String },
}

/// 参数解析器
pub struct Resolver<'a> {
    profiles: &'a [Profile],
    shortcuts: &'a ShortcutStore,
}

impl<'a> Resolver<'a> {
    pub fn new(profiles: &'a [Profile], shortcuts: &'a ShortcutStore) -> Self {
        Self {
            profiles,
            shortcuts,
        }
    }

    /// 线性查找第一个同名 profile，重名时靠前的生效
    pub fn find_profile(&self, name: &str) -> Option<&'a Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// 解析一次调用
    pub fn resolve(&self, args: &[String], flags: &FlagSet) -> Resolution {
        if flags.contains(flag::QUERY) {
            return self.resolve_search(args, flags);
        }

        let name = args.first().map(String::as_str).unwrap_or_default();
        let Some(profile) = self.find_profile(name) else {
            return Resolution::UnknownProfile {
                name: name.to_string(),
            };
        };

        let Some(target) = args.get(1) else {
            return Resolution::Resolved {
                profile: profile.clone(),
                url: String::new(),
            };
        };

        self.resolve_target(profile, target)
    }

    /// 解析目标：网址直接使用，否则按 本地 -> 共享 -> 相似 -> 询问保存 的顺序处理
    pub fn resolve_target(&self, profile: &Profile, target: &str) -> Resolution {
        if is_literal_url(target) {
            return Resolution::Resolved {
                profile: profile.clone(),
                url: normalize_url(target),
            };
        }

        if let Some((url, _tier)) = self.shortcuts.lookup(target) {
            return Resolution::Resolved {
                profile: profile.clone(),
                url: normalize_url(url),
            };
        }

        let candidates = suggestions(target, self.shortcuts);
        if !candidates.is_empty() {
            return Resolution::Suggestions { candidates };
        }

        Resolution::PromptToSave {
            profile: profile.clone(),
            token: target.to_string(),
        }
    }

    /// 搜索分支：不做 shortcut 解析
    ///
    /// 使用 `args[0]` 指定的 profile（存在时），否则使用 profile 表中的第一个。
    fn resolve_search(&self, args: &[String], flags: &FlagSet) -> Resolution {
        let named = args.first().and_then(|name| self.find_profile(name));
        let Some(profile) = named.or_else(|| self.profiles.first()) else {
            return Resolution::UnknownProfile {
                name: args.first().cloned().unwrap_or_default(),
            };
        };

        let query = clean_query(flags.get(flag::QUERY).unwrap_or_default());
        let engine = flags
            .value_of_any(flag::SEARCH_ENGINE)
            .unwrap_or(DEFAULT_SEARCH_ENGINE);

        Resolution::Resolved {
            profile: profile.clone(),
            url: normalize_url(&SearchEngine::from_name(engine).search_url(&query)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::flags::parse_flags;
    use crate::shortcut::{ShortcutMap, Tier};

    fn map(entries: &[(&str, &str)]) -> ShortcutMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn profiles() -> Vec<Profile> {
        vec![
            Profile::new("work", "Profile 1", "Work profile"),
            Profile::new("personal", "Default", "Personal profile"),
        ]
    }

    #[test]
    fn literal_url_wins_over_same_named_shortcut() {
        let profiles = profiles();
        let store = ShortcutStore::new(map(&[("x.y", "other.com")]), map(&[("x.y", "b.com")]));
        let resolver = Resolver::new(&profiles, &store);
        assert_eq!(
            resolver.resolve(&args(&["work", "x.y"]), &FlagSet::new()),
            Resolution::Resolved {
                profile: profiles[0].clone(),
                url: "https://x.y".into(),
            }
        );
    }

    #[test]
    fn search_skips_profile_lookup_failures() {
        let profiles = profiles();
        let store = ShortcutStore::default();
        let resolver = Resolver::new(&profiles, &store);
        let flags = parse_flags(&["-q=some query", "-se=duckduckgo"]);
        assert_eq!(
            resolver.resolve(&args(&["nonexistent"]), &flags),
            Resolution::Resolved {
                profile: profiles[0].clone(),
                url: "https://duckduckgo.com//?q=some+query".into(),
            }
        );
    }

    #[test]
    fn search_uses_named_profile() {
        let profiles = profiles();
        let store = ShortcutStore::default();
        let resolver = Resolver::new(&profiles, &store);
        let flags = parse_flags(&["-q=rust", "--search-engine=brave"]);
        match resolver.resolve(&args(&["personal"]), &flags) {
            Resolution::Resolved { profile, url } => {
                assert_eq!(profile.name, "personal");
                assert_eq!(url, "https://search.brave.com/search?q=rust");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn exact_match_never_suggests() {
        let profiles = profiles();
        let store = ShortcutStore::new(map(&[("git", "gitlab.com")]), map(&[("github", "github.com")]));
        let resolver = Resolver::new(&profiles, &store);
        assert_eq!(
            resolver.resolve_target(&profiles[0], "git"),
            Resolution::Resolved {
                profile: profiles[0].clone(),
                url: "https://gitlab.com".into(),
            }
        );
    }

    #[test]
    fn similar_keys_produce_suggestions() {
        let profiles = profiles();
        let store = ShortcutStore::new(ShortcutMap::new(), map(&[("github", "github.com")]));
        let resolver = Resolver::new(&profiles, &store);
        assert_eq!(
            resolver.resolve_target(&profiles[0], "git"),
            Resolution::Suggestions {
                candidates: vec![Suggestion {
                    key: "github".into(),
                    url: "github.com".into(),
                    tier: Tier::Shared,
                }],
            }
        );
    }

    #[test]
    fn no_match_prompts_to_save() {
        let profiles = profiles();
        let store = ShortcutStore::new(ShortcutMap::new(), map(&[("github", "github.com")]));
        let resolver = Resolver::new(&profiles, &store);
        assert_eq!(
            resolver.resolve_target(&profiles[1], "GIT"),
            Resolution::PromptToSave {
                profile: profiles[1].clone(),
                token: "GIT".into(),
            }
        );
    }

    #[test]
    fn duplicate_profile_names_first_wins() {
        let profiles = vec![
            Profile::new("work", "Profile 1", "first"),
            Profile::new("work", "Profile 2", "second"),
        ];
        let store = ShortcutStore::default();
        let resolver = Resolver::new(&profiles, &store);
        assert_eq!(resolver.find_profile("work").map(|p| p.profile_dir.as_str()), Some("Profile 1"));
    }

    #[test]
    fn no_arguments_is_unknown_empty_profile() {
        let profiles = profiles();
        let store = ShortcutStore::default();
        let resolver = Resolver::new(&profiles, &store);
        assert_eq!(
            resolver.resolve(&[], &FlagSet::new()),
            Resolution::UnknownProfile { name: String::new() }
        );
    }
}
