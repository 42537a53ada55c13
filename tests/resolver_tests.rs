use browsir::config::Profile;
use browsir::resolve::{FlagSet, Resolution, Resolver, normalize_url, parse_flags};
use browsir::shortcut::{ShortcutMap, ShortcutStore, Tier, similar_keys};
use std::collections::BTreeSet;

fn map(entries: &[(&str, &str)]) -> ShortcutMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn url_of(resolution: Resolution) -> String {
    match resolution {
        Resolution::Resolved { url, .. } => url,
        other => panic!("expected Resolved, got {:?}", other),
    }
}

#[test]
fn test_literal_url_ignores_shortcut_tables() {
    let profiles = vec![Profile::new("work", "Profile 1", "")];
    let store = ShortcutStore::new(map(&[("x.y", "local.com")]), map(&[("http", "shared.com")]));
    let resolver = Resolver::new(&profiles, &store);

    assert_eq!(url_of(resolver.resolve(&args(&["work", "x.y"]), &FlagSet::new())), "https://x.y");
    assert_eq!(
        url_of(resolver.resolve(&args(&["work", "http"]), &FlagSet::new())),
        "https://http"
    );
    assert_eq!(
        url_of(resolver.resolve(&args(&["work", "http://a.com"]), &FlagSet::new())),
        "http://a.com"
    );
}

#[test]
fn test_local_tier_shadows_shared() {
    let profiles = vec![Profile::new("work", "Profile 1", "")];
    let store = ShortcutStore::new(map(&[("cal", "a.com")]), map(&[("cal", "b.com")]));
    let resolver = Resolver::new(&profiles, &store);
    assert_eq!(
        url_of(resolver.resolve(&args(&["work", "cal"]), &FlagSet::new())),
        "https://a.com"
    );
}

#[test]
fn test_similarity_is_symmetric_substring_and_case_sensitive() {
    let shared = map(&[("github", "github.com")]);
    let empty = ShortcutMap::new();
    let github: BTreeSet<String> = ["github".to_string()].into_iter().collect();

    assert_eq!(similar_keys("git", &empty, &shared), github);
    assert_eq!(similar_keys("github-enterprise", &empty, &shared), github);
    assert!(similar_keys("GIT", &empty, &shared).is_empty());
}

#[test]
fn test_suggestions_only_after_both_tiers_miss() {
    let profiles = vec![Profile::new("work", "Profile 1", "")];
    let store = ShortcutStore::new(map(&[("gh", "github.com")]), map(&[("ghe", "github.example.com")]));
    let resolver = Resolver::new(&profiles, &store);

    assert_eq!(
        url_of(resolver.resolve(&args(&["work", "ghe"]), &FlagSet::new())),
        "https://github.example.com"
    );

    match resolver.resolve(&args(&["work", "g"]), &FlagSet::new()) {
        Resolution::Suggestions { candidates } => {
            let found: BTreeSet<(String, Tier)> =
                candidates.into_iter().map(|s| (s.key, s.tier)).collect();
            let expected: BTreeSet<(String, Tier)> = [
                ("gh".to_string(), Tier::Local),
                ("ghe".to_string(), Tier::Shared),
            ]
            .into_iter()
            .collect();
            assert_eq!(found, expected);
        }
        other => panic!("expected Suggestions, got {:?}", other),
    }
}

#[test]
fn test_prompt_to_save_only_without_candidates() {
    let profiles = vec![Profile::new("work", "Profile 1", "")];
    let store = ShortcutStore::new(ShortcutMap::new(), map(&[("mail", "gmail.com")]));
    let resolver = Resolver::new(&profiles, &store);

    assert!(matches!(
        resolver.resolve(&args(&["work", "mailbox"]), &FlagSet::new()),
        Resolution::Suggestions { .. }
    ));
    assert!(matches!(
        resolver.resolve(&args(&["work", "calendar"]), &FlagSet::new()),
        Resolution::PromptToSave { ref token, .. } if token == "calendar"
    ));
}

#[test]
fn test_normalization_idempotent() {
    for url in ["https://a.com", "http://a.com", "a.com", ""] {
        assert_eq!(normalize_url(&normalize_url(url)), normalize_url(url));
    }
    assert_eq!(normalize_url("a.com"), "https://a.com");
    assert_eq!(normalize_url("https://a.com"), "https://a.com");
}

#[test]
fn test_unknown_profile_with_or_without_target() {
    let profiles = vec![
        Profile::new("work", "Profile 1", ""),
        Profile::new("personal", "Default", ""),
    ];
    let store = ShortcutStore::default();
    let resolver = Resolver::new(&profiles, &store);
    let expected = Resolution::UnknownProfile {
        name: "nonexistent".into(),
    };

    assert_eq!(resolver.resolve(&args(&["nonexistent"]), &FlagSet::new()), expected);
    assert_eq!(
        resolver.resolve(&args(&["nonexistent", "gmail.com"]), &FlagSet::new()),
        expected
    );
}

#[test]
fn test_end_to_end_literal() {
    let profiles = vec![Profile::new("work", "Profile 1", "")];
    let store = ShortcutStore::default();
    let resolver = Resolver::new(&profiles, &store);
    assert_eq!(
        resolver.resolve(&args(&["work", "gmail.com"]), &FlagSet::new()),
        Resolution::Resolved {
            profile: profiles[0].clone(),
            url: "https://gmail.com".into(),
        }
    );
}

#[test]
fn test_end_to_end_shared_shortcut() {
    let profiles = vec![Profile::new("personal", "Default", "")];
    let store = ShortcutStore::new(ShortcutMap::new(), map(&[("mail", "gmail.com")]));
    let resolver = Resolver::new(&profiles, &store);
    assert_eq!(
        url_of(resolver.resolve(&args(&["personal", "mail"]), &FlagSet::new())),
        "https://gmail.com"
    );
}

#[test]
fn test_end_to_end_no_target() {
    let profiles = vec![Profile::new("default", "Default", "")];
    let store = ShortcutStore::default();
    let resolver = Resolver::new(&profiles, &store);
    assert_eq!(url_of(resolver.resolve(&args(&["default"]), &FlagSet::new())), "");
}

#[test]
fn test_end_to_end_search() {
    let profiles = vec![Profile::new("default", "Default", "")];
    let store = ShortcutStore::default();
    let resolver = Resolver::new(&profiles, &store);

    let flags = parse_flags(&["-q=some query", "-se=duckduckgo"]);
    assert_eq!(
        url_of(resolver.resolve(&[], &flags)),
        "https://duckduckgo.com//?q=some+query"
    );

    let flags = parse_flags(&["-q=\"quoted words\"", "-se=altavista"]);
    assert_eq!(
        url_of(resolver.resolve(&args(&["default"]), &flags)),
        "https://google.com/search?q=quoted+words"
    );
}
