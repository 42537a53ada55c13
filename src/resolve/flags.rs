use std::collections::HashMap;

/// 命令行 flag 集合：flag（含前导 `-`）-> 值（无 `=value` 时为空串）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: HashMap<String, String>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: &str, value: &str) {
        self.flags.insert(flag.to_string(), value.to_string());
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.flags.contains_key(flag)
    }

    /// 任一拼写出现即为真（如 `-h` / `--help`）
    pub fn contains_any(&self, flags: &[&str]) -> bool {
        flags.iter().any(|f| self.contains(f))
    }

    pub fn get(&self, flag: &str) -> Option<&str> {
        self.flags.get(flag).map(String::as_str)
    }

    /// 按顺序取第一个带非空值的拼写
    pub fn value_of_any(&self, flags: &[&str]) -> Option<&str> {
        flags
            .iter()
            .filter_map(|f| self.get(f))
            .find(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }
}

/// 解析 flag：以 `-` 开头的 token 按第一个 `=` 拆分，其余 token 忽略
pub fn parse_flags<S: AsRef<str>>(tokens: &[S]) -> FlagSet {
    let mut set = FlagSet::new();
    for token in tokens {
        let token = token.as_ref();
        if !token.starts_with('-') {
            continue;
        }
        match token.split_once('=') {
            Some((flag, value)) => set.insert(flag, value),
            None => set.insert(token, ""),
        }
    }
    set
}

/// 把原始参数拆成位置参数与 flag token
pub fn partition_args<S: AsRef<str>>(raw: &[S]) -> (Vec<String>, Vec<String>) {
    raw.iter()
        .map(|s| s.as_ref().to_string())
        .partition(|token| !token.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let empty: [&str; 0] = [];
        assert!(parse_flags(&empty).is_empty());
    }

    #[test]
    fn splits_on_first_equals_only() {
        let flags = parse_flags(&["-q=a=b", "--search-engine=brave"]);
        assert_eq!(flags.get("-q"), Some("a=b"));
        assert_eq!(flags.get("--search-engine"), Some("brave"));
    }

    #[test]
    fn bare_flag_maps_to_empty_value() {
        let flags = parse_flags(&["-h", "work", "-ls"]);
        assert_eq!(flags.len(), 2);
        assert_eq!(flags.get("-h"), Some(""));
        assert!(flags.contains("-ls"));
        assert!(!flags.contains("work"));
    }

    #[test]
    fn last_write_wins() {
        let flags = parse_flags(&["-se=google", "-se=brave"]);
        assert_eq!(flags.get("-se"), Some("brave"));
    }

    #[test]
    fn value_of_any_skips_empty_values() {
        let flags = parse_flags(&["-se", "--search-engine=duckduckgo"]);
        assert_eq!(
            flags.value_of_any(&["-se", "--search-engine"]),
            Some("duckduckgo")
        );
    }

    #[test]
    fn partition_keeps_order() {
        let (positional, flags) = partition_args(&["-q=rust lang", "work", "-se=brave", "x"]);
        assert_eq!(positional, vec!["work", "x"]);
        assert_eq!(flags, vec!["-q=rust lang", "-se=brave"]);
    }
}
