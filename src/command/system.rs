use super::Context;
use crate::assets::HELP_TEXT;
use crate::constants::{APP_NAME, VERSION_NOT_SET};
use crate::shortcut::ShortcutMap;
use crate::{info, md};

/// 版本信息：`BROWSIR_VERSION` 优先，否则提示未设置
pub fn version_string(ctx: &Context) -> String {
    match &ctx.env.version {
        Some(v) => format!("{} v{}", APP_NAME, v),
        None => VERSION_NOT_SET.to_string(),
    }
}

/// 处理 `-v` / `--version`
pub fn handle_version(ctx: &Context) {
    info!("{}", version_string(ctx));
}

/// 生成帮助文档
pub fn help_markdown(ctx: &Context) -> String {
    let profiles: String = ctx
        .config
        .profiles
        .iter()
        .map(|p| format!("- **{}** - {}\n", p.name, p.description))
        .collect();

    let local = if ctx.shortcuts.local.is_empty() {
        String::new()
    } else {
        format!("\n## Local Shortcuts\n\n{}", shortcut_lines(&ctx.shortcuts.local))
    };

    HELP_TEXT
        .replace("{profiles}", &profiles)
        .replace("{shortcuts}", &shortcut_lines(&ctx.shortcuts.shared))
        .replace("{local_shortcuts}", &local)
}

fn shortcut_lines(map: &ShortcutMap) -> String {
    map.iter()
        .map(|(key, url)| format!("- `{}` → {}\n", key, url))
        .collect()
}

/// 处理 `-h` / `--help`
pub fn handle_help(ctx: &Context) {
    md!("{}", help_markdown(ctx));
}

/// 处理 `-p` / `--profiles`
pub fn handle_profiles(ctx: &Context) {
    info!("\nProfiles:");
    for p in &ctx.config.profiles {
        info!("  {:<12} - {}", p.name, p.description);
    }
}

/// 处理 `-ls` / `--list-shortcuts`：只列本地 shortcut
pub fn handle_list_shortcuts(ctx: &Context) {
    if ctx.shortcuts.local.is_empty() {
        info!("No local shortcuts yet 😢");
        return;
    }
    for (key, url) in &ctx.shortcuts.local {
        info!("  {:<12} -> {}", key, url);
    }
}
