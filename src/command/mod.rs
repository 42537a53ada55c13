pub mod link;
pub mod list;
pub mod open;
pub mod preview;
pub mod shortcut;
pub mod system;

use crate::cli::{AddTarget, Cli, RmTarget, SubCmd};
use crate::config::paths::{LINKS_FILE, SHORTCUTS_FILE};
use crate::config::{BrowsirConfig, ConfigSource, Environment};
use crate::constants::SUBCOMMAND_KEYWORDS;
use crate::error::Result;
use crate::launcher::Launcher;
use crate::shortcut::ShortcutStore;
use crate::store::{LinkFile, ShortcutFile};
use crate::{debug_log, error};
use clap::Parser;
use std::io::{BufRead, Write};

/// 一次调用的上下文：环境、配置与两层 shortcut
#[derive(Debug, Clone)]
pub struct Context {
    pub env: Environment,
    pub config: BrowsirConfig,
    pub shortcuts: ShortcutStore,
}

impl Context {
    /// 通过配置来源加载
    pub fn load(env: Environment, source: &dyn ConfigSource) -> Result<Self> {
        let config = source.load_config()?;
        let local = source.load_local_shortcuts()?;
        let shared = config.shared_shortcuts();
        debug_log!(
            env,
            "loaded {} profiles, {} local and {} shared shortcuts",
            config.profiles.len(),
            local.len(),
            shared.len()
        );
        Ok(Self {
            env,
            config,
            shortcuts: ShortcutStore::new(local, shared),
        })
    }

    /// 本地 shortcut 文件（不存在时指向 XDG 目录下的新文件）
    pub fn shortcut_file(&self) -> ShortcutFile {
        ShortcutFile::new(self.env.paths.writable(SHORTCUTS_FILE))
    }

    /// 书签文件
    pub fn link_file(&self) -> LinkFile {
        LinkFile::new(self.env.paths.writable(LINKS_FILE))
    }
}

/// 命令分发执行
pub fn dispatch(subcmd: SubCmd, ctx: &Context) -> Result<()> {
    match subcmd {
        SubCmd::Add { target } => match target {
            AddTarget::Link { url, categories } => link::handle_add(&url, &categories, ctx),
            AddTarget::Shortcut { key, url } => shortcut::handle_add(&key, &url, ctx),
        },
        SubCmd::Rm { target } => match target {
            RmTarget::Link { url } => link::handle_remove(&url, ctx),
            RmTarget::Shortcut { key } => shortcut::handle_remove(&key, ctx),
        },
        SubCmd::List { part } => list::handle_list(part.as_deref(), ctx),
        SubCmd::Preview { url } => preview::handle_preview(&url),
    }
}

/// 把命令结果转换为退出码，错误在这里统一输出
pub fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}

/// 一次完整调用：先尝试子命令，clap 解析不出子命令时走 `<profile> [target]` 启动流程
pub fn run<R: BufRead, W: Write>(
    raw_args: &[String],
    ctx: &Context,
    launcher: &mut dyn Launcher,
    input: R,
    output: W,
) -> i32 {
    if raw_args.is_empty() {
        system::handle_help(ctx);
        return 0;
    }

    let argv = std::iter::once(crate::constants::APP_NAME.to_string()).chain(raw_args.iter().cloned());
    match Cli::try_parse_from(argv) {
        Ok(Cli {
            command: Some(subcmd),
            ..
        }) => exit_code(dispatch(subcmd, ctx)),
        Ok(cli) => open::handle_open(&cli.args, ctx, launcher, input, output),
        Err(e) => {
            // 子命令关键字但参数不对：输出 clap 的错误提示
            let is_subcommand = raw_args
                .first()
                .is_some_and(|a| SUBCOMMAND_KEYWORDS.contains(&a.as_str()));
            if is_subcommand {
                let _ = e.print();
                return 1;
            }
            debug_log!(ctx.env, "clap fallback: {}", e.kind());
            open::handle_open(raw_args, ctx, launcher, input, output)
        }
    }
}
