use super::{Context, exit_code, shortcut, system};
use crate::constants::flag;
use crate::error::{BrowsirError, Result};
use crate::launcher::{Launcher, build_command};
use crate::prompt::{Prompter, SaveOutcome, run_save_flow};
use crate::resolve::{Resolution, Resolver, parse_flags, partition_args};
use crate::shortcut::{Suggestion, Tier};
use crate::{debug_log, error, info};
use colored::Colorize;
use std::io::{BufRead, Write};

/// 处理 `browsir [flags] <profile> [url|shortcut]`
pub fn handle_open<R: BufRead, W: Write>(
    args: &[String],
    ctx: &Context,
    launcher: &mut dyn Launcher,
    input: R,
    mut output: W,
) -> i32 {
    let (positional, flag_tokens) = partition_args(args);
    let flags = parse_flags(&flag_tokens);

    if flags.contains_any(flag::HELP) {
        system::handle_help(ctx);
        return 0;
    }
    if flags.contains_any(flag::VERSION) {
        system::handle_version(ctx);
        return 0;
    }
    if flags.contains_any(flag::LIST_SHORTCUTS) {
        system::handle_list_shortcuts(ctx);
        return 0;
    }
    if flags.contains_any(flag::PROFILES) {
        system::handle_profiles(ctx);
        return 0;
    }

    let resolver = Resolver::new(&ctx.config.profiles, &ctx.shortcuts);
    let resolution = resolver.resolve(&positional, &flags);
    debug_log!(ctx.env, "resolution: {:?}", resolution);

    match resolution {
        Resolution::Resolved { profile, url } => {
            if flags.contains(flag::QUERY) {
                info!("Searching...");
            }
            exit_code(launch(ctx, launcher, &profile, &url))
        }
        Resolution::UnknownProfile { name } => {
            error!("unknown profile: {}", name);
            system::handle_help(ctx);
            1
        }
        Resolution::Suggestions { candidates } => {
            if let Err(e) = print_suggestions(&mut output, &candidates) {
                return exit_code(Err(e));
            }
            1
        }
        Resolution::PromptToSave { token, .. } => {
            // 写入后读不回来的 token 不进入保存流程
            if let Err(e) = shortcut::validate_key(&token) {
                return exit_code(Err(e));
            }
            let mut prompter = Prompter::new(input, output);
            let mut file = ctx.shortcut_file();
            match run_save_flow(&token, &mut prompter, &mut file) {
                Ok(SaveOutcome::Saved { .. }) => {
                    debug_log!(ctx.env, "shortcut written to {:?}", file.path());
                    0
                }
                Ok(SaveOutcome::Declined) => 1,
                Err(e) => exit_code(Err(e)),
            }
        }
    }
}

/// 启动浏览器
fn launch(
    ctx: &Context,
    launcher: &mut dyn Launcher,
    profile: &crate::config::Profile,
    url: &str,
) -> Result<()> {
    let command = build_command(
        &ctx.config.browser_name,
        profile,
        url,
        ctx.env.os,
        ctx.env.program_files.as_deref(),
    )?;
    debug_log!(ctx.env, "launching {} {:?}", command.program, command.args);
    launcher.launch(&command)
}

/// 打印 "did you mean" 候选，本地 shortcut 带 (local) 标记
fn print_suggestions<W: Write>(output: &mut W, candidates: &[Suggestion]) -> Result<()> {
    let write_failed = |e: std::io::Error| BrowsirError::io("failed to write suggestions", e);
    writeln!(output, "{}", "Did you mean one of these shortcuts?".yellow()).map_err(write_failed)?;
    for s in candidates {
        let written = match s.tier {
            Tier::Local => writeln!(output, "  {} -> {} ({})", s.key.cyan(), s.url, s.tier),
            Tier::Shared => writeln!(output, "  {} -> {}", s.key.cyan(), s.url),
        };
        written.map_err(write_failed)?;
    }
    Ok(())
}
