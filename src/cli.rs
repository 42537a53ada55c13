use clap::{Parser, Subcommand};

/// browsir - 用指定 profile 打开浏览器 🚀
///
/// 内置 help / version flag 被关闭，`-h`、`-v`、`-ls` 等由启动流程自行处理。
#[derive(Parser, Debug)]
#[command(name = "browsir", about = "Open your browser with the right profile", long_about = None)]
#[command(disable_help_subcommand = true, disable_help_flag = true, disable_version_flag = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<SubCmd>,

    /// 没有匹配到子命令时，收集所有剩余参数（`<profile> [url|shortcut]` 与 flag）
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SubCmd {
    /// 添加书签或本地 shortcut
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },

    /// 删除书签或本地 shortcut
    #[command(alias = "remove")]
    Rm {
        #[command(subcommand)]
        target: RmTarget,
    },

    /// 列出书签：links / all / <category>
    #[command(alias = "ls")]
    List {
        part: Option<String>,
    },

    /// 预览网页的标题、描述与 H1
    Preview {
        url: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum AddTarget {
    /// browsir add link <url> -c <categories>
    Link {
        url: String,
        /// 逗号分隔的分类
        #[arg(short = 'c', long = "categories", default_value = "")]
        categories: String,
    },

    /// browsir add shortcut <key> <url>
    Shortcut {
        key: String,
        url: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum RmTarget {
    /// browsir rm link <url>
    Link { url: String },

    /// browsir rm shortcut <key>
    Shortcut { key: String },
}
