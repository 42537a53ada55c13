//! browsir 用到的名称、路径、flag 与提示文本

// ========== 版本信息 ==========

/// 应用名称
pub const APP_NAME: &str = "browsir";

/// 版本号未设置时的提示
pub const VERSION_NOT_SET: &str = "browsir version not set";

// ========== 环境变量 ==========

pub mod env_var {
    /// 版本号覆盖
    pub const VERSION: &str = "BROWSIR_VERSION";
    /// 日志模式（verbose 时输出 debug 日志）
    pub const LOG: &str = "BROWSIR_LOG";
    pub const HOME: &str = "HOME";
    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
    /// Windows 浏览器安装目录
    pub const PROGRAM_FILES: &str = "ProgramFiles";
}

/// verbose 日志模式的取值
pub const LOG_VERBOSE: &str = "verbose";

// ========== 配置文件 ==========

pub mod file {
    /// 系统级配置目录
    pub const SYSTEM_DIR: &str = "/etc/browsir";
    /// XDG 配置目录下的子目录名
    pub const XDG_SUBDIR: &str = "browsir";

    pub const CONFIG: &str = "config.yml";
    pub const HOME_CONFIG: &str = ".browsir.yml";
    pub const CWD_CONFIG: &str = ".browsir.yml";

    pub const SHORTCUTS: &str = "shortcuts";
    pub const HOME_SHORTCUTS: &str = ".browsir_shortcuts";
    pub const CWD_SHORTCUTS: &str = "shortcuts";

    pub const LINKS: &str = "links";
    pub const HOME_LINKS: &str = ".browsir_links";
    pub const CWD_LINKS: &str = "links";
}

// ========== 默认配置 ==========

pub const DEFAULT_BROWSER: &str = "chrome";
pub const DEFAULT_PROFILE_NAME: &str = "default";
pub const DEFAULT_PROFILE_DIR: &str = "Default";
pub const DEFAULT_PROFILE_DESCRIPTION: &str = "Default profile";
pub const DEFAULT_SHORTCUT: (&str, &str) = ("cal", "calendar.google.com");

/// 未指定分类时链接归入的分类
pub const DEFAULT_LINK_CATEGORY: &str = "general";

// ========== 命令行标记 ==========

/// 所有命令行 flag 的拼写，统一在此维护
pub mod flag {
    pub const HELP: &[&str] = &["-h", "--help"];
    pub const VERSION: &[&str] = &["-v", "--version"];
    pub const LIST_SHORTCUTS: &[&str] = &["-ls", "--list-shortcuts"];
    pub const PROFILES: &[&str] = &["-p", "--profiles"];
    pub const QUERY: &str = "-q";
    pub const SEARCH_ENGINE: &[&str] = &["-se", "--search-engine"];
}

/// 子命令关键字（判断 clap 解析失败时是否属于子命令用法错误）
pub const SUBCOMMAND_KEYWORDS: &[&str] = &["add", "rm", "remove", "list", "ls", "preview"];

// ========== 搜索引擎 ==========

/// 默认搜索引擎
pub const DEFAULT_SEARCH_ENGINE: &str = "google";

/// 搜索引擎 URL 模板（不含协议头，由 URL 规范化统一补全）
pub mod search_engine {
    pub const GOOGLE: &str = "google.com/search?q={}";
    pub const DUCKDUCKGO: &str = "duckduckgo.com//?q={}";
    pub const BRAVE: &str = "search.brave.com/search?q={}";
}

// ========== 网页预览 ==========

/// 预览请求的截止时间（毫秒）
pub const PREVIEW_TIMEOUT_MS: u64 = 3000;

/// 预览响应体读取上限
pub const PREVIEW_MAX_BODY_BYTES: u64 = 2 * 1024 * 1024;

// ========== 交互提示 ==========

pub const SAVE_PROMPT: &str = "Would you like to save this as a shortcut?";
pub const URL_PROMPT: &str = "Enter the website URL: ";
pub const SAVE_HINT: &str =
    "Tip: You can add shortcuts in your .browsir.yml config file or local shortcuts file";
