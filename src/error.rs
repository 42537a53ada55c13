use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// browsir 的统一错误类型
///
/// 所有错误都在顶层被转换成一行 `[ERROR]` 输出加退出码，不会以 panic 的形式冒出。
#[derive(Debug, Error)]
pub enum BrowsirError {
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    #[error("unsupported browser {browser} on {os}")]
    UnsupportedBrowser { browser: String, os: String },

    #[error("failed to start browser {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to save shortcut {key}: {source}")]
    SaveFailed {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("failed to parse config file {path:?}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("shortcut {key} already exists with url {url}")]
    DuplicateShortcut { key: String, url: String },

    #[error("link {0} already exists")]
    DuplicateLink(String),

    #[error("invalid shortcut key '{0}': keys must be non-empty without '=', '.' or spaces, and must not start with '-', '#' or 'http'")]
    InvalidShortcutKey(String),

    #[error("shortcut '{0}' not found")]
    ShortcutNotFound(String),

    #[error("link '{0}' not found")]
    LinkNotFound(String),

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} timed out after {millis} ms")]
    FetchTimeout { url: String, millis: u64 },

    #[error("request to {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },
}

impl BrowsirError {
    /// 构造带上下文的 IO 错误
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        BrowsirError::Io {
            context: context.into(),
            source,
        }
    }

    /// 错误对应的进程退出码
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, BrowsirError>;
