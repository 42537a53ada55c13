//! 浏览器启动
//!
//! 根据操作系统和浏览器名找到可执行文件，按浏览器家族拼装 profile 参数，
//! 启动后不等待进程退出。

use crate::config::Profile;
use crate::error::{BrowsirError, Result};
use crate::resolve::normalize_url;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// 浏览器家族，决定 profile 参数的写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFamily {
    /// `--profile-directory=<dir>`
    Chromium,
    /// `-profile <dir>`
    Firefox,
}

/// 已知浏览器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Brave,
    Arc,
    Vivaldi,
    Firefox,
    FirefoxDeveloperEdition,
    Zen,
}

impl Browser {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chrome" => Some(Browser::Chrome),
            "brave" => Some(Browser::Brave),
            "arc" => Some(Browser::Arc),
            "vivaldi" => Some(Browser::Vivaldi),
            "firefox" => Some(Browser::Firefox),
            "firefox-developer-edition" => Some(Browser::FirefoxDeveloperEdition),
            "zen" => Some(Browser::Zen),
            _ => None,
        }
    }

    pub fn family(self) -> BrowserFamily {
        match self {
            Browser::Chrome | Browser::Brave | Browser::Arc | Browser::Vivaldi => {
                BrowserFamily::Chromium
            }
            Browser::Firefox | Browser::FirefoxDeveloperEdition | Browser::Zen => {
                BrowserFamily::Firefox
            }
        }
    }

    /// 当前系统下的可执行文件路径或命令名；不支持的组合返回 None
    pub fn executable(self, os: &str, program_files: Option<&str>) -> Option<String> {
        match os {
            "macos" => {
                let path = match self {
                    Browser::Chrome => "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                    Browser::Brave => "/Applications/Brave Browser.app/Contents/MacOS/Brave Browser",
                    Browser::Arc => "/Applications/Arc.app/Contents/MacOS/Arc",
                    Browser::Zen => "/Applications/Zen.app/Contents/MacOS/zen",
                    Browser::Firefox => "/Applications/Firefox.app/Contents/MacOS/firefox",
                    Browser::FirefoxDeveloperEdition => {
                        "/Applications/Firefox Developer Edition.app/Contents/MacOS/firefox"
                    }
                    Browser::Vivaldi => return None,
                };
                Some(path.to_string())
            }
            "linux" => match self {
                Browser::Chrome => Some("google-chrome".to_string()),
                Browser::Brave => Some("brave-browser".to_string()),
                Browser::Firefox => Some("firefox".to_string()),
                Browser::Vivaldi => Some("vivaldi".to_string()),
                _ => None,
            },
            "windows" => {
                let base = PathBuf::from(program_files?);
                let path = match self {
                    Browser::Chrome => base.join("Google").join("Chrome").join("Application").join("chrome.exe"),
                    Browser::Brave => base
                        .join("BraveSoftware")
                        .join("Brave-Browser")
                        .join("Application")
                        .join("brave.exe"),
                    Browser::Firefox => base.join("Mozilla Firefox").join("firefox.exe"),
                    _ => return None,
                };
                Some(path.to_string_lossy().to_string())
            }
            _ => None,
        }
    }
}

/// 一次待执行的启动命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// 构造启动命令；url 会先补全协议头，为空时不追加
pub fn build_command(
    browser_name: &str,
    profile: &Profile,
    url: &str,
    os: &str,
    program_files: Option<&str>,
) -> Result<LaunchCommand> {
    let unsupported = || BrowsirError::UnsupportedBrowser {
        browser: browser_name.to_string(),
        os: os.to_string(),
    };
    let browser = Browser::from_name(browser_name).ok_or_else(unsupported)?;
    let program = browser
        .executable(os, program_files)
        .ok_or_else(unsupported)?;

    let mut args = match browser.family() {
        BrowserFamily::Chromium => vec![format!("--profile-directory={}", profile.profile_dir)],
        BrowserFamily::Firefox => vec!["-profile".to_string(), profile.profile_dir.clone()],
    };
    let url = normalize_url(url);
    if !url.is_empty() {
        args.push(url);
    }

    Ok(LaunchCommand { program, args })
}

/// 启动器
pub trait Launcher {
    fn launch(&mut self, command: &LaunchCommand) -> Result<()>;
}

/// 真正启动子进程的启动器，不等待进程退出
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, command: &LaunchCommand) -> Result<()> {
        Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|source| BrowsirError::LaunchFailed {
                program: command.program.clone(),
                source,
            })
    }
}
