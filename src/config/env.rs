use super::paths::ConfigPaths;
use crate::constants::{env_var, LOG_VERBOSE};
use std::path::PathBuf;

/// 一次调用所需的环境信息，在 `main` 中读取一次后显式向下传递
#[derive(Debug, Clone)]
pub struct Environment {
    /// `BROWSIR_VERSION` 覆盖的版本号
    pub version: Option<String>,
    pub verbose: bool,
    /// Windows 下的 `ProgramFiles`
    pub program_files: Option<String>,
    pub os: &'static str,
    pub paths: ConfigPaths,
}

impl Environment {
    /// 从当前进程读取
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let home = var(env_var::HOME)
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        let xdg_config_home = var(env_var::XDG_CONFIG_HOME).map(PathBuf::from);
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            version: var(env_var::VERSION),
            verbose: var(env_var::LOG).is_some_and(|m| m == LOG_VERBOSE),
            program_files: var(env_var::PROGRAM_FILES),
            os: std::env::consts::OS,
            paths: ConfigPaths::new(home, xdg_config_home, cwd),
        }
    }

    /// 是否是 verbose 模式
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
