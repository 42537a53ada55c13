//! 编译时嵌入资源统一管理
//!
//! | 资源名称 | 类型 | 路径 | 用途 |
//! |---------|------|------|------|
//! | `HELP_TEXT` | 文本 | `assets/help.md` | `-h` / `--help` 输出 |

/// 帮助文档内容
///
/// 占位符: `{profiles}`, `{shortcuts}`, `{local_shortcuts}`
/// 格式: Markdown
pub const HELP_TEXT: &str = include_str!("../assets/help.md");
