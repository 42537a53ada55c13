/// 输出到 stdout
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        println!($($arg)*)
    }};
}

/// 输出一行 `[ERROR]` 到 stderr
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "[ERROR]".red(), format!($($arg)*))
    }};
}

/// verbose 模式下输出 `[DEBUG]` 到 stderr，`$env` 需要提供 `is_verbose()`
#[macro_export]
macro_rules! debug_log {
    ($env:expr, $($arg:tt)*) => {{
        if $env.is_verbose() {
            use colored::Colorize;
            eprintln!("{} {}", "[DEBUG]".dimmed(), format!($($arg)*))
        }
    }};
}

/// 以 Markdown 渲染到终端
#[macro_export]
macro_rules! md {
    ($($arg:tt)*) => {{
        let text = format!($($arg)*);
        $crate::util::log::render_markdown(&text);
    }};
}

pub fn render_markdown(text: &str) {
    termimad::print_text(text);
}
