use crate::error::Result;
use crate::info;
use crate::preview::{PagePreview, fetch_preview};
use colored::Colorize;

/// 处理 `browsir preview <url>`
pub fn handle_preview(url: &str) -> Result<()> {
    info!("Fetching {} ...", url);
    let preview = fetch_preview(url)?;
    print_preview(&preview);
    Ok(())
}

fn print_preview(preview: &PagePreview) {
    if preview.is_empty() {
        info!("Nothing to preview 😢");
        return;
    }
    let fields = [
        ("Title", &preview.title),
        ("Description", &preview.description),
        ("H1", &preview.h1),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            info!("{} {}", format!("{}:", label).green(), value);
        }
    }
}
