use super::Context;
use crate::error::Result;
use crate::store::links_file::{Link, by_category};
use crate::{info, md};

/// 处理 list 命令: browsir list [links|all|<category>]
pub fn handle_list(part: Option<&str>, ctx: &Context) -> Result<()> {
    let links = ctx.link_file().load()?;
    let md_text = build_list_md(part, &links);

    if md_text.is_empty() {
        info!("No links to show 😢");
    } else {
        md!("{}", md_text);
    }
    Ok(())
}

/// 生成列表的 Markdown 文本，没有可展示内容时为空串
pub fn build_list_md(part: Option<&str>, links: &[Link]) -> String {
    let mut md_text = String::new();
    match part {
        None | Some("links") => build_links_md(links.iter(), &mut md_text),
        Some("all") => {
            build_links_md(links.iter(), &mut md_text);
            for (category, urls) in by_category(links) {
                md_text.push_str(&format!("## {}\n", category_heading(&category)));
                for url in urls {
                    md_text.push_str(&format!("- {}\n", url));
                }
                md_text.push('\n');
            }
        }
        Some(category) => {
            build_links_md(links.iter().filter(|l| l.has_category(category)), &mut md_text)
        }
    }
    md_text
}

/// 分类名作为二级标题：首字母大写
fn category_heading(category: &str) -> String {
    let mut heading = String::with_capacity(category.len());
    for (i, c) in category.char_indices() {
        if i == 0 {
            heading.extend(c.to_uppercase());
        } else {
            heading.push(c);
        }
    }
    heading
}

/// 将链接拼接到 Markdown 文本中（没有链接时跳过）
fn build_links_md<'a>(links: impl Iterator<Item = &'a Link>, md_text: &mut String) {
    let lines: Vec<String> = links
        .map(|l| format!("- {} → {}\n", l.url, l.categories.join(", ")))
        .collect();
    if lines.is_empty() {
        return;
    }
    md_text.push_str("## Links\n");
    for line in lines {
        md_text.push_str(&line);
    }
    md_text.push('\n');
}
