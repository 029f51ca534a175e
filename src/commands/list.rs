//! list 命令 - 列出已安装程序

use anyhow::Result;
use clap::Parser;

use crate::modules::catalog::{self, models::SoftwareRecord};

#[derive(Parser, Debug)]
pub struct ListCommand {
    /// 输出格式 (table/json)
    #[arg(long, default_value = "table")]
    pub format: String,

    /// 搜索关键词
    #[arg(short, long)]
    pub search: Option<String>,
}

pub async fn execute(cmd: ListCommand) -> Result<()> {
    tracing::info!("列出已安装软件, search: {:?}", cmd.search);

    let mut records = catalog::list_installed_software()?;
    catalog::sort_catalog(&mut records);
    catalog::apply_search_filter(&mut records, cmd.search.as_deref());

    match cmd.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        _ => {
            print_table(&records);
        }
    }

    Ok(())
}

fn print_table(records: &[SoftwareRecord]) {
    println!("\n{}", "=".repeat(90));
    println!("{:<45} {:<25} {:<15}", "名称", "发布者", "版本");
    println!("{}", "=".repeat(90));

    for record in records {
        println!(
            "{:<45} {:<25} {:<15}",
            truncate_string(&record.name, 44),
            truncate_string(&record.publisher, 24),
            truncate_string(&record.version, 14)
        );
    }

    println!("{}", "=".repeat(90));
    println!("总计: {} 个程序\n", records.len());
}

fn truncate_string(s: &str, max_len: usize) -> String {
    // 使用 char 边界来正确处理 Unicode 字符（包括中文）
    if s.chars().count() > max_len {
        let chars: String = s.chars().take(max_len - 2).collect();
        format!("{}..", chars)
    } else {
        s.to_string()
    }
}
