//! clean 命令 - 仅清理残留，不执行卸载

use anyhow::Result;
use clap::Parser;

use crate::modules::catalog;
use crate::modules::cleaner;
use crate::modules::common::utils;
use crate::modules::progress::ConsoleSink;

#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// 程序名称 (必需)
    pub target: String,

    /// 自动确认删除 (不指定则预览)
    #[arg(long)]
    pub confirm: bool,
}

pub async fn execute(cmd: CleanCommand) -> Result<()> {
    println!("=== 清理残留: {} ===\n", cmd.target);

    // 已卸载的程序在目录中查不到记录，此时按名称本身推导候选路径
    let records = catalog::list_installed_software()?;
    let (name, install_location) = match catalog::find_record(&records, &cmd.target) {
        Some(record) => {
            println!("  - 找到程序: {}", record.name);
            (record.name, record.install_location)
        }
        None => {
            println!("  - 未在已安装程序中找到，按名称推导残留路径");
            (cmd.target.clone(), String::new())
        }
    };

    let candidates = cleaner::candidate_paths(&name, &install_location);
    let existing: Vec<_> = candidates.iter().filter(|p| p.exists()).collect();

    if existing.is_empty() {
        println!("\n  未发现残留");
        return Ok(());
    }

    println!("\n  找到 {} 个残留路径:", existing.len());
    for path in &existing {
        let size = utils::calculate_dir_size(path).unwrap_or(0);
        println!("    {} ({})", path.display(), utils::format_size(size));
    }

    if !cmd.confirm {
        println!("\n  使用 --confirm 参数确认删除");
        return Ok(());
    }

    println!("\n  执行清理中...\n");
    let attempts = cleaner::clean_paths(&name, &install_location, &ConsoleSink);

    let deleted = attempts.iter().filter(|a| a.deleted()).count();
    let freed: u64 = attempts.iter().map(|a| a.bytes_freed).sum();

    println!("\n  --- 清理完成 ---");
    println!("    成功: {}", deleted);
    println!("    释放空间: {}", utils::format_size(freed));

    Ok(())
}
