//! uninstall 命令 - 卸载程序并清理残留

use anyhow::Result;
use clap::Parser;

use crate::modules::catalog;
use crate::modules::common::{elevation, utils};
use crate::modules::progress::ConsoleSink;
use crate::modules::workflow::{
    self,
    models::{UninstallOutcome, WorkflowOptions},
};

#[derive(Parser, Debug)]
pub struct UninstallCommand {
    /// 程序名称 (必需)
    pub target: String,

    /// 自动确认执行 (不指定则仅预览)
    #[arg(long)]
    pub confirm: bool,

    /// 卸载命令超时时间 (秒)
    #[arg(long, default_value = "120")]
    pub timeout: u64,

    /// 以管理员权限重新启动
    #[arg(long)]
    pub elevate: bool,

    /// 输出格式 (table/json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub async fn execute(cmd: UninstallCommand) -> Result<()> {
    // 权限检查：非管理员时受保护路径的删除预期会失败，只记录不报错
    if !elevation::is_admin() {
        if cmd.elevate {
            println!("正在请求管理员权限重新启动...");
            elevation::relaunch_elevated()?;
            return Ok(());
        }
        println!("警告: 当前没有管理员权限，部分残留可能无法删除 (可使用 --elevate 提权)");
    }

    println!("=== 卸载程序: {} ===\n", cmd.target);

    let mut records = catalog::list_installed_software()?;
    catalog::sort_catalog(&mut records);

    let record = catalog::find_record(&records, &cmd.target)
        .ok_or_else(|| anyhow::anyhow!("未找到程序: {}", cmd.target))?;

    println!("  - 找到程序: {}", record.name);
    println!("  - 发布者: {}", record.publisher);
    println!("  - 版本: {}", record.version);
    if !record.install_location.is_empty() {
        println!("  - 安装位置: {}", record.install_location);
    }

    if !cmd.confirm {
        println!("\n  使用 --confirm 参数执行卸载");
        return Ok(());
    }

    println!();
    let options = WorkflowOptions {
        command_timeout_secs: cmd.timeout,
        ..WorkflowOptions::default()
    };

    let outcome = workflow::run_uninstall_workflow(&record, &options, &ConsoleSink).await;

    match cmd.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        _ => {
            print_summary(&outcome);
        }
    }

    Ok(())
}

fn print_summary(outcome: &UninstallOutcome) {
    let deleted = outcome.attempts.iter().filter(|a| a.deleted()).count();
    let failed = outcome
        .attempts
        .iter()
        .filter(|a| matches!(a.outcome, crate::modules::cleaner::models::AttemptOutcome::Failed(_)))
        .count();
    let freed: u64 = outcome.attempts.iter().map(|a| a.bytes_freed).sum();

    println!("\n=== 卸载完成 ===");
    println!(
        "  命令执行: {}",
        if outcome.command_succeeded {
            "成功"
        } else {
            "失败"
        }
    );
    println!("  删除残留: {}", deleted);
    println!("  删除失败: {}", failed);
    println!("  释放空间: {}", utils::format_size(freed));

    if let Some(count) = outcome.refreshed_count {
        println!("  目录刷新: {} 个程序", count);
    }
}
