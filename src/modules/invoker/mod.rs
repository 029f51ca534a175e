use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};

use crate::modules::catalog::models::SoftwareRecord;
use crate::modules::progress::ProgressSink;

/// 执行卸载命令并等待结束
///
/// 返回 true 当且仅当命令以成功状态退出。启动失败、非零退出、
/// 等待出错或超时都记录日志并返回 false，不做重试。
pub async fn run_uninstall(
    record: &SoftwareRecord,
    timeout_secs: u64,
    sink: &dyn ProgressSink,
) -> bool {
    let command_line = normalize_uninstall_command(&record.uninstall_command);

    sink.on_log(&format!("执行卸载命令: {}", command_line));
    tracing::info!("执行卸载命令: {}", command_line);

    let mut child = match spawn_shell(&command_line) {
        Ok(child) => child,
        Err(e) => {
            sink.on_log(&format!("卸载命令启动失败: {}", e));
            tracing::error!("卸载命令启动失败: {}", e);
            return false;
        }
    };

    match tokio::time::timeout(Duration::from_secs(timeout_secs), child.wait()).await {
        Ok(Ok(status)) if status.success() => {
            sink.on_log("卸载命令执行完成");
            true
        }
        Ok(Ok(status)) => {
            sink.on_log(&format!("卸载命令执行失败: {}", status));
            tracing::warn!("卸载命令执行失败: {}", status);
            false
        }
        Ok(Err(e)) => {
            sink.on_log(&format!("等待卸载进程出错: {}", e));
            tracing::error!("等待卸载进程出错: {}", e);
            false
        }
        Err(_) => {
            sink.on_log(&format!("卸载命令超时 ({} 秒)，强制结束", timeout_secs));
            tracing::warn!("卸载命令超时 ({} 秒)", timeout_secs);
            let _ = child.kill().await;
            false
        }
    }
}

/// 处理常见的卸载命令格式
fn normalize_uninstall_command(uninstall_command: &str) -> String {
    if uninstall_command.to_lowercase().starts_with("msiexec") {
        format!("{} /quiet /norestart", uninstall_command)
    } else {
        uninstall_command.to_string()
    }
}

/// 通过系统命令解释器启动卸载命令
fn spawn_shell(command_line: &str) -> std::io::Result<Child> {
    #[cfg(windows)]
    {
        Command::new("cmd")
            .args(["/C", command_line])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
    }

    #[cfg(not(windows))]
    {
        Command::new("sh")
            .args(["-c", command_line])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
    }
}
