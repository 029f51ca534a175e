pub mod models;

use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;

use crate::modules::catalog;
use crate::modules::catalog::models::SoftwareRecord;
use crate::modules::cleaner;
use crate::modules::invoker;
use crate::modules::progress::ProgressSink;
use crate::modules::terminator;
use models::{Stage, UninstallOutcome, WorkflowOptions};

/// 执行完整卸载流程：结束进程 → 执行卸载命令 → 清理残留 → 刷新目录
///
/// 阶段顺序由 [`Stage::next`] 决定；命令失败时跳过清理与刷新，
/// 流程总能到达 Complete。进度与日志通过回调上报，同时记入返回的结果。
pub async fn run_uninstall_workflow(
    record: &SoftwareRecord,
    options: &WorkflowOptions,
    sink: &dyn ProgressSink,
) -> UninstallOutcome {
    let started_at = Utc::now().to_rfc3339();
    let recorder = Recorder::new(sink);

    let mut stage = Stage::Started;
    let mut stages = vec![stage];
    recorder.on_progress(stage.percent(), stage.status_text());
    recorder.on_log(&format!("开始卸载: {}", record.name));

    let mut command_succeeded = false;
    let mut attempts = Vec::new();
    let mut refreshed_count = None;

    while let Some(next) = stage.next(command_succeeded) {
        stage = next;

        match stage {
            Stage::ProcessesTerminated => {
                let process_name = terminator::derive_process_name(&record.name);
                recorder.on_log(&format!("尝试结束进程: {}", process_name));
                terminator::kill_processes_by_name(&process_name, &recorder);
            }
            Stage::CommandExecuted => {
                recorder.on_progress(30, "正在执行卸载命令");
                command_succeeded =
                    invoker::run_uninstall(record, options.command_timeout_secs, &recorder).await;
            }
            Stage::ResidualCleaned => {
                attempts = cleaner::clean_residual(record, &recorder);
            }
            Stage::Refreshed => {
                // 留出时间让文件系统与注册表状态稳定
                tokio::time::sleep(Duration::from_secs(options.refresh_delay_secs)).await;
                match catalog::list_installed_software() {
                    Ok(mut records) => {
                        catalog::sort_catalog(&mut records);
                        recorder.on_log(&format!("软件目录已刷新: {} 个程序", records.len()));
                        refreshed_count = Some(records.len());
                    }
                    Err(e) => {
                        recorder.on_log(&format!("刷新软件目录失败: {}", e));
                        tracing::warn!("刷新软件目录失败: {}", e);
                    }
                }
            }
            Stage::Started | Stage::Complete => {}
        }

        stages.push(stage);
        recorder.on_progress(stage.percent(), stage.status_text());
    }

    UninstallOutcome {
        program: record.name.clone(),
        command_succeeded,
        stages,
        attempts,
        logs: recorder.into_logs(),
        refreshed_count,
        started_at,
        finished_at: Utc::now().to_rfc3339(),
    }
}

/// 转发进度回调，同时把日志行累积进流程结果
struct Recorder<'a> {
    inner: &'a dyn ProgressSink,
    logs: Mutex<Vec<String>>,
}

impl<'a> Recorder<'a> {
    fn new(inner: &'a dyn ProgressSink) -> Self {
        Self {
            inner,
            logs: Mutex::new(Vec::new()),
        }
    }

    fn into_logs(self) -> Vec<String> {
        self.logs
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressSink for Recorder<'_> {
    fn on_progress(&self, percent: u8, status: &str) {
        self.inner.on_progress(percent, status);
    }

    fn on_log(&self, line: &str) {
        self.inner.on_log(line);
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(line.to_string());
        }
    }
}
