use serde::{Deserialize, Serialize};

use crate::modules::cleaner::models::ResidualAttempt;

/// 卸载流水线阶段
///
/// 固定线性顺序，不支持取消、暂停或重试；
/// 命令失败时跳过清理与刷新，直接进入 Complete。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Started,
    ProcessesTerminated,
    CommandExecuted,
    ResidualCleaned,
    Refreshed,
    Complete,
}

impl Stage {
    /// 下一阶段；只有 CommandExecuted 处依赖命令结果分叉
    pub fn next(self, command_succeeded: bool) -> Option<Stage> {
        match self {
            Stage::Started => Some(Stage::ProcessesTerminated),
            Stage::ProcessesTerminated => Some(Stage::CommandExecuted),
            Stage::CommandExecuted => {
                if command_succeeded {
                    Some(Stage::ResidualCleaned)
                } else {
                    Some(Stage::Complete)
                }
            }
            Stage::ResidualCleaned => Some(Stage::Refreshed),
            Stage::Refreshed => Some(Stage::Complete),
            Stage::Complete => None,
        }
    }

    /// 阶段对应的进度百分比
    pub fn percent(self) -> u8 {
        match self {
            Stage::Started => 0,
            Stage::ProcessesTerminated => 10,
            Stage::CommandExecuted => 70,
            Stage::ResidualCleaned => 95,
            Stage::Refreshed => 98,
            Stage::Complete => 100,
        }
    }

    /// 阶段对应的状态文本
    pub fn status_text(self) -> &'static str {
        match self {
            Stage::Started => "开始卸载",
            Stage::ProcessesTerminated => "已结束相关进程",
            Stage::CommandExecuted => "卸载命令已执行",
            Stage::ResidualCleaned => "残留清理完成",
            Stage::Refreshed => "软件目录已刷新",
            Stage::Complete => "完成",
        }
    }
}

/// 一次卸载流程的结果
///
/// 仅存在于单次流程期间，随 JSON 输出或日志面板消费，不做持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UninstallOutcome {
    pub program: String,
    pub command_succeeded: bool,
    pub stages: Vec<Stage>,
    pub attempts: Vec<ResidualAttempt>,
    pub logs: Vec<String>,
    pub refreshed_count: Option<usize>,
    pub started_at: String,
    pub finished_at: String,
}

/// 流程参数
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// 卸载命令超时 (秒)
    pub command_timeout_secs: u64,
    /// 刷新目录前等待文件系统/注册表状态稳定的时间 (秒)
    pub refresh_delay_secs: u64,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            command_timeout_secs: 120,
            refresh_delay_secs: 2,
        }
    }
}
