//! 进度回调接口
//!
//! 工作线程通过该接口向展示层上报进度百分比、状态文本与日志行，
//! 展示层只消费回调，不持有业务状态。

use std::sync::Mutex;

/// 进度/日志回调
///
/// CLI 用控制台实现，测试用内存收集实现。所有方法默认为空操作。
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, _percent: u8, _status: &str) {}
    fn on_log(&self, _line: &str) {}
}

/// 静默实现
pub struct SilentSink;

impl ProgressSink for SilentSink {}

/// 控制台实现
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn on_progress(&self, percent: u8, status: &str) {
        println!("[{:>3}%] {}", percent, status);
    }

    fn on_log(&self, line: &str) {
        println!("  {}", line);
    }
}

/// 内存收集实现，保留收到的全部进度与日志
#[derive(Default)]
pub struct MemorySink {
    progress: Mutex<Vec<(u8, String)>>,
    logs: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_updates(&self) -> Vec<(u8, String)> {
        self.progress
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl ProgressSink for MemorySink {
    fn on_progress(&self, percent: u8, status: &str) {
        if let Ok(mut updates) = self.progress.lock() {
            updates.push((percent, status.to_string()));
        }
    }

    fn on_log(&self, line: &str) {
        if let Ok(mut lines) = self.logs.lock() {
            lines.push(line.to_string());
        }
    }
}
