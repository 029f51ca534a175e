use sysinfo::System;

use crate::modules::progress::ProgressSink;

/// 按名称强制结束进程（不区分大小写）
///
/// 尽力而为：枚举与终止之间消失的进程、无权限终止的进程都直接跳过，
/// 本操作永远不向调用方报错。
pub fn kill_processes_by_name(name: &str, sink: &dyn ProgressSink) {
    if name.is_empty() {
        return;
    }

    let target = name.to_lowercase();
    let system = System::new_all();

    for (pid, process) in system.processes() {
        if process.name().to_lowercase() != target {
            continue;
        }

        sink.on_log(&format!("正在结束进程: {} (PID {})", process.name(), pid));

        if !process.kill() {
            tracing::debug!("无法结束进程 {}: 进程已退出或权限不足", pid);
        }
    }
}

/// 从显示名称推导进程名
///
/// 取第一个空白分隔的词并追加可执行后缀。这是启发式推导，
/// 推导结果与实际进程名不符时不视为错误。
pub fn derive_process_name(display_name: &str) -> String {
    let token = display_name.split_whitespace().next().unwrap_or_default();
    format!("{}{}", token, std::env::consts::EXE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::progress::MemorySink;

    #[test]
    fn derive_process_name_takes_first_token() {
        let expected = format!("Google{}", std::env::consts::EXE_SUFFIX);
        assert_eq!(derive_process_name("Google Chrome"), expected);
    }

    #[test]
    fn derive_process_name_handles_single_word() {
        let expected = format!("Baz{}", std::env::consts::EXE_SUFFIX);
        assert_eq!(derive_process_name("Baz"), expected);
    }

    #[test]
    fn killing_unmatched_name_is_a_noop() {
        let sink = MemorySink::new();
        kill_processes_by_name("appsweep-no-such-process.exe", &sink);
        assert!(sink.logs().is_empty());
    }

    #[test]
    fn killing_empty_name_is_a_noop() {
        let sink = MemorySink::new();
        kill_processes_by_name("", &sink);
        assert!(sink.logs().is_empty());
    }
}
