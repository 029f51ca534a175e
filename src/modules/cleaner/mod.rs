pub mod filesystem;
pub mod models;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::modules::catalog::models::SoftwareRecord;
use crate::modules::common::elevation;
use crate::modules::common::utils;
use crate::modules::progress::ProgressSink;
use models::{AttemptOutcome, ResidualAttempt};

/// 名称变体：完整显示名，外加含括号时第一个括号前的部分
///
/// 例如 "Foo Bar (64-bit)" 产生 ["Foo Bar (64-bit)", "Foo Bar"]。
pub fn name_variants(name: &str) -> Vec<String> {
    let mut variants = vec![name.to_string()];

    if name.contains('(') {
        let prefix = name.split('(').next().unwrap_or_default().trim();
        if !prefix.is_empty() && prefix != name {
            variants.push(prefix.to_string());
        }
    }

    variants
}

/// 由软件名称与安装位置推导候选残留路径
///
/// 安装位置存在于磁盘时排在最前；每个名称变体再猜测四个常见安装根。
/// APPDATA/LOCALAPPDATA 未设置时得到的相对路径命中不了任何残留。
pub fn candidate_paths(name: &str, install_location: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if !install_location.is_empty() {
        let location = PathBuf::from(install_location);
        if location.exists() {
            paths.push(location);
        }
    }

    let program_files =
        std::env::var("ProgramFiles").unwrap_or_else(|_| r"C:\Program Files".to_string());
    let program_files_x86 = std::env::var("ProgramFiles(x86)")
        .unwrap_or_else(|_| r"C:\Program Files (x86)".to_string());
    let appdata = std::env::var("APPDATA").unwrap_or_default();
    let local_appdata = std::env::var("LOCALAPPDATA").unwrap_or_default();

    for variant in name_variants(name) {
        paths.push(Path::new(&program_files).join(&variant));
        paths.push(Path::new(&program_files_x86).join(&variant));
        paths.push(Path::new(&appdata).join(&variant));
        paths.push(Path::new(&local_appdata).join(&variant));
    }

    let mut seen = HashSet::new();
    paths.retain(|path| seen.insert(path.clone()));
    paths
}

/// 清理软件残留
///
/// 尽力而为：每个候选路径独立尝试，失败只记录不上抛，
/// 返回逐路径的尝试报告。
pub fn clean_residual(record: &SoftwareRecord, sink: &dyn ProgressSink) -> Vec<ResidualAttempt> {
    clean_paths(&record.name, &record.install_location, sink)
}

/// 按名称与安装位置清理残留
pub fn clean_paths(
    name: &str,
    install_location: &str,
    sink: &dyn ProgressSink,
) -> Vec<ResidualAttempt> {
    let admin_status = if elevation::is_admin() { "是" } else { "否" };
    sink.on_log(&format!("当前程序管理员权限状态: {}", admin_status));

    candidate_paths(name, install_location)
        .iter()
        .map(|path| attempt_delete(path, sink))
        .collect()
}

/// 尝试删除单个候选路径
///
/// 不存在的路径记为 Skipped；标准删除失败后走强制删除回退，
/// 两种尝试的结果分开记录日志。
fn attempt_delete(path: &Path, sink: &dyn ProgressSink) -> ResidualAttempt {
    let path_str = path.to_string_lossy().to_string();

    if !path.exists() {
        return ResidualAttempt {
            id: utils::generate_id(),
            path: path_str,
            outcome: AttemptOutcome::Skipped,
            forced: false,
            bytes_freed: 0,
        };
    }

    // 关键系统路径保护
    if utils::is_system_critical_path(&path_str) {
        sink.on_log(&format!("跳过关键系统路径: {}", path_str));
        tracing::warn!("跳过关键系统路径: {}", path_str);
        return ResidualAttempt {
            id: utils::generate_id(),
            path: path_str,
            outcome: AttemptOutcome::Failed("关键系统路径受保护".to_string()),
            forced: false,
            bytes_freed: 0,
        };
    }

    let bytes = utils::calculate_dir_size(path).unwrap_or(0);
    sink.on_log(&format!("正在删除残留: {}", path_str));

    match filesystem::delete_path(path) {
        Ok(_) => {
            sink.on_log(&format!("成功删除: {}", path_str));
            tracing::info!("已删除残留: {}", path_str);
            ResidualAttempt {
                id: utils::generate_id(),
                path: path_str,
                outcome: AttemptOutcome::Deleted,
                forced: false,
                bytes_freed: bytes,
            }
        }
        Err(e) => {
            sink.on_log(&format!("标准删除失败: {}，尝试强制删除...", e));

            if filesystem::force_delete_path(path) {
                sink.on_log(&format!("强制删除成功: {}", path_str));
                tracing::info!("强制删除成功: {}", path_str);
                ResidualAttempt {
                    id: utils::generate_id(),
                    path: path_str,
                    outcome: AttemptOutcome::Deleted,
                    forced: true,
                    bytes_freed: bytes,
                }
            } else {
                sink.on_log(&format!(
                    "无法删除路径: {}，请尝试以管理员身份运行",
                    path_str
                ));
                tracing::error!("无法删除路径 {}: {}", path_str, e);
                ResidualAttempt {
                    id: utils::generate_id(),
                    path: path_str,
                    outcome: AttemptOutcome::Failed(e.to_string()),
                    forced: true,
                    bytes_freed: 0,
                }
            }
        }
    }
}

/// 测试串行化环境变量修改
#[cfg(test)]
pub(crate) static TEST_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::progress::MemorySink;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "appsweep-cleaner-test-{}-{}",
            tag,
            utils::generate_id()
        ))
    }

    fn point_env_at(root: &Path) {
        std::env::set_var("ProgramFiles", root.join("pf"));
        std::env::set_var("ProgramFiles(x86)", root.join("pf86"));
        std::env::set_var("APPDATA", root.join("appdata"));
        std::env::set_var("LOCALAPPDATA", root.join("localappdata"));
    }

    #[test]
    fn name_variants_strip_parenthesized_suffix() {
        assert_eq!(
            name_variants("Foo Bar (64-bit)"),
            vec!["Foo Bar (64-bit)".to_string(), "Foo Bar".to_string()]
        );
        assert_eq!(name_variants("Baz"), vec!["Baz".to_string()]);
    }

    #[test]
    fn name_variants_never_produce_empty_variant() {
        assert_eq!(name_variants("(64-bit)"), vec!["(64-bit)".to_string()]);
    }

    #[test]
    fn candidate_paths_cover_install_location_and_guessed_roots() {
        let _guard = TEST_ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let root = temp_root("candidates");
        let install_location = root.join("install");
        assert!(std::fs::create_dir_all(&install_location).is_ok());
        point_env_at(&root);

        let paths = candidate_paths("Acme Tool", &install_location.to_string_lossy());

        assert_eq!(paths[0], install_location);
        assert!(paths.contains(&root.join("pf").join("Acme Tool")));
        assert!(paths.contains(&root.join("pf86").join("Acme Tool")));
        assert!(paths.contains(&root.join("appdata").join("Acme Tool")));
        assert!(paths.contains(&root.join("localappdata").join("Acme Tool")));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn candidate_paths_skip_missing_install_location() {
        let _guard = TEST_ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let root = temp_root("missing-location");
        point_env_at(&root);

        let missing = root.join("not-there");
        let paths = candidate_paths("Baz", &missing.to_string_lossy());

        assert!(!paths.contains(&missing));
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn clean_paths_deletes_existing_and_skips_missing() {
        let _guard = TEST_ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let root = temp_root("clean");
        let install_location = root.join("install");
        assert!(std::fs::create_dir_all(&install_location).is_ok());
        assert!(std::fs::write(install_location.join("data.bin"), vec![0u8; 64]).is_ok());
        point_env_at(&root);

        let sink = MemorySink::new();
        let attempts = clean_paths("Acme Tool", &install_location.to_string_lossy(), &sink);

        let deleted: Vec<_> = attempts.iter().filter(|a| a.deleted()).collect();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].path, install_location.to_string_lossy());
        assert!(!deleted[0].forced);
        assert_eq!(deleted[0].bytes_freed, 64);
        assert!(!install_location.exists());

        // 其余候选路径不存在，只能是 Skipped
        assert!(attempts
            .iter()
            .filter(|a| !a.deleted())
            .all(|a| a.outcome == AttemptOutcome::Skipped));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[cfg(unix)]
    fn running_as_root() -> bool {
        std::process::Command::new("id")
            .arg("-u")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim() == "0")
            .unwrap_or(false)
    }

    #[cfg(unix)]
    #[test]
    fn permission_failure_falls_back_to_forced_delete_with_distinct_logs() {
        use std::os::unix::fs::PermissionsExt;

        // root 不受权限位约束，构造不出标准删除失败
        if running_as_root() {
            return;
        }

        let _guard = TEST_ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let root = temp_root("forced");
        let install_location = root.join("install");
        assert!(std::fs::create_dir_all(&install_location).is_ok());
        assert!(std::fs::write(install_location.join("data.bin"), b"x").is_ok());
        assert!(std::fs::set_permissions(
            &install_location,
            std::fs::Permissions::from_mode(0o555)
        )
        .is_ok());
        point_env_at(&root);

        let sink = MemorySink::new();
        let attempts = clean_paths("Acme Tool", &install_location.to_string_lossy(), &sink);

        let attempt = attempts
            .iter()
            .find(|a| a.path == install_location.to_string_lossy())
            .unwrap_or_else(|| panic!("install location attempt missing"));
        assert!(attempt.forced);
        assert!(matches!(attempt.outcome, AttemptOutcome::Failed(_)));

        let logs = sink.logs();
        assert!(logs.iter().any(|line| line.contains("标准删除失败")));
        assert!(logs.iter().any(|line| line.contains("无法删除路径")));

        let _ = std::fs::set_permissions(&install_location, std::fs::Permissions::from_mode(0o755));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn critical_system_paths_are_never_deleted() {
        let sink = MemorySink::new();
        let attempt = attempt_delete(Path::new(r"C:\Windows"), &sink);

        // 非 Windows 上该路径不存在，Windows 上被保护名单拦下，两边都不会真删
        assert!(matches!(
            attempt.outcome,
            AttemptOutcome::Skipped | AttemptOutcome::Failed(_)
        ));
    }
}
