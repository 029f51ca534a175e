use std::path::Path;

/// 标准删除：目录递归删除，文件直接删除
pub fn delete_path(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}

/// 强制删除回退
///
/// 文件先放开只读属性再删；目录交给系统命令做强制递归删除，
/// 命令自身的错误被抑制，以删除后路径是否仍存在为准。
pub fn force_delete_path(path: &Path) -> bool {
    if !path.exists() {
        return true;
    }

    if path.is_file() {
        if let Ok(metadata) = path.metadata() {
            let mut permissions = metadata.permissions();
            #[allow(clippy::permissions_set_readonly_false)]
            permissions.set_readonly(false);
            let _ = std::fs::set_permissions(path, permissions);
        }
        return std::fs::remove_file(path).is_ok();
    }

    force_remove_dir(path) && !path.exists()
}

#[cfg(windows)]
fn force_remove_dir(path: &Path) -> bool {
    let command_line = format!("rmdir /s /q \"{}\"", path.display());

    std::process::Command::new("cmd")
        .args(["/C", &command_line])
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn force_remove_dir(path: &Path) -> bool {
    std::process::Command::new("rm")
        .arg("-rf")
        .arg(path)
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::utils;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("appsweep-fs-test-{}-{}", tag, utils::generate_id()))
    }

    #[test]
    fn delete_path_removes_file_and_directory() {
        let dir = temp_path("dir");
        assert!(std::fs::create_dir_all(&dir).is_ok());
        assert!(std::fs::write(dir.join("data.bin"), b"x").is_ok());
        assert!(delete_path(&dir).is_ok());
        assert!(!dir.exists());

        let file = temp_path("file");
        assert!(std::fs::write(&file, b"x").is_ok());
        assert!(delete_path(&file).is_ok());
        assert!(!file.exists());
    }

    #[test]
    fn force_delete_clears_readonly_file() {
        let file = temp_path("readonly");
        assert!(std::fs::write(&file, b"x").is_ok());

        let mut permissions = file
            .metadata()
            .unwrap_or_else(|e| panic!("metadata failed: {}", e))
            .permissions();
        permissions.set_readonly(true);
        assert!(std::fs::set_permissions(&file, permissions).is_ok());

        assert!(force_delete_path(&file));
        assert!(!file.exists());
    }

    #[test]
    fn force_delete_on_missing_path_succeeds() {
        assert!(force_delete_path(&temp_path("missing")));
    }

    #[test]
    fn force_delete_removes_directory_tree() {
        let dir = temp_path("tree");
        assert!(std::fs::create_dir_all(dir.join("nested")).is_ok());
        assert!(std::fs::write(dir.join("nested").join("data.bin"), b"x").is_ok());

        assert!(force_delete_path(&dir));
        assert!(!dir.exists());
    }
}
