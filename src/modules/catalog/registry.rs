use super::models::SoftwareRecord;
use crate::modules::common::error::SweepError;

/// 从注册表读取已安装软件
///
/// 扫描 64 位与 32 位两棵卸载信息树；单个键打不开或字段缺失时跳过该项，
/// 不中断整体扫描。返回发现顺序，排序由调用方负责。
#[cfg(windows)]
pub fn list_registry_software() -> Result<Vec<SoftwareRecord>, SweepError> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let mut records = Vec::new();

    let paths = [
        r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall",
        r"SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\Uninstall",
    ];

    for path in &paths {
        match RegKey::predef(HKEY_LOCAL_MACHINE).open_subkey(path) {
            Ok(key) => {
                for name in key.enum_keys().filter_map(|k| k.ok()) {
                    if let Ok(subkey) = key.open_subkey(&name) {
                        if let Some(record) = parse_registry_entry(&subkey) {
                            records.push(record);
                        }
                    }
                }
            }
            Err(e) => {
                tracing::debug!("无法打开注册表路径 {}: {}", path, e);
            }
        }
    }

    Ok(records)
}

/// 解析单个注册表项
///
/// DisplayName 与 UninstallString 缺一即丢弃；其余字段尽力读取。
#[cfg(windows)]
fn parse_registry_entry(subkey: &winreg::RegKey) -> Option<SoftwareRecord> {
    let name: String = subkey.get_value("DisplayName").ok()?;
    let uninstall_command: String = subkey.get_value("UninstallString").ok()?;

    let mut record = SoftwareRecord::new(name, uninstall_command)?;

    if let Ok(version) = subkey.get_value::<String, _>("DisplayVersion") {
        record.version = version;
    }
    if let Ok(publisher) = subkey.get_value::<String, _>("Publisher") {
        record.publisher = publisher;
    }
    if let Ok(install_location) = subkey.get_value::<String, _>("InstallLocation") {
        record.install_location = install_location;
    }

    Some(record)
}

#[cfg(not(windows))]
pub fn list_registry_software() -> Result<Vec<SoftwareRecord>, SweepError> {
    tracing::warn!("非 Windows 平台，已安装软件目录为空");
    Ok(Vec::new())
}
