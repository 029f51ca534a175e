use serde::{Deserialize, Serialize};

/// 可选字段缺失时的默认值
pub const UNKNOWN_FIELD: &str = "unknown";

/// 注册表中发现的一条已安装软件记录
///
/// 只在名称与卸载命令都非空时建立；扫描后按名称排序持有，不做持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareRecord {
    pub id: String,
    pub name: String,
    pub uninstall_command: String,
    pub version: String,
    pub publisher: String,
    pub install_location: String,
}

impl SoftwareRecord {
    /// 建立记录；名称或卸载命令为空时拒绝
    pub fn new(name: String, uninstall_command: String) -> Option<Self> {
        if name.is_empty() || uninstall_command.is_empty() {
            return None;
        }

        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            uninstall_command,
            version: UNKNOWN_FIELD.to_string(),
            publisher: UNKNOWN_FIELD.to_string(),
            install_location: String::new(),
        })
    }

    pub fn with_version(mut self, version: String) -> Self {
        self.version = version;
        self
    }

    pub fn with_publisher(mut self, publisher: String) -> Self {
        self.publisher = publisher;
        self
    }

    pub fn with_install_location(mut self, install_location: String) -> Self {
        self.install_location = install_location;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_requires_name_and_uninstall_command() {
        assert!(SoftwareRecord::new(String::new(), "uninst.exe".to_string()).is_none());
        assert!(SoftwareRecord::new("Acme Tool".to_string(), String::new()).is_none());
        assert!(SoftwareRecord::new("Acme Tool".to_string(), "uninst.exe".to_string()).is_some());
    }

    #[test]
    fn optional_fields_take_documented_defaults() {
        let record = SoftwareRecord::new("Acme Tool".to_string(), "uninst.exe".to_string())
            .unwrap_or_else(|| panic!("record should be admitted"));

        assert_eq!(record.version, "unknown");
        assert_eq!(record.publisher, "unknown");
        assert!(record.install_location.is_empty());
    }
}
