use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("注册表错误: {0}")]
    Registry(String),

    #[error("文件系统错误: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("进程错误: {0}")]
    Process(String),

    #[error("命令执行错误: {0}")]
    Command(String),

    #[error("权限不足: {0}")]
    PermissionDenied(String),

    #[error("关键系统路径: {0}")]
    CriticalSystemPath(String),

    #[error("未找到: {0}")]
    NotFound(String),

    #[error("超时: {0}")]
    Timeout(String),

    #[error("当前平台不支持: {0}")]
    Unsupported(String),
}

impl serde::Serialize for SweepError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
