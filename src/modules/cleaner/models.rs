use serde::{Deserialize, Serialize};

/// 单个候选路径的删除结局
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// 已删除
    Deleted,
    /// 路径不存在，未做任何操作
    Skipped,
    /// 删除失败
    Failed(String),
}

/// 一次残留删除尝试
///
/// `forced` 表示结局出自强制删除回退，而非标准删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidualAttempt {
    pub id: String,
    pub path: String,
    pub outcome: AttemptOutcome,
    pub forced: bool,
    pub bytes_freed: u64,
}

impl ResidualAttempt {
    pub fn deleted(&self) -> bool {
        self.outcome == AttemptOutcome::Deleted
    }
}
