pub mod models;
pub mod registry;

use crate::modules::common::error::SweepError;
use crate::modules::common::utils;
use models::SoftwareRecord;

/// 列出所有已安装软件
///
/// 返回发现顺序的目录；展示前由调用方用 [`sort_catalog`] 排序。
pub fn list_installed_software() -> Result<Vec<SoftwareRecord>, SweepError> {
    registry::list_registry_software()
}

/// 按名称升序排序（稳定、区分大小写）
pub fn sort_catalog(records: &mut [SoftwareRecord]) {
    records.sort_by(|left, right| left.name.cmp(&right.name));
}

/// 按关键词过滤目录，匹配名称或发布者
pub fn apply_search_filter(records: &mut Vec<SoftwareRecord>, search: Option<&str>) {
    if let Some(query) = search {
        let normalized_query = query.to_lowercase();
        records.retain(|record| {
            utils::fuzzy_match(&record.name.to_lowercase(), &normalized_query)
                || utils::fuzzy_match(&record.publisher.to_lowercase(), &normalized_query)
        });
    }
}

/// 查找目标程序（名称包含匹配，不区分大小写）
pub fn find_record(records: &[SoftwareRecord], target: &str) -> Option<SoftwareRecord> {
    let target_lower = target.to_lowercase();
    records
        .iter()
        .find(|record| record.name.to_lowercase().contains(&target_lower))
        .cloned()
}
