// ==========================================
// Hệ thống ERP dệt may - DTO báo cáo lỗi
// ==========================================
// Một dòng trong danh sách lỗi giao cho tổ trưởng;
// trạng thái hàng đợi do backend gán sẵn
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{DefectSeverity, ReworkQueueStatus, StageType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectReportDto {
    /// Bucket hàng đợi backend gán (PENDING/PROCESSED/WAITING/IN_PROGRESS/RESOLVED)
    #[serde(default)]
    pub queue_status: String,

    /// Mức độ lỗi (MINOR/MAJOR), nếu đã phân loại
    #[serde(default)]
    pub severity: Option<String>,

    /// Công đoạn phát sinh lỗi
    #[serde(default)]
    pub stage_type: Option<String>,

    /// Thời điểm ghi nhận lỗi
    #[serde(default)]
    pub reported_at: Option<DateTime<Utc>>,
}

impl DefectReportDto {
    pub fn queue_status(&self) -> Option<ReworkQueueStatus> {
        ReworkQueueStatus::parse(&self.queue_status)
    }

    pub fn severity(&self) -> Option<DefectSeverity> {
        self.severity.as_deref().and_then(DefectSeverity::parse)
    }

    pub fn stage_type(&self) -> Option<StageType> {
        self.stage_type.as_deref().and_then(StageType::parse)
    }
}
