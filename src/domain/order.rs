// ==========================================
// Hệ thống ERP dệt may - DTO lệnh sản xuất
// ==========================================
// Bản chụp chỉ đọc do REST backend trả về; tầng này
// không bao giờ biến đổi dữ liệu đầu vào
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{DefectSeverity, StageExecStatus, StageType};

// ==========================================
// ProductionOrderDto - lệnh sản xuất kèm công đoạn
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOrderDto {
    /// Trạng thái thực thi cấp lệnh (chuỗi enum backend)
    #[serde(default)]
    pub execution_status: String,

    /// Khác None khi đang chờ duyệt yêu cầu nguyên liệu
    #[serde(default)]
    pub pending_material_request_id: Option<i64>,

    /// Danh sách công đoạn, backend sắp theo stageSequence
    #[serde(default)]
    pub stages: Vec<ProductionStageDto>,
}

// ==========================================
// ProductionStageDto - một công đoạn trong lệnh
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionStageDto {
    /// Loại công đoạn (WARPING/WEAVING/DYEING/CUTTING/HEMMING/PACKAGING)
    #[serde(default)]
    pub stage_type: String,

    /// Trạng thái thực thi (chuỗi enum backend)
    #[serde(default)]
    pub execution_status: String,

    /// Trường trạng thái tự do; có thể mang "PAUSED" làm ghi đè
    #[serde(default)]
    pub status: Option<String>,

    /// Thứ tự công đoạn, tính từ 1
    #[serde(default)]
    pub stage_sequence: i32,

    /// true nếu lô khác đang chiếm tài nguyên công đoạn này
    #[serde(default)]
    pub is_blocked: bool,

    /// Tiến độ 0-100
    #[serde(default)]
    pub progress_percent: f32,

    /// Mức độ lỗi QC gắn với công đoạn (MINOR/MAJOR), nếu có
    #[serde(default)]
    pub defect_severity: Option<String>,
}

impl ProductionStageDto {
    /// Loại công đoạn đã chuẩn hóa (None nếu backend gửi giá trị lạ)
    pub fn stage_type(&self) -> Option<StageType> {
        StageType::parse(&self.stage_type)
    }

    /// Trạng thái thực thi đã chuẩn hóa
    pub fn exec_status(&self) -> Option<StageExecStatus> {
        StageExecStatus::parse(&self.execution_status)
    }

    /// Trạng thái hiệu lực: "PAUSED" trong trường status tự do
    /// ghi đè executionStatus
    pub fn effective_status(&self) -> Option<StageExecStatus> {
        if self
            .status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("PAUSED"))
            .unwrap_or(false)
        {
            return Some(StageExecStatus::Paused);
        }
        self.exec_status()
    }

    /// Mức độ lỗi đã chuẩn hóa
    pub fn severity(&self) -> Option<DefectSeverity> {
        self.defect_severity.as_deref().and_then(DefectSeverity::parse)
    }
}
