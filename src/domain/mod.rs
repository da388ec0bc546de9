// ==========================================
// Hệ thống ERP dệt may - Tầng mô hình miền
// ==========================================
// Vai trò: định nghĩa thực thể, kiểu, kết quả hiển thị
// Ràng buộc: không chứa logic truy cập dữ liệu, không chứa quy tắc engine
// ==========================================

pub mod badge;
pub mod defect;
pub mod order;
pub mod types;

// Tái xuất kiểu cốt lõi
pub use badge::{StageAction, StageStatusView, StatusBadge};
pub use defect::DefectReportDto;
pub use order::{ProductionOrderDto, ProductionStageDto};
pub use types::{
    ActionKind, DefectSeverity, EntityKind, ReworkQueueStatus, Role, StageExecStatus, StageType,
    Variant,
};
