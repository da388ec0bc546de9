// ==========================================
// Hệ thống ERP dệt may - Bộ máy phân giải trạng thái
// ==========================================
// Vị trí: thư viện thuần túy, được tầng web/admin gọi
// Vai trò: ánh xạ (thực thể, vai trò) -> nhãn hiển thị + hành động hợp lệ
// Ràng buộc: không I/O, không trạng thái chia sẻ, không bao giờ panic
// ==========================================

// Khởi tạo hệ thống quốc tế hóa (tiếng Việt là ngôn ngữ gốc)
rust_i18n::i18n!("locales", fallback = "vi");

// ==========================================
// Khai báo module
// ==========================================

// Tầng miền - thực thể và kiểu dữ liệu
pub mod domain;

// Tầng engine - quy tắc phân giải trạng thái
pub mod engine;

// Tầng API - giao diện cho backend web
pub mod api;

// Hệ thống log
pub mod logging;

// Quốc tế hóa
pub mod i18n;

// ==========================================
// Tái xuất kiểu cốt lõi
// ==========================================

// Kiểu miền
pub use domain::types::{
    ActionKind, DefectSeverity, EntityKind, ReworkQueueStatus, Role, StageExecStatus, StageType,
    Variant,
};

// Thực thể miền
pub use domain::{
    DefectReportDto, ProductionOrderDto, ProductionStageDto, StageAction, StageStatusView,
    StatusBadge,
};

// Engine
pub use engine::{
    resolve_entity_status, resolve_order_status, resolve_rework_status, severity_badge,
    StatusContext,
};

// API
pub use api::{ApiError, ApiResult, StatusApi};

// ==========================================
// Hằng số hệ thống
// ==========================================

// Phiên bản hệ thống
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Tên hệ thống
pub const APP_NAME: &str = "Hệ thống ERP dệt may";
