// ==========================================
// Hệ thống ERP dệt may - Tầng API
// ==========================================
// Vai trò: giao diện cho backend web, chuẩn hóa đầu vào tại biên
// ==========================================

pub mod error;
pub mod status_api;

// Tái xuất kiểu cốt lõi
pub use error::{ApiError, ApiResult};
pub use status_api::StatusApi;
