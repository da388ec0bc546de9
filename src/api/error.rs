// ==========================================
// Hệ thống ERP dệt may - Lỗi tầng API
// ==========================================
// Vai trò: lỗi duy nhất phát sinh ở biên (vai trò/loại thực thể
// không chuẩn hóa được, payload hỏng). Engine bên trong toàn phần,
// không bao giờ trả lỗi - trạng thái lạ chỉ suy biến nhãn.
// ==========================================

use thiserror::Error;

/// Lỗi tầng API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Chuỗi vai trò không chuẩn hóa được
    #[error("vai trò không hợp lệ: {0}")]
    UnknownRole(String),

    /// Chuỗi loại thực thể không chuẩn hóa được
    #[error("loại thực thể không hợp lệ: {0}")]
    UnknownEntityKind(String),

    /// Payload JSON không đúng cấu trúc DTO
    #[error("payload không hợp lệ: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidPayload(err.to_string())
    }
}

/// Bí danh Result
pub type ApiResult<T> = Result<T, ApiError>;
