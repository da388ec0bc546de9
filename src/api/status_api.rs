// ==========================================
// Hệ thống ERP dệt may - API phân giải trạng thái
// ==========================================
// Vai trò: mặt tiền cho backend web - nhận chuỗi/JSON thô từ
//          tầng HTTP, chuẩn hóa một lần tại biên rồi gọi engine
// Ràng buộc: chỉ vai trò/loại thực thể sai mới là lỗi; chuỗi
//            trạng thái không bao giờ gây lỗi (suy biến nhãn)
// ==========================================

use serde_json::Value;
use tracing::warn;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::badge::{StageStatusView, StatusBadge};
use crate::domain::defect::DefectReportDto;
use crate::domain::order::ProductionOrderDto;
use crate::domain::types::{EntityKind, Role, Variant};
use crate::engine::{
    resolve_entity_status, resolve_order_status, resolve_rework_status, severity_badge,
    StatusContext,
};
use crate::i18n;

// ==========================================
// StatusApi
// ==========================================
pub struct StatusApi;

impl StatusApi {
    pub fn new() -> Self {
        Self
    }

    fn parse_role(role: &str) -> ApiResult<Role> {
        Role::parse(role).ok_or_else(|| ApiError::UnknownRole(role.to_string()))
    }

    fn parse_kind(kind: &str) -> ApiResult<EntityKind> {
        EntityKind::parse(kind).ok_or_else(|| ApiError::UnknownEntityKind(kind.to_string()))
    }

    /// Badge trạng thái cho một thực thể đơn giản
    ///
    /// # Tham số
    /// - kind: loại thực thể ("contract", "rfq", ...)
    /// - role: vai trò đang xem ("director", "pm", "kcs", ...)
    /// - status: chuỗi trạng thái backend, giữ nguyên bản
    /// - ctx: ngữ cảnh bổ sung (phân công RFQ, người tạo báo giá)
    pub fn entity_badge(
        &self,
        kind: &str,
        role: &str,
        status: &str,
        ctx: &StatusContext,
    ) -> ApiResult<StatusBadge> {
        let kind = Self::parse_kind(kind)?;
        let role = Self::parse_role(role)?;
        Ok(resolve_entity_status(kind, status, ctx, role))
    }

    /// Trạng thái hiển thị cho một lệnh sản xuất (JSON thô từ REST)
    pub fn order_view(&self, role: &str, order: &Value) -> ApiResult<StageStatusView> {
        let role = Self::parse_role(role)?;
        let dto: ProductionOrderDto = serde_json::from_value(order.clone())?;
        Ok(resolve_order_status(&dto, role))
    }

    /// Trạng thái hiển thị cho cả danh sách lệnh
    ///
    /// Một dòng hỏng không được làm hỏng cả danh sách: dòng không
    /// parse được suy biến thành badge "không xác định" thay vì lỗi.
    pub fn order_views(&self, role: &str, rows: &[Value]) -> ApiResult<Vec<StageStatusView>> {
        let role = Self::parse_role(role)?;
        Ok(rows
            .iter()
            .map(|row| match serde_json::from_value::<ProductionOrderDto>(row.clone()) {
                Ok(dto) => resolve_order_status(&dto, role),
                Err(err) => {
                    warn!(%err, "dòng lệnh sản xuất không parse được, suy biến nhãn");
                    StageStatusView::new(i18n::t("common.unknown_status"), Variant::Secondary)
                }
            })
            .collect())
    }

    /// Badge trạng thái hàng đợi cho một dòng báo cáo lỗi
    pub fn rework_badge(&self, defect: &Value) -> ApiResult<StatusBadge> {
        let dto: DefectReportDto = serde_json::from_value(defect.clone())?;
        Ok(resolve_rework_status(&dto))
    }

    /// Badge mức độ lỗi cho cột riêng, nếu lỗi đã phân loại
    pub fn defect_severity_badge(&self, defect: &Value) -> ApiResult<Option<StatusBadge>> {
        let dto: DefectReportDto = serde_json::from_value(defect.clone())?;
        Ok(dto.severity().map(severity_badge))
    }
}

impl Default for StatusApi {
    fn default() -> Self {
        Self::new()
    }
}
