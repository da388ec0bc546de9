// ==========================================
// Hệ thống ERP dệt may - Phân giải trạng thái lệnh sản xuất
// ==========================================
// Vai trò: gom trạng thái các công đoạn thành một trạng thái
//          duy nhất cho cả lệnh, theo từ vựng của vai trò xem
// Thứ tự áp dụng (khớp dòng đầu tiên thì dừng):
//   1. Ghi đè cấp lệnh (chờ duyệt nguyên liệu, trạng thái chốt)
//   2. Quét công đoạn đang hoạt động
//   3. Bảng vai trò trên trạng thái hiệu lực
//   4. Công đoạn "sẵn sàng" đầu tiên nếu không có công đoạn hoạt động
//   5. Rơi về bảng thực thể chung
// ==========================================

use tracing::instrument;

use crate::domain::badge::StageStatusView;
use crate::domain::order::{ProductionOrderDto, ProductionStageDto};
use crate::domain::types::{ActionKind, EntityKind, Role, StageExecStatus, Variant};
use crate::engine::entity_status::{resolve_entity_status, StatusContext};
use crate::engine::stage_tables::{leader_stage_view, pm_stage_view, qa_stage_action, qa_stage_view};
use crate::i18n;

/// Lệnh đã có tiến triển chưa: một khi có công đoạn tiến độ > 0
/// hoặc đã qua QC, lệnh không bao giờ hiển thị "mới tinh" nữa
fn has_started(order: &ProductionOrderDto) -> bool {
    order.stages.iter().any(|s| {
        s.progress_percent > 0.0 || s.exec_status() == Some(StageExecStatus::QcPassed)
    })
}

/// Công đoạn đang hoạt động đầu tiên (không PENDING, không COMPLETED,
/// không QC_PASSED). Luồng chuẩn chỉ có tối đa một; nếu dữ liệu vi phạm
/// bất biến đó thì lấy công đoạn đầu tiên cho tất định.
fn first_active_stage(order: &ProductionOrderDto) -> Option<&ProductionStageDto> {
    order
        .stages
        .iter()
        .find(|s| s.effective_status().map(|e| e.is_active()).unwrap_or(false))
}

/// Công đoạn "sẵn sàng" đầu tiên (WAITING/READY/READY_TO_PRODUCE)
fn first_ready_stage(order: &ProductionOrderDto) -> Option<&ProductionStageDto> {
    order
        .stages
        .iter()
        .find(|s| s.exec_status().map(|e| e.is_ready_family()).unwrap_or(false))
}

/// Áp bảng vai trò lên một công đoạn cụ thể
fn stage_view_for_role(
    role: Role,
    effective: StageExecStatus,
    stage: &ProductionStageDto,
    order_started: bool,
) -> StageStatusView {
    match role {
        Role::ProductionManager => pm_stage_view(effective, stage),
        Role::Leader => leader_stage_view(effective, stage),
        Role::Qa => {
            let mut view = qa_stage_view(effective, stage, order_started);
            view.actions = vec![qa_stage_action(effective)];
            view
        }
        // Các vai trò ngoài sản xuất không có bảng công đoạn riêng
        _ => pm_stage_view(effective, stage),
    }
}

/// Mức rơi cuối: trạng thái cấp lệnh qua bảng thực thể chung
fn order_level_fallback(order: &ProductionOrderDto, role: Role) -> StageStatusView {
    let badge = resolve_entity_status(
        EntityKind::ProductionOrder,
        &order.execution_status,
        &StatusContext::none(),
        role,
    );
    StageStatusView::new(badge.label, badge.variant).with_actions(&[ActionKind::Detail])
}

/// Phân giải trạng thái hiển thị cho cả lệnh sản xuất
///
/// Hàm thuần túy, không biến đổi đầu vào, gọi lại bao nhiêu lần
/// cũng cho cùng kết quả; stages rỗng hoặc dữ liệu lệch bất biến
/// đều rơi về nhánh tất định, không bao giờ panic.
#[instrument(skip(order), fields(role = %role, stages = order.stages.len()))]
pub fn resolve_order_status(order: &ProductionOrderDto, role: Role) -> StageStatusView {
    // === Bước 1: ghi đè cấp lệnh (không phụ thuộc vai trò) ===
    if order.pending_material_request_id.is_some() {
        return StageStatusView::new(
            i18n::t("order.waiting_material_approval"),
            Variant::Warning,
        )
        .with_actions(&[ActionKind::Detail]);
    }

    match order.execution_status.trim().to_ascii_uppercase().as_str() {
        "WAITING_PRODUCTION" => {
            return StageStatusView::new(i18n::t("order.waiting_production"), Variant::Primary)
                .with_actions(&[ActionKind::Detail]);
        }
        "COMPLETED" | "ORDER_COMPLETED" => {
            return StageStatusView::new(i18n::t("common.completed"), Variant::Success)
                .with_actions(&[ActionKind::Detail]);
        }
        _ => {}
    }

    let started = has_started(order);

    // === Bước 2-3: công đoạn đang hoạt động + bảng vai trò ===
    if let Some(stage) = first_active_stage(order) {
        // effective_status chắc chắn Some: first_active_stage đã lọc
        if let Some(effective) = stage.effective_status() {
            return stage_view_for_role(role, effective, stage, started);
        }
    }

    // === Bước 4: không có công đoạn hoạt động, lấy công đoạn sẵn sàng đầu ===
    if let Some(stage) = first_ready_stage(order) {
        if let Some(effective) = stage.effective_status() {
            return stage_view_for_role(role, effective, stage, started);
        }
    }

    // === Bước 5: rơi về trạng thái cấp lệnh ===
    order_level_fallback(order, role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(stage_type: &str, exec: &str, seq: i32) -> ProductionStageDto {
        ProductionStageDto {
            stage_type: stage_type.to_string(),
            execution_status: exec.to_string(),
            status: None,
            stage_sequence: seq,
            is_blocked: false,
            progress_percent: 0.0,
            defect_severity: None,
        }
    }

    fn order(exec: &str, stages: Vec<ProductionStageDto>) -> ProductionOrderDto {
        ProductionOrderDto {
            execution_status: exec.to_string(),
            pending_material_request_id: None,
            stages,
        }
    }

    #[test]
    fn test_pending_material_short_circuits() {
        let mut o = order("IN_PROGRESS", vec![stage("WEAVING", "IN_PROGRESS", 2)]);
        o.pending_material_request_id = Some(77);
        let view = resolve_order_status(&o, Role::ProductionManager);
        assert_eq!(view.label, "Chờ duyệt nguyên liệu");
        assert_eq!(view.variant, Variant::Warning);
    }

    #[test]
    fn test_terminal_order_status_ignores_stages() {
        let o = order("ORDER_COMPLETED", vec![stage("WEAVING", "IN_PROGRESS", 2)]);
        let view = resolve_order_status(&o, Role::Leader);
        assert_eq!(view.label, "Hoàn thành");
        assert_eq!(view.variant, Variant::Success);

        let o = order("WAITING_PRODUCTION", vec![]);
        let view = resolve_order_status(&o, Role::Qa);
        assert_eq!(view.label, "Chờ sản xuất");
    }

    #[test]
    fn test_active_stage_drives_order_label() {
        let o = order(
            "IN_PROGRESS",
            vec![
                stage("WARPING", "QC_PASSED", 1),
                stage("WEAVING", "WAITING_QC", 2),
                stage("DYEING", "PENDING", 3),
            ],
        );
        let view = resolve_order_status(&o, Role::Leader);
        assert_eq!(view.label, "Chờ kiểm tra");
        assert_eq!(view.variant, Variant::Warning);
    }

    #[test]
    fn test_paused_override_wins_over_execution_status() {
        let mut weaving = stage("WEAVING", "IN_PROGRESS", 2);
        weaving.status = Some("PAUSED".to_string());
        let o = order("IN_PROGRESS", vec![stage("WARPING", "QC_PASSED", 1), weaving]);
        let view = resolve_order_status(&o, Role::Leader);
        assert_eq!(view.label, "Tạm dừng");
        assert!(view.actions.is_empty());
    }

    #[test]
    fn test_first_of_several_active_stages_is_taken() {
        // Vi phạm bất biến "một công đoạn hoạt động": lấy công đoạn đầu
        let o = order(
            "IN_PROGRESS",
            vec![
                stage("WARPING", "IN_PROGRESS", 1),
                stage("WEAVING", "IN_PROGRESS", 2),
            ],
        );
        let view = resolve_order_status(&o, Role::Leader);
        assert_eq!(view.label, "Đang sản xuất");
    }

    #[test]
    fn test_ready_stage_drives_label_when_nothing_in_flight() {
        let o = order(
            "IN_PROGRESS",
            vec![
                stage("WARPING", "READY_TO_PRODUCE", 1),
                stage("WEAVING", "PENDING", 2),
            ],
        );
        let view = resolve_order_status(&o, Role::Leader);
        assert_eq!(view.label, "Sẵn sàng sản xuất Mắc sợi");
    }

    #[test]
    fn test_empty_stages_falls_back_to_order_status() {
        let o = order("IN_PROGRESS", vec![]);
        let view = resolve_order_status(&o, Role::ProductionManager);
        assert_eq!(view.label, "Đang sản xuất");
        assert_eq!(view.variant, Variant::Info);

        // Trạng thái cấp lệnh lạ: mức rơi chung, không panic
        let o = order("ON_HOLD", vec![]);
        let view = resolve_order_status(&o, Role::ProductionManager);
        assert_eq!(view.label, "On Hold");
        assert_eq!(view.variant, Variant::Secondary);
    }

    #[test]
    fn test_idempotent() {
        let o = order(
            "IN_PROGRESS",
            vec![stage("WARPING", "QC_PASSED", 1), stage("WEAVING", "WAITING_QC", 2)],
        );
        let a = resolve_order_status(&o, Role::Qa);
        let b = resolve_order_status(&o, Role::Qa);
        assert_eq!(a, b);
    }

    #[test]
    fn test_qa_ready_first_stage_vs_later_stage() {
        let o = order("IN_PROGRESS", vec![stage("WARPING", "READY_TO_PRODUCE", 1)]);
        let view = resolve_order_status(&o, Role::Qa);
        assert_eq!(view.label, "Chuẩn bị làm");

        let o = order(
            "IN_PROGRESS",
            vec![
                stage("WARPING", "QC_PASSED", 1),
                stage("WEAVING", "READY_TO_PRODUCE", 2),
            ],
        );
        let view = resolve_order_status(&o, Role::Qa);
        assert_eq!(view.label, "Đang làm");
    }

    #[test]
    fn test_qa_started_order_never_shows_pristine_ready() {
        let mut first = stage("WARPING", "READY_TO_PRODUCE", 1);
        first.progress_percent = 12.5;
        let o = order("IN_PROGRESS", vec![first]);
        let view = resolve_order_status(&o, Role::Qa);
        assert_eq!(view.label, "Đang làm");
    }

    #[test]
    fn test_qa_actions_inspect_vs_detail() {
        let o = order(
            "IN_PROGRESS",
            vec![stage("WARPING", "QC_PASSED", 1), stage("WEAVING", "WAITING_QC", 2)],
        );
        let view = resolve_order_status(&o, Role::Qa);
        assert_eq!(view.actions.len(), 1);
        assert_eq!(view.actions[0].kind, ActionKind::Inspect);

        let o = order("IN_PROGRESS", vec![stage("WARPING", "IN_PROGRESS", 1)]);
        let view = resolve_order_status(&o, Role::Qa);
        assert_eq!(view.actions[0].kind, ActionKind::Detail);
    }

    #[test]
    fn test_unknown_stage_status_is_skipped_in_scan() {
        let o = order(
            "IN_PROGRESS",
            vec![stage("WARPING", "TELEPORTED", 1), stage("WEAVING", "WAITING_QC", 2)],
        );
        let view = resolve_order_status(&o, Role::Leader);
        assert_eq!(view.label, "Chờ kiểm tra");
    }
}
