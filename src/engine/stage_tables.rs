// ==========================================
// Hệ thống ERP dệt may - Bảng trạng thái công đoạn theo vai trò
// ==========================================
// Ba vai trò cần ba bộ từ vựng khác nhau cho cùng một dữ liệu:
// - Quản đốc: nhìn theo điều phối ("sẵn sàng giao việc")
// - Tổ trưởng: nhìn theo lượt làm ("đến lượt tổ mình")
// - KCS: nhìn theo kiểm tra ("sẵn sàng kiểm")
// ==========================================
// Quy tắc cắt ngang:
// - Nhãn lỗi nhúng tên công đoạn + mức độ ("Dệt lỗi nặng")
// - Công đoạn NHUỘM gia công ngoài, chạy song song: bỏ qua isBlocked
// - KCS: công đoạn đầu chưa động tay -> "Chuẩn bị làm", còn lại "Đang làm"
// ==========================================

use crate::domain::badge::{StageAction, StageStatusView};
use crate::domain::order::ProductionStageDto;
use crate::domain::types::{ActionKind, DefectSeverity, StageExecStatus, StageType, Variant};
use crate::engine::entity_status::title_case;
use crate::i18n;

// ==========================================
// Trợ giúp nhãn dùng chung
// ==========================================

/// Tên công đoạn hiển thị; loại lạ rơi về title-case chuỗi gốc
fn stage_name(stage: &ProductionStageDto) -> String {
    match stage.stage_type() {
        Some(t) => t.display_name(),
        None => title_case(&stage.stage_type),
    }
}

/// Nhãn lỗi theo mức độ: "Dệt lỗi nặng" / "Cắt lỗi nhẹ".
/// Không có mức độ -> None, bảng dùng nhãn chung.
fn severity_label(stage: &ProductionStageDto) -> Option<String> {
    let key = match stage.severity()? {
        DefectSeverity::Minor => "stage.defect_minor",
        DefectSeverity::Major => "stage.defect_major",
    };
    Some(i18n::t_with_args(key, &[("stage", &stage_name(stage))]))
}

fn is_dyeing(stage: &ProductionStageDto) -> bool {
    stage.stage_type() == Some(StageType::Dyeing)
}

/// Nhãn nhóm "sẵn sàng" cho quản đốc/tổ trưởng.
/// NHUỘM không bao giờ bị chặn lượt; các công đoạn khác bị lô
/// khác chiếm tài nguyên thì hiển thị "chờ đến lượt".
fn ready_view_named(stage: &ProductionStageDto) -> StageStatusView {
    let name = stage_name(stage);
    if stage.is_blocked && !is_dyeing(stage) {
        StageStatusView::new(
            i18n::t_with_args("stage.turn_waiting", &[("stage", &name)]),
            Variant::Warning,
        )
    } else {
        StageStatusView::new(
            i18n::t_with_args("stage.ready_named", &[("stage", &name)]),
            Variant::Primary,
        )
    }
}

fn labeled(key: &str, variant: Variant) -> StageStatusView {
    StageStatusView::new(i18n::t(key), variant)
}

/// Nhãn lỗi nếu có mức độ, ngược lại nhãn chung
fn defect_or(stage: &ProductionStageDto, fallback_key: &str, variant: Variant) -> StageStatusView {
    match severity_label(stage) {
        Some(label) => StageStatusView::new(label, Variant::Danger),
        None => labeled(fallback_key, variant),
    }
}

// ==========================================
// Bảng quản đốc sản xuất (4 hành động, chỉ NHUỘM thao tác trực tiếp)
// ==========================================

/// Trạng thái công đoạn dưới góc nhìn quản đốc
///
/// "Chi tiết" luôn có trừ PENDING. Các nút thao tác (bắt đầu,
/// cập nhật tiến độ, xử lý lại) chỉ mở cho công đoạn NHUỘM vì
/// quản đốc trực tiếp điều hành gia công nhuộm; các công đoạn
/// khác do tổ trưởng vận hành.
pub fn pm_stage_view(effective: StageExecStatus, stage: &ProductionStageDto) -> StageStatusView {
    use StageExecStatus::*;

    let dyeing = is_dyeing(stage);
    let view = match effective {
        Pending => return labeled("stage.pending", Variant::Secondary),
        Waiting | Ready | ReadyToProduce => {
            let mut view = ready_view_named(stage);
            view.actions.push(StageAction::of(ActionKind::Detail));
            if dyeing {
                view.actions.push(StageAction::of(ActionKind::Start));
            }
            return view;
        }
        InProgress => {
            let mut view = labeled("stage.in_progress", Variant::Info);
            view.actions.push(StageAction::of(ActionKind::Detail));
            if dyeing {
                view.actions.push(StageAction::of(ActionKind::UpdateProgress));
            }
            return view;
        }
        WaitingRework => {
            let mut view = defect_or(stage, "stage.waiting_rework", Variant::Danger);
            view.actions.push(StageAction::of(ActionKind::Detail));
            if dyeing {
                view.actions.push(StageAction::of(ActionKind::Rework));
            }
            return view;
        }
        ReworkInProgress => {
            let mut view = defect_or(stage, "stage.rework_in_progress", Variant::Warning);
            view.actions.push(StageAction::of(ActionKind::Detail));
            if dyeing {
                view.actions.push(StageAction::of(ActionKind::UpdateProgress));
            }
            return view;
        }
        Paused => labeled("stage.paused", Variant::Dark),
        WaitingQc => labeled("stage.waiting_qc", Variant::Warning),
        QcInProgress => labeled("stage.qc_in_progress", Variant::Info),
        QcPassed => labeled("stage.qc_passed", Variant::Success),
        QcFailed => defect_or(stage, "stage.qc_failed", Variant::Danger),
        Completed => labeled("stage.completed", Variant::Success),
        ReadySupplementary => labeled("stage.ready_supplementary", Variant::Primary),
        WaitingSupplementary => labeled("stage.waiting_supplementary", Variant::Warning),
        InSupplementary => labeled("stage.in_supplementary", Variant::Info),
        SupplementaryCreated => labeled("stage.supplementary_created", Variant::Secondary),
    };
    view.with_actions(&[ActionKind::Detail])
}

// ==========================================
// Bảng tổ trưởng
// ==========================================

/// Trạng thái công đoạn dưới góc nhìn tổ trưởng
///
/// Bắt đầu sản xuất không phải hành động một-click trên danh sách:
/// nhóm "sẵn sàng" chỉ mở "Chi tiết", tổ trưởng phải vào lệnh.
pub fn leader_stage_view(effective: StageExecStatus, stage: &ProductionStageDto) -> StageStatusView {
    use StageExecStatus::*;

    match effective {
        Pending => labeled("stage.pending", Variant::Secondary),
        Waiting | Ready | ReadyToProduce => {
            ready_view_named(stage).with_actions(&[ActionKind::Detail])
        }
        InProgress => {
            labeled("stage.in_progress", Variant::Info).with_actions(&[ActionKind::UpdateProgress])
        }
        ReworkInProgress => defect_or(stage, "stage.rework_in_progress", Variant::Warning)
            .with_actions(&[ActionKind::UpdateProgress]),
        WaitingQc => labeled("stage.waiting_qc", Variant::Warning).with_actions(&[ActionKind::Detail]),
        QcInProgress => {
            labeled("stage.qc_in_progress", Variant::Info).with_actions(&[ActionKind::Detail])
        }
        QcPassed => labeled("stage.qc_passed", Variant::Success).with_actions(&[ActionKind::Detail]),
        QcFailed => defect_or(stage, "stage.qc_failed", Variant::Danger)
            .with_actions(&[ActionKind::Detail]),
        Completed => labeled("stage.completed", Variant::Success).with_actions(&[ActionKind::Detail]),
        WaitingRework => defect_or(stage, "stage.waiting_rework", Variant::Danger)
            .with_actions(&[ActionKind::PauseAndFix]),
        Paused => labeled("stage.paused", Variant::Dark),
        // Nhóm đơn bổ sung có bộ hành động riêng
        ReadySupplementary => labeled("stage.ready_supplementary", Variant::Primary)
            .with_actions(&[ActionKind::Detail, ActionKind::StartSupplementary]),
        WaitingSupplementary => labeled("stage.waiting_supplementary", Variant::Warning)
            .with_actions(&[ActionKind::Detail, ActionKind::StartSupplementary]),
        InSupplementary => labeled("stage.in_supplementary", Variant::Info)
            .with_actions(&[ActionKind::Detail, ActionKind::UpdateProgress]),
        SupplementaryCreated => labeled("stage.supplementary_created", Variant::Secondary)
            .with_actions(&[ActionKind::Detail]),
    }
}

// ==========================================
// Bảng KCS (chỉ nhãn + variant; hành động tính riêng)
// ==========================================

/// Trạng thái công đoạn dưới góc nhìn KCS
///
/// # Tham số
/// - order_started: lệnh đã có công đoạn nào tiến triển chưa
///   (dùng cho quy tắc "công đoạn đầu chưa động tay")
pub fn qa_stage_view(
    effective: StageExecStatus,
    stage: &ProductionStageDto,
    order_started: bool,
) -> StageStatusView {
    use StageExecStatus::*;

    match effective {
        Pending => labeled("stage.pending", Variant::Secondary),
        Waiting | Ready | ReadyToProduce => {
            // Công đoạn đầu, lệnh chưa động tay: chuẩn bị làm.
            // Từ công đoạn 2 trở đi, READY nghĩa là công đoạn trước
            // vừa qua QC - lệnh đang chuyển động, hiển thị "đang làm".
            if stage.stage_sequence <= 1 && !order_started {
                labeled("stage.qa_prepare", Variant::Secondary)
            } else {
                labeled("stage.qa_working", Variant::Info)
            }
        }
        InProgress => labeled("stage.qa_working", Variant::Info),
        Paused => labeled("stage.paused", Variant::Dark),
        WaitingQc => labeled("stage.waiting_qc", Variant::Warning),
        QcInProgress => labeled("stage.qc_in_progress", Variant::Info),
        QcPassed => labeled("stage.qc_passed", Variant::Success),
        QcFailed => defect_or(stage, "stage.qc_failed", Variant::Danger),
        WaitingRework => defect_or(stage, "stage.waiting_rework", Variant::Danger),
        ReworkInProgress => defect_or(stage, "stage.rework_in_progress", Variant::Warning),
        Completed => labeled("stage.completed", Variant::Success),
        ReadySupplementary => labeled("stage.ready_supplementary", Variant::Primary),
        WaitingSupplementary => labeled("stage.waiting_supplementary", Variant::Warning),
        InSupplementary => labeled("stage.in_supplementary", Variant::Info),
        SupplementaryCreated => labeled("stage.supplementary_created", Variant::Secondary),
    }
}

/// Hành động của KCS trên danh sách: hai trường hợp duy nhất
pub fn qa_stage_action(effective: StageExecStatus) -> StageAction {
    match effective {
        StageExecStatus::WaitingQc | StageExecStatus::QcInProgress => {
            StageAction::of(ActionKind::Inspect)
        }
        _ => StageAction::of(ActionKind::Detail),
    }
}
