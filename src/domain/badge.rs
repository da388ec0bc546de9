// ==========================================
// Hệ thống ERP dệt may - Kết quả hiển thị
// ==========================================
// Bộ ba (nhãn, variant, value) cho thực thể và
// (nhãn, variant, hành động) cho công đoạn/lệnh
// ==========================================

use serde::Serialize;

use crate::domain::types::{ActionKind, Variant};
use crate::i18n;

// ==========================================
// StatusBadge - trạng thái thực thể đơn giản
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    /// Nhãn hiển thị cho người dùng
    pub label: String,
    /// Nhãn nhấn mạnh (màu badge)
    pub variant: Variant,
    /// Giá trị chuẩn để lọc, nếu có
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl StatusBadge {
    pub fn new(label: impl Into<String>, variant: Variant, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant,
            value: Some(value.into()),
        }
    }
}

// ==========================================
// StageAction - một nút hành động trên danh sách
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageAction {
    /// Nhãn nút ("Chi tiết", "Bắt đầu", ...)
    pub label: String,
    /// Mã hành động cho tầng render ("detail", "start", ...)
    pub kind: ActionKind,
    /// Kiểu nút (bootstrap: "primary", "outline-secondary", ...)
    pub emphasis: String,
}

impl StageAction {
    /// Tạo hành động với nhãn và kiểu nút mặc định của loại hành động
    pub fn of(kind: ActionKind) -> Self {
        let emphasis = match kind {
            ActionKind::Detail => "outline-secondary",
            ActionKind::Start => "primary",
            ActionKind::UpdateProgress => "info",
            ActionKind::Rework => "warning",
            ActionKind::PauseAndFix => "danger",
            ActionKind::Inspect => "primary",
            ActionKind::StartSupplementary => "primary",
        };
        Self {
            label: i18n::t(kind.label_key()),
            kind,
            emphasis: emphasis.to_string(),
        }
    }
}

// ==========================================
// StageStatusView - trạng thái công đoạn/lệnh kèm hành động
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageStatusView {
    pub label: String,
    pub variant: Variant,
    pub actions: Vec<StageAction>,
}

impl StageStatusView {
    pub fn new(label: impl Into<String>, variant: Variant) -> Self {
        Self {
            label: label.into(),
            variant,
            actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, kinds: &[ActionKind]) -> Self {
        self.actions = kinds.iter().copied().map(StageAction::of).collect();
        self
    }

    /// Có hành động loại này không (tiện cho test và tầng render)
    pub fn has_action(&self, kind: ActionKind) -> bool {
        self.actions.iter().any(|a| a.kind == kind)
    }
}
