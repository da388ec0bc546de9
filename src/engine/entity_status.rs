// ==========================================
// Hệ thống ERP dệt may - Bảng trạng thái thực thể
// ==========================================
// Vai trò: ánh xạ (loại thực thể, vai trò, trạng thái backend)
//          -> (nhãn, variant, giá trị lọc)
// Ràng buộc: bảng phải toàn phần - trạng thái lạ rơi về
//            ánh xạ đồng nhất, không bao giờ trả lỗi
// ==========================================

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::badge::StatusBadge;
use crate::domain::types::{EntityKind, Role, Variant};
use crate::i18n;

// ==========================================
// Ngữ cảnh bổ sung cho vài quy tắc phụ thuộc dữ liệu
// ==========================================
// Hai quy tắc cần thêm thông tin ngoài chuỗi trạng thái:
// - RFQ nhìn từ giám đốc: chỉ quan tâm đã phân công hay chưa
// - Báo giá nháp nhìn từ kinh doanh: rẽ nhánh theo người tạo
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusContext {
    /// RFQ đã được gán nhân viên kinh doanh chưa
    pub has_assigned_sales: Option<bool>,
    /// Vai trò của người tạo báo giá
    pub quotation_author_role: Option<Role>,
}

impl StatusContext {
    pub fn none() -> Self {
        Self::default()
    }
}

// ==========================================
// Một dòng trong bảng tra cứu
// ==========================================
#[derive(Debug, Clone, Copy)]
struct StatusEntry {
    label_key: &'static str,
    variant: Variant,
    /// Giá trị chuẩn sau khi gộp nhóm (dùng để lọc)
    value: &'static str,
}

impl StatusEntry {
    fn badge(&self) -> StatusBadge {
        StatusBadge::new(i18n::t(self.label_key), self.variant, self.value)
    }
}

type StatusTable = HashMap<&'static str, StatusEntry>;

const fn entry(label_key: &'static str, variant: Variant, value: &'static str) -> StatusEntry {
    StatusEntry {
        label_key,
        variant,
        value,
    }
}

// ==========================================
// Bảng RFQ
// ==========================================

// Phòng kế hoạch: mọi trạng thái trước báo giá gộp thành "chờ tạo"
static RFQ_PLANNING: Lazy<StatusTable> = Lazy::new(|| {
    let waiting = entry("status.rfq.planning.waiting_create", Variant::Warning, "WAITING_CREATE");
    let rejected = entry("status.rfq.planning.rejected", Variant::Danger, "REJECTED");
    let confirmed = entry("status.rfq.planning.confirmed", Variant::Success, "CONFIRMED");
    HashMap::from([
        ("DRAFT", waiting),
        ("SENT", waiting),
        ("PRELIMINARY_CHECKED", waiting),
        ("FORWARDED_TO_PLANNING", waiting),
        ("RECEIVED_BY_PLANNING", waiting),
        ("QUOTED", entry("status.rfq.planning.quoted", Variant::Info, "QUOTED")),
        ("REJECTED", rejected),
        ("CANCELED", rejected),
        ("ACCEPTED", confirmed),
        ("ORDER_CREATED", confirmed),
    ])
});

// Kinh doanh: gần với trạng thái gốc, nhãn theo góc nhìn xử lý
static RFQ_SALES: Lazy<StatusTable> = Lazy::new(|| {
    HashMap::from([
        ("DRAFT", entry("status.rfq.sales.draft", Variant::Secondary, "DRAFT")),
        ("SENT", entry("status.rfq.sales.sent", Variant::Warning, "SENT")),
        (
            "PRELIMINARY_CHECKED",
            entry("status.rfq.sales.preliminary_checked", Variant::Info, "PRELIMINARY_CHECKED"),
        ),
        (
            "FORWARDED_TO_PLANNING",
            entry("status.rfq.sales.forwarded_to_planning", Variant::Info, "FORWARDED_TO_PLANNING"),
        ),
        (
            "RECEIVED_BY_PLANNING",
            entry("status.rfq.sales.received_by_planning", Variant::Info, "RECEIVED_BY_PLANNING"),
        ),
        ("QUOTED", entry("status.rfq.sales.quoted", Variant::Primary, "QUOTED")),
        ("ACCEPTED", entry("status.rfq.sales.accepted", Variant::Success, "ACCEPTED")),
        ("ORDER_CREATED", entry("status.rfq.sales.order_created", Variant::Success, "ORDER_CREATED")),
        ("REJECTED", entry("status.rfq.sales.rejected", Variant::Danger, "REJECTED")),
        ("CANCELED", entry("status.rfq.sales.canceled", Variant::Dark, "CANCELED")),
    ])
});

// Khách hàng: ba trạng thái luân chuyển nội bộ gộp thành một
// trạng thái "đã tiếp nhận" duy nhất (khách không thấy routing nội bộ)
static RFQ_CUSTOMER: Lazy<StatusTable> = Lazy::new(|| {
    let confirmed = entry("status.rfq.customer.confirmed", Variant::Info, "CONFIRMED");
    HashMap::from([
        ("DRAFT", entry("status.rfq.customer.draft", Variant::Secondary, "DRAFT")),
        ("SENT", entry("status.rfq.customer.sent", Variant::Primary, "SENT")),
        ("PRELIMINARY_CHECKED", confirmed),
        ("FORWARDED_TO_PLANNING", confirmed),
        ("RECEIVED_BY_PLANNING", confirmed),
        ("QUOTED", entry("status.rfq.customer.quoted", Variant::Primary, "QUOTED")),
        ("ACCEPTED", entry("status.rfq.customer.accepted", Variant::Success, "ACCEPTED")),
        (
            "ORDER_CREATED",
            entry("status.rfq.customer.order_created", Variant::Success, "ORDER_CREATED"),
        ),
        ("REJECTED", entry("status.rfq.customer.rejected", Variant::Danger, "REJECTED")),
        ("CANCELED", entry("status.rfq.customer.canceled", Variant::Dark, "CANCELED")),
    ])
});

// ==========================================
// Bảng báo giá
// ==========================================

// DRAFT không nằm trong bảng này: rẽ nhánh theo người tạo,
// xử lý riêng trong resolve_entity_status
static QUOTATION_SALES: Lazy<StatusTable> = Lazy::new(|| {
    HashMap::from([
        ("SENT", entry("status.quotation.sales.sent", Variant::Primary, "SENT")),
        ("ACCEPTED", entry("status.quotation.sales.accepted", Variant::Success, "ACCEPTED")),
        ("REJECTED", entry("status.quotation.sales.rejected", Variant::Danger, "REJECTED")),
        ("EXPIRED", entry("status.quotation.sales.expired", Variant::Dark, "EXPIRED")),
    ])
});

static QUOTATION_CUSTOMER: Lazy<StatusTable> = Lazy::new(|| {
    HashMap::from([
        ("SENT", entry("status.quotation.customer.received", Variant::Primary, "RECEIVED")),
        ("ACCEPTED", entry("status.quotation.customer.accepted", Variant::Success, "ACCEPTED")),
        ("REJECTED", entry("status.quotation.customer.rejected", Variant::Danger, "REJECTED")),
        ("EXPIRED", entry("status.quotation.customer.expired", Variant::Dark, "EXPIRED")),
    ])
});

// ==========================================
// Bảng hợp đồng
// ==========================================

// Giám đốc: sát trạng thái backend nhất
static CONTRACT_DIRECTOR: Lazy<StatusTable> = Lazy::new(|| {
    HashMap::from([
        ("DRAFT", entry("status.contract.director.draft", Variant::Secondary, "DRAFT")),
        (
            "PENDING_UPLOAD",
            entry("status.contract.director.pending_upload", Variant::Info, "PENDING_UPLOAD"),
        ),
        (
            "PENDING_APPROVAL",
            entry("status.contract.director.pending_approval", Variant::Warning, "PENDING_APPROVAL"),
        ),
        ("APPROVED", entry("status.contract.director.approved", Variant::Success, "APPROVED")),
        ("REJECTED", entry("status.contract.director.rejected", Variant::Danger, "REJECTED")),
        (
            "WAITING_PRODUCTION",
            entry("status.contract.director.waiting_production", Variant::Primary, "WAITING_PRODUCTION"),
        ),
        ("IN_PROGRESS", entry("status.contract.director.in_progress", Variant::Info, "IN_PROGRESS")),
        ("COMPLETED", entry("status.contract.director.completed", Variant::Success, "COMPLETED")),
    ])
});

// Kinh doanh: gộp các trạng thái chờ hoàn thiện tải hợp đồng
static CONTRACT_SALES: Lazy<StatusTable> = Lazy::new(|| {
    let pending_upload =
        entry("status.contract.sales.pending_upload", Variant::Warning, "PENDING_UPLOAD");
    HashMap::from([
        ("DRAFT", pending_upload),
        ("PENDING_UPLOAD", pending_upload),
        (
            "PENDING_APPROVAL",
            entry("status.contract.sales.pending_approval", Variant::Warning, "PENDING_APPROVAL"),
        ),
        ("APPROVED", entry("status.contract.sales.approved", Variant::Success, "APPROVED")),
        ("REJECTED", entry("status.contract.sales.rejected", Variant::Danger, "REJECTED")),
        (
            "WAITING_PRODUCTION",
            entry("status.contract.sales.waiting_production", Variant::Primary, "WAITING_PRODUCTION"),
        ),
        ("IN_PROGRESS", entry("status.contract.sales.in_progress", Variant::Info, "IN_PROGRESS")),
        ("COMPLETED", entry("status.contract.sales.completed", Variant::Success, "COMPLETED")),
    ])
});

// Khách hàng: gộp thêm {PENDING_APPROVAL, APPROVED} thành một trạng thái
// "chờ sản xuất" trung gian; WAITING_PRODUCTION giữ giá trị lọc riêng
// dù nhãn hiển thị trùng
static CONTRACT_CUSTOMER: Lazy<StatusTable> = Lazy::new(|| {
    let pending_sign =
        entry("status.contract.customer.pending_sign", Variant::Secondary, "PENDING_SIGN");
    let pending_process =
        entry("status.contract.customer.pending_process", Variant::Primary, "PENDING_PROCESS");
    HashMap::from([
        ("DRAFT", pending_sign),
        ("PENDING_UPLOAD", pending_sign),
        ("PENDING_APPROVAL", pending_process),
        ("APPROVED", pending_process),
        (
            "WAITING_PRODUCTION",
            entry("status.contract.customer.waiting_production", Variant::Primary, "WAITING_PRODUCTION"),
        ),
        ("REJECTED", entry("status.contract.customer.rejected", Variant::Danger, "REJECTED")),
        ("IN_PROGRESS", entry("status.contract.customer.in_progress", Variant::Info, "IN_PROGRESS")),
        ("COMPLETED", entry("status.contract.customer.completed", Variant::Success, "COMPLETED")),
    ])
});

// ==========================================
// Bảng kế hoạch sản xuất
// ==========================================

static PLAN_DIRECTOR: Lazy<StatusTable> = Lazy::new(|| {
    HashMap::from([
        ("DRAFT", entry("status.plan.draft", Variant::Secondary, "DRAFT")),
        ("PENDING_APPROVAL", entry("status.plan.pending_approval", Variant::Warning, "PENDING_APPROVAL")),
        ("APPROVED", entry("status.plan.approved", Variant::Success, "APPROVED")),
        ("REJECTED", entry("status.plan.rejected", Variant::Danger, "REJECTED")),
        ("IN_PROGRESS", entry("status.plan.in_progress", Variant::Info, "IN_PROGRESS")),
        ("COMPLETED", entry("status.plan.completed", Variant::Success, "COMPLETED")),
    ])
});

// Phòng kế hoạch: thêm READY_FOR_PLANNING - trạng thái chỉ có ở
// lô sở hữu kế hoạch, không thuộc enum trạng thái của chính kế hoạch
static PLAN_PLANNING: Lazy<StatusTable> = Lazy::new(|| {
    let mut table = PLAN_DIRECTOR.clone();
    table.insert(
        "READY_FOR_PLANNING",
        entry("status.plan.ready_for_planning", Variant::Primary, "READY_FOR_PLANNING"),
    );
    table
});

// ==========================================
// Bảng lô sản xuất
// ==========================================

static LOT_PLANNING: Lazy<StatusTable> = Lazy::new(|| {
    HashMap::from([
        ("PENDING", entry("status.lot.pending", Variant::Secondary, "PENDING")),
        (
            "READY_FOR_PLANNING",
            entry("status.lot.ready_for_planning", Variant::Primary, "READY_FOR_PLANNING"),
        ),
        ("PLANNED", entry("status.lot.planned", Variant::Info, "PLANNED")),
        ("IN_PROGRESS", entry("status.lot.in_progress", Variant::Info, "IN_PROGRESS")),
        ("COMPLETED", entry("status.lot.completed", Variant::Success, "COMPLETED")),
        ("CANCELED", entry("status.lot.canceled", Variant::Dark, "CANCELED")),
    ])
});

// ==========================================
// Bảng lệnh sản xuất (cấp lệnh, không phân vai trò)
// ==========================================
// Dùng làm mức rơi cuối của resolve_order_status

static ORDER_GENERIC: Lazy<StatusTable> = Lazy::new(|| {
    HashMap::from([
        (
            "WAITING_PRODUCTION",
            entry("order.waiting_production", Variant::Primary, "WAITING_PRODUCTION"),
        ),
        ("IN_PROGRESS", entry("stage.in_progress", Variant::Info, "IN_PROGRESS")),
        ("COMPLETED", entry("common.completed", Variant::Success, "COMPLETED")),
        ("ORDER_COMPLETED", entry("common.completed", Variant::Success, "ORDER_COMPLETED")),
    ])
});

// ==========================================
// Chọn bảng theo (loại thực thể, vai trò)
// ==========================================
fn table_for(kind: EntityKind, role: Role) -> Option<&'static StatusTable> {
    match (kind, role) {
        (EntityKind::Rfq, Role::Planning) => Some(&RFQ_PLANNING),
        (EntityKind::Rfq, Role::Sales) => Some(&RFQ_SALES),
        (EntityKind::Rfq, Role::Customer) => Some(&RFQ_CUSTOMER),
        (EntityKind::Quotation, Role::Sales) => Some(&QUOTATION_SALES),
        (EntityKind::Quotation, Role::Customer) => Some(&QUOTATION_CUSTOMER),
        (EntityKind::Contract, Role::Director) => Some(&CONTRACT_DIRECTOR),
        (EntityKind::Contract, Role::Sales) => Some(&CONTRACT_SALES),
        (EntityKind::Contract, Role::Customer) => Some(&CONTRACT_CUSTOMER),
        (EntityKind::ProductionPlan, Role::Director) => Some(&PLAN_DIRECTOR),
        (EntityKind::ProductionPlan, Role::Planning) => Some(&PLAN_PLANNING),
        (EntityKind::ProductionLot, Role::Planning) => Some(&LOT_PLANNING),
        (EntityKind::ProductionOrder, _) => Some(&ORDER_GENERIC),
        _ => None,
    }
}

// ==========================================
// Mức rơi chung: trạng thái không có trong bảng
// ==========================================

/// "SOME_NEW_STATUS" -> "Some New Status"
pub(crate) fn title_case(status: &str) -> String {
    status
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ánh xạ đồng nhất cho trạng thái lạ: hiển thị được nhưng
/// không bản địa hóa, variant trung tính, giữ nguyên giá trị lọc
pub(crate) fn generic_fallback(status: &str) -> StatusBadge {
    StatusBadge::new(title_case(status), Variant::Secondary, status)
}

// ==========================================
// Phân giải trạng thái thực thể
// ==========================================

/// Trả về (nhãn, variant, giá trị lọc) cho một thực thể đơn giản
///
/// # Tham số
/// - kind: loại thực thể
/// - status: chuỗi trạng thái backend (nguyên bản)
/// - ctx: ngữ cảnh bổ sung (phân công RFQ, người tạo báo giá)
/// - role: vai trò đang xem
///
/// Không bao giờ trả lỗi: trạng thái hoặc cặp (kind, role) không có
/// trong bảng rơi về ánh xạ đồng nhất.
pub fn resolve_entity_status(
    kind: EntityKind,
    status: &str,
    ctx: &StatusContext,
    role: Role,
) -> StatusBadge {
    let normalized = status.trim().to_ascii_uppercase();

    // RFQ nhìn từ giám đốc: bỏ qua hẳn trạng thái backend,
    // chỉ quan tâm đã phân công kinh doanh hay chưa
    if kind == EntityKind::Rfq && role == Role::Director {
        return if ctx.has_assigned_sales.unwrap_or(false) {
            StatusBadge::new(
                i18n::t("status.rfq.director.assigned"),
                Variant::Success,
                "ASSIGNED",
            )
        } else {
            StatusBadge::new(
                i18n::t("status.rfq.director.waiting_assignment"),
                Variant::Warning,
                "WAITING_ASSIGNMENT",
            )
        };
    }

    // Báo giá nháp nhìn từ kinh doanh: nháp do phòng kế hoạch tạo
    // nghĩa là kinh doanh vừa nhận được, không phải đang nợ báo giá
    if kind == EntityKind::Quotation && role == Role::Sales && normalized == "DRAFT" {
        return if ctx.quotation_author_role == Some(Role::Planning) {
            StatusBadge::new(
                i18n::t("status.quotation.sales.received"),
                Variant::Info,
                "RECEIVED",
            )
        } else {
            StatusBadge::new(
                i18n::t("status.quotation.sales.waiting_quote"),
                Variant::Warning,
                "WAITING_QUOTE",
            )
        };
    }

    match table_for(kind, role).and_then(|t| t.get(normalized.as_str())) {
        Some(e) => e.badge(),
        None => {
            debug!(kind = %kind, role = %role, status = %status, "trạng thái ngoài bảng, dùng mức rơi chung");
            generic_fallback(status)
        }
    }
}
