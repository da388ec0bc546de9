// ==========================================
// Hệ thống ERP dệt may - Định nghĩa kiểu miền
// ==========================================
// Vai trò xem, loại thực thể, trạng thái công đoạn, mức độ lỗi
// Quy ước chuỗi: SCREAMING_SNAKE_CASE (khớp backend)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Vai trò xem (Role)
// ==========================================
// Mỗi vai trò có bảng nhãn riêng; chuẩn hóa chuỗi một lần
// duy nhất tại biên API, bên trong chỉ dùng enum đóng
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,          // Khách hàng
    Sales,             // Nhân viên kinh doanh
    Director,          // Giám đốc
    Planning,          // Phòng kế hoạch
    ProductionManager, // Quản đốc sản xuất
    Leader,            // Tổ trưởng
    Qa,                // KCS / kiểm tra chất lượng
}

impl Role {
    /// Chuẩn hóa chuỗi vai trò từ biên ngoài
    ///
    /// Chấp nhận các bí danh lịch sử mà frontend từng dùng
    /// ("pm"/"production", "kcs"/"inspector", ...), không phân biệt hoa thường.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "sales" => Some(Role::Sales),
            "director" => Some(Role::Director),
            "planning" => Some(Role::Planning),
            "production" | "pm" | "production_manager" | "production-manager" => {
                Some(Role::ProductionManager)
            }
            "leader" => Some(Role::Leader),
            "qa" | "kcs" | "inspector" | "technical" => Some(Role::Qa),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Sales => "SALES",
            Role::Director => "DIRECTOR",
            Role::Planning => "PLANNING",
            Role::ProductionManager => "PRODUCTION_MANAGER",
            Role::Leader => "LEADER",
            Role::Qa => "QA",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Loại thực thể (Entity Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Rfq,             // Yêu cầu báo giá
    Quotation,       // Báo giá
    Contract,        // Hợp đồng
    ProductionPlan,  // Kế hoạch sản xuất
    ProductionLot,   // Lô sản xuất
    ProductionOrder, // Lệnh sản xuất
}

impl EntityKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "rfq" => Some(EntityKind::Rfq),
            "quotation" => Some(EntityKind::Quotation),
            "contract" => Some(EntityKind::Contract),
            "production_plan" | "productionplan" | "plan" => Some(EntityKind::ProductionPlan),
            "production_lot" | "productionlot" | "lot" => Some(EntityKind::ProductionLot),
            "production_order" | "productionorder" | "order" => Some(EntityKind::ProductionOrder),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Rfq => "RFQ",
            EntityKind::Quotation => "QUOTATION",
            EntityKind::Contract => "CONTRACT",
            EntityKind::ProductionPlan => "PRODUCTION_PLAN",
            EntityKind::ProductionLot => "PRODUCTION_LOT",
            EntityKind::ProductionOrder => "PRODUCTION_ORDER",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Nhãn nhấn mạnh hiển thị (Variant)
// ==========================================
// Tập đóng 7 giá trị; tầng render ánh xạ thẳng sang màu badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Dark,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Success => "success",
            Variant::Danger => "danger",
            Variant::Warning => "warning",
            Variant::Info => "info",
            Variant::Dark => "dark",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Loại công đoạn (Stage Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageType {
    Warping,   // Mắc sợi
    Weaving,   // Dệt
    Dyeing,    // Nhuộm (gia công ngoài, chạy song song)
    Cutting,   // Cắt
    Hemming,   // May viền
    Packaging, // Đóng gói
}

impl StageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WARPING" => Some(StageType::Warping),
            "WEAVING" => Some(StageType::Weaving),
            "DYEING" => Some(StageType::Dyeing),
            "CUTTING" => Some(StageType::Cutting),
            "HEMMING" => Some(StageType::Hemming),
            "PACKAGING" => Some(StageType::Packaging),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StageType::Warping => "WARPING",
            StageType::Weaving => "WEAVING",
            StageType::Dyeing => "DYEING",
            StageType::Cutting => "CUTTING",
            StageType::Hemming => "HEMMING",
            StageType::Packaging => "PACKAGING",
        }
    }

    /// Khóa i18n của tên công đoạn
    pub fn name_key(&self) -> &'static str {
        match self {
            StageType::Warping => "stage_type.warping",
            StageType::Weaving => "stage_type.weaving",
            StageType::Dyeing => "stage_type.dyeing",
            StageType::Cutting => "stage_type.cutting",
            StageType::Hemming => "stage_type.hemming",
            StageType::Packaging => "stage_type.packaging",
        }
    }

    /// Tên công đoạn hiển thị ("Dệt", "Nhuộm", ...)
    pub fn display_name(&self) -> String {
        crate::i18n::t(self.name_key())
    }
}

impl fmt::Display for StageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Trạng thái thực thi công đoạn (Stage Execution Status)
// ==========================================
// PAUSED không do backend sinh trong executionStatus mà là
// ghi đè từ trường status tự do; xem ProductionStageDto::effective_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageExecStatus {
    Pending,
    Waiting,
    Ready,
    ReadyToProduce,
    InProgress,
    Paused,
    WaitingQc,
    QcInProgress,
    QcPassed,
    QcFailed,
    WaitingRework,
    ReworkInProgress,
    Completed,
    ReadySupplementary,
    WaitingSupplementary,
    InSupplementary,
    SupplementaryCreated,
}

impl StageExecStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "WAITING" => Some(Self::Waiting),
            "READY" => Some(Self::Ready),
            "READY_TO_PRODUCE" => Some(Self::ReadyToProduce),
            "IN_PROGRESS" => Some(Self::InProgress),
            "PAUSED" => Some(Self::Paused),
            "WAITING_QC" => Some(Self::WaitingQc),
            "QC_IN_PROGRESS" => Some(Self::QcInProgress),
            "QC_PASSED" => Some(Self::QcPassed),
            "QC_FAILED" => Some(Self::QcFailed),
            "WAITING_REWORK" => Some(Self::WaitingRework),
            "REWORK_IN_PROGRESS" => Some(Self::ReworkInProgress),
            "COMPLETED" => Some(Self::Completed),
            "READY_SUPPLEMENTARY" => Some(Self::ReadySupplementary),
            "WAITING_SUPPLEMENTARY" => Some(Self::WaitingSupplementary),
            "IN_SUPPLEMENTARY" => Some(Self::InSupplementary),
            "SUPPLEMENTARY_CREATED" => Some(Self::SupplementaryCreated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Waiting => "WAITING",
            Self::Ready => "READY",
            Self::ReadyToProduce => "READY_TO_PRODUCE",
            Self::InProgress => "IN_PROGRESS",
            Self::Paused => "PAUSED",
            Self::WaitingQc => "WAITING_QC",
            Self::QcInProgress => "QC_IN_PROGRESS",
            Self::QcPassed => "QC_PASSED",
            Self::QcFailed => "QC_FAILED",
            Self::WaitingRework => "WAITING_REWORK",
            Self::ReworkInProgress => "REWORK_IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::ReadySupplementary => "READY_SUPPLEMENTARY",
            Self::WaitingSupplementary => "WAITING_SUPPLEMENTARY",
            Self::InSupplementary => "IN_SUPPLEMENTARY",
            Self::SupplementaryCreated => "SUPPLEMENTARY_CREATED",
        }
    }

    /// Nhóm "sẵn sàng/chờ bắt đầu" (READY / READY_TO_PRODUCE / WAITING)
    pub fn is_ready_family(&self) -> bool {
        matches!(self, Self::Ready | Self::ReadyToProduce | Self::Waiting)
    }

    /// Công đoạn đang hoạt động: chưa xong, không chờ lượt
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Pending | Self::Completed | Self::QcPassed)
    }
}

impl fmt::Display for StageExecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Mức độ lỗi (Defect Severity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefectSeverity {
    Minor, // Lỗi nhẹ
    Major, // Lỗi nặng
}

impl DefectSeverity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MINOR" => Some(Self::Minor),
            "MAJOR" => Some(Self::Major),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
        }
    }
}

impl fmt::Display for DefectSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Trạng thái hàng đợi xử lý lỗi (Rework Queue Status)
// ==========================================
// Backend sở hữu quy tắc xếp hàng; tầng này chỉ hiển thị
// đúng bucket được gán, không mô phỏng hàng đợi phía client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReworkQueueStatus {
    Pending,    // Kỹ thuật chưa bàn giao
    Processed,  // Đã bàn giao, sẵn sàng cho tổ trưởng
    Waiting,    // Đã bàn giao nhưng lỗi khác đang chiếm công đoạn
    InProgress, // Đang xử lý
    Resolved,   // Đã xử lý xong
}

impl ReworkQueueStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "PROCESSED" => Some(Self::Processed),
            "WAITING" => Some(Self::Waiting),
            "IN_PROGRESS" => Some(Self::InProgress),
            "RESOLVED" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processed => "PROCESSED",
            Self::Waiting => "WAITING",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
        }
    }
}

impl fmt::Display for ReworkQueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Loại hành động trên danh sách (Action Kind)
// ==========================================
// Tuần tự hóa kebab-case ("update-progress") khớp tầng render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Detail,
    Start,
    UpdateProgress,
    Rework,
    PauseAndFix,
    Inspect,
    StartSupplementary,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::Start => "start",
            Self::UpdateProgress => "update-progress",
            Self::Rework => "rework",
            Self::PauseAndFix => "pause-and-fix",
            Self::Inspect => "inspect",
            Self::StartSupplementary => "start-supplementary",
        }
    }

    /// Khóa i18n của nhãn nút mặc định
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Detail => "action.detail",
            Self::Start => "action.start",
            Self::UpdateProgress => "action.update_progress",
            Self::Rework => "action.rework",
            Self::PauseAndFix => "action.pause_and_fix",
            Self::Inspect => "action.inspect",
            Self::StartSupplementary => "action.start_supplementary",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_aliases() {
        assert_eq!(Role::parse("pm"), Some(Role::ProductionManager));
        assert_eq!(Role::parse("Production"), Some(Role::ProductionManager));
        assert_eq!(Role::parse("KCS"), Some(Role::Qa));
        assert_eq!(Role::parse("inspector"), Some(Role::Qa));
        assert_eq!(Role::parse("shipper"), None);
    }

    #[test]
    fn test_entity_kind_aliases() {
        assert_eq!(EntityKind::parse("production-plan"), Some(EntityKind::ProductionPlan));
        assert_eq!(EntityKind::parse("lot"), Some(EntityKind::ProductionLot));
        assert_eq!(EntityKind::parse("invoice"), None);
    }

    #[test]
    fn test_stage_exec_status_roundtrip() {
        for s in [
            "PENDING",
            "READY_TO_PRODUCE",
            "QC_IN_PROGRESS",
            "SUPPLEMENTARY_CREATED",
        ] {
            let parsed = StageExecStatus::parse(s).unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert_eq!(StageExecStatus::parse("SHIPPED"), None);
    }

    #[test]
    fn test_active_family() {
        assert!(!StageExecStatus::Pending.is_active());
        assert!(!StageExecStatus::QcPassed.is_active());
        assert!(!StageExecStatus::Completed.is_active());
        assert!(StageExecStatus::WaitingQc.is_active());
        assert!(StageExecStatus::Ready.is_ready_family());
        assert!(!StageExecStatus::InProgress.is_ready_family());
    }
}
