// ==========================================
// Hệ thống ERP dệt may - Tầng engine phân giải trạng thái
// ==========================================
// Vai trò: toàn bộ quy tắc (trạng thái, vai trò) -> hiển thị
// Ràng buộc: hàm thuần túy, không I/O, không bao giờ trả lỗi -
//            trạng thái lạ luôn suy biến về mức rơi chung
// ==========================================

pub mod entity_status;
pub mod order_status;
pub mod rework;
pub mod stage_tables;

// Tái xuất các hàm cốt lõi
pub use entity_status::{resolve_entity_status, StatusContext};
pub use order_status::resolve_order_status;
pub use rework::{resolve_rework_status, severity_badge};
pub use stage_tables::{leader_stage_view, pm_stage_view, qa_stage_action, qa_stage_view};
