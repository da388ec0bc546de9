// ==========================================
// Hệ thống ERP dệt may - Hiển thị hàng đợi xử lý lỗi
// ==========================================
// Vai trò: hiển thị bucket hàng đợi mà backend đã gán cho
//          từng báo cáo lỗi trong danh sách của tổ trưởng
// Ràng buộc: quy tắc xếp hàng (lỗi nào lên "lượt kế tiếp" khi
//            tài nguyên rảnh) thuộc backend - không mô phỏng lại
// ==========================================

use crate::domain::badge::StatusBadge;
use crate::domain::defect::DefectReportDto;
use crate::domain::types::{DefectSeverity, ReworkQueueStatus, Variant};
use crate::engine::entity_status::generic_fallback;
use crate::i18n;

/// Trạng thái hiển thị của một báo cáo lỗi trong danh sách
///
/// Trạng thái này KHÔNG phải trường status của bản thân lỗi:
/// nó phụ thuộc thứ tự ưu tiên so với các lỗi khác cùng tranh
/// một công đoạn, và backend đã quyết định sẵn.
pub fn resolve_rework_status(defect: &DefectReportDto) -> StatusBadge {
    let Some(queue) = defect.queue_status() else {
        return generic_fallback(&defect.queue_status);
    };

    let (key, variant) = match queue {
        ReworkQueueStatus::Pending => ("rework.pending", Variant::Secondary),
        ReworkQueueStatus::Processed => ("rework.processed", Variant::Primary),
        ReworkQueueStatus::Waiting => ("rework.waiting", Variant::Warning),
        ReworkQueueStatus::InProgress => ("rework.in_progress", Variant::Info),
        ReworkQueueStatus::Resolved => ("rework.resolved", Variant::Success),
    };
    StatusBadge::new(i18n::t(key), variant, queue.as_str())
}

/// Badge mức độ lỗi cho cột riêng trong danh sách
pub fn severity_badge(severity: DefectSeverity) -> StatusBadge {
    match severity {
        DefectSeverity::Minor => {
            StatusBadge::new(i18n::t("severity.minor"), Variant::Warning, "MINOR")
        }
        DefectSeverity::Major => {
            StatusBadge::new(i18n::t("severity.major"), Variant::Danger, "MAJOR")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defect(queue: &str) -> DefectReportDto {
        DefectReportDto {
            queue_status: queue.to_string(),
            severity: None,
            stage_type: None,
            reported_at: None,
        }
    }

    #[test]
    fn test_all_queue_buckets() {
        let cases = [
            ("PENDING", "Chờ kỹ thuật xử lý", Variant::Secondary),
            ("PROCESSED", "Sẵn sàng xử lý", Variant::Primary),
            ("WAITING", "Chờ đến lượt", Variant::Warning),
            ("IN_PROGRESS", "Đang xử lý", Variant::Info),
            ("RESOLVED", "Đã xử lý", Variant::Success),
        ];
        for (status, label, variant) in cases {
            let badge = resolve_rework_status(&defect(status));
            assert_eq!(badge.label, label);
            assert_eq!(badge.variant, variant);
            assert_eq!(badge.value.as_deref(), Some(status));
        }
    }

    #[test]
    fn test_unknown_bucket_degrades() {
        let badge = resolve_rework_status(&defect("ESCALATED"));
        assert_eq!(badge.label, "Escalated");
        assert_eq!(badge.variant, Variant::Secondary);
    }

    #[test]
    fn test_severity_badges() {
        let minor = severity_badge(DefectSeverity::Minor);
        assert_eq!(minor.label, "Lỗi nhẹ");
        assert_eq!(minor.variant, Variant::Warning);

        let major = severity_badge(DefectSeverity::Major);
        assert_eq!(major.label, "Lỗi nặng");
        assert_eq!(major.variant, Variant::Danger);
    }
}
