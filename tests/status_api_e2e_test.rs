// ==========================================
// Kiểm thử đầu-cuối tầng API
// ==========================================
// Mục tiêu: luồng đầy đủ RFQ -> báo giá -> hợp đồng -> lệnh sản
//           xuất -> danh sách lỗi, qua đúng mặt tiền StatusApi
//           với JSON thô như tầng HTTP gửi xuống
// ==========================================

use serde_json::json;
use textile_erp_status::engine::StatusContext;
use textile_erp_status::{ActionKind, ApiError, Role, StatusApi, Variant};

#[test]
fn full_pipeline_per_role() {
    let api = StatusApi::new();

    // 1. RFQ mới gửi: giám đốc thấy "chờ phân công" bất kể trạng thái
    let ctx = StatusContext {
        has_assigned_sales: Some(false),
        ..StatusContext::none()
    };
    let badge = api.entity_badge("rfq", "director", "SENT", &ctx).unwrap();
    assert_eq!(badge.label, "Chờ phân công");

    // 2. RFQ chuyển kế hoạch: khách chỉ thấy "đã tiếp nhận"
    let badge = api
        .entity_badge("rfq", "customer", "FORWARDED_TO_PLANNING", &StatusContext::none())
        .unwrap();
    assert_eq!(badge.value.as_deref(), Some("CONFIRMED"));

    // 3. Báo giá nháp do phòng kế hoạch soạn: kinh doanh thấy "đã nhận"
    let ctx = StatusContext {
        quotation_author_role: Some(Role::Planning),
        ..StatusContext::none()
    };
    let badge = api.entity_badge("quotation", "sales", "DRAFT", &ctx).unwrap();
    assert_eq!(badge.label, "Đã nhận báo giá");

    // 4. Hợp đồng chờ duyệt: hai vai trò, hai nhãn
    let badge = api
        .entity_badge("contract", "director", "PENDING_APPROVAL", &StatusContext::none())
        .unwrap();
    assert_eq!((badge.label.as_str(), badge.variant), ("Chờ duyệt", Variant::Warning));

    let badge = api
        .entity_badge("contract", "customer", "PENDING_APPROVAL", &StatusContext::none())
        .unwrap();
    assert_eq!((badge.label.as_str(), badge.variant), ("Chờ sản xuất", Variant::Primary));

    // 5. Lệnh sản xuất đang dệt: tổ trưởng cập nhật tiến độ
    let order = json!({
        "executionStatus": "IN_PROGRESS",
        "stages": [
            {"stageType": "WARPING", "executionStatus": "QC_PASSED", "stageSequence": 1,
             "progressPercent": 100.0},
            {"stageType": "WEAVING", "executionStatus": "IN_PROGRESS", "stageSequence": 2,
             "progressPercent": 40.0},
            {"stageType": "DYEING", "executionStatus": "PENDING", "stageSequence": 3}
        ]
    });
    let view = api.order_view("leader", &order).unwrap();
    assert_eq!(view.label, "Đang sản xuất");
    assert!(view.has_action(ActionKind::UpdateProgress));

    // 6. Cùng lệnh, KCS chỉ xem
    let view = api.order_view("kcs", &order).unwrap();
    assert_eq!(view.label, "Đang làm");
    assert_eq!(view.actions[0].kind, ActionKind::Detail);

    // 7. Dệt hỏng nặng: nhãn nhúng tên công đoạn
    let order = json!({
        "executionStatus": "IN_PROGRESS",
        "stages": [
            {"stageType": "WARPING", "executionStatus": "QC_PASSED", "stageSequence": 1},
            {"stageType": "WEAVING", "executionStatus": "WAITING_REWORK", "stageSequence": 2,
             "defectSeverity": "MAJOR"}
        ]
    });
    let view = api.order_view("leader", &order).unwrap();
    assert_eq!(view.label, "Dệt lỗi nặng");

    // 8. Lỗi vào danh sách tổ trưởng theo bucket backend gán
    let defect = json!({
        "queueStatus": "PROCESSED",
        "severity": "MAJOR",
        "stageType": "WEAVING",
        "reportedAt": "2026-08-21T02:00:00Z"
    });
    let badge = api.rework_badge(&defect).unwrap();
    assert_eq!(badge.label, "Sẵn sàng xử lý");
    let severity = api.defect_severity_badge(&defect).unwrap().unwrap();
    assert_eq!(severity.label, "Lỗi nặng");
}

#[test]
fn role_aliases_are_canonicalized_once_at_boundary() {
    let api = StatusApi::new();
    let order = json!({
        "executionStatus": "IN_PROGRESS",
        "stages": [{"stageType": "DYEING", "executionStatus": "WAITING", "stageSequence": 3}]
    });

    // "pm" và "production" cùng ra một kết quả
    let a = api.order_view("pm", &order).unwrap();
    let b = api.order_view("production", &order).unwrap();
    assert_eq!(a, b);
    assert!(a.has_action(ActionKind::Start));
}

#[test]
fn boundary_rejects_only_unparseable_role_or_kind() {
    let api = StatusApi::new();

    let err = api.order_view("warehouse", &json!({})).unwrap_err();
    assert!(matches!(err, ApiError::UnknownRole(_)));

    // Trạng thái lạ thì không bao giờ là lỗi
    let badge = api
        .entity_badge("contract", "sales", "BRAND_NEW_STATE", &StatusContext::none())
        .unwrap();
    assert_eq!(badge.label, "Brand New State");
}

#[test]
fn list_rendering_survives_one_malformed_row() {
    let api = StatusApi::new();
    let rows = vec![
        json!({"executionStatus": "WAITING_PRODUCTION"}),
        json!({"executionStatus": "IN_PROGRESS", "stages": 13}),
        json!({"executionStatus": "ORDER_COMPLETED"}),
    ];
    let views = api.order_views("leader", &rows).unwrap();
    assert_eq!(views.len(), 3);
    assert_eq!(views[0].label, "Chờ sản xuất");
    assert_eq!(views[1].label, "Không xác định");
    assert_eq!(views[2].label, "Hoàn thành");
}

#[test]
fn badge_wire_format_matches_renderer_contract() {
    let api = StatusApi::new();
    let badge = api
        .entity_badge("contract", "customer", "PENDING_APPROVAL", &StatusContext::none())
        .unwrap();
    let json = serde_json::to_value(&badge).unwrap();
    assert_eq!(
        json,
        json!({"label": "Chờ sản xuất", "variant": "primary", "value": "PENDING_PROCESS"})
    );

    let order = json!({
        "executionStatus": "IN_PROGRESS",
        "stages": [{"stageType": "DYEING", "executionStatus": "WAITING", "stageSequence": 3}]
    });
    let view = api.order_view("pm", &order).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    let kinds: Vec<&str> = json["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["detail", "start"]);
}
