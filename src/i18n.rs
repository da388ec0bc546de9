// ==========================================
// Module quốc tế hóa (i18n)
// ==========================================
// Dùng thư viện rust-i18n
// Tiếng Việt là ngôn ngữ gốc kiêm fallback; giao diện hiện
// chỉ phát hành bản tiếng Việt nên locales/ chỉ có vi.yml
// ==========================================
// Lưu ý: macro rust_i18n::i18n! đã khởi tạo trong lib.rs
// ==========================================

/// Lấy ngôn ngữ hiện tại
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Đặt ngôn ngữ
///
/// # Tham số
/// - locale: mã ngôn ngữ (ví dụ "vi")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Dịch thông điệp (không tham số)
///
/// # Ví dụ
/// ```no_run
/// use textile_erp_status::i18n::t;
/// let msg = t("common.unknown_status");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Dịch thông điệp (có tham số)
///
/// # Ví dụ
/// ```no_run
/// use textile_erp_status::i18n::t_with_args;
/// let msg = t_with_args("stage.ready_named", &[("stage", "Dệt")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
