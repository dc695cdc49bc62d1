//! Uploaded document vocabulary and file-name handling.

/// Known document types.
pub mod document_types {
    pub const CONTRACT: &str = "contract";
    pub const INSURANCE: &str = "insurance";
    pub const ITINERARY: &str = "itinerary";
    pub const PERMISSION_SLIP: &str = "permission_slip";
    pub const INVOICE: &str = "invoice";
    pub const OTHER: &str = "other";

    pub const ALL: &[&str] = &[CONTRACT, INSURANCE, ITINERARY, PERMISSION_SLIP, INVOICE, OTHER];
}

/// Maximum length of a stored file name (excluding the unique prefix).
const MAX_FILE_NAME_LEN: usize = 120;

/// Reduce a client-supplied file name to a safe single path component.
///
/// Directory parts are dropped, anything outside `[A-Za-z0-9._-]` becomes `_`,
/// leading dots are removed and the result is truncated. Returns `"upload"`
/// when nothing usable remains.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    let truncated: String = trimmed.chars().take(MAX_FILE_NAME_LEN).collect();
    if truncated.is_empty() {
        "upload".to_string()
    } else {
        truncated
    }
}
