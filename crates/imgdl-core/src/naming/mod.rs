//! Naming rules: label sanitization, link token extraction, upload file names.

mod sanitize;
mod token;
mod upload;

pub use sanitize::sanitize_label;
pub use token::{extract_id_token, retrieval_address};
pub use upload::{allowed_extension, secure_upload_name};

/// Resolves a shared-drive link to its direct-download address.
///
/// Returns `None` when the link has no `id=<token>` part.
///
/// # Examples
///
/// - `resolve_reference("https://drive.google.com/open?id=XYZ")` → `Some("https://drive.google.com/uc?export=download&id=XYZ")`
/// - `resolve_reference("https://example.com/photo.png")` → `None`
pub fn resolve_reference(reference: &str) -> Option<String> {
    extract_id_token(reference).map(retrieval_address)
}
