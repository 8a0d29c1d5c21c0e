//! Identifier extraction from shared-drive links.

use regex::Regex;
use std::sync::OnceLock;

/// Base of the direct-download address.
const DIRECT_DOWNLOAD_BASE: &str = "https://drive.google.com/uc";

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"id=([A-Za-z0-9_-]+)").expect("static regex"))
}

/// Returns the first `id=<token>` token found anywhere in `reference`.
///
/// The token alphabet is ASCII alphanumerics plus `-` and `_`; the match stops
/// at the first character outside it (`&`, `/`, `#`, ...).
pub fn extract_id_token(reference: &str) -> Option<&str> {
    id_pattern()
        .captures(reference)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Builds the address that asks the drive service for the raw file.
pub fn retrieval_address(token: &str) -> String {
    url::Url::parse_with_params(DIRECT_DOWNLOAD_BASE, &[("export", "download"), ("id", token)])
        .map(String::from)
        .unwrap_or_else(|_| format!("{DIRECT_DOWNLOAD_BASE}?export=download&id={token}"))
}
