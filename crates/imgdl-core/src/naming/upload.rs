//! Upload file names: extension whitelist and safe on-disk name.

/// Fallback when an upload name sanitizes to nothing.
const DEFAULT_UPLOAD_NAME: &str = "upload";

/// Returns the lower-cased extension of `filename` if it is in `allowed`.
///
/// The extension is whatever follows the last `.`; a name without a dot has none.
pub fn allowed_extension(filename: &str, allowed: &[String]) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)).then_some(ext)
}

/// Reduces a client-supplied file name to something safe to join onto the upload dir.
///
/// - Keeps only the last path component (`/` and `\` both count as separators)
/// - Replaces whitespace runs with `_`
/// - Drops everything but ASCII alphanumerics, `_`, `-` and `.`
/// - Strips leading/trailing `.` and `_` so the result is never hidden or `..`
pub fn secure_upload_name(filename: &str) -> String {
    let base = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    let mut out = String::with_capacity(base.len());
    let mut prev_underscore = false;
    for c in base.trim().chars() {
        if c.is_whitespace() {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
            out.push(c);
            prev_underscore = c == '_';
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        DEFAULT_UPLOAD_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
