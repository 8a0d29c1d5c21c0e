//! Label → output file name.

/// Sanitizes a human-readable label into the base name of an output file.
///
/// - Trims surrounding whitespace
/// - Replaces every whitespace run with a single `_`
/// - Drops everything that is not ASCII alphanumeric, `_`, `-` or `.`
/// - Upper-cases the result
///
/// The output only contains `[A-Z0-9_.-]` and sanitizing it again is a no-op.
/// Distinct labels may collide (`"a b"` and `"A_B"`); nothing here detects that.
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_whitespace = false;

    for c in label.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
            out.push(c.to_ascii_uppercase());
        }
    }

    out
}
