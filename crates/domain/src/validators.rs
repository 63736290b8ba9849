/// Maximum hostname length accepted for prefetch (RFC 1035 limit).
const MAX_HOSTNAME_LEN: usize = 253;

/// Normalize a hostname for prefetch intake.
///
/// Returns the trimmed, lowercased hostname, or `None` when the input is
/// useless to the OS resolver (empty, whitespace-only, overlong, or containing
/// whitespace). Callers treat `None` as a silent no-op.
pub fn normalize_hostname(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_HOSTNAME_LEN {
        return None;
    }
    if trimmed.chars().any(|c| c.is_whitespace()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}
