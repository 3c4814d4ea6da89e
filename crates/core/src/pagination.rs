//! Pagination clamping for list endpoints.

/// Page size used when the client does not send `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Largest page a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[0, max]`, using `default` when absent.
///
/// `limit=0` is a valid request for an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided skip/offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
