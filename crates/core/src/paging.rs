//! Pagination clamping shared by the repository layer.

/// Default page size when the caller does not supply one.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;
/// Upper bound on caller-supplied page sizes.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp an optional caller-supplied limit into `[1, MAX_PAGE_LIMIT]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// Clamp an optional caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
