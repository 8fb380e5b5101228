/// Domain suffix and synonym tokens removed from point names.
/// Longer tokens come before any token that is a substring of them.
pub const SYNONYM_TOKENS: &[&str] = &["varmam", "varmum", "kaalam", "kalam", "varma"];

/// Underscore-delimited segments marking the side of a bilateral point.
/// A trailing run of digits is allowed after the marker (`_L1`).
pub const DIRECTION_MARKERS: &[&str] = &["left", "right", "l", "r"];

/// Minimum key length on both sides of a substring fallback match.
pub const MIN_FALLBACK_KEY_LEN: usize = 3;
