//! Unique test data built on ULIDs.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use engine_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("player");
/// let b = unique_str("player");
/// assert_ne!(a, b);
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Four distinct player names sharing `prefix`.
pub fn unique_names(prefix: &str) -> [String; 4] {
    std::array::from_fn(|seat| unique_str(&format!("{prefix}{seat}")))
}
