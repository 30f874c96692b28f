//! Shared helpers for the entity factories.

/// Process-wide counter behind `next_id`.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next value of a monotonically increasing counter.
///
/// Factories fold this into usernames, emails, and slot ids so that entities
/// created within one test run never collide on unique columns.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
