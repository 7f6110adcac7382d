//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

/// Source of uniform random draws.
///
/// Production wires an OS-seeded generator; tests inject a seeded or scripted
/// source so estimates are reproducible.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in the closed range `low..=high`. Requires `low <= high`.
    fn range_inclusive(&self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`. Requires `len > 0`.
    fn index(&self, len: usize) -> usize;
}
