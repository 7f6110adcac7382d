//! Scripted random source for testing without entropy.
//!
//! Replays a fixed list of raw draws, cycling when exhausted.

use crate::ports::RandomSource;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Deterministic RandomSource.
///
/// Each call consumes the next raw value `v` and maps it into the requested
/// range: `low + v mod (high - low + 1)` for ranges, `v mod len` for indices.
/// So `ScriptedSource::new([14, 0, 4])` asks the estimator for jitter `0`
/// (with `low = -14`), the first time-of-day label and the last mood.
pub struct ScriptedSource {
    draws: Vec<u64>,
    cursor: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u64>) -> Self {
        let draws: Vec<u64> = draws.into_iter().collect();
        Self {
            draws: if draws.is_empty() { vec![0] } else { draws },
            cursor: Mutex::new(0),
        }
    }

    fn next_raw(&self) -> u64 {
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        let v = self.draws[*cursor % self.draws.len()];
        *cursor += 1;
        v
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        *self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&self, low: i64, high: i64) -> i64 {
        debug_assert!(low <= high, "inverted range {low}..={high}");
        let span = high.abs_diff(low) + 1;
        low + (self.next_raw() % span) as i64
    }

    fn index(&self, len: usize) -> usize {
        debug_assert!(len > 0, "index over an empty set");
        (self.next_raw() % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_and_cycles() {
        let src = ScriptedSource::new([0, 28, 3]);
        assert_eq!(src.range_inclusive(-14, 14), -14);
        assert_eq!(src.range_inclusive(-14, 14), 14);
        assert_eq!(src.index(4), 3);
        // wraps around
        assert_eq!(src.index(5), 0);
        assert_eq!(src.consumed(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "inverted range")]
    fn test_inverted_range_trips_assert() {
        let src = ScriptedSource::new([5]);
        src.range_inclusive(14, -14);
    }

    #[test]
    fn test_single_value_range() {
        let src = ScriptedSource::new([9, 123]);
        assert_eq!(src.range_inclusive(3, 3), 3);
        assert_eq!(src.range_inclusive(3, 3), 3);
    }

    #[test]
    fn test_empty_script_draws_zero() {
        let src = ScriptedSource::new(Vec::<u64>::new());
        assert_eq!(src.range_inclusive(-3, 3), -3);
        assert_eq!(src.index(7), 0);
    }
}
