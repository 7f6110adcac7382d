//! Estimation use case: target date -> randomized conception estimate.
//!
//! Pure computation; the only dependency is the injected RandomSource.

use crate::domain::{CalendarDate, EstimationResult, Mood, TimeOfDay};
use crate::ports::RandomSource;
use std::sync::Arc;
use tracing::debug;

/// Fixed offset subtracted from the target date before jitter.
pub const GESTATION_OFFSET_DAYS: i64 = 266;

/// Jitter is drawn uniformly from `-JITTER_DAYS..=JITTER_DAYS`.
pub const JITTER_DAYS: i64 = 14;

/// Service for estimating a conception date.
///
/// Draws in a fixed order (jitter, time of day, mood) so a scripted source
/// reproduces a result exactly.
pub struct EstimationService {
    rng: Arc<dyn RandomSource>,
}

impl EstimationService {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Estimate for `target`. Never fails for a valid date.
    pub fn estimate(&self, target: CalendarDate) -> EstimationResult {
        let base = target.add_days(-GESTATION_OFFSET_DAYS);
        let jitter = self.rng.range_inclusive(-JITTER_DAYS, JITTER_DAYS);
        let date = base.add_days(jitter);

        let time_of_day = TimeOfDay::ALL[self.rng.index(TimeOfDay::ALL.len())];
        let mood = Mood::ALL[self.rng.index(Mood::ALL.len())];

        debug!(
            target_date = %target,
            base = %base,
            jitter,
            result = %date,
            %time_of_day,
            %mood,
            "estimated conception date"
        );
        EstimationResult::new(date, time_of_day, mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::{ScriptedSource, StdRngSource};
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn seeded(seed: u64) -> EstimationService {
        EstimationService::new(Arc::new(StdRngSource::seeded(seed)))
    }

    #[test]
    fn test_scripted_zero_jitter() {
        // raw 14 -> jitter 0; index 0 -> morning; index 4 -> magical
        let svc = EstimationService::new(Arc::new(ScriptedSource::new([14, 0, 4])));
        let r = svc.estimate(date(2024, 12, 25));
        assert_eq!(r.date(), date(2024, 4, 3));
        assert_eq!(r.day_of_week(), Weekday::Wed);
        assert_eq!(r.time_of_day(), TimeOfDay::Morning);
        assert_eq!(r.mood(), Mood::Magical);
    }

    #[test]
    fn test_scripted_jitter_extremes() {
        let svc = EstimationService::new(Arc::new(ScriptedSource::new([0, 3, 0, 28, 1, 2])));
        let target = date(2024, 12, 25);

        let earliest = svc.estimate(target);
        assert_eq!(target.days_since(earliest.date()), 280);
        assert_eq!(earliest.date(), date(2024, 3, 20));
        assert_eq!(earliest.time_of_day(), TimeOfDay::Night);
        assert_eq!(earliest.mood(), Mood::Romantic);

        let latest = svc.estimate(target);
        assert_eq!(target.days_since(latest.date()), 252);
        assert_eq!(latest.date(), date(2024, 4, 17));
        assert_eq!(latest.time_of_day(), TimeOfDay::Afternoon);
        assert_eq!(latest.mood(), Mood::Spontaneous);
    }

    #[test]
    fn test_estimate_before_year_one_stays_constructible() {
        let svc = EstimationService::new(Arc::new(ScriptedSource::new([14, 0, 0])));
        let r = svc.estimate(date(1, 1, 1));
        assert_eq!(r.date(), date(0, 4, 10));
        assert_eq!(r.date().long_format(), "April 10, 0000");
        assert_eq!(CalendarDate::try_from(r.date().as_naive()), Ok(r.date()));
    }

    #[test]
    fn test_consumes_three_draws_per_estimate() {
        let src = Arc::new(ScriptedSource::new([1, 2, 3]));
        let svc = EstimationService::new(Arc::clone(&src) as Arc<dyn RandomSource>);
        svc.estimate(date(2000, 1, 1));
        svc.estimate(date(2000, 1, 1));
        assert_eq!(src.consumed(), 6);
    }

    #[test]
    fn test_result_within_window_for_many_targets() {
        let svc = seeded(2024);
        let targets = [
            date(2024, 12, 25),
            date(2024, 2, 29),
            date(2000, 1, 1),
            date(1900, 3, 1),
            date(2100, 12, 31),
            date(1, 1, 1),
            date(9999, 12, 31),
        ];
        for target in targets {
            for _ in 0..200 {
                let r = svc.estimate(target);
                let back = target.days_since(r.date());
                assert!(
                    (GESTATION_OFFSET_DAYS - JITTER_DAYS..=GESTATION_OFFSET_DAYS + JITTER_DAYS)
                        .contains(&back),
                    "{} -> {} ({} days)",
                    target,
                    r.date(),
                    back
                );
                assert_eq!(r.day_of_week(), r.date().as_naive().weekday());
            }
        }
    }

    #[test]
    fn test_labels_drawn_from_fixed_sets_and_all_reachable() {
        let svc = seeded(99);
        let mut times = std::collections::HashSet::new();
        let mut moods = std::collections::HashSet::new();
        for _ in 0..2000 {
            let r = svc.estimate(date(2023, 6, 15));
            assert!(TimeOfDay::ALL.contains(&r.time_of_day()));
            assert!(Mood::ALL.contains(&r.mood()));
            times.insert(r.time_of_day());
            moods.insert(r.mood());
        }
        assert_eq!(times.len(), TimeOfDay::ALL.len());
        assert_eq!(moods.len(), Mood::ALL.len());
    }

    #[test]
    fn test_christmas_2024_window() {
        let svc = seeded(1);
        for _ in 0..500 {
            let r = svc.estimate(date(2024, 12, 25));
            assert!(r.date() >= date(2024, 3, 20) && r.date() <= date(2024, 4, 17));
        }
    }
}
