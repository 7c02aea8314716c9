use crate::domain::snapshot::Snapshot;
use crate::domain::values::ids::{CompetitorId, PeriodId};

/// Chance of playing assumed when no availability sample exists.
pub const FULLY_AVAILABLE: u8 = 100;

/// Selects the past gameweeks a player was available for.
///
/// Gameweeks where the player was injured or suspended are skipped rather
/// than counted as zeros, so a lookback window reaches further back
/// instead of being diluted.
#[derive(Clone, Copy)]
pub struct AvailabilityFilter<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> AvailabilityFilter<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Chance of playing in `period`, defaulting to fully available.
    pub fn chance(&self, competitor: CompetitorId, period: PeriodId) -> u8 {
        self.snapshot
            .availability(competitor, period)
            .unwrap_or(FULLY_AVAILABLE)
    }

    /// All gameweeks strictly before `target` in which the player had no
    /// availability sample or a chance of at least `min_availability`,
    /// oldest first.
    pub fn available_periods(
        &self,
        competitor: CompetitorId,
        target: PeriodId,
        min_availability: u8,
    ) -> Vec<PeriodId> {
        self.snapshot
            .periods_before(target)
            .filter(|&period| {
                self.snapshot
                    .availability(competitor, period)
                    .map_or(true, |chance| chance >= min_availability)
            })
            .collect()
    }

    /// The most recent `lookback` available gameweeks, oldest first.
    pub fn window(
        &self,
        competitor: CompetitorId,
        target: PeriodId,
        min_availability: u8,
        lookback: usize,
    ) -> Vec<PeriodId> {
        let mut periods = self.available_periods(competitor, target, min_availability);
        let skip = periods.len().saturating_sub(lookback);
        periods.drain(..skip);
        periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::samples::AvailabilitySample;

    fn snapshot_with_gaps() -> Snapshot {
        let mut snap = Snapshot::new();
        for p in 1..=6 {
            snap.add_period(p);
        }
        for (period, chance) in [(3, 0), (4, 50), (5, 75)] {
            snap.add_availability(&AvailabilitySample {
                competitor_id: 1,
                period_id: period,
                chance,
            });
        }
        snap
    }

    #[test]
    fn test_missing_sample_counts_as_available() {
        let snap = snapshot_with_gaps();
        let f = AvailabilityFilter::new(&snap);
        assert_eq!(f.available_periods(2, 6, 100), vec![1, 2, 3, 4, 5]);
        assert_eq!(f.chance(2, 6), 100);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let snap = snapshot_with_gaps();
        let f = AvailabilityFilter::new(&snap);
        assert_eq!(f.available_periods(1, 6, 75), vec![1, 2, 5]);
        assert_eq!(f.available_periods(1, 6, 50), vec![1, 2, 4, 5]);
        assert_eq!(f.available_periods(1, 6, 0), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_target_and_later_excluded() {
        let snap = snapshot_with_gaps();
        let f = AvailabilityFilter::new(&snap);
        assert_eq!(f.available_periods(1, 3, 0), vec![1, 2]);
        assert!(f.available_periods(1, 1, 0).is_empty());
    }

    #[test]
    fn test_window_skips_gaps() {
        let snap = snapshot_with_gaps();
        let f = AvailabilityFilter::new(&snap);
        // Gameweeks 3 and 4 are below 75%, so the window reaches back to 2.
        assert_eq!(f.window(1, 6, 75, 2), vec![2, 5]);
        assert_eq!(f.window(1, 6, 75, 10), vec![1, 2, 5]);
    }
}
