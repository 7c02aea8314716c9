//! Percentile accuracy of a single forecast.
//!
//! A pick is compared against what its position's peers actually scored.
//! The other players the same source picked in that position are left out
//! of the peer pool, so a source is never marked down for its own picks
//! beating each other. Distinct realized values are ranked best first and
//! the pick's rank is mapped linearly onto `[0, 1]`: the best value scores
//! 1.0 and the worst 0.0.

use std::collections::HashSet;

use crate::domain::entities::forecast::RankedForecast;
use crate::domain::snapshot::PeriodOutcomes;
use crate::domain::values::ids::CompetitorId;

/// Accuracy of `forecast` in `[0, 1]`, or `None` when the forecasted player
/// has no recorded outcome. A pool with fewer than two distinct values
/// cannot discriminate and scores 0.0.
pub fn evaluate_accuracy(
    forecast: &RankedForecast,
    peer_forecasts: &[RankedForecast],
    outcomes: &PeriodOutcomes,
) -> Option<f64> {
    let own_value = outcomes.value(forecast.competitor_id)?;

    let excluded: HashSet<CompetitorId> = peer_forecasts
        .iter()
        .filter(|p| {
            p.source == forecast.source
                && p.position == forecast.position
                && p.period_id == forecast.period_id
                && p.competitor_id != forecast.competitor_id
        })
        .map(|p| p.competitor_id)
        .collect();

    let mut pool: Vec<f64> = outcomes
        .in_position(forecast.position)
        .filter(|(id, _)| !excluded.contains(id))
        .map(|(_, value)| value)
        .collect();
    pool.push(own_value);

    let unique = unique_descending(pool);
    if unique.len() <= 1 {
        return Some(0.0);
    }

    let rank = unique.iter().filter(|v| **v > own_value).count() + 1;
    let size = unique.len() as f64;
    Some((size - rank as f64) / (size - 1.0))
}

fn unique_descending(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| b.total_cmp(a));
    values.dedup();
    values
}
