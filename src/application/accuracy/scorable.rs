//! Selection of forecasts eligible for accuracy scoring.

use std::collections::{BTreeMap, HashSet};

use crate::domain::entities::forecast::RankedForecast;
use crate::domain::values::forecast_source::ForecastSource;
use crate::domain::values::ids::{ForecastId, PeriodId};
use crate::domain::values::position::Position;
use crate::domain::values::scorable_rules::ScorableRules;

/// Ids of the forecasts for `period` that count towards accuracy.
///
/// User forecasts always count. Strategy forecasts count only for their top
/// `K` ranks in each position, with `K` taken from `rules` for `period`.
/// Forecasts for other periods are never selected.
pub fn select_scorable(
    forecasts: &[RankedForecast],
    period: PeriodId,
    rules: &ScorableRules,
) -> HashSet<ForecastId> {
    let mut scorable = HashSet::new();
    let mut strategy_picks: BTreeMap<(&ForecastSource, Position), Vec<&RankedForecast>> =
        BTreeMap::new();

    for forecast in forecasts.iter().filter(|f| f.period_id == period) {
        if forecast.source.is_strategy() {
            strategy_picks
                .entry((&forecast.source, forecast.position))
                .or_default()
                .push(forecast);
        } else {
            scorable.insert(forecast.id.clone());
        }
    }

    for ((_, position), mut picks) in strategy_picks {
        let slots = rules.slots_for(period, position);
        picks.sort_by(|a, b| {
            a.rank
                .cmp(&b.rank)
                .then_with(|| a.competitor_id.cmp(&b.competitor_id))
        });
        scorable.extend(picks.into_iter().take(slots).map(|f| f.id.clone()));
    }

    scorable
}
