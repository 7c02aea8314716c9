//! Composite player scoring.
//!
//! [`PlayerScorer`] turns a [`StrategyConfig`] and a [`Snapshot`] into a
//! single number per player. It is shared by every ranking path (one
//! position or the whole squad), so all rankings for a run score players
//! identically.
//!
//! The score is built in three steps:
//!
//! 1. each performance term adds `weight × recency-weighted average` of its
//!    metric over the player's most recent available gameweeks
//! 2. each fixture term adds `weight × metric` for the target gameweek
//! 3. an availability term scales the total by `1 − weight × (1 − chance/100)`
//!    and, for a player with no chance of playing, subtracts `1000 × weight`
//!
//! Scores are unbounded and only comparable within one config.

use serde::Serialize;

use crate::application::scoring::availability_filter::AvailabilityFilter;
use crate::application::scoring::metric_resolver::MetricResolver;
use crate::domain::snapshot::Snapshot;
use crate::domain::values::ids::{CompetitorId, PeriodId};
use crate::domain::values::metric::Metric;
use crate::domain::values::strategy_config::{AvailabilityTerm, PerformanceTerm, StrategyConfig};

/// Points subtracted (per unit of availability weight) from a player who
/// is certain to miss the gameweek.
pub const UNAVAILABLE_PENALTY: f64 = 1000.0;

#[derive(Debug, Clone, Serialize)]
pub struct TermContribution {
    pub metric: Metric,
    /// Weighted average (performance) or raw value (fixture) before the
    /// term weight is applied.
    pub value: f64,
    pub contribution: f64,
    /// Gameweeks averaged over. Empty for fixture terms.
    pub periods: Vec<PeriodId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub competitor_id: CompetitorId,
    pub performance: Vec<TermContribution>,
    pub fixture: Vec<TermContribution>,
    pub chance: Option<u8>,
    pub multiplier: f64,
    pub penalty: f64,
    pub total: f64,
}

pub struct PlayerScorer<'a> {
    resolver: MetricResolver<'a>,
    filter: AvailabilityFilter<'a>,
}

impl<'a> PlayerScorer<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            resolver: MetricResolver::new(snapshot),
            filter: AvailabilityFilter::new(snapshot),
        }
    }

    pub fn score(&self, competitor: CompetitorId, config: &StrategyConfig, target: PeriodId) -> f64 {
        self.breakdown(competitor, config, target).total
    }

    /// Score a player and keep every intermediate value.
    pub fn breakdown(
        &self,
        competitor: CompetitorId,
        config: &StrategyConfig,
        target: PeriodId,
    ) -> ScoreBreakdown {
        let mut total = 0.0;

        let performance: Vec<TermContribution> = config
            .performance
            .iter()
            .map(|term| self.performance_term(competitor, term, target))
            .collect();
        total += performance.iter().map(|t| t.contribution).sum::<f64>();

        let fixture: Vec<TermContribution> = config
            .fixture
            .iter()
            .map(|term| {
                let value = self.resolver.resolve(competitor, term.metric, target);
                TermContribution {
                    metric: term.metric,
                    value,
                    contribution: value * term.weight,
                    periods: Vec::new(),
                }
            })
            .collect();
        total += fixture.iter().map(|t| t.contribution).sum::<f64>();

        let (chance, multiplier, penalty) = match &config.availability {
            Some(term) => {
                let chance = self.filter.chance(competitor, target);
                let (multiplier, penalty) = availability_adjustment(term, chance);
                (Some(chance), multiplier, penalty)
            }
            None => (None, 1.0, 0.0),
        };
        total = total * multiplier - penalty;

        ScoreBreakdown {
            competitor_id: competitor,
            performance,
            fixture,
            chance,
            multiplier,
            penalty,
            total,
        }
    }

    fn performance_term(
        &self,
        competitor: CompetitorId,
        term: &PerformanceTerm,
        target: PeriodId,
    ) -> TermContribution {
        let periods = self
            .filter
            .window(competitor, target, term.min_availability(), term.lookback);

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (index, &period) in periods.iter().enumerate() {
            let w = term.recency.weight(index);
            weighted_sum += self.resolver.resolve(competitor, term.metric, period) * w;
            weight_total += w;
        }
        let value = if weight_total > 0.0 {
            weighted_sum / weight_total
        } else {
            0.0
        };

        TermContribution {
            metric: term.metric,
            value,
            contribution: value * term.weight,
            periods,
        }
    }
}

/// `(multiplier, penalty)` for a chance of playing.
fn availability_adjustment(term: &AvailabilityTerm, chance: u8) -> (f64, f64) {
    let ratio = f64::from(chance) / 100.0;
    let multiplier = 1.0 - term.weight * (1.0 - ratio);
    let penalty = if chance == 0 {
        UNAVAILABLE_PENALTY * term.weight
    } else {
        0.0
    };
    (multiplier, penalty)
}
