use crate::domain::snapshot::Snapshot;
use crate::domain::values::ids::{CompetitorId, PeriodId};
use crate::domain::values::metric::Metric;

/// Looks up a metric for a player in a gameweek. Missing data resolves to
/// 0.0; it is never an error.
#[derive(Clone, Copy)]
pub struct MetricResolver<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> MetricResolver<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn resolve(&self, competitor: CompetitorId, metric: Metric, period: PeriodId) -> f64 {
        match metric {
            Metric::ExpectedGoalsFor => self
                .snapshot
                .fixture(competitor, period)
                .map_or(0.0, |pair| pair.expected_for),
            Metric::ExpectedGoalsAgainst => self
                .snapshot
                .fixture(competitor, period)
                .map_or(0.0, |pair| pair.expected_against),
            _ => self
                .snapshot
                .statistic(competitor, period, metric)
                .unwrap_or(0.0),
        }
    }
}
