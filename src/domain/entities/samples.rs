use crate::domain::values::ids::{CompetitorId, PeriodId};
use crate::domain::values::metric::Metric;
use serde::{Deserialize, Serialize};

/// One statistic for one player in one gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticSample {
    pub competitor_id: CompetitorId,
    pub period_id: PeriodId,
    pub metric: Metric,
    pub value: f64,
}

/// Chance (0–100) that a player takes part in a gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySample {
    pub competitor_id: CompetitorId,
    pub period_id: PeriodId,
    pub chance: u8,
}

/// What a player actually scored in a gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub competitor_id: CompetitorId,
    pub period_id: PeriodId,
    pub value: f64,
}
