use crate::domain::values::forecast_source::ForecastSource;
use crate::domain::values::ids::{CompetitorId, ForecastId, PeriodId};
use crate::domain::values::position::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranked pick for one player, position and gameweek.
///
/// `accuracy` is `None` until the gameweek has been evaluated, and stays
/// `None` when the player has no recorded outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedForecast {
    pub id: ForecastId,
    pub source: ForecastSource,
    pub competitor_id: CompetitorId,
    pub period_id: PeriodId,
    pub position: Position,
    pub score: Option<f64>,
    pub rank: u32,
    pub accuracy: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl RankedForecast {
    pub fn new(
        source: ForecastSource,
        competitor_id: CompetitorId,
        period_id: PeriodId,
        position: Position,
        score: Option<f64>,
        rank: u32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source,
            competitor_id,
            period_id,
            position,
            score,
            rank,
            accuracy: None,
            created_at: Utc::now(),
        }
    }
}
