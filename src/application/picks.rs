//! Hand-picked forecasts from users.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::entities::forecast::RankedForecast;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_repository::ForecastRepository;
use crate::domain::ports::performance_repository::PerformanceRepository;
use crate::domain::values::forecast_source::ForecastSource;
use crate::domain::values::ids::{CompetitorId, PeriodId};
use crate::domain::values::position::Position;

/// A user's picks for one gameweek, best first within each position.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickSheet {
    pub user: String,
    pub period: PeriodId,
    pub picks: BTreeMap<Position, Vec<CompetitorId>>,
}

pub struct PicksUseCase {
    performance_repo: Arc<dyn PerformanceRepository>,
    forecast_repo: Arc<dyn ForecastRepository>,
}

impl PicksUseCase {
    pub fn new(
        performance_repo: Arc<dyn PerformanceRepository>,
        forecast_repo: Arc<dyn ForecastRepository>,
    ) -> Self {
        Self {
            performance_repo,
            forecast_repo,
        }
    }

    /// Store a pick sheet, replacing everything the user previously picked
    /// for that gameweek.
    pub fn record(&self, sheet: &PickSheet) -> Result<Vec<RankedForecast>, DomainError> {
        let user = sheet.user.trim();
        if user.is_empty() {
            return Err(DomainError::InvalidInput("Pick sheet needs a user".into()));
        }

        let positions: HashMap<CompetitorId, Position> = self
            .performance_repo
            .competitors()?
            .into_iter()
            .map(|c| (c.id, c.position))
            .collect();

        let source = ForecastSource::User(user.to_string());
        let mut forecasts = Vec::new();
        for (&position, competitors) in &sheet.picks {
            let mut seen = HashSet::new();
            for (i, &competitor) in competitors.iter().enumerate() {
                match positions.get(&competitor) {
                    None => {
                        return Err(DomainError::InvalidInput(format!(
                            "Unknown competitor {competitor} in {position} picks"
                        )))
                    }
                    Some(actual) if *actual != position => {
                        return Err(DomainError::InvalidInput(format!(
                            "Competitor {competitor} plays {actual}, not {position}"
                        )))
                    }
                    Some(_) => {}
                }
                if !seen.insert(competitor) {
                    return Err(DomainError::InvalidInput(format!(
                        "Competitor {competitor} picked twice in {position}"
                    )));
                }
                forecasts.push(RankedForecast::new(
                    source.clone(),
                    competitor,
                    sheet.period,
                    position,
                    None,
                    i as u32 + 1,
                ));
            }
        }

        let replaced = self
            .forecast_repo
            .replace_run(&source, sheet.period, None, &forecasts)?;
        info!(user, period = sheet.period, picks = forecasts.len(), replaced, "Pick sheet stored");
        Ok(forecasts)
    }
}
