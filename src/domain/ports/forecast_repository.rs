use crate::domain::entities::forecast::RankedForecast;
use crate::domain::error::DomainError;
use crate::domain::values::forecast_source::ForecastSource;
use crate::domain::values::ids::{ForecastId, PeriodId};
use crate::domain::values::position::Position;

#[derive(Debug, Clone, Default)]
pub struct ForecastFilter {
    pub period: Option<PeriodId>,
    pub position: Option<Position>,
    pub source: Option<ForecastSource>,
    pub limit: Option<usize>,
}

pub trait ForecastRepository: Send + Sync {
    /// Delete every forecast `source` made for `period` (restricted to
    /// `position` when given) and insert `forecasts` in their place, in one
    /// transaction. Returns the number of rows removed.
    fn replace_run(
        &self,
        source: &ForecastSource,
        period: PeriodId,
        position: Option<Position>,
        forecasts: &[RankedForecast],
    ) -> Result<usize, DomainError>;

    /// Ordered by source, position, then rank.
    fn list(&self, filter: &ForecastFilter) -> Result<Vec<RankedForecast>, DomainError>;

    fn get(&self, id: &str) -> Result<Option<RankedForecast>, DomainError>;

    /// Apply accuracy updates in one transaction. `None` clears a value.
    fn set_accuracies(&self, updates: &[(ForecastId, Option<f64>)]) -> Result<(), DomainError>;
}
