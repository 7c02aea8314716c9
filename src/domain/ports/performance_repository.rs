use crate::domain::entities::competitor::Competitor;
use crate::domain::entities::dataset::Dataset;
use crate::domain::error::DomainError;
use crate::domain::snapshot::{PeriodOutcomes, Snapshot};
use crate::domain::values::ids::PeriodId;

/// Statistic, fixture, availability and outcome stores.
///
/// Writes are upserts: each key (player/gameweek/metric for statistics,
/// player/gameweek otherwise) holds at most one value.
pub trait PerformanceRepository: Send + Sync {
    /// Upsert every row of `dataset` atomically: either all of it is
    /// written or none of it.
    fn import(&self, dataset: &Dataset) -> Result<(), DomainError>;

    fn competitors(&self) -> Result<Vec<Competitor>, DomainError>;

    /// Everything needed to score players for `target`: all competitors,
    /// statistics from earlier gameweeks, and fixtures and availability up
    /// to and including `target`.
    fn snapshot(&self, target: PeriodId) -> Result<Snapshot, DomainError>;

    fn outcomes(&self, period: PeriodId) -> Result<PeriodOutcomes, DomainError>;
}
