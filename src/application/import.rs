//! Bulk load of a JSON dataset into the performance stores.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

pub use crate::domain::entities::dataset::Dataset;
use crate::domain::error::DomainError;
use crate::domain::ports::performance_repository::PerformanceRepository;

#[derive(Debug, Default, Serialize)]
pub struct ImportSummary {
    pub competitors: usize,
    pub statistics: usize,
    pub matches: usize,
    pub availability: usize,
    pub outcomes: usize,
}

pub struct ImportUseCase {
    repo: Arc<dyn PerformanceRepository>,
}

impl ImportUseCase {
    pub fn new(repo: Arc<dyn PerformanceRepository>) -> Self {
        Self { repo }
    }

    /// Validate the whole dataset, then write it in one transaction. A
    /// rejected or failed import writes nothing.
    pub fn execute(&self, dataset: &Dataset) -> Result<ImportSummary, DomainError> {
        validate(dataset)?;
        self.repo.import(dataset)?;

        let summary = ImportSummary {
            competitors: dataset.competitors.len(),
            statistics: dataset.statistics.len(),
            matches: dataset.matches.len(),
            availability: dataset.availability.len(),
            outcomes: dataset.outcomes.len(),
        };
        info!(?summary, "Dataset imported");
        Ok(summary)
    }
}

fn validate(dataset: &Dataset) -> Result<(), DomainError> {
    for s in &dataset.statistics {
        if !s.value.is_finite() {
            return Err(DomainError::InvalidInput(format!(
                "Non-finite {} for competitor {} in period {}",
                s.metric, s.competitor_id, s.period_id
            )));
        }
    }
    for m in &dataset.matches {
        if !m.home_expected.is_finite() || !m.away_expected.is_finite() {
            return Err(DomainError::InvalidInput(format!(
                "Non-finite expected goals for match {} v {} in period {}",
                m.home_team, m.away_team, m.period_id
            )));
        }
        if m.home_team == m.away_team {
            return Err(DomainError::InvalidInput(format!(
                "Team {} cannot play itself in period {}",
                m.home_team, m.period_id
            )));
        }
    }
    for a in &dataset.availability {
        if a.chance > 100 {
            return Err(DomainError::InvalidInput(format!(
                "Availability for competitor {} in period {} must be 0-100, got {}",
                a.competitor_id, a.period_id, a.chance
            )));
        }
    }
    for o in &dataset.outcomes {
        if !o.value.is_finite() {
            return Err(DomainError::InvalidInput(format!(
                "Non-finite outcome for competitor {} in period {}",
                o.competitor_id, o.period_id
            )));
        }
    }
    Ok(())
}
