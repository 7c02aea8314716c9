//! Evaluation use case: score the accuracy of every forecast for a gameweek
//! once its outcomes are in.
//!
//! Re-running an evaluation is safe. Scorable forecasts get the same
//! accuracy again, and forecasts that are no longer scorable (for example
//! after a strategy re-run pushed them out of the top slots) have any old
//! accuracy cleared.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::application::accuracy::evaluator::evaluate_accuracy;
use crate::application::accuracy::scorable::select_scorable;
use crate::domain::entities::forecast::RankedForecast;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_repository::{ForecastFilter, ForecastRepository};
use crate::domain::ports::performance_repository::PerformanceRepository;
use crate::domain::values::forecast_source::ForecastSource;
use crate::domain::values::ids::{ForecastId, PeriodId};
use crate::domain::values::scorable_rules::ScorableRules;

#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub period: PeriodId,
    pub forecasts: usize,
    pub scorable: usize,
    /// Scorable forecasts that received an accuracy value.
    pub evaluated: usize,
    /// Scorable forecasts whose player has no recorded outcome.
    pub unknown: usize,
    /// Non-scorable forecasts that had a stale accuracy removed.
    pub cleared: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub source: ForecastSource,
    pub evaluated: usize,
    pub mean_accuracy: f64,
}

pub struct EvaluationUseCase {
    performance_repo: Arc<dyn PerformanceRepository>,
    forecast_repo: Arc<dyn ForecastRepository>,
    rules: ScorableRules,
}

impl EvaluationUseCase {
    pub fn new(
        performance_repo: Arc<dyn PerformanceRepository>,
        forecast_repo: Arc<dyn ForecastRepository>,
        rules: ScorableRules,
    ) -> Self {
        Self {
            performance_repo,
            forecast_repo,
            rules,
        }
    }

    pub fn execute(&self, period: PeriodId) -> Result<EvaluationReport, DomainError> {
        let forecasts = self.forecast_repo.list(&ForecastFilter {
            period: Some(period),
            ..Default::default()
        })?;
        let outcomes = self.performance_repo.outcomes(period)?;
        if outcomes.is_empty() {
            warn!(period, "No outcomes recorded; every scorable forecast stays unknown");
        }

        let scorable_ids = select_scorable(&forecasts, period, &self.rules);
        let scorable: Vec<&RankedForecast> = forecasts
            .iter()
            .filter(|f| scorable_ids.contains(&f.id))
            .collect();
        // Only scorable picks exclude peers from each other's pools.
        let peers: Vec<RankedForecast> = scorable.iter().map(|f| (*f).clone()).collect();

        let results: Vec<(ForecastId, Option<f64>)> = scorable
            .par_iter()
            .map(|f| (f.id.clone(), evaluate_accuracy(f, &peers, &outcomes)))
            .collect();

        let mut updates: Vec<(ForecastId, Option<f64>)> = Vec::new();
        let mut unknown = 0usize;
        for (id, accuracy) in results {
            match accuracy {
                Some(value) => updates.push((id, Some(value))),
                None => unknown += 1,
            }
        }
        let evaluated = updates.len();

        let mut cleared = 0usize;
        for f in &forecasts {
            if !scorable_ids.contains(&f.id) && f.accuracy.is_some() {
                updates.push((f.id.clone(), None));
                cleared += 1;
            }
        }

        self.forecast_repo.set_accuracies(&updates)?;

        info!(
            period,
            forecasts = forecasts.len(),
            scorable = scorable_ids.len(),
            evaluated,
            unknown,
            cleared,
            "Evaluation complete"
        );

        Ok(EvaluationReport {
            period,
            forecasts: forecasts.len(),
            scorable: scorable_ids.len(),
            evaluated,
            unknown,
            cleared,
        })
    }

    /// Mean accuracy per source over its evaluated forecasts, best first.
    pub fn leaderboard(&self, period: PeriodId) -> Result<Vec<LeaderboardEntry>, DomainError> {
        let forecasts = self.forecast_repo.list(&ForecastFilter {
            period: Some(period),
            ..Default::default()
        })?;

        let mut totals: BTreeMap<ForecastSource, (usize, f64)> = BTreeMap::new();
        for f in &forecasts {
            if let Some(accuracy) = f.accuracy {
                let entry = totals.entry(f.source.clone()).or_insert((0, 0.0));
                entry.0 += 1;
                entry.1 += accuracy;
            }
        }

        let mut board: Vec<LeaderboardEntry> = totals
            .into_iter()
            .map(|(source, (count, sum))| LeaderboardEntry {
                source,
                evaluated: count,
                mean_accuracy: sum / count as f64,
            })
            .collect();
        board.sort_by(|a, b| {
            b.mean_accuracy
                .total_cmp(&a.mean_accuracy)
                .then_with(|| a.source.cmp(&b.source))
        });
        Ok(board)
    }

    /// Ids of the forecasts for `period` that count towards accuracy.
    pub fn scorable(&self, period: PeriodId) -> Result<HashSet<ForecastId>, DomainError> {
        let forecasts = self.forecast_repo.list(&ForecastFilter {
            period: Some(period),
            ..Default::default()
        })?;
        Ok(select_scorable(&forecasts, period, &self.rules))
    }
}
