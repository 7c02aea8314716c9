//! Ranking use case: score every player for a gameweek under a strategy and
//! persist the result as that strategy's forecasts.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::application::scoring::player_scorer::{PlayerScorer, ScoreBreakdown};
use crate::application::scoring::ranker::{PositionRanking, Ranker};
use crate::application::scoring::tiers::classify_tiers;
use crate::domain::entities::forecast::RankedForecast;
use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_repository::ForecastRepository;
use crate::domain::ports::performance_repository::PerformanceRepository;
use crate::domain::ports::strategy_repository::StrategyRepository;
use crate::domain::snapshot::Snapshot;
use crate::domain::values::forecast_source::ForecastSource;
use crate::domain::values::ids::{CompetitorId, PeriodId};
use crate::domain::values::position::Position;
use crate::domain::values::tier::Tier;

#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    pub competitor_id: CompetitorId,
    pub name: String,
    pub score: f64,
    pub rank: u32,
    pub tier: Tier,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionTable {
    pub position: Position,
    pub rows: Vec<RankingRow>,
}

#[derive(Debug, Serialize)]
pub struct RankingReport {
    pub strategy_id: String,
    pub strategy_name: String,
    pub strategy_version: u32,
    pub period: PeriodId,
    /// Forecast rows deleted from the previous run for this strategy/gameweek.
    pub replaced: usize,
    pub created: usize,
    pub positions: Vec<PositionTable>,
}

pub struct RankingUseCase {
    performance_repo: Arc<dyn PerformanceRepository>,
    forecast_repo: Arc<dyn ForecastRepository>,
    strategy_repo: Arc<dyn StrategyRepository>,
}

impl RankingUseCase {
    pub fn new(
        performance_repo: Arc<dyn PerformanceRepository>,
        forecast_repo: Arc<dyn ForecastRepository>,
        strategy_repo: Arc<dyn StrategyRepository>,
    ) -> Self {
        Self {
            performance_repo,
            forecast_repo,
            strategy_repo,
        }
    }

    /// Rank one position, or the whole squad when `position` is `None`, and
    /// replace the strategy's previous forecasts for the same scope.
    pub fn execute(
        &self,
        strategy_id: &str,
        period: PeriodId,
        position: Option<Position>,
    ) -> Result<RankingReport, DomainError> {
        let strategy = self.load_strategy(strategy_id)?;
        let snapshot = self.performance_repo.snapshot(period)?;
        debug!(
            strategy = %strategy.name,
            period,
            statistics = snapshot.statistic_count(),
            "Loaded snapshot"
        );

        let scorer = PlayerScorer::new(&snapshot);
        let ranker = Ranker::new(&scorer);
        let rankings = match position {
            Some(position) => vec![ranker.rank_position(&snapshot, position, &strategy.config, period)],
            None => ranker.rank_positions(&snapshot, &Position::ALL, &strategy.config, period),
        };

        let source = ForecastSource::Strategy(strategy.id.clone());
        let forecasts = to_forecasts(&source, period, &rankings);
        let replaced = self
            .forecast_repo
            .replace_run(&source, period, position, &forecasts)?;

        info!(
            strategy = %strategy.name,
            version = strategy.version,
            period,
            created = forecasts.len(),
            replaced,
            "Ranking run stored"
        );

        Ok(RankingReport {
            strategy_id: strategy.id.clone(),
            strategy_name: strategy.name.clone(),
            strategy_version: strategy.version,
            period,
            replaced,
            created: forecasts.len(),
            positions: rankings
                .iter()
                .map(|r| to_table(&snapshot, r))
                .collect(),
        })
    }

    /// Per-term score breakdown for one player, without persisting anything.
    pub fn explain(
        &self,
        strategy_id: &str,
        period: PeriodId,
        competitor: CompetitorId,
    ) -> Result<ScoreBreakdown, DomainError> {
        let strategy = self.load_strategy(strategy_id)?;
        let snapshot = self.performance_repo.snapshot(period)?;
        if snapshot.competitor(competitor).is_none() {
            return Err(DomainError::NotFound(format!("Competitor not found: {competitor}")));
        }
        Ok(PlayerScorer::new(&snapshot).breakdown(competitor, &strategy.config, period))
    }

    fn load_strategy(&self, id: &str) -> Result<Strategy, DomainError> {
        let strategy = self
            .strategy_repo
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Strategy not found: {id}")))?;
        strategy.config.validate()?;
        Ok(strategy)
    }
}

fn to_forecasts(
    source: &ForecastSource,
    period: PeriodId,
    rankings: &[PositionRanking],
) -> Vec<RankedForecast> {
    rankings
        .iter()
        .flat_map(|ranking| {
            ranking.candidates.iter().map(move |c| {
                RankedForecast::new(
                    source.clone(),
                    c.competitor_id,
                    period,
                    ranking.position,
                    Some(c.score),
                    c.rank,
                )
            })
        })
        .collect()
}

fn to_table(snapshot: &Snapshot, ranking: &PositionRanking) -> PositionTable {
    let tiers = classify_tiers(
        ranking
            .candidates
            .iter()
            .map(|c| (c.competitor_id, Some(c.score))),
    );
    let rows = ranking
        .candidates
        .iter()
        .zip(tiers)
        .map(|(c, t)| RankingRow {
            competitor_id: c.competitor_id,
            name: snapshot
                .competitor(c.competitor_id)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            score: c.score,
            rank: c.rank,
            tier: t.tier,
        })
        .collect();
    PositionTable {
        position: ranking.position,
        rows,
    }
}
