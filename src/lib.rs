pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::evaluation::{EvaluationReport, EvaluationUseCase, LeaderboardEntry};
use crate::application::import::{Dataset, ImportSummary, ImportUseCase};
use crate::application::picks::{PickSheet, PicksUseCase};
use crate::application::ranking::{RankingReport, RankingUseCase};
use crate::application::scoring::player_scorer::ScoreBreakdown;
use crate::application::strategy::StrategyUseCase;
use crate::domain::entities::forecast::RankedForecast;
use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_repository::{ForecastFilter, ForecastRepository};
use crate::domain::ports::performance_repository::PerformanceRepository;
use crate::domain::ports::strategy_repository::StrategyRepository;
use crate::domain::values::ids::{CompetitorId, ForecastId, PeriodId};
use crate::domain::values::position::Position;
use crate::domain::values::scorable_rules::ScorableRules;
use crate::domain::values::strategy_config::StrategyConfig;
use crate::infrastructure::sqlite::forecast_repo::SqliteForecastRepo;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::performance_repo::SqlitePerformanceRepo;
use crate::infrastructure::sqlite::strategy_repo::SqliteStrategyRepo;
use rusqlite::Connection;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

pub struct Formcast {
    strategy_uc: StrategyUseCase,
    ranking_uc: RankingUseCase,
    picks_uc: PicksUseCase,
    evaluation_uc: EvaluationUseCase,
    import_uc: ImportUseCase,
    forecast_repo: Arc<dyn ForecastRepository>,
}

impl Formcast {
    /// Open the database at `db_path`. Scorable slot rules are read from the
    /// JSON file named by `FORMCAST_SCORABLE_RULES`, or the built-in defaults.
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let rules = match std::env::var("FORMCAST_SCORABLE_RULES") {
            Ok(path) => {
                let json = std::fs::read_to_string(&path).map_err(|e| {
                    DomainError::Config(format!("Cannot read scorable rules {path}: {e}"))
                })?;
                info!(%path, "Loaded scorable rules");
                ScorableRules::from_json(&json)?
            }
            Err(_) => ScorableRules::default(),
        };
        Self::with_rules(db_path, rules)
    }

    pub fn with_rules(db_path: &str, rules: ScorableRules) -> Result<Self, DomainError> {
        rules.validate()?;

        // Each repository holds its own connection. A plain in-memory
        // database is private to one connection, so ":memory:" maps to a
        // uniquely named shared-cache database instead.
        let path = if db_path == ":memory:" {
            format!("file:formcast-{}?mode=memory&cache=shared", uuid::Uuid::new_v4())
        } else {
            db_path.to_string()
        };
        let conn1 = open(&path)?;
        let conn2 = open(&path)?;
        let conn3 = open(&path)?;

        run_migrations(&conn1)?;

        let performance_repo: Arc<dyn PerformanceRepository> = Arc::new(SqlitePerformanceRepo::new(conn1));
        let forecast_repo: Arc<dyn ForecastRepository> = Arc::new(SqliteForecastRepo::new(conn2));
        let strategy_repo: Arc<dyn StrategyRepository> = Arc::new(SqliteStrategyRepo::new(conn3));

        Ok(Self::assemble(performance_repo, forecast_repo, strategy_repo, rules))
    }

    pub fn assemble(
        performance_repo: Arc<dyn PerformanceRepository>,
        forecast_repo: Arc<dyn ForecastRepository>,
        strategy_repo: Arc<dyn StrategyRepository>,
        rules: ScorableRules,
    ) -> Self {
        Self {
            strategy_uc: StrategyUseCase::new(strategy_repo.clone()),
            ranking_uc: RankingUseCase::new(
                performance_repo.clone(),
                forecast_repo.clone(),
                strategy_repo,
            ),
            picks_uc: PicksUseCase::new(performance_repo.clone(), forecast_repo.clone()),
            evaluation_uc: EvaluationUseCase::new(performance_repo.clone(), forecast_repo.clone(), rules),
            import_uc: ImportUseCase::new(performance_repo),
            forecast_repo,
        }
    }

    // Delegating methods
    pub fn import(&self, dataset: &Dataset) -> Result<ImportSummary, DomainError> {
        self.import_uc.execute(dataset)
    }

    pub fn strategy_add(&self, name: &str, config: StrategyConfig) -> Result<Strategy, DomainError> {
        self.strategy_uc.add(name, config)
    }

    pub fn strategy(&self, id_or_name: &str) -> Result<Strategy, DomainError> {
        self.strategy_uc.resolve(id_or_name)
    }

    pub fn strategies(&self) -> Result<Vec<Strategy>, DomainError> {
        self.strategy_uc.list()
    }

    /// Rank one position (or every position when `position` is `None`) for
    /// `period`, replacing the strategy's earlier forecasts for that scope.
    pub fn rank(
        &self,
        strategy: &str,
        period: PeriodId,
        position: Option<Position>,
    ) -> Result<RankingReport, DomainError> {
        let strategy = self.strategy_uc.resolve(strategy)?;
        self.ranking_uc.execute(&strategy.id, period, position)
    }

    pub fn explain(
        &self,
        strategy: &str,
        period: PeriodId,
        competitor: CompetitorId,
    ) -> Result<ScoreBreakdown, DomainError> {
        let strategy = self.strategy_uc.resolve(strategy)?;
        self.ranking_uc.explain(&strategy.id, period, competitor)
    }

    pub fn record_picks(&self, sheet: &PickSheet) -> Result<Vec<RankedForecast>, DomainError> {
        self.picks_uc.record(sheet)
    }

    pub fn forecasts(&self, filter: &ForecastFilter) -> Result<Vec<RankedForecast>, DomainError> {
        self.forecast_repo.list(filter)
    }

    pub fn forecast(&self, id: &str) -> Result<RankedForecast, DomainError> {
        self.forecast_repo
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Forecast not found: {id}")))
    }

    pub fn evaluate(&self, period: PeriodId) -> Result<EvaluationReport, DomainError> {
        self.evaluation_uc.execute(period)
    }

    pub fn scorable(&self, period: PeriodId) -> Result<HashSet<ForecastId>, DomainError> {
        self.evaluation_uc.scorable(period)
    }

    pub fn leaderboard(&self, period: PeriodId) -> Result<Vec<LeaderboardEntry>, DomainError> {
        self.evaluation_uc.leaderboard(period)
    }
}

fn open(path: &str) -> Result<Connection, DomainError> {
    let conn = Connection::open(path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    if !path.starts_with("file:") {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    }
    Ok(conn)
}
