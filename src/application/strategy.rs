use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy_repository::StrategyRepository;
use crate::domain::values::strategy_config::StrategyConfig;
use std::sync::Arc;
use tracing::info;

pub struct StrategyUseCase {
    repo: Arc<dyn StrategyRepository>,
}

impl StrategyUseCase {
    pub fn new(repo: Arc<dyn StrategyRepository>) -> Self {
        Self { repo }
    }

    /// Register `config` under `name`. Re-registering a name creates the
    /// next version; earlier versions stay untouched.
    pub fn add(&self, name: &str, config: StrategyConfig) -> Result<Strategy, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Strategy name is required".into()));
        }
        config.validate()?;

        let version = self.repo.latest(name)?.map_or(1, |s| s.version + 1);
        let strategy = Strategy::new(name.to_string(), version, config);
        self.repo.add(&strategy)?;
        info!(name, version, id = %strategy.id, "Strategy registered");
        Ok(strategy)
    }

    /// Look a strategy up by id, falling back to the latest version of a
    /// strategy with that name.
    pub fn resolve(&self, id_or_name: &str) -> Result<Strategy, DomainError> {
        if let Some(strategy) = self.repo.get(id_or_name)? {
            return Ok(strategy);
        }
        self.repo
            .latest(id_or_name)?
            .ok_or_else(|| DomainError::NotFound(format!("Strategy not found: {id_or_name}")))
    }

    pub fn list(&self) -> Result<Vec<Strategy>, DomainError> {
        self.repo.list()
    }
}
