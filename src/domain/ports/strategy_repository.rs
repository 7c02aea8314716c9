use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;

pub trait StrategyRepository: Send + Sync {
    fn add(&self, strategy: &Strategy) -> Result<(), DomainError>;
    fn get(&self, id: &str) -> Result<Option<Strategy>, DomainError>;
    /// Highest version registered under `name`.
    fn latest(&self, name: &str) -> Result<Option<Strategy>, DomainError>;
    fn list(&self) -> Result<Vec<Strategy>, DomainError>;
}
