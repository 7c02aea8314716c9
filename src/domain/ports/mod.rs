pub mod forecast_repository;
pub mod performance_repository;
pub mod strategy_repository;
