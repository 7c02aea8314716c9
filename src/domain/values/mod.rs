pub mod forecast_source;
pub mod ids;
pub mod metric;
pub mod position;
pub mod recency;
pub mod scorable_rules;
pub mod strategy_config;
pub mod tier;
