pub mod availability_filter;
pub mod metric_resolver;
pub mod player_scorer;
pub mod ranker;
pub mod tiers;
