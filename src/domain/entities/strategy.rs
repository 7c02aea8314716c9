use crate::domain::values::strategy_config::StrategyConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, versioned strategy config. Versions are immutable: changing a
/// strategy means registering a new version under the same name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub name: String,
    pub version: u32,
    pub config: StrategyConfig,
    pub created_at: DateTime<Utc>,
}

impl Strategy {
    pub fn new(name: String, version: u32, config: StrategyConfig) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            version,
            config,
            created_at: Utc::now(),
        }
    }
}
