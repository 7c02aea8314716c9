use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy_repository::StrategyRepository;
use crate::domain::values::strategy_config::StrategyConfig;
use crate::infrastructure::sqlite::parse_timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

const SELECT_COLS: &str = "id, name, version, config, created_at";

pub struct SqliteStrategyRepo {
    conn: Mutex<Connection>,
}

impl SqliteStrategyRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_parts(row: &rusqlite::Row) -> Result<(String, String, u32, String, String), rusqlite::Error> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    }

    /// Stored configs are re-validated on the way out, so a row written by
    /// an older build cannot reach the scorer with an invalid shape.
    fn parts_to_strategy(
        (id, name, version, config, created): (String, String, u32, String, String),
    ) -> Result<Strategy, DomainError> {
        let config = StrategyConfig::from_json(&config)
            .map_err(|e| DomainError::Config(format!("Strategy {name} v{version}: {e}")))?;
        Ok(Strategy {
            id,
            name,
            version,
            config,
            created_at: parse_timestamp(&created, "strategies"),
        })
    }

    fn query_one(&self, sql: &str, param: &str) -> Result<Option<Strategy>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let parts = conn
            .query_row(sql, params![param], Self::row_to_parts)
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        parts.map(Self::parts_to_strategy).transpose()
    }
}

impl StrategyRepository for SqliteStrategyRepo {
    fn add(&self, strategy: &Strategy) -> Result<(), DomainError> {
        let config = strategy.config.to_json()?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO strategies (id, name, version, config, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                strategy.id,
                strategy.name,
                strategy.version,
                config,
                strategy.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add strategy: {e}")))?;
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Strategy>, DomainError> {
        self.query_one(&format!("SELECT {SELECT_COLS} FROM strategies WHERE id = ?1"), id)
    }

    fn latest(&self, name: &str) -> Result<Option<Strategy>, DomainError> {
        self.query_one(
            &format!("SELECT {SELECT_COLS} FROM strategies WHERE name = ?1 ORDER BY version DESC LIMIT 1"),
            name,
        )
    }

    fn list(&self) -> Result<Vec<Strategy>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SELECT_COLS} FROM strategies ORDER BY name, version"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let parts: Vec<_> = stmt
            .query_map([], Self::row_to_parts)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<_, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        parts.into_iter().map(Self::parts_to_strategy).collect()
    }
}
