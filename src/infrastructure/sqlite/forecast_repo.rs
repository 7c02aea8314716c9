use crate::domain::entities::forecast::RankedForecast;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_repository::*;
use crate::domain::values::forecast_source::ForecastSource;
use crate::domain::values::ids::{ForecastId, PeriodId};
use crate::domain::values::position::Position;
use crate::infrastructure::sqlite::parse_timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;
use tracing::{debug, warn};

const SELECT_COLS: &str = "id, source_kind, source_id, competitor_id, period_id, position, score, rank, accuracy, created_at";

pub struct SqliteForecastRepo {
    conn: Mutex<Connection>,
}

impl SqliteForecastRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_forecast(row: &rusqlite::Row) -> Result<RankedForecast, rusqlite::Error> {
        let kind: String = row.get(1)?;
        let source_id: String = row.get(2)?;
        let pos_str: String = row.get(5)?;
        let created_str: String = row.get(9)?;

        Ok(RankedForecast {
            id: row.get(0)?,
            source: ForecastSource::from_parts(&kind, &source_id)
                .map_err(|_| rusqlite::Error::InvalidParameterName(kind.clone()))?,
            competitor_id: row.get(3)?,
            period_id: row.get(4)?,
            position: pos_str
                .parse::<Position>()
                .map_err(|_| rusqlite::Error::InvalidParameterName(pos_str.clone()))?,
            score: row.get(6)?,
            rank: row.get(7)?,
            accuracy: row.get(8)?,
            created_at: parse_timestamp(&created_str, "forecasts"),
        })
    }
}

impl ForecastRepository for SqliteForecastRepo {
    fn replace_run(
        &self,
        source: &ForecastSource,
        period: PeriodId,
        position: Option<Position>,
        forecasts: &[RankedForecast],
    ) -> Result<usize, DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let removed = match position {
            Some(position) => tx.execute(
                "DELETE FROM forecasts WHERE source_kind = ?1 AND source_id = ?2 AND period_id = ?3 AND position = ?4",
                params![source.kind(), source.id(), period, position.to_string()],
            ),
            None => tx.execute(
                "DELETE FROM forecasts WHERE source_kind = ?1 AND source_id = ?2 AND period_id = ?3",
                params![source.kind(), source.id(), period],
            ),
        }
        .map_err(|e| DomainError::Database(format!("Failed to clear forecasts: {e}")))?;

        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO forecasts (id, source_kind, source_id, competitor_id, period_id, position, score, rank, accuracy, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                )
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for f in forecasts {
                if f.source != *source || f.period_id != period {
                    return Err(DomainError::InvalidInput(format!(
                        "Forecast {} belongs to {} period {}, not {} period {}",
                        f.id, f.source, f.period_id, source, period
                    )));
                }
                stmt.execute(params![
                    f.id,
                    f.source.kind(),
                    f.source.id(),
                    f.competitor_id,
                    f.period_id,
                    f.position.to_string(),
                    f.score,
                    f.rank,
                    f.accuracy,
                    f.created_at.to_rfc3339(),
                ])
                .map_err(|e| DomainError::Database(format!("Failed to add forecast: {e}")))?;
            }
        }

        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to commit forecasts: {e}")))?;
        debug!(%source, period, removed, inserted = forecasts.len(), "Replaced forecast run");
        Ok(removed)
    }

    fn list(&self, filter: &ForecastFilter) -> Result<Vec<RankedForecast>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM forecasts WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(period) = filter.period {
            sql.push_str(&format!(" AND period_id = ?{}", param_values.len() + 1));
            param_values.push(Box::new(period));
        }
        if let Some(position) = filter.position {
            sql.push_str(&format!(" AND position = ?{}", param_values.len() + 1));
            param_values.push(Box::new(position.to_string()));
        }
        if let Some(source) = &filter.source {
            sql.push_str(&format!(
                " AND source_kind = ?{} AND source_id = ?{}",
                param_values.len() + 1,
                param_values.len() + 2
            ));
            param_values.push(Box::new(source.kind().to_string()));
            param_values.push(Box::new(source.id().to_string()));
        }
        sql.push_str(" ORDER BY period_id, source_kind, source_id, position, rank, competitor_id");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let forecasts = stmt
            .query_map(params_refs.as_slice(), Self::row_to_forecast)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| match r {
                Ok(f) => Some(f),
                Err(e) => {
                    warn!("Skipping unreadable forecast row: {e}");
                    None
                }
            })
            .collect();
        Ok(forecasts)
    }

    fn get(&self, id: &str) -> Result<Option<RankedForecast>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.query_row(
            &format!("SELECT {SELECT_COLS} FROM forecasts WHERE id = ?1"),
            params![id],
            Self::row_to_forecast,
        )
        .optional()
        .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn set_accuracies(&self, updates: &[(ForecastId, Option<f64>)]) -> Result<(), DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        {
            let mut stmt = tx
                .prepare("UPDATE forecasts SET accuracy = ?1 WHERE id = ?2")
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for (id, accuracy) in updates {
                let rows = stmt
                    .execute(params![accuracy, id])
                    .map_err(|e| DomainError::Database(format!("Failed to set accuracy: {e}")))?;
                if rows == 0 {
                    return Err(DomainError::NotFound(format!("Forecast not found: {id}")));
                }
            }
        }
        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to commit accuracies: {e}")))?;
        Ok(())
    }
}
