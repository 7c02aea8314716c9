use crate::domain::entities::competitor::Competitor;
use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::fixture::FixtureMatch;
use crate::domain::entities::samples::{AvailabilitySample, Outcome, StatisticSample};
use crate::domain::error::DomainError;
use crate::domain::ports::performance_repository::PerformanceRepository;
use crate::domain::snapshot::{PeriodOutcomes, Snapshot};
use crate::domain::values::ids::{CompetitorId, PeriodId};
use crate::domain::values::metric::Metric;
use crate::domain::values::position::Position;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

pub struct SqlitePerformanceRepo {
    conn: Mutex<Connection>,
}

impl SqlitePerformanceRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DomainError> {
        self.conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    /// Rows with an unreadable position are logged and skipped.
    fn load_competitors(conn: &Connection) -> Result<Vec<Competitor>, DomainError> {
        let mut stmt = conn
            .prepare("SELECT id, name, team, position FROM competitors ORDER BY id")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, CompetitorId>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, u32>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut competitors = Vec::new();
        for row in rows {
            let (id, name, team, pos_str) = row.map_err(|e| DomainError::Database(e.to_string()))?;
            match pos_str.parse::<Position>() {
                Ok(position) => competitors.push(Competitor {
                    id,
                    name,
                    team,
                    position,
                }),
                Err(e) => warn!(competitor = id, "Skipping competitor: {e}"),
            }
        }
        Ok(competitors)
    }
}

impl PerformanceRepository for SqlitePerformanceRepo {
    fn import(&self, dataset: &Dataset) -> Result<(), DomainError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO competitors (id, name, team, position) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name, team = excluded.team, position = excluded.position",
                )
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for c in &dataset.competitors {
                stmt.execute(params![c.id, c.name, c.team, c.position.to_string()])
                    .map_err(|e| DomainError::Database(format!("Failed to add competitor {}: {e}", c.id)))?;
            }

            let mut stmt = tx
                .prepare(
                    "INSERT INTO statistics (competitor_id, period_id, metric, value) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(competitor_id, period_id, metric) DO UPDATE SET value = excluded.value",
                )
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for s in &dataset.statistics {
                stmt.execute(params![s.competitor_id, s.period_id, s.metric.as_str(), s.value])
                    .map_err(|e| DomainError::Database(format!("Failed to add statistic: {e}")))?;
            }

            let mut stmt = tx
                .prepare(
                    "INSERT INTO matches (period_id, home_team, away_team, home_expected, away_expected)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(period_id, home_team, away_team)
                     DO UPDATE SET home_expected = excluded.home_expected, away_expected = excluded.away_expected",
                )
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for m in &dataset.matches {
                stmt.execute(params![
                    m.period_id,
                    m.home_team,
                    m.away_team,
                    m.home_expected,
                    m.away_expected,
                ])
                .map_err(|e| DomainError::Database(format!("Failed to add match: {e}")))?;
            }

            let mut stmt = tx
                .prepare(
                    "INSERT INTO availability (competitor_id, period_id, chance) VALUES (?1, ?2, ?3)
                     ON CONFLICT(competitor_id, period_id) DO UPDATE SET chance = excluded.chance",
                )
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for a in &dataset.availability {
                stmt.execute(params![a.competitor_id, a.period_id, a.chance])
                    .map_err(|e| DomainError::Database(format!("Failed to add availability: {e}")))?;
            }

            let mut stmt = tx
                .prepare(
                    "INSERT INTO outcomes (competitor_id, period_id, value) VALUES (?1, ?2, ?3)
                     ON CONFLICT(competitor_id, period_id) DO UPDATE SET value = excluded.value",
                )
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for o in &dataset.outcomes {
                stmt.execute(params![o.competitor_id, o.period_id, o.value])
                    .map_err(|e| DomainError::Database(format!("Failed to add outcome: {e}")))?;
            }
        }

        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to commit import: {e}")))?;
        Ok(())
    }

    fn competitors(&self) -> Result<Vec<Competitor>, DomainError> {
        let conn = self.lock()?;
        Self::load_competitors(&conn)
    }

    fn snapshot(&self, target: PeriodId) -> Result<Snapshot, DomainError> {
        let conn = self.lock()?;
        let mut snapshot = Snapshot::new();

        for competitor in Self::load_competitors(&conn)? {
            snapshot.add_competitor(competitor);
        }

        let mut stmt = conn
            .prepare(
                "SELECT competitor_id, period_id, metric, value FROM statistics WHERE period_id < ?1",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![target], |row| {
                Ok((
                    row.get::<_, CompetitorId>(0)?,
                    row.get::<_, PeriodId>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                ))
            })
            .map_err(|e| DomainError::Database(e.to_string()))?;
        for row in rows {
            let (competitor_id, period_id, metric_str, value) =
                row.map_err(|e| DomainError::Database(e.to_string()))?;
            match metric_str.parse::<Metric>() {
                Ok(metric) => snapshot.add_statistic(&StatisticSample {
                    competitor_id,
                    period_id,
                    metric,
                    value,
                }),
                Err(e) => warn!(competitor = competitor_id, period = period_id, "Skipping statistic: {e}"),
            }
        }

        // Insertion order decides which match a double-gameweek team keeps.
        let mut stmt = conn
            .prepare(
                "SELECT period_id, home_team, away_team, home_expected, away_expected
                 FROM matches WHERE period_id <= ?1 ORDER BY id",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let matches = stmt
            .query_map(params![target], |row| {
                Ok(FixtureMatch {
                    period_id: row.get(0)?,
                    home_team: row.get(1)?,
                    away_team: row.get(2)?,
                    home_expected: row.get(3)?,
                    away_expected: row.get(4)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?;
        for fixture in matches {
            snapshot.add_match(&fixture.map_err(|e| DomainError::Database(e.to_string()))?);
        }

        let mut stmt = conn
            .prepare(
                "SELECT competitor_id, period_id, chance FROM availability WHERE period_id <= ?1",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let samples = stmt
            .query_map(params![target], |row| {
                Ok(AvailabilitySample {
                    competitor_id: row.get(0)?,
                    period_id: row.get(1)?,
                    chance: row.get(2)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?;
        for sample in samples {
            snapshot.add_availability(&sample.map_err(|e| DomainError::Database(e.to_string()))?);
        }

        Ok(snapshot)
    }

    fn outcomes(&self, period: PeriodId) -> Result<PeriodOutcomes, DomainError> {
        let conn = self.lock()?;
        let positions: HashMap<CompetitorId, Position> = Self::load_competitors(&conn)?
            .into_iter()
            .map(|c| (c.id, c.position))
            .collect();

        let mut stmt = conn
            .prepare("SELECT competitor_id, period_id, value FROM outcomes WHERE period_id = ?1")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let outcomes: Vec<Outcome> = stmt
            .query_map(params![period], |row| {
                Ok(Outcome {
                    competitor_id: row.get(0)?,
                    period_id: row.get(1)?,
                    value: row.get(2)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<_, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(PeriodOutcomes::from_outcomes(period, &outcomes, &positions))
    }
}
