use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS competitors (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            team INTEGER NOT NULL,
            position TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS statistics (
            competitor_id INTEGER NOT NULL,
            period_id INTEGER NOT NULL,
            metric TEXT NOT NULL,
            value REAL NOT NULL,
            PRIMARY KEY (competitor_id, period_id, metric)
        );

        CREATE TABLE IF NOT EXISTS matches (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            period_id INTEGER NOT NULL,
            home_team INTEGER NOT NULL,
            away_team INTEGER NOT NULL,
            home_expected REAL NOT NULL,
            away_expected REAL NOT NULL,
            UNIQUE (period_id, home_team, away_team)
        );

        CREATE TABLE IF NOT EXISTS availability (
            competitor_id INTEGER NOT NULL,
            period_id INTEGER NOT NULL,
            chance INTEGER NOT NULL,
            PRIMARY KEY (competitor_id, period_id)
        );

        CREATE TABLE IF NOT EXISTS outcomes (
            competitor_id INTEGER NOT NULL,
            period_id INTEGER NOT NULL,
            value REAL NOT NULL,
            PRIMARY KEY (competitor_id, period_id)
        );

        CREATE TABLE IF NOT EXISTS strategies (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            version INTEGER NOT NULL,
            config TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE (name, version)
        );

        CREATE TABLE IF NOT EXISTS forecasts (
            id TEXT PRIMARY KEY,
            source_kind TEXT NOT NULL,
            source_id TEXT NOT NULL,
            competitor_id INTEGER NOT NULL,
            period_id INTEGER NOT NULL,
            position TEXT NOT NULL,
            score REAL,
            rank INTEGER NOT NULL,
            accuracy REAL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_statistics_period ON statistics(period_id);
        CREATE INDEX IF NOT EXISTS idx_matches_period ON matches(period_id);
        CREATE INDEX IF NOT EXISTS idx_outcomes_period ON outcomes(period_id);
        CREATE INDEX IF NOT EXISTS idx_forecasts_period ON forecasts(period_id, position);
        CREATE INDEX IF NOT EXISTS idx_forecasts_source ON forecasts(source_kind, source_id, period_id);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
