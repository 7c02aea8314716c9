pub mod forecast_repo;
pub mod migrations;
pub mod performance_repo;
pub mod strategy_repo;

use chrono::{DateTime, Utc};
use tracing::warn;

/// Parse a stored RFC 3339 timestamp. A corrupt value is logged and read
/// back as the current time so the rest of the row stays usable.
pub(crate) fn parse_timestamp(raw: &str, table: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            warn!(table, value = raw, "Unreadable created_at, using now: {e}");
            Utc::now()
        }
    }
}
