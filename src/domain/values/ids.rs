/// Player identifier as issued by the data provider.
pub type CompetitorId = u32;

/// Team identifier as issued by the data provider.
pub type TeamId = u32;

/// Gameweek identifier. Ids increase chronologically, so ordering by id is
/// ordering by time.
pub type PeriodId = u32;

pub type ForecastId = String;
