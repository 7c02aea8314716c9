use serde::{Deserialize, Serialize};

use crate::domain::entities::competitor::Competitor;
use crate::domain::entities::fixture::FixtureMatch;
use crate::domain::entities::samples::{AvailabilitySample, Outcome, StatisticSample};

/// Everything a performance store can hold, loaded in one go.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub statistics: Vec<StatisticSample>,
    #[serde(default)]
    pub matches: Vec<FixtureMatch>,
    #[serde(default)]
    pub availability: Vec<AvailabilitySample>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}
