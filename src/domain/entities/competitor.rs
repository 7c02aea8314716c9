use crate::domain::values::ids::{CompetitorId, TeamId};
use crate::domain::values::position::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub team: TeamId,
    pub position: Position,
}
