use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A statistic a strategy can weight.
///
/// Most metrics are per-gameweek statistics read from the statistic store.
/// The two fixture metrics are read from the fixture store instead and
/// describe the upcoming match rather than past performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[serde(alias = "total_points")]
    Points,
    Minutes,
    GoalsScored,
    Assists,
    CleanSheets,
    GoalsConceded,
    Saves,
    Bonus,
    Bps,
    Influence,
    Creativity,
    Threat,
    IctIndex,
    ExpectedGoals,
    ExpectedAssists,
    ExpectedGoalInvolvements,
    ExpectedGoalsConceded,
    ExpectedGoalsFor,
    ExpectedGoalsAgainst,
}

impl Metric {
    pub const ALL: [Metric; 19] = [
        Metric::Points,
        Metric::Minutes,
        Metric::GoalsScored,
        Metric::Assists,
        Metric::CleanSheets,
        Metric::GoalsConceded,
        Metric::Saves,
        Metric::Bonus,
        Metric::Bps,
        Metric::Influence,
        Metric::Creativity,
        Metric::Threat,
        Metric::IctIndex,
        Metric::ExpectedGoals,
        Metric::ExpectedAssists,
        Metric::ExpectedGoalInvolvements,
        Metric::ExpectedGoalsConceded,
        Metric::ExpectedGoalsFor,
        Metric::ExpectedGoalsAgainst,
    ];

    /// Fixture metrics come from the fixture store, not the statistic store.
    pub fn is_fixture(self) -> bool {
        matches!(self, Metric::ExpectedGoalsFor | Metric::ExpectedGoalsAgainst)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Points => "points",
            Metric::Minutes => "minutes",
            Metric::GoalsScored => "goals_scored",
            Metric::Assists => "assists",
            Metric::CleanSheets => "clean_sheets",
            Metric::GoalsConceded => "goals_conceded",
            Metric::Saves => "saves",
            Metric::Bonus => "bonus",
            Metric::Bps => "bps",
            Metric::Influence => "influence",
            Metric::Creativity => "creativity",
            Metric::Threat => "threat",
            Metric::IctIndex => "ict_index",
            Metric::ExpectedGoals => "expected_goals",
            Metric::ExpectedAssists => "expected_assists",
            Metric::ExpectedGoalInvolvements => "expected_goal_involvements",
            Metric::ExpectedGoalsConceded => "expected_goals_conceded",
            Metric::ExpectedGoalsFor => "expected_goals_for",
            Metric::ExpectedGoalsAgainst => "expected_goals_against",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower == "total_points" {
            return Ok(Metric::Points);
        }
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| format!("Unknown metric: {s}"))
    }
}
