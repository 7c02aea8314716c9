use crate::domain::values::ids::{PeriodId, TeamId};
use serde::{Deserialize, Serialize};

/// A scheduled match with each side's expected goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureMatch {
    pub period_id: PeriodId,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_expected: f64,
    pub away_expected: f64,
}

/// Expected goals from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixturePair {
    pub expected_for: f64,
    pub expected_against: f64,
}

impl FixtureMatch {
    /// The pair oriented to `team`'s side, or `None` if `team` is not playing.
    pub fn pair_for(&self, team: TeamId) -> Option<FixturePair> {
        if team == self.home_team {
            Some(FixturePair {
                expected_for: self.home_expected,
                expected_against: self.away_expected,
            })
        } else if team == self.away_team {
            Some(FixturePair {
                expected_for: self.away_expected,
                expected_against: self.home_expected,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_oriented_to_each_side() {
        let m = FixtureMatch {
            period_id: 5,
            home_team: 1,
            away_team: 2,
            home_expected: 2.1,
            away_expected: 0.7,
        };
        let home = m.pair_for(1).unwrap();
        let away = m.pair_for(2).unwrap();
        assert_eq!(home.expected_for, 2.1);
        assert_eq!(home.expected_against, 0.7);
        assert_eq!(away.expected_for, 0.7);
        assert_eq!(away.expected_against, 2.1);
        assert!(m.pair_for(3).is_none());
    }
}
