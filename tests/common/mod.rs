//! Shared test helpers.

#![allow(dead_code)]

use formcast::application::import::Dataset;
use formcast::domain::entities::competitor::Competitor;
use formcast::domain::entities::samples::{AvailabilitySample, Outcome, StatisticSample};
use formcast::domain::values::ids::{CompetitorId, PeriodId, TeamId};
use formcast::domain::values::metric::Metric;
use formcast::domain::values::position::Position;
use formcast::domain::values::scorable_rules::ScorableRules;
use formcast::domain::values::strategy_config::StrategyConfig;
use formcast::Formcast;

pub fn setup() -> Formcast {
    Formcast::with_rules(":memory:", ScorableRules::default()).unwrap()
}

pub fn competitor(id: CompetitorId, team: TeamId, position: Position) -> Competitor {
    Competitor {
        id,
        name: format!("Player {id}"),
        team,
        position,
    }
}

/// One `points` sample per value, starting at gameweek 1.
pub fn points(competitor_id: CompetitorId, values: &[f64]) -> Vec<StatisticSample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| StatisticSample {
            competitor_id,
            period_id: i as PeriodId + 1,
            metric: Metric::Points,
            value,
        })
        .collect()
}

pub fn outcome(competitor_id: CompetitorId, period_id: PeriodId, value: f64) -> Outcome {
    Outcome {
        competitor_id,
        period_id,
        value,
    }
}

pub fn availability(competitor_id: CompetitorId, period_id: PeriodId, chance: u8) -> AvailabilitySample {
    AvailabilitySample {
        competitor_id,
        period_id,
        chance,
    }
}

/// Four forwards with three gameweeks of points, plus a fifth forward
/// with no history. Gameweek 4 outcomes exist for players 1 to 4.
pub fn forwards_dataset() -> Dataset {
    let mut statistics = Vec::new();
    statistics.extend(points(1, &[10.0, 12.0, 8.0]));
    statistics.extend(points(2, &[6.0, 7.0, 9.0]));
    statistics.extend(points(3, &[2.0, 3.0, 4.0]));
    statistics.extend(points(4, &[0.0, 1.0, 0.0]));

    Dataset {
        competitors: (1..=5).map(|id| competitor(id, 10 + id, Position::Fwd)).collect(),
        statistics,
        outcomes: vec![
            outcome(1, 4, 15.0),
            outcome(2, 4, 10.0),
            outcome(3, 4, 15.0),
            outcome(4, 4, 5.0),
        ],
        ..Default::default()
    }
}

pub fn points_strategy(recency: &str) -> StrategyConfig {
    StrategyConfig::from_json(&format!(
        r#"{{"performance": [{{"metric": "points", "weight": 1.0, "lookback": 3, "recency": "{recency}"}}]}}"#
    ))
    .unwrap()
}

pub fn seeded() -> Formcast {
    let fc = setup();
    fc.import(&forwards_dataset()).unwrap();
    fc
}
