//! Read-only data snapshots consumed by the scoring engine.
//!
//! A [`Snapshot`] is built once per ranking run from the performance stores
//! and then shared (immutably) by every scoring call in that run. A
//! [`PeriodOutcomes`] plays the same role for accuracy evaluation.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::entities::competitor::Competitor;
use crate::domain::entities::fixture::{FixtureMatch, FixturePair};
use crate::domain::entities::samples::{AvailabilitySample, Outcome, StatisticSample};
use crate::domain::values::ids::{CompetitorId, PeriodId, TeamId};
use crate::domain::values::metric::Metric;
use crate::domain::values::position::Position;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    competitors: BTreeMap<CompetitorId, Competitor>,
    periods: BTreeSet<PeriodId>,
    statistics: HashMap<(CompetitorId, PeriodId, Metric), f64>,
    fixtures: HashMap<(TeamId, PeriodId), FixturePair>,
    availability: HashMap<(CompetitorId, PeriodId), u8>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_competitor(&mut self, competitor: Competitor) {
        self.competitors.insert(competitor.id, competitor);
    }

    /// Register a gameweek even if no samples reference it yet.
    pub fn add_period(&mut self, period: PeriodId) {
        self.periods.insert(period);
    }

    pub fn add_statistic(&mut self, sample: &StatisticSample) {
        self.periods.insert(sample.period_id);
        self.statistics.insert(
            (sample.competitor_id, sample.period_id, sample.metric),
            sample.value,
        );
    }

    /// Both teams inherit the match, each oriented to its own side. When a
    /// team plays twice in one gameweek the first match recorded is kept.
    pub fn add_match(&mut self, fixture: &FixtureMatch) {
        self.periods.insert(fixture.period_id);
        for team in [fixture.home_team, fixture.away_team] {
            if let Some(pair) = fixture.pair_for(team) {
                self.fixtures.entry((team, fixture.period_id)).or_insert(pair);
            }
        }
    }

    pub fn add_availability(&mut self, sample: &AvailabilitySample) {
        self.periods.insert(sample.period_id);
        self.availability
            .insert((sample.competitor_id, sample.period_id), sample.chance.min(100));
    }

    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        self.competitors.get(&id)
    }

    pub fn competitors(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.values()
    }

    /// Competitor ids in `position`, ascending.
    pub fn competitors_in(&self, position: Position) -> Vec<CompetitorId> {
        self.competitors
            .values()
            .filter(|c| c.position == position)
            .map(|c| c.id)
            .collect()
    }

    /// Known periods strictly before `target`, oldest first.
    pub fn periods_before(&self, target: PeriodId) -> impl Iterator<Item = PeriodId> + '_ {
        self.periods.range(..target).copied()
    }

    pub fn statistic(&self, competitor: CompetitorId, period: PeriodId, metric: Metric) -> Option<f64> {
        self.statistics.get(&(competitor, period, metric)).copied()
    }

    /// The fixture pair a player inherits from their team's match.
    pub fn fixture(&self, competitor: CompetitorId, period: PeriodId) -> Option<FixturePair> {
        let team = self.competitors.get(&competitor)?.team;
        self.fixtures.get(&(team, period)).copied()
    }

    pub fn availability(&self, competitor: CompetitorId, period: PeriodId) -> Option<u8> {
        self.availability.get(&(competitor, period)).copied()
    }

    pub fn statistic_count(&self) -> usize {
        self.statistics.len()
    }
}

/// Realized results for one gameweek, keyed by player and tagged with the
/// player's position so peers can be pooled.
#[derive(Debug, Clone, Default)]
pub struct PeriodOutcomes {
    pub period_id: PeriodId,
    values: HashMap<CompetitorId, (Position, f64)>,
}

impl PeriodOutcomes {
    pub fn new(period_id: PeriodId) -> Self {
        Self {
            period_id,
            values: HashMap::new(),
        }
    }

    /// Build from raw outcomes. Outcomes for other periods and for players
    /// with no known position are ignored.
    pub fn from_outcomes<'a>(
        period_id: PeriodId,
        outcomes: impl IntoIterator<Item = &'a Outcome>,
        positions: &HashMap<CompetitorId, Position>,
    ) -> Self {
        let mut board = Self::new(period_id);
        for outcome in outcomes {
            if outcome.period_id != period_id {
                continue;
            }
            if let Some(position) = positions.get(&outcome.competitor_id) {
                board.insert(outcome.competitor_id, *position, outcome.value);
            }
        }
        board
    }

    pub fn insert(&mut self, competitor: CompetitorId, position: Position, value: f64) {
        self.values.insert(competitor, (position, value));
    }

    pub fn value(&self, competitor: CompetitorId) -> Option<f64> {
        self.values.get(&competitor).map(|(_, v)| *v)
    }

    /// `(competitor, value)` for every player in `position`.
    pub fn in_position(&self, position: Position) -> impl Iterator<Item = (CompetitorId, f64)> + '_ {
        self.values
            .iter()
            .filter(move |(_, (p, _))| *p == position)
            .map(|(id, (_, v))| (*id, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
