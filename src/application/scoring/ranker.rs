//! Position rankings.
//!
//! [`Ranker`] borrows a [`PlayerScorer`] and orders players by score. Ties
//! are broken by ascending competitor id so that identical inputs always
//! produce identical rankings.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use crate::application::scoring::player_scorer::PlayerScorer;
use crate::domain::snapshot::Snapshot;
use crate::domain::values::ids::{CompetitorId, PeriodId};
use crate::domain::values::position::Position;
use crate::domain::values::strategy_config::StrategyConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub competitor_id: CompetitorId,
    pub score: f64,
    /// 1-based position in the sorted order. Unique within a ranking.
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionRanking {
    pub position: Position,
    pub candidates: Vec<RankedCandidate>,
}

pub struct Ranker<'s> {
    scorer: &'s PlayerScorer<'s>,
}

impl<'s> Ranker<'s> {
    pub fn new(scorer: &'s PlayerScorer<'s>) -> Self {
        Self { scorer }
    }

    pub fn rank(
        &self,
        competitors: &[CompetitorId],
        config: &StrategyConfig,
        target: PeriodId,
    ) -> Vec<RankedCandidate> {
        let mut scored: Vec<(CompetitorId, f64)> = competitors
            .iter()
            .map(|&id| (id, self.scorer.score(id, config, target)))
            .collect();
        scored.sort_by(|a, b| compare_scored(*a, *b));

        scored
            .into_iter()
            .enumerate()
            .map(|(i, (competitor_id, score))| RankedCandidate {
                competitor_id,
                score,
                rank: i as u32 + 1,
            })
            .collect()
    }

    /// Rank every player of one position in the snapshot.
    pub fn rank_position(
        &self,
        snapshot: &Snapshot,
        position: Position,
        config: &StrategyConfig,
        target: PeriodId,
    ) -> PositionRanking {
        let competitors = snapshot.competitors_in(position);
        PositionRanking {
            position,
            candidates: self.rank(&competitors, config, target),
        }
    }

    /// Rank each position independently, in parallel. Output follows the
    /// order of `positions`.
    pub fn rank_positions(
        &self,
        snapshot: &Snapshot,
        positions: &[Position],
        config: &StrategyConfig,
        target: PeriodId,
    ) -> Vec<PositionRanking> {
        positions
            .par_iter()
            .map(|&position| self.rank_position(snapshot, position, config, target))
            .collect()
    }
}

/// Score descending, then competitor id ascending.
fn compare_scored(a: (CompetitorId, f64), b: (CompetitorId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::competitor::Competitor;
    use crate::domain::entities::samples::StatisticSample;
    use crate::domain::values::metric::Metric;
    use crate::domain::values::recency::Recency;
    use crate::domain::values::strategy_config::PerformanceTerm;

    fn add_series(snap: &mut Snapshot, id: CompetitorId, position: Position, values: &[f64]) {
        snap.add_competitor(Competitor {
            id,
            name: format!("P{id}"),
            team: 1,
            position,
        });
        for (i, v) in values.iter().enumerate() {
            snap.add_statistic(&StatisticSample {
                competitor_id: id,
                period_id: i as PeriodId + 1,
                metric: Metric::Points,
                value: *v,
            });
        }
    }

    fn config(recency: Recency) -> StrategyConfig {
        StrategyConfig {
            performance: vec![PerformanceTerm {
                metric: Metric::Points,
                weight: 1.0,
                lookback: 3,
                recency,
                min_availability: None,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_ranks_descending_by_score() {
        let mut snap = Snapshot::new();
        add_series(&mut snap, 3, Position::Mid, &[2.0, 3.0, 4.0]);
        add_series(&mut snap, 1, Position::Mid, &[10.0, 12.0, 8.0]);
        add_series(&mut snap, 2, Position::Mid, &[6.0, 7.0, 9.0]);
        let scorer = PlayerScorer::new(&snap);
        let ranked = Ranker::new(&scorer).rank(&[3, 1, 2], &config(Recency::None), 4);
        let order: Vec<_> = ranked.iter().map(|c| (c.competitor_id, c.rank)).collect();
        assert_eq!(order, vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_ties_broken_by_competitor_id() {
        let mut snap = Snapshot::new();
        add_series(&mut snap, 9, Position::Def, &[5.0]);
        add_series(&mut snap, 4, Position::Def, &[5.0]);
        add_series(&mut snap, 7, Position::Def, &[5.0]);
        let scorer = PlayerScorer::new(&snap);
        let ranker = Ranker::new(&scorer);
        let a = ranker.rank(&[9, 4, 7], &config(Recency::None), 2);
        let b = ranker.rank(&[7, 9, 4], &config(Recency::None), 2);
        let ids: Vec<_> = a.iter().map(|c| c.competitor_id).collect();
        assert_eq!(ids, vec![4, 7, 9]);
        assert_eq!(a, b);
        assert_eq!(a.iter().map(|c| c.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_positions_keeps_positions_apart() {
        let mut snap = Snapshot::new();
        add_series(&mut snap, 1, Position::Gkp, &[3.0]);
        add_series(&mut snap, 2, Position::Fwd, &[8.0]);
        add_series(&mut snap, 3, Position::Fwd, &[9.0]);
        let scorer = PlayerScorer::new(&snap);
        let rankings = Ranker::new(&scorer).rank_positions(
            &snap,
            &[Position::Gkp, Position::Fwd],
            &config(Recency::None),
            2,
        );
        assert_eq!(rankings[0].position, Position::Gkp);
        assert_eq!(rankings[0].candidates.len(), 1);
        assert_eq!(rankings[0].candidates[0].rank, 1);
        assert_eq!(rankings[1].candidates[0].competitor_id, 3);
        assert_eq!(rankings[1].candidates[1].rank, 2);
    }

    #[test]
    fn test_improving_player_gains_under_exponential() {
        // Same total, opposite trends.
        let mut snap = Snapshot::new();
        add_series(&mut snap, 1, Position::Mid, &[2.0, 6.0, 10.0]);
        add_series(&mut snap, 2, Position::Mid, &[10.0, 6.0, 2.0]);
        let scorer = PlayerScorer::new(&snap);
        let gap = |recency| {
            let c = config(recency);
            scorer.score(1, &c, 4) - scorer.score(2, &c, 4)
        };
        assert_eq!(gap(Recency::None), 0.0);
        assert!(gap(Recency::Linear) > 0.0);
        assert!(gap(Recency::Exponential) > gap(Recency::Linear));

        let ranked = Ranker::new(&scorer).rank(&[1, 2], &config(Recency::Exponential), 4);
        assert_eq!(ranked[0].competitor_id, 1);
    }

    #[test]
    fn test_raising_a_value_never_drops_rank() {
        let base = [[4.0, 5.0, 6.0], [5.0, 5.0, 5.0], [7.0, 1.0, 6.0]];
        let mut last_rank = u32::MAX;
        for bump in [0.0, 1.0, 2.5, 4.0, 10.0] {
            let mut snap = Snapshot::new();
            for (i, values) in base.iter().enumerate() {
                let mut values = *values;
                if i == 0 {
                    values[1] += bump;
                }
                add_series(&mut snap, i as CompetitorId + 1, Position::Mid, &values);
            }
            let scorer = PlayerScorer::new(&snap);
            let ranked = Ranker::new(&scorer).rank(&[1, 2, 3], &config(Recency::None), 4);
            let rank = ranked.iter().find(|c| c.competitor_id == 1).unwrap().rank;
            assert!(rank <= last_rank);
            last_rank = rank;
        }
        assert_eq!(last_rank, 1);
    }
}
