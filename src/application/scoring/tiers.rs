//! Tier buckets for display.
//!
//! Tiers measure how far a score sits below the best positive score in the
//! list, in 20% bands. A list without any positive score puts everyone in
//! the bottom tier.

use serde::Serialize;

use crate::domain::values::ids::CompetitorId;
use crate::domain::values::tier::Tier;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierAssignment {
    pub competitor_id: CompetitorId,
    pub tier: Tier,
}

/// Assign a tier to each `(competitor, score)`; output order follows input.
/// A missing score is always tier 5.
pub fn classify_tiers<I>(candidates: I) -> Vec<TierAssignment>
where
    I: IntoIterator<Item = (CompetitorId, Option<f64>)>,
{
    let candidates: Vec<(CompetitorId, Option<f64>)> = candidates.into_iter().collect();
    let top = top_score(&candidates);

    candidates
        .into_iter()
        .map(|(competitor_id, score)| TierAssignment {
            competitor_id,
            tier: tier_for(score, top),
        })
        .collect()
}

fn top_score(candidates: &[(CompetitorId, Option<f64>)]) -> f64 {
    candidates
        .iter()
        .filter_map(|(_, s)| *s)
        .filter(|s| *s > 0.0)
        .fold(0.0, f64::max)
}

fn tier_for(score: Option<f64>, top: f64) -> Tier {
    match score {
        Some(score) if top != 0.0 => Tier::from_gap_pct((top - score) / top * 100.0),
        _ => Tier::WORST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(scores: &[Option<f64>]) -> Vec<u8> {
        classify_tiers(
            scores
                .iter()
                .enumerate()
                .map(|(i, s)| (i as CompetitorId, *s)),
        )
        .into_iter()
        .map(|t| t.tier.value())
        .collect()
    }

    #[test]
    fn test_bands() {
        let t = tiers(&[
            Some(100.0),
            Some(80.0),
            Some(79.0),
            Some(60.0),
            Some(45.0),
            Some(20.0),
            Some(19.999),
        ]);
        assert_eq!(t, vec![1, 1, 2, 2, 3, 4, 5]);
    }

    #[test]
    fn test_exact_twenty_percent_is_tier_one() {
        assert_eq!(tiers(&[Some(10.0), Some(8.0)]), vec![1, 1]);
    }

    #[test]
    fn test_exact_twenty_percent_with_inexact_floats() {
        assert_eq!(tiers(&[Some(12.0), Some(9.6)]), vec![1, 1]);
        assert_eq!(tiers(&[Some(3.0), Some(2.4)]), vec![1, 1]);
        assert_eq!(tiers(&[Some(7.5), Some(6.0)]), vec![1, 1]);
        assert_eq!(tiers(&[Some(12.0), Some(9.599)]), vec![1, 2]);
    }

    #[test]
    fn test_just_over_eighty_percent_is_tier_five() {
        // 80.001% below the top.
        assert_eq!(tiers(&[Some(100_000.0), Some(19_999.0)]), vec![1, 5]);
    }

    #[test]
    fn test_missing_score_is_tier_five() {
        assert_eq!(tiers(&[Some(5.0), None]), vec![1, 5]);
    }

    #[test]
    fn test_no_positive_scores() {
        assert_eq!(tiers(&[Some(0.0), Some(-3.0), None]), vec![5, 5, 5]);
        assert!(tiers(&[]).is_empty());
    }

    #[test]
    fn test_negative_scores_fall_to_bottom() {
        assert_eq!(tiers(&[Some(10.0), Some(-1.0)]), vec![1, 5]);
    }
}
