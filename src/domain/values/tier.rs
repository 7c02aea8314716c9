use serde::{Deserialize, Serialize};
use std::fmt;

/// Slack for float error when comparing a gap percentage to a band bound.
const GAP_TOLERANCE: f64 = 1e-9;

/// Display bucket, 1 (best) to 5 (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tier(u8);

impl Tier {
    pub const BEST: Tier = Tier(1);
    pub const WORST: Tier = Tier(5);

    /// Bucket a percentage gap from the top score. Upper bounds are
    /// inclusive: exactly 20% below the top is still tier 1, even when the
    /// division that produced `pct` lands a few ulps above the bound.
    pub fn from_gap_pct(pct: f64) -> Self {
        const BANDS: [f64; 4] = [20.0, 40.0, 60.0, 80.0];
        BANDS
            .iter()
            .position(|bound| pct <= bound + GAP_TOLERANCE)
            .map_or(Tier::WORST, |i| Tier(i as u8 + 1))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        assert_eq!(Tier::from_gap_pct(0.0), Tier(1));
        assert_eq!(Tier::from_gap_pct(20.0), Tier(1));
        assert_eq!(Tier::from_gap_pct(20.0001), Tier(2));
        assert_eq!(Tier::from_gap_pct(40.0), Tier(2));
        assert_eq!(Tier::from_gap_pct(60.0), Tier(3));
        assert_eq!(Tier::from_gap_pct(80.0), Tier(4));
        assert_eq!(Tier::from_gap_pct(80.001), Tier(5));
    }

    #[test]
    fn test_bound_absorbs_float_error() {
        assert_eq!(Tier::from_gap_pct(20.000000000000004), Tier(1));
        assert_eq!(Tier::from_gap_pct(79.99999999999999), Tier(4));
        assert_eq!(Tier::from_gap_pct(80.00000000000001), Tier(4));
    }
}
