//! Recency weighting for lookback windows.
//!
//! Samples inside a window are indexed oldest to newest, so a higher index
//! is a more recent period and never receives a smaller weight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recency {
    /// Every sample counts the same.
    #[default]
    None,
    /// `index + 1`: weights grow arithmetically towards the newest sample.
    Linear,
    /// `2^index`: each step towards the present doubles the weight.
    Exponential,
}

impl Recency {
    /// Weight for the sample at `index` (zero-based, oldest first).
    pub fn weight(self, index: usize) -> f64 {
        match self {
            Recency::None => 1.0,
            Recency::Linear => index as f64 + 1.0,
            Recency::Exponential => 2.0_f64.powi(index as i32),
        }
    }
}

impl fmt::Display for Recency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recency::None => write!(f, "none"),
            Recency::Linear => write!(f, "linear"),
            Recency::Exponential => write!(f, "exponential"),
        }
    }
}

impl FromStr for Recency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Recency::None),
            "linear" => Ok(Recency::Linear),
            "exponential" => Ok(Recency::Exponential),
            _ => Err(format!(
                "Unknown recency scheme: '{s}'. Use 'none', 'linear' or 'exponential'"
            )),
        }
    }
}
