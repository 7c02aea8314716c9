//! Strategy configuration.
//!
//! A strategy is a weighted sum of terms:
//!
//! - [`PerformanceTerm`]: a recency-weighted average of a metric over the most
//!   recent periods in which the player was available
//! - [`FixtureTerm`]: a forward-looking fixture metric for the target period
//! - [`AvailabilityTerm`]: a multiplier (and floor penalty) driven by the
//!   player's chance of playing in the target period
//!
//! Configs are parsed and validated once, up front. Scoring code never sees
//! an unvalidated config.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::values::metric::Metric;
use crate::domain::values::recency::Recency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerformanceTerm {
    pub metric: Metric,
    pub weight: f64,
    /// Number of available prior periods to average over.
    pub lookback: usize,
    #[serde(default)]
    pub recency: Recency,
    /// Minimum chance of playing (0–100) for a past period to count as
    /// available. Missing means every past period counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_availability: Option<u8>,
}

impl PerformanceTerm {
    pub fn min_availability(&self) -> u8 {
        self.min_availability.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureTerm {
    pub metric: Metric,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvailabilityTerm {
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    #[serde(default)]
    pub performance: Vec<PerformanceTerm>,
    #[serde(default)]
    pub fixture: Vec<FixtureTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityTerm>,
}

impl StrategyConfig {
    /// Parse and validate a JSON strategy config.
    ///
    /// Unknown metrics, unknown recency schemes and unknown fields fail here,
    /// before any scoring runs.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let config: StrategyConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::Config(format!("Invalid strategy config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.performance.is_empty() && self.fixture.is_empty() {
            return Err(DomainError::Config(
                "Strategy needs at least one performance or fixture term".into(),
            ));
        }

        for (i, term) in self.performance.iter().enumerate() {
            check_weight(term.weight, &format!("performance[{i}].weight"))?;
            if term.lookback == 0 {
                return Err(DomainError::Config(format!(
                    "performance[{i}].lookback must be at least 1"
                )));
            }
            if let Some(min) = term.min_availability {
                if min > 100 {
                    return Err(DomainError::Config(format!(
                        "performance[{i}].min_availability must be 0-100, got {min}"
                    )));
                }
            }
        }

        for (i, term) in self.fixture.iter().enumerate() {
            check_weight(term.weight, &format!("fixture[{i}].weight"))?;
            if !term.metric.is_fixture() {
                return Err(DomainError::Config(format!(
                    "fixture[{i}].metric '{}' is not a fixture metric (use expected_goals_for or expected_goals_against)",
                    term.metric
                )));
            }
        }

        if let Some(term) = &self.availability {
            check_weight(term.weight, "availability.weight")?;
        }

        Ok(())
    }
}

fn check_weight(weight: f64, field: &str) -> Result<(), DomainError> {
    if !weight.is_finite() {
        return Err(DomainError::Config(format!("{field} must be a finite number")));
    }
    Ok(())
}
