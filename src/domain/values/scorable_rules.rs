//! Which strategy forecasts count towards accuracy.
//!
//! A strategy ranks every player in a position, but only its top `K` picks
//! per position are scored. `K` comes from a per-position slot table. Early
//! gameweeks were scored with smaller slot counts; those are kept as an
//! explicit period-range table so historical accuracy stays reproducible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::values::ids::PeriodId;
use crate::domain::values::position::Position;

/// Slot counts that apply to an inclusive range of periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacySlotRule {
    /// First period the rule covers. Missing means "from the beginning".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<PeriodId>,
    /// Last period the rule covers (inclusive).
    pub through: PeriodId,
    pub slots: BTreeMap<Position, usize>,
}

impl LegacySlotRule {
    pub fn covers(&self, period: PeriodId) -> bool {
        self.from.map_or(true, |from| period >= from) && period <= self.through
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScorableRules {
    pub slots: BTreeMap<Position, usize>,
    #[serde(default)]
    pub legacy: Vec<LegacySlotRule>,
}

impl Default for ScorableRules {
    fn default() -> Self {
        let slots = BTreeMap::from([
            (Position::Gkp, 2),
            (Position::Def, 5),
            (Position::Mid, 5),
            (Position::Fwd, 3),
        ]);
        let legacy = vec![LegacySlotRule {
            from: None,
            through: 10,
            slots: BTreeMap::from([
                (Position::Gkp, 1),
                (Position::Def, 3),
                (Position::Mid, 3),
                (Position::Fwd, 2),
            ]),
        }];
        Self { slots, legacy }
    }
}

impl ScorableRules {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let rules: ScorableRules = serde_json::from_str(json)
            .map_err(|e| DomainError::Config(format!("Invalid scorable rules: {e}")))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for (i, rule) in self.legacy.iter().enumerate() {
            if let Some(from) = rule.from {
                if from > rule.through {
                    return Err(DomainError::Config(format!(
                        "legacy[{i}]: from ({from}) is after through ({})",
                        rule.through
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of top-ranked strategy picks that are scored for `position`
    /// in `period`. The first legacy rule covering the period wins; a
    /// position missing from a table scores nothing.
    pub fn slots_for(&self, period: PeriodId, position: Position) -> usize {
        let table = self
            .legacy
            .iter()
            .find(|rule| rule.covers(period))
            .map(|rule| &rule.slots)
            .unwrap_or(&self.slots);
        table.get(&position).copied().unwrap_or(0)
    }
}
