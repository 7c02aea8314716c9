use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing position. Competitors are only ever ranked against others in the
/// same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "goalkeeper")]
    Gkp,
    #[serde(alias = "defender")]
    Def,
    #[serde(alias = "midfielder")]
    Mid,
    #[serde(alias = "forward")]
    Fwd,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Gkp, Position::Def, Position::Mid, Position::Fwd];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Gkp => write!(f, "gkp"),
            Position::Def => write!(f, "def"),
            Position::Mid => write!(f, "mid"),
            Position::Fwd => write!(f, "fwd"),
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gkp" | "gk" | "goalkeeper" => Ok(Position::Gkp),
            "def" | "defender" => Ok(Position::Def),
            "mid" | "midfielder" => Ok(Position::Mid),
            "fwd" | "forward" => Ok(Position::Fwd),
            _ => Err(format!("Unknown position: {s}")),
        }
    }
}
