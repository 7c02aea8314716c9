use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who produced a forecast.
///
/// Strategy forecasts are generated by a ranking run and only their top
/// slots count towards accuracy; user forecasts are hand-picked and always
/// count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ForecastSource {
    Strategy(String),
    User(String),
}

impl ForecastSource {
    pub fn is_strategy(&self) -> bool {
        matches!(self, ForecastSource::Strategy(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ForecastSource::Strategy(_) => "strategy",
            ForecastSource::User(_) => "user",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ForecastSource::Strategy(id) | ForecastSource::User(id) => id,
        }
    }

    pub fn from_parts(kind: &str, id: &str) -> Result<Self, String> {
        match kind {
            "strategy" => Ok(ForecastSource::Strategy(id.to_string())),
            "user" => Ok(ForecastSource::User(id.to_string())),
            _ => Err(format!("Unknown forecast source kind: {kind}")),
        }
    }
}

impl fmt::Display for ForecastSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}

impl FromStr for ForecastSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid forecast source: '{s}'. Use 'strategy:<id>' or 'user:<name>'"))?;
        if id.is_empty() {
            return Err(format!("Forecast source '{s}' has an empty id"));
        }
        Self::from_parts(&kind.to_lowercase(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            "user:alice".parse::<ForecastSource>().unwrap(),
            ForecastSource::User("alice".into())
        );
        assert!("strategy:".parse::<ForecastSource>().is_err());
        assert!("robot:x".parse::<ForecastSource>().is_err());
        assert!("alice".parse::<ForecastSource>().is_err());
    }

    #[test]
    fn test_display() {
        let s = ForecastSource::Strategy("abc".into());
        assert_eq!(s.to_string(), "strategy:abc");
        assert!(s.is_strategy());
    }
}
