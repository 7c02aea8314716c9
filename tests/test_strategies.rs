mod common;

use common::*;
use formcast::domain::values::strategy_config::StrategyConfig;

#[test]
fn test_add_assigns_versions_per_name() {
    let fc = setup();
    let v1 = fc.strategy_add("form", points_strategy("none")).unwrap();
    let v2 = fc.strategy_add("form", points_strategy("linear")).unwrap();
    let other = fc.strategy_add("fixtures", points_strategy("none")).unwrap();

    assert_eq!(v1.version, 1);
    assert_eq!(v2.version, 2);
    assert_eq!(other.version, 1);
    assert_ne!(v1.id, v2.id);

    let listed = fc.strategies().unwrap();
    assert_eq!(listed.len(), 3);
}

#[test]
fn test_resolve_by_name_picks_latest() {
    let fc = setup();
    let v1 = fc.strategy_add("form", points_strategy("none")).unwrap();
    let v2 = fc.strategy_add("form", points_strategy("exponential")).unwrap();

    assert_eq!(fc.strategy("form").unwrap().id, v2.id);
    // Older versions stay reachable by id.
    let old = fc.strategy(&v1.id).unwrap();
    assert_eq!(old.version, 1);
    assert_eq!(old.config, points_strategy("none"));
}

#[test]
fn test_blank_name_rejected() {
    let fc = setup();
    assert!(fc.strategy_add("   ", points_strategy("none")).is_err());
}

#[test]
fn test_invalid_config_rejected_before_storage() {
    let fc = setup();
    let config = StrategyConfig {
        performance: Vec::new(),
        fixture: Vec::new(),
        availability: None,
    };
    assert!(fc.strategy_add("empty", config).is_err());
    assert!(fc.strategies().unwrap().is_empty());
}

#[test]
fn test_unknown_metric_rejected_at_parse() {
    let err = StrategyConfig::from_json(
        r#"{"performance": [{"metric": "style_points", "weight": 1.0, "lookback": 3}]}"#,
    );
    assert!(err.is_err());
}

#[test]
fn test_unknown_recency_rejected_at_parse() {
    let err = StrategyConfig::from_json(
        r#"{"performance": [{"metric": "points", "weight": 1.0, "lookback": 3, "recency": "quadratic"}]}"#,
    );
    assert!(err.is_err());
}
