mod common;

use std::collections::BTreeMap;

use common::*;
use formcast::domain::ports::forecast_repository::ForecastFilter;
use formcast::domain::values::forecast_source::ForecastSource;
use formcast::domain::values::position::Position;
use formcast::domain::values::scorable_rules::ScorableRules;
use formcast::Formcast;

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("formcast.db");
    let path = path.to_str().unwrap();

    {
        let fc = Formcast::with_rules(path, ScorableRules::default()).unwrap();
        fc.import(&forwards_dataset()).unwrap();
        fc.strategy_add("form", points_strategy("linear")).unwrap();
        fc.rank("form", 4, Some(Position::Fwd)).unwrap();
    }

    let fc = Formcast::with_rules(path, ScorableRules::default()).unwrap();
    let strategy = fc.strategy("form").unwrap();
    assert_eq!(strategy.config, points_strategy("linear"));
    let rows = fc
        .forecasts(&ForecastFilter {
            source: Some(ForecastSource::Strategy(strategy.id)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].competitor_id, 1);
}

#[test]
fn test_stricter_rules_clear_stale_accuracy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("formcast.db");
    let path = path.to_str().unwrap();

    let strategy = {
        let fc = Formcast::with_rules(path, ScorableRules::default()).unwrap();
        fc.import(&forwards_dataset()).unwrap();
        let strategy = fc.strategy_add("form", points_strategy("none")).unwrap();
        fc.rank("form", 4, Some(Position::Fwd)).unwrap();
        assert_eq!(fc.evaluate(4).unwrap().evaluated, 2);
        strategy
    };

    let rules = ScorableRules {
        slots: BTreeMap::from([(Position::Fwd, 1)]),
        legacy: Vec::new(),
    };
    let fc = Formcast::with_rules(path, rules).unwrap();
    let report = fc.evaluate(4).unwrap();
    assert_eq!(report.scorable, 1);
    assert_eq!(report.cleared, 1);

    let rows = fc
        .forecasts(&ForecastFilter {
            source: Some(ForecastSource::Strategy(strategy.id)),
            ..Default::default()
        })
        .unwrap();
    assert!(rows[0].accuracy.is_some());
    assert!(rows[1].accuracy.is_none());
}

#[test]
fn test_rejected_dataset_writes_nothing() {
    let fc = setup();
    let mut dataset = forwards_dataset();
    dataset.availability.push(availability(1, 4, 150));
    assert!(fc.import(&dataset).is_err());
    assert!(fc.strategy_add("form", points_strategy("none")).is_ok());
    let report = fc.rank("form", 4, None).unwrap();
    assert_eq!(report.created, 0);
}
