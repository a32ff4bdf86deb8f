use cognita_core::models::subtest::SubtestId;
use cognita_instruments::age::AgeBracket;
use cognita_instruments::error::InstrumentError;
use cognita_instruments::scaled::{ScaledNormTable, ScaledScoreProvider};

const TABLE: &str = r#"{
    "scale_type": "wisc",
    "brackets": {
        "9:4-9:7": {
            "sm": [
                { "raw_min": 0, "raw_max": 3, "scaled": 1 },
                { "raw_min": 4, "raw_max": 12, "scaled": 6 },
                { "raw_min": 13, "raw_max": 20, "scaled": 10 },
                { "raw_min": 21, "raw_max": 44, "scaled": 15 }
            ]
        }
    }
}"#;

fn bracket(text: &str) -> AgeBracket {
    text.parse().unwrap()
}

#[test]
fn raw_scores_map_through_bands() {
    let table = ScaledNormTable::from_json(TABLE).unwrap();
    let b = bracket("9:4-9:7");
    assert_eq!(table.scaled_score(SubtestId::Sm, b, 0), Some(1));
    assert_eq!(table.scaled_score(SubtestId::Sm, b, 12), Some(6));
    assert_eq!(table.scaled_score(SubtestId::Sm, b, 13), Some(10));
    assert_eq!(table.scaled_score(SubtestId::Sm, b, 44), Some(15));
}

#[test]
fn missing_entries_are_absent() {
    let table = ScaledNormTable::from_json(TABLE).unwrap();
    assert_eq!(table.scaled_score(SubtestId::Sm, bracket("9:4-9:7"), 45), None);
    assert_eq!(table.scaled_score(SubtestId::Vc, bracket("9:4-9:7"), 10), None);
    assert_eq!(table.scaled_score(SubtestId::Sm, bracket("9:8-9:11"), 10), None);
}

#[test]
fn overlapping_bands_are_rejected() {
    let json = r#"{
        "scale_type": "wisc",
        "brackets": {
            "6:0-6:3": {
                "cd": [
                    { "raw_min": 10, "raw_max": 20, "scaled": 8 },
                    { "raw_min": 0, "raw_max": 10, "scaled": 5 }
                ]
            }
        }
    }"#;
    let err = ScaledNormTable::from_json(json).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidScaledTable(_)));
}

#[test]
fn unknown_bracket_keys_are_rejected() {
    let json = r#"{ "scale_type": "wisc", "brackets": { "9:5-9:8": {} } }"#;
    assert!(ScaledNormTable::from_json(json).is_err());
}
