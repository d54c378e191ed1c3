//! Formatter tests split by format.


use pokedex_client::{CreatureRecord, LookupFailure, LookupOutcome, SearchReport};

/// Report with one card (pikachu) and one failed identifier.
pub(super) fn partial_report() -> SearchReport {
    let record: CreatureRecord =
        serde_json::from_value(pokedex_client::testing::load_fixture("creature/pikachu.json"))
            .expect("fixture parses");
    SearchReport::from_outcomes(vec![
        LookupOutcome::success("pikachu", record),
        LookupOutcome::failure("bogus123", LookupFailure::NotFound),
    ])
}

#[test]
fn test_output_format_from_str() {
    use super::OutputFormat;

    assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
    assert!(OutputFormat::from_str("xml").is_err());
}
