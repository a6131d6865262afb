use std::fs;
use std::path::PathBuf;

use profile_sync_core::{StatValue, Tier, validate_record};
use profile_sync_parser::parser::{RecordParser, Section};
use profile_sync_parser::{parse_record, parse_record_with_report};

#[test]
fn test_parse_messi_fixture_matches_expected_record() {
    let text = fixture("messi.txt");
    let record = parse_record(&text);

    assert_eq!(record.basic_value("Name"), Some("L. Messi"));
    assert_eq!(record.positions.len(), 3);
    assert_eq!(record.tier_of("RWF"), Some(Tier::A));
    assert_eq!(record.tier_of("CF"), Some(Tier::B));
    assert_eq!(record.tier_of("AMF"), Some(Tier::B));
    assert_eq!(
        record.stats["Offensive Awareness"],
        StatValue::Number(85.0)
    );
    assert_eq!(record.skills.len(), 1);
    assert_eq!(record.skills.get("Long Range Drive"), Some(&true));
}

#[test]
fn test_parse_full_profile_fixture() {
    let text = fixture("full-profile.txt");
    let mut parser = RecordParser::new(&text);
    let record = parser.parse();

    assert_eq!(record.basic_value("Shirt Name"), Some("MESSI"));
    assert_eq!(record.basic_value("Foot"), Some("Left"));
    assert_eq!(record.basic_value("Position"), Some("RWF"));
    assert_eq!(record.appearance_value("Height"), Some("170cm"));
    assert_eq!(record.appearance_value("Weight"), Some("72kg"));
    assert_eq!(record.stats["Ball Control"], StatValue::Number(96.0));
    assert_eq!(record.stats["Form"], StatValue::Text("B".into()));
    assert_eq!(record.skills.len(), 3);
    assert_eq!(record.com_playing_styles.len(), 2);
    assert_eq!(record.playing_style.as_deref(), Some("Creative Playmaker"));

    assert_eq!(
        parser.diagnostics().headers,
        vec![
            Section::Appearance,
            Section::Stats,
            Section::Skills,
            Section::ComPlayingStyles,
            Section::PlayingStyle,
        ]
    );
    assert!(validate_record(&record).is_empty());
}

#[test]
fn test_parse_noisy_fixture_keeps_partial_record() {
    let text = fixture("noisy-profile.txt");
    let run = parse_record_with_report(&text);

    assert_eq!(run.record.basic_value("Name"), Some("K. Mbappé"));
    assert_eq!(run.record.stats["Speed"], StatValue::Number(99.0));
    assert_eq!(run.record.stats["Acceleration"], StatValue::Text("97+".into()));
    assert!(!run.record.skills.contains_key("Double Touch"));
    assert!(run.record.skills.contains_key("Acrobatic Finishing"));
    assert!(!run.diagnostics.skipped_lines.is_empty());
    assert!(run.diagnostics.coverage() < 1.0);
    assert!(validate_record(&run.record).is_empty());
}

#[test]
fn test_reparsing_yields_identical_record() {
    let text = fixture("full-profile.txt");
    assert_eq!(parse_record(&text), parse_record(&text));
}

#[test]
fn test_parse_run_serializes_for_reports() {
    let text = fixture("noisy-profile.txt");
    let run = parse_record_with_report(&text);
    let json = serde_json::to_value(&run).unwrap();

    assert_eq!(json["record"]["basic"]["Name"], "K. Mbappé");
    assert_eq!(json["record"]["stats"]["Speed"].as_f64(), Some(99.0));
    assert_eq!(json["record"]["positions"]["CF"], "A");
    assert_eq!(json["diagnostics"]["headers"][0], "stats");
    assert_eq!(json["diagnostics"]["headers"][1], "skills");
    let reasons: Vec<&str> = json["diagnostics"]["skipped_lines"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|line| line["reason"].as_str())
        .collect();
    assert!(reasons.contains(&"missing_colon"));
    assert!(reasons.contains(&"unmarked_entry"));
}

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("fixture should be readable")
}
