use fibroscreen_core::catalog::{PainArea, SeverityLevel, Symptom};
use fibroscreen_core::models::submission::{AssessmentInput, SeverityRatings};
use fibroscreen_instruments::engine::{assess, score_entries};
use fibroscreen_instruments::error::InstrumentError;
use fibroscreen_instruments::scoring::{ScoreEntry, ScoreType};
use fibroscreen_instruments::{all_instruments, get_instrument, require_instrument};

#[test]
fn fm2010_is_registered() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["fm2010"]);
    assert!(get_instrument("fm2010").is_some());
    assert!(get_instrument("phq9").is_none());
}

#[test]
fn require_instrument_reports_unknown_id() {
    let err = require_instrument("phq9").err().unwrap();
    assert_eq!(err.to_string(), "unknown instrument: phq9");
}

#[test]
fn domains_cover_wpi_and_both_ss_parts() {
    let instrument = require_instrument("fm2010").unwrap();
    let ids: Vec<&str> = instrument.domains().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["widespread_pain_index", "ss_2a", "ss_2b", "total_ss"]);

    let ss_2a = &instrument.domains()[1];
    assert_eq!(ss_2a.subscales.len(), 3);
    assert!(ss_2a.subscales.iter().all(|s| s.score_type == ScoreType::Rating));
    assert_eq!(ss_2a.composite_range.unwrap().max, 9);
}

#[test]
fn scored_submission_passes_validation() {
    let instrument = require_instrument("fm2010").unwrap();
    let input = AssessmentInput::new(
        PainArea::ALL,
        SeverityRatings::new(SeverityLevel::Severe, SeverityLevel::Severe, SeverityLevel::Severe),
        Symptom::all(),
    );
    let result = assess(&input);

    let entries = score_entries(&input, &result);
    assert!(instrument.validate_scores(&entries).is_empty());
    assert!(instrument.check_scores(&entries).is_ok());
}

#[test]
fn out_of_range_composite_is_reported() {
    let instrument = require_instrument("fm2010").unwrap();
    let errors = instrument.validate_scores(&[
        ScoreEntry::new("total_ss", 13u32),
        ScoreEntry::new("fatigue", 2u32),
    ]);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].subscale_id, "total_ss");
    assert_eq!(
        errors[0].message,
        "Fibromyalgia Diagnostic Criteria (2010): Symptom Severity Total score 13 is outside range [0, 12]"
    );
}

#[test]
fn check_scores_rejects_unknown_ids() {
    let instrument = require_instrument("fm2010").unwrap();
    let err = instrument
        .check_scores(&[ScoreEntry::new("tender_points", 4u32)])
        .unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::UnknownSubscale { ref subscale_id, .. } if subscale_id == "tender_points"
    ));
}

#[test]
fn describe_lists_ranges() {
    let text = require_instrument("fm2010").unwrap().describe();
    assert!(text.starts_with("## Fibromyalgia Diagnostic Criteria (2010) (fm2010)"));
    assert!(text.contains("### Symptom Severity Part 2a [0-9]"));
    assert!(text.contains("- Waking unrefreshed (waking_unrefreshed): 0-3"));
}
