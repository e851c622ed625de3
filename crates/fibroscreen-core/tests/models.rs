use fibroscreen_core::catalog::{PainArea, SeverityLevel, Symptom};
use fibroscreen_core::error::CoreError;
use fibroscreen_core::export_names;
use fibroscreen_core::models::record::AssessmentRecord;
use fibroscreen_core::models::result::AssessmentResult;
use fibroscreen_core::models::submission::{AssessmentInput, RawSubmission, SeverityRatings};
use jiff::civil::date;
use pretty_assertions::assert_eq;

#[test]
fn raw_submission_accepts_ids_and_labels() {
    let raw = RawSubmission::from_json(
        r#"{
            "pain_areas": ["neck", "Chest", "neck"],
            "fatigue": 3,
            "waking_unrefreshed": 2,
            "cognitive": 1,
            "other_symptoms": ["Headache", "dry_eyes"]
        }"#,
    )
    .unwrap();

    let input = AssessmentInput::try_from(raw).unwrap();
    assert_eq!(
        input.pain_areas.iter().copied().collect::<Vec<_>>(),
        vec![PainArea::Chest, PainArea::Neck]
    );
    assert_eq!(input.severity.fatigue, SeverityLevel::Severe);
    assert_eq!(input.severity.waking_unrefreshed, SeverityLevel::Moderate);
    assert_eq!(input.severity.cognitive, SeverityLevel::Mild);
    assert_eq!(input.other_symptoms.len(), 2);
}

#[test]
fn raw_submission_defaults_to_empty_form() {
    let raw = RawSubmission::from_json("{}").unwrap();
    let input = AssessmentInput::try_from(raw).unwrap();
    assert_eq!(input, AssessmentInput::default());
}

#[test]
fn raw_submission_rejects_out_of_range_rating() {
    let raw = RawSubmission {
        waking_unrefreshed: 4,
        ..Default::default()
    };
    match AssessmentInput::try_from(raw) {
        Err(CoreError::SeverityOutOfRange { field, value }) => {
            assert_eq!(field, "waking_unrefreshed");
            assert_eq!(value, 4);
        }
        other => panic!("expected SeverityOutOfRange, got {other:?}"),
    }
}

#[test]
fn raw_submission_rejects_unknown_names() {
    let raw = RawSubmission {
        pain_areas: vec!["Knee".to_string()],
        ..Default::default()
    };
    assert!(matches!(
        AssessmentInput::try_from(raw),
        Err(CoreError::UnknownPainArea(name)) if name == "Knee"
    ));
}

#[test]
fn result_total_is_sum_of_parts() {
    let result = AssessmentResult::new(4, 7, 2, true);
    assert_eq!(result.total_ss_score(), 9);
}

#[test]
fn record_uses_labels_and_excludes_sentinel_from_count() {
    let input = AssessmentInput::new(
        [PainArea::Neck, PainArea::NoneOfTheseAreas, PainArea::JawLeft],
        SeverityRatings::default(),
        [Symptom::Nausea],
    );
    let result = AssessmentResult::new(2, 0, 1, false);
    let at = date(2024, 3, 9).at(14, 5, 7, 0);

    let record = AssessmentRecord::new(&input, &result, at);
    assert_eq!(record.assessment_date, "2024-03-09 14:05:07");
    assert_eq!(
        record.pain_areas,
        vec!["Jaw left", "Neck", "None of these areas"]
    );
    assert_eq!(record.other_symptoms, vec!["Nausea"]);
    assert_eq!(record.pain_area_count(), 2);
    assert_eq!(record.symptom_count(), 1);
}

#[test]
fn export_names_share_a_timestamp_stem() {
    let at = date(2025, 1, 2).at(3, 4, 5, 0);
    assert_eq!(export_names::json(at), "fibromyalgia_assessment_20250102_030405.json");
    assert_eq!(export_names::csv(at), "fibromyalgia_assessment_20250102_030405.csv");
    assert_eq!(export_names::report(at), "fibromyalgia_assessment_20250102_030405.txt");
}
