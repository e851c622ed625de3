//! Scoring engine.
//!
//! Pure, total functions over a validated [`AssessmentInput`]. Every call is
//! independent; [`assess`] is the single pipeline entry point and returns an
//! immutable [`AssessmentResult`].

use std::collections::BTreeSet;

use fibroscreen_core::catalog::{PainArea, SeverityLevel};
use fibroscreen_core::models::record::AssessmentRecord;
use fibroscreen_core::models::result::AssessmentResult;
use fibroscreen_core::models::submission::AssessmentInput;

use crate::criteria::{
    CRITERION_1A_MIN_SS, CRITERION_1A_MIN_WPI, CRITERION_1B_MIN_SS, CRITERION_1B_WPI,
};
use crate::scoring::ScoreEntry;

/// Widespread Pain Index: selected areas, not counting "None of these areas".
///
/// The sentinel is only excluded from the tally; it does not clear other
/// selections.
pub fn compute_wpi(selected_areas: &BTreeSet<PainArea>) -> u8 {
    selected_areas.iter().filter(|a| !a.is_sentinel()).count() as u8
}

/// SS Part 2a: sum of the three ratings (0–9).
pub fn compute_severity_subscore(
    fatigue: SeverityLevel,
    waking: SeverityLevel,
    cognitive: SeverityLevel,
) -> u8 {
    fatigue.value() + waking.value() + cognitive.value()
}

/// SS Part 2b: number of other symptoms mapped onto 0–3.
pub fn compute_symptom_count_subscore(symptom_count: usize) -> u8 {
    match symptom_count {
        0 => 0,
        1..=10 => 1,
        11..=24 => 2,
        _ => 3,
    }
}

/// Criterion 1a (WPI ≥ 7 and SS ≥ 5) or criterion 1b (WPI 3–6 and SS ≥ 9).
pub fn evaluate_diagnostic_criteria(wpi: u8, total_ss: u8) -> bool {
    let criterion_1a = wpi >= CRITERION_1A_MIN_WPI && total_ss >= CRITERION_1A_MIN_SS;
    let criterion_1b = CRITERION_1B_WPI.contains(&wpi) && total_ss >= CRITERION_1B_MIN_SS;
    criterion_1a || criterion_1b
}

/// Score one complete submission.
pub fn assess(input: &AssessmentInput) -> AssessmentResult {
    let wpi = compute_wpi(&input.pain_areas);
    let ss_2a = compute_severity_subscore(
        input.severity.fatigue,
        input.severity.waking_unrefreshed,
        input.severity.cognitive,
    );
    let ss_2b = compute_symptom_count_subscore(input.other_symptoms.len());
    let meets = evaluate_diagnostic_criteria(wpi, ss_2a + ss_2b);

    let result = AssessmentResult::new(wpi, ss_2a, ss_2b, meets);
    tracing::debug!(
        wpi,
        ss_2a,
        ss_2b,
        total_ss = result.total_ss_score(),
        meets_criteria = meets,
        "assessment scored"
    );
    result
}

/// Score entries for a scored submission, keyed by fm2010 subscale and
/// domain ids.
pub fn score_entries(input: &AssessmentInput, result: &AssessmentResult) -> Vec<ScoreEntry> {
    vec![
        ScoreEntry::new("wpi", result.wpi_score()),
        ScoreEntry::new("fatigue", input.severity.fatigue.value()),
        ScoreEntry::new("waking_unrefreshed", input.severity.waking_unrefreshed.value()),
        ScoreEntry::new("cognitive", input.severity.cognitive.value()),
        ScoreEntry::new("ss_2a", result.ss_2a_score()),
        ScoreEntry::new("other_symptoms", result.ss_2b_score()),
        ScoreEntry::new("ss_2b", result.ss_2b_score()),
        ScoreEntry::new("total_ss", result.total_ss_score()),
    ]
}

/// Score entries recoverable from an exported record. Item ratings are not
/// exported, so only the composites are present.
pub fn record_entries(record: &AssessmentRecord) -> Vec<ScoreEntry> {
    vec![
        ScoreEntry::new("wpi", record.wpi_score),
        ScoreEntry::new("ss_2a", record.ss_2a_score),
        ScoreEntry::new("ss_2b", record.ss_2b_score),
        ScoreEntry::new("total_ss", record.total_ss_score),
    ]
}
