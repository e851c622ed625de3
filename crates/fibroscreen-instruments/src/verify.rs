//! Consistency checks for exported assessment records.

use std::collections::BTreeSet;
use std::fmt::Display;

use fibroscreen_core::catalog::{PainArea, Symptom};
use fibroscreen_core::models::record::AssessmentRecord;

use crate::engine::{
    compute_symptom_count_subscore, compute_wpi, evaluate_diagnostic_criteria, record_entries,
};
use crate::error::InstrumentError;
use crate::instruments::fm2010::Fm2010;
use crate::Instrument;

/// Check that a record's scores are in range, its labels name catalog
/// entries, and its scores agree with its own pain areas and symptoms.
///
/// SS Part 2a cannot be recomputed because item ratings are not exported.
pub fn verify_record(record: &AssessmentRecord) -> Result<(), InstrumentError> {
    Fm2010.check_scores(&record_entries(record))?;

    let pain_areas = record
        .pain_areas
        .iter()
        .map(|label| label.parse::<PainArea>())
        .collect::<Result<BTreeSet<_>, _>>()?;
    let symptoms = record
        .other_symptoms
        .iter()
        .map(|label| label.parse::<Symptom>())
        .collect::<Result<BTreeSet<_>, _>>()?;

    ensure("wpi_score", compute_wpi(&pain_areas), record.wpi_score)?;

    let ss_2b = compute_symptom_count_subscore(symptoms.len());
    ensure("ss_2b_score", ss_2b, record.ss_2b_score)?;

    let total = record.ss_2a_score + record.ss_2b_score;
    ensure("total_ss_score", total, record.total_ss_score)?;

    let meets = evaluate_diagnostic_criteria(record.wpi_score, record.total_ss_score);
    ensure("meets_diagnostic_criteria", meets, record.meets_diagnostic_criteria)?;

    tracing::debug!(date = %record.assessment_date, "record verified");
    Ok(())
}

fn ensure<T: PartialEq + Display>(field: &str, expected: T, actual: T) -> Result<(), InstrumentError> {
    if expected == actual {
        Ok(())
    } else {
        Err(InstrumentError::Inconsistent {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}
