use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{PainArea, Symptom};
use crate::models::result::AssessmentResult;
use crate::models::submission::AssessmentInput;

/// `strftime` pattern of [`AssessmentRecord::assessment_date`].
pub const ASSESSMENT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The exported form of a completed assessment.
///
/// Field names and label strings are the interchange format; keep them
/// stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub assessment_date: String,
    pub wpi_score: u8,
    pub ss_2a_score: u8,
    pub ss_2b_score: u8,
    pub total_ss_score: u8,
    pub meets_diagnostic_criteria: bool,
    pub pain_areas: Vec<String>,
    pub other_symptoms: Vec<String>,
}

impl AssessmentRecord {
    pub fn new(
        input: &AssessmentInput,
        result: &AssessmentResult,
        assessed_at: jiff::civil::DateTime,
    ) -> Self {
        Self {
            assessment_date: assessed_at.strftime(ASSESSMENT_DATE_FORMAT).to_string(),
            wpi_score: result.wpi_score(),
            ss_2a_score: result.ss_2a_score(),
            ss_2b_score: result.ss_2b_score(),
            total_ss_score: result.total_ss_score(),
            meets_diagnostic_criteria: result.meets_criteria(),
            pain_areas: input.pain_areas.iter().map(|a| a.label().to_string()).collect(),
            other_symptoms: input
                .other_symptoms
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
        }
    }

    /// Distinct catalog areas named by `pain_areas` (ids or labels, any
    /// case). Names outside the catalog are skipped.
    pub fn pain_area_set(&self) -> BTreeSet<PainArea> {
        self.pain_areas.iter().filter_map(|a| PainArea::lookup(a)).collect()
    }

    /// Distinct catalog symptoms named by `other_symptoms`.
    pub fn symptom_set(&self) -> BTreeSet<Symptom> {
        self.other_symptoms.iter().filter_map(|s| Symptom::lookup(s)).collect()
    }

    /// Distinct pain areas listed, not counting "None of these areas".
    pub fn pain_area_count(&self) -> usize {
        self.pain_area_set().iter().filter(|a| !a.is_sentinel()).count()
    }

    pub fn symptom_count(&self) -> usize {
        self.symptom_set().len()
    }
}
