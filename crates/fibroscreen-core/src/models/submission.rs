use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{PainArea, SeverityItem, SeverityLevel, Symptom};
use crate::error::CoreError;

/// The three SS Part 2a ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityRatings {
    #[ts(type = "number")]
    pub fatigue: SeverityLevel,
    #[ts(type = "number")]
    pub waking_unrefreshed: SeverityLevel,
    #[ts(type = "number")]
    pub cognitive: SeverityLevel,
}

impl SeverityRatings {
    pub fn new(fatigue: SeverityLevel, waking_unrefreshed: SeverityLevel, cognitive: SeverityLevel) -> Self {
        Self {
            fatigue,
            waking_unrefreshed,
            cognitive,
        }
    }

    pub fn get(&self, item: SeverityItem) -> SeverityLevel {
        match item {
            SeverityItem::Fatigue => self.fatigue,
            SeverityItem::WakingUnrefreshed => self.waking_unrefreshed,
            SeverityItem::Cognitive => self.cognitive,
        }
    }
}

/// One complete, validated questionnaire submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentInput {
    pub pain_areas: BTreeSet<PainArea>,
    pub severity: SeverityRatings,
    pub other_symptoms: BTreeSet<Symptom>,
}

impl AssessmentInput {
    pub fn new(
        pain_areas: impl IntoIterator<Item = PainArea>,
        severity: SeverityRatings,
        other_symptoms: impl IntoIterator<Item = Symptom>,
    ) -> Self {
        Self {
            pain_areas: pain_areas.into_iter().collect(),
            severity,
            other_symptoms: other_symptoms.into_iter().collect(),
        }
    }

    /// Selected areas that count towards the WPI.
    pub fn named_pain_areas(&self) -> impl Iterator<Item = PainArea> + '_ {
        self.pain_areas.iter().copied().filter(|a| !a.is_sentinel())
    }
}

/// Unvalidated form data as supplied by a caller (e.g. a JSON file).
///
/// Names may be catalog ids or labels. Converting into [`AssessmentInput`]
/// rejects anything outside the catalogs or the 0–3 rating scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawSubmission {
    #[serde(default)]
    pub pain_areas: Vec<String>,
    #[serde(default)]
    pub fatigue: u8,
    #[serde(default)]
    pub waking_unrefreshed: u8,
    #[serde(default)]
    pub cognitive: u8,
    #[serde(default)]
    pub other_symptoms: Vec<String>,
}

impl RawSubmission {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<RawSubmission> for AssessmentInput {
    type Error = CoreError;

    fn try_from(raw: RawSubmission) -> Result<Self, Self::Error> {
        let pain_areas = raw
            .pain_areas
            .iter()
            .map(|name| name.parse::<PainArea>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        let other_symptoms = raw
            .other_symptoms
            .iter()
            .map(|name| name.parse::<Symptom>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        let severity = SeverityRatings {
            fatigue: SeverityItem::Fatigue.rate(raw.fatigue)?,
            waking_unrefreshed: SeverityItem::WakingUnrefreshed.rate(raw.waking_unrefreshed)?,
            cognitive: SeverityItem::Cognitive.rate(raw.cognitive)?,
        };

        Ok(Self {
            pain_areas,
            severity,
            other_symptoms,
        })
    }
}
