use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// An entry on the "other symptoms" checklist (SS Part 2b).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    MusclePain,
    IrritableBowelSyndrome,
    FatigueTiredness,
    ThinkingOrRememberingProblem,
    MuscleWeakness,
    Headache,
    AbdominalPainCramps,
    NumbnessTingling,
    Dizziness,
    Insomnia,
    Depression,
    Constipation,
    UpperAbdominalPain,
    Nausea,
    Nervousness,
    ChestPain,
    BlurredVision,
    Fever,
    Diarrhea,
    DryMouth,
    Itching,
    Wheezing,
    Raynauds,
    HivesWelts,
    RingingInEars,
    Vomiting,
    Heartburn,
    OralUlcers,
    TasteChange,
    Seizures,
    DryEyes,
    ShortnessOfBreath,
    LossOfAppetite,
    Rash,
    SunSensitivity,
    HearingDifficulties,
    EasyBruising,
    HairLoss,
    FrequentUrination,
    PainfulUrination,
    BladderSpasms,
}

/// `(variant, id, label)` in checklist order. Indexed by discriminant.
const CATALOG: [(Symptom, &str, &str); 41] = [
    (Symptom::MusclePain, "muscle_pain", "Muscle pain"),
    (Symptom::IrritableBowelSyndrome, "irritable_bowel_syndrome", "Irritable bowel syndrome"),
    (Symptom::FatigueTiredness, "fatigue_tiredness", "Fatigue/tiredness"),
    (
        Symptom::ThinkingOrRememberingProblem,
        "thinking_or_remembering_problem",
        "Thinking or remembering problem",
    ),
    (Symptom::MuscleWeakness, "muscle_weakness", "Muscle Weakness"),
    (Symptom::Headache, "headache", "Headache"),
    (Symptom::AbdominalPainCramps, "abdominal_pain_cramps", "Pain/cramps in abdomen"),
    (Symptom::NumbnessTingling, "numbness_tingling", "Numbness/tingling"),
    (Symptom::Dizziness, "dizziness", "Dizziness"),
    (Symptom::Insomnia, "insomnia", "Insomnia"),
    (Symptom::Depression, "depression", "Depression"),
    (Symptom::Constipation, "constipation", "Constipation"),
    (Symptom::UpperAbdominalPain, "upper_abdominal_pain", "Pain in upper abdomen"),
    (Symptom::Nausea, "nausea", "Nausea"),
    (Symptom::Nervousness, "nervousness", "Nervousness"),
    (Symptom::ChestPain, "chest_pain", "Chest pain"),
    (Symptom::BlurredVision, "blurred_vision", "Blurred vision"),
    (Symptom::Fever, "fever", "Fever"),
    (Symptom::Diarrhea, "diarrhea", "Diarrhea"),
    (Symptom::DryMouth, "dry_mouth", "Dry mouth"),
    (Symptom::Itching, "itching", "Itching"),
    (Symptom::Wheezing, "wheezing", "Wheezing"),
    (
        Symptom::Raynauds,
        "raynauds",
        "Raynauld's (fingers/toes turn white/blue in cold)",
    ),
    (Symptom::HivesWelts, "hives_welts", "Hives/welts"),
    (Symptom::RingingInEars, "ringing_in_ears", "Ringing in ears"),
    (Symptom::Vomiting, "vomiting", "Vomiting"),
    (Symptom::Heartburn, "heartburn", "Heartburn"),
    (Symptom::OralUlcers, "oral_ulcers", "Oral ulcers"),
    (Symptom::TasteChange, "taste_change", "Loss/change in taste"),
    (Symptom::Seizures, "seizures", "Seizures"),
    (Symptom::DryEyes, "dry_eyes", "Dry eyes"),
    (Symptom::ShortnessOfBreath, "shortness_of_breath", "Shortness of breath"),
    (Symptom::LossOfAppetite, "loss_of_appetite", "Loss of appetite"),
    (Symptom::Rash, "rash", "Rash"),
    (Symptom::SunSensitivity, "sun_sensitivity", "Sun sensitivity"),
    (Symptom::HearingDifficulties, "hearing_difficulties", "Hearing difficulties"),
    (Symptom::EasyBruising, "easy_bruising", "Easy bruising"),
    (Symptom::HairLoss, "hair_loss", "Hair loss"),
    (Symptom::FrequentUrination, "frequent_urination", "Frequent urination"),
    (Symptom::PainfulUrination, "painful_urination", "Painful urination"),
    (Symptom::BladderSpasms, "bladder_spasms", "Bladder spasms"),
];

impl Symptom {
    pub fn all() -> impl Iterator<Item = Symptom> {
        CATALOG.iter().map(|(symptom, _, _)| *symptom)
    }

    pub fn id(self) -> &'static str {
        CATALOG[self as usize].1
    }

    pub fn label(self) -> &'static str {
        CATALOG[self as usize].2
    }

    /// Look up a symptom by id or by label (labels match case-insensitively).
    pub fn lookup(name: &str) -> Option<Symptom> {
        let name = name.trim();
        CATALOG
            .iter()
            .find(|(_, id, label)| *id == name || label.eq_ignore_ascii_case(name))
            .map(|(symptom, _, _)| *symptom)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symptom {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symptom::lookup(s).ok_or_else(|| CoreError::UnknownSymptom(s.to_string()))
    }
}
