//! Questionnaire intake: turns command-line selections or a submission file
//! into a validated [`AssessmentInput`].

use std::path::PathBuf;

use clap::Args;
use eyre::WrapErr;

use fibroscreen_core::catalog::{PainArea, SeverityItem, Symptom};
use fibroscreen_core::models::submission::{AssessmentInput, RawSubmission, SeverityRatings};

#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Painful area in the past week, by id or label (repeatable)
    #[arg(long = "pain", value_name = "AREA")]
    pub pain_areas: Vec<PainArea>,

    /// Fatigue severity, 0-3
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub fatigue: u8,

    /// Waking unrefreshed severity, 0-3
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub waking: u8,

    /// Cognitive symptoms severity, 0-3
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub cognitive: u8,

    /// Other symptom experienced in the past week, by id or label (repeatable)
    #[arg(long = "symptom", value_name = "SYMPTOM")]
    pub symptoms: Vec<Symptom>,

    /// Read the submission from a JSON file instead of flags
    #[arg(long, value_name = "FILE", conflicts_with_all = ["pain_areas", "fatigue", "waking", "cognitive", "symptoms"])]
    pub input: Option<PathBuf>,
}

impl FormArgs {
    pub fn into_input(self) -> eyre::Result<AssessmentInput> {
        if let Some(path) = &self.input {
            let contents = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read submission {}", path.display()))?;
            let raw = RawSubmission::from_json(&contents)?;
            return Ok(AssessmentInput::try_from(raw)?);
        }

        let severity = SeverityRatings::new(
            SeverityItem::Fatigue.rate(self.fatigue)?,
            SeverityItem::WakingUnrefreshed.rate(self.waking)?,
            SeverityItem::Cognitive.rate(self.cognitive)?,
        );
        Ok(AssessmentInput::new(self.pain_areas, severity, self.symptoms))
    }
}
