use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale};
use crate::Instrument;

use fibroscreen_core::catalog::SeverityItem;
use fibroscreen_core::models::result::{SS_2A_MAX, SS_2B_MAX, TOTAL_SS_MAX, WPI_MAX};

pub const ID: &str = "fm2010";

/// Fibromyalgia diagnostic criteria (Wolfe et al., 2010).
/// Widespread Pain Index (0–19) plus Symptom Severity (0–12), where SS is
/// three 0–3 ratings (Part 2a) and a banded count of other symptoms (Part 2b).
pub struct Fm2010;

impl Instrument for Fm2010 {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "Fibromyalgia Diagnostic Criteria (2010)"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let wpi_range = ScoreRange::new(0, WPI_MAX.into());
            let rating = ScoreRange::new(0, 3);
            let band = ScoreRange::new(0, SS_2B_MAX.into());

            let ratings: Vec<Subscale> = SeverityItem::ALL
                .iter()
                .map(|item| Subscale {
                    id: item.id().to_string(),
                    name: item.label().to_string(),
                    score_type: ScoreType::Rating,
                    range: rating,
                    description: None,
                })
                .collect();

            vec![
                Domain {
                    id: "widespread_pain_index".to_string(),
                    name: "Widespread Pain Index (WPI)".to_string(),
                    subscales: vec![Subscale {
                        id: "wpi".to_string(),
                        name: "Painful areas".to_string(),
                        score_type: ScoreType::Count,
                        range: wpi_range,
                        description: Some(
                            "Body areas with pain in the past week, excluding \"None of these areas\""
                                .to_string(),
                        ),
                    }],
                    composite_score_type: Some(ScoreType::Count),
                    composite_range: Some(wpi_range),
                    description: Some("7+ suggests a widespread pain pattern".to_string()),
                },
                Domain {
                    id: "ss_2a".to_string(),
                    name: "Symptom Severity Part 2a".to_string(),
                    subscales: ratings,
                    composite_score_type: Some(ScoreType::Sum),
                    composite_range: Some(ScoreRange::new(0, SS_2A_MAX.into())),
                    description: Some(
                        "0 no problem, 1 mild, 2 moderate, 3 severe".to_string(),
                    ),
                },
                Domain {
                    id: "ss_2b".to_string(),
                    name: "Symptom Severity Part 2b".to_string(),
                    subscales: vec![Subscale {
                        id: "other_symptoms".to_string(),
                        name: "Other symptoms".to_string(),
                        score_type: ScoreType::Band,
                        range: band,
                        description: None,
                    }],
                    composite_score_type: Some(ScoreType::Band),
                    composite_range: Some(band),
                    description: Some(
                        "0 symptoms: 0, 1-10: 1, 11-24: 2, 25+: 3".to_string(),
                    ),
                },
                Domain {
                    id: "total_ss".to_string(),
                    name: "Symptom Severity Total".to_string(),
                    subscales: Vec::new(),
                    composite_score_type: Some(ScoreType::Sum),
                    composite_range: Some(ScoreRange::new(0, TOTAL_SS_MAX.into())),
                    description: Some("Part 2a + Part 2b".to_string()),
                },
            ]
        });
        &DOMAINS
    }
}
