use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The kind of value a subscale or domain composite holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Number of checklist items selected.
    Count,
    /// Ordinal severity rating (0–3).
    Rating,
    /// Sum of other scores.
    Sum,
    /// A count mapped onto fixed bands.
    Band,
}

/// Inclusive range of valid values for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A single scored item within a domain.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A top-level section of the questionnaire, containing subscales.
///
/// A domain's composite score is addressed by the domain id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A score value keyed by subscale or domain id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: u32,
}

impl ScoreEntry {
    pub fn new(subscale_id: &str, value: impl Into<u32>) -> Self {
        Self {
            subscale_id: subscale_id.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: u32,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
