use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordinal rating used for each SS Part 2a item.
///
/// Serialized as its bare number (0–3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SeverityLevel {
    #[default]
    NoProblem = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::NoProblem,
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::Severe,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Questionnaire description for the rating.
    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::NoProblem => "No problem",
            SeverityLevel::Mild => "Slight or mild problems; generally mild or intermittent",
            SeverityLevel::Moderate => {
                "Moderate; considerable problems; often present and/or at a moderate level"
            }
            SeverityLevel::Severe => "Severe: pervasive, continuous, life disturbing problems",
        }
    }
}

impl From<SeverityLevel> for u8 {
    fn from(level: SeverityLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SeverityLevel::ALL
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or_else(|| CoreError::SeverityOutOfRange {
                field: "severity".to_string(),
                value,
            })
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.value(), self.label())
    }
}

/// The SS Part 2a item being rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityItem {
    Fatigue,
    WakingUnrefreshed,
    Cognitive,
}

impl SeverityItem {
    pub const ALL: [SeverityItem; 3] = [
        SeverityItem::Fatigue,
        SeverityItem::WakingUnrefreshed,
        SeverityItem::Cognitive,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SeverityItem::Fatigue => "fatigue",
            SeverityItem::WakingUnrefreshed => "waking_unrefreshed",
            SeverityItem::Cognitive => "cognitive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityItem::Fatigue => "Fatigue",
            SeverityItem::WakingUnrefreshed => "Waking unrefreshed",
            SeverityItem::Cognitive => "Cognitive symptoms",
        }
    }

    /// Parse a raw rating for this item, naming the item in the error.
    pub fn rate(self, value: u8) -> Result<SeverityLevel, CoreError> {
        SeverityLevel::try_from(value).map_err(|_| CoreError::SeverityOutOfRange {
            field: self.id().to_string(),
            value,
        })
    }
}
