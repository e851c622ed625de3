use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A body region on the Widespread Pain Index checklist.
///
/// Declaration order is the order the questionnaire presents the areas in,
/// and is the order used by `BTreeSet<PainArea>` selections and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainArea {
    ShoulderGirdleLeft,
    ShoulderGirdleRight,
    UpperArmLeft,
    UpperArmRight,
    LowerArmLeft,
    LowerArmRight,
    HipLeft,
    HipRight,
    UpperLegLeft,
    UpperLegRight,
    LowerLegLeft,
    LowerLegRight,
    JawLeft,
    JawRight,
    Chest,
    Abdomen,
    Neck,
    UpperBack,
    LowerBack,
    /// "None of these areas". Never counted towards the WPI.
    NoneOfTheseAreas,
}

/// The coarse grouping used by the pain-area summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BodyRegion {
    HeadNeck,
    ArmsShoulders,
    Torso,
    HipsLegs,
}

/// The grouping used by the pain distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainCategory {
    UpperBody,
    LowerBody,
    Core,
    HeadNeck,
}

impl PainArea {
    /// Every catalog entry, sentinel last.
    pub const ALL: [PainArea; 20] = [
        PainArea::ShoulderGirdleLeft,
        PainArea::ShoulderGirdleRight,
        PainArea::UpperArmLeft,
        PainArea::UpperArmRight,
        PainArea::LowerArmLeft,
        PainArea::LowerArmRight,
        PainArea::HipLeft,
        PainArea::HipRight,
        PainArea::UpperLegLeft,
        PainArea::UpperLegRight,
        PainArea::LowerLegLeft,
        PainArea::LowerLegRight,
        PainArea::JawLeft,
        PainArea::JawRight,
        PainArea::Chest,
        PainArea::Abdomen,
        PainArea::Neck,
        PainArea::UpperBack,
        PainArea::LowerBack,
        PainArea::NoneOfTheseAreas,
    ];

    /// The 19 areas that count towards the WPI.
    pub fn named() -> impl Iterator<Item = PainArea> {
        Self::ALL.into_iter().filter(|a| !a.is_sentinel())
    }

    pub fn is_sentinel(self) -> bool {
        self == PainArea::NoneOfTheseAreas
    }

    pub fn id(self) -> &'static str {
        match self {
            PainArea::ShoulderGirdleLeft => "shoulder_girdle_left",
            PainArea::ShoulderGirdleRight => "shoulder_girdle_right",
            PainArea::UpperArmLeft => "upper_arm_left",
            PainArea::UpperArmRight => "upper_arm_right",
            PainArea::LowerArmLeft => "lower_arm_left",
            PainArea::LowerArmRight => "lower_arm_right",
            PainArea::HipLeft => "hip_left",
            PainArea::HipRight => "hip_right",
            PainArea::UpperLegLeft => "upper_leg_left",
            PainArea::UpperLegRight => "upper_leg_right",
            PainArea::LowerLegLeft => "lower_leg_left",
            PainArea::LowerLegRight => "lower_leg_right",
            PainArea::JawLeft => "jaw_left",
            PainArea::JawRight => "jaw_right",
            PainArea::Chest => "chest",
            PainArea::Abdomen => "abdomen",
            PainArea::Neck => "neck",
            PainArea::UpperBack => "upper_back",
            PainArea::LowerBack => "lower_back",
            PainArea::NoneOfTheseAreas => "none_of_these_areas",
        }
    }

    /// Questionnaire label. Exports carry these strings verbatim.
    pub fn label(self) -> &'static str {
        match self {
            PainArea::ShoulderGirdleLeft => "Shoulder girdle, left",
            PainArea::ShoulderGirdleRight => "Shoulder girdle, right",
            PainArea::UpperArmLeft => "Upper arm, left",
            PainArea::UpperArmRight => "Upper arm, right",
            PainArea::LowerArmLeft => "Lower arm, left",
            PainArea::LowerArmRight => "Lower arm, right",
            PainArea::HipLeft => "Hip (buttock) left",
            PainArea::HipRight => "Hip (buttock) right",
            PainArea::UpperLegLeft => "Upper leg left",
            PainArea::UpperLegRight => "Upper leg right",
            PainArea::LowerLegLeft => "Lower leg left",
            PainArea::LowerLegRight => "Lower leg right",
            PainArea::JawLeft => "Jaw left",
            PainArea::JawRight => "Jaw right",
            PainArea::Chest => "Chest",
            PainArea::Abdomen => "Abdomen",
            PainArea::Neck => "Neck",
            PainArea::UpperBack => "Upper back",
            PainArea::LowerBack => "Lower back",
            PainArea::NoneOfTheseAreas => "None of these areas",
        }
    }

    pub fn region(self) -> Option<BodyRegion> {
        match self {
            PainArea::Neck | PainArea::JawLeft | PainArea::JawRight => Some(BodyRegion::HeadNeck),
            PainArea::ShoulderGirdleLeft
            | PainArea::ShoulderGirdleRight
            | PainArea::UpperArmLeft
            | PainArea::UpperArmRight
            | PainArea::LowerArmLeft
            | PainArea::LowerArmRight => Some(BodyRegion::ArmsShoulders),
            PainArea::Chest | PainArea::Abdomen | PainArea::UpperBack | PainArea::LowerBack => {
                Some(BodyRegion::Torso)
            }
            PainArea::HipLeft
            | PainArea::HipRight
            | PainArea::UpperLegLeft
            | PainArea::UpperLegRight
            | PainArea::LowerLegLeft
            | PainArea::LowerLegRight => Some(BodyRegion::HipsLegs),
            PainArea::NoneOfTheseAreas => None,
        }
    }

    pub fn category(self) -> Option<PainCategory> {
        self.region().map(|region| match region {
            BodyRegion::HeadNeck => PainCategory::HeadNeck,
            BodyRegion::ArmsShoulders => PainCategory::UpperBody,
            BodyRegion::Torso => PainCategory::Core,
            BodyRegion::HipsLegs => PainCategory::LowerBody,
        })
    }

    /// Look up an area by id or by label (labels match case-insensitively).
    pub fn lookup(name: &str) -> Option<PainArea> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.id() == name || a.label().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PainArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PainArea {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PainArea::lookup(s).ok_or_else(|| CoreError::UnknownPainArea(s.to_string()))
    }
}

impl BodyRegion {
    pub const ALL: [BodyRegion; 4] = [
        BodyRegion::HeadNeck,
        BodyRegion::ArmsShoulders,
        BodyRegion::Torso,
        BodyRegion::HipsLegs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BodyRegion::HeadNeck => "Head/Neck",
            BodyRegion::ArmsShoulders => "Arms & Shoulders",
            BodyRegion::Torso => "Torso",
            BodyRegion::HipsLegs => "Hips & Legs",
        }
    }

    /// Catalog areas belonging to this region.
    pub fn areas(self) -> impl Iterator<Item = PainArea> {
        PainArea::ALL
            .into_iter()
            .filter(move |a| a.region() == Some(self))
    }
}

impl PainCategory {
    pub const ALL: [PainCategory; 4] = [
        PainCategory::UpperBody,
        PainCategory::LowerBody,
        PainCategory::Core,
        PainCategory::HeadNeck,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PainCategory::UpperBody => "Upper Body",
            PainCategory::LowerBody => "Lower Body",
            PainCategory::Core => "Core",
            PainCategory::HeadNeck => "Head/Neck",
        }
    }
}
