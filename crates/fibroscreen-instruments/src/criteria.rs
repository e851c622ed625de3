//! Per-branch breakdown of the diagnostic rule, for display.

use std::ops::RangeInclusive;

use serde::Serialize;
use ts_rs::TS;

pub const CRITERION_1A_MIN_WPI: u8 = 7;
pub const CRITERION_1A_MIN_SS: u8 = 5;
pub const CRITERION_1B_WPI: RangeInclusive<u8> = 3..=6;
pub const CRITERION_1B_MIN_SS: u8 = 9;

/// Outcome of one branch of the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CriterionCheck {
    pub wpi_met: bool,
    pub ss_met: bool,
}

impl CriterionCheck {
    pub fn met(&self) -> bool {
        self.wpi_met && self.ss_met
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CriteriaBreakdown {
    pub wpi: u8,
    pub total_ss: u8,
    /// WPI ≥ 7 and SS ≥ 5.
    pub criterion_1a: CriterionCheck,
    /// WPI 3–6 and SS ≥ 9.
    pub criterion_1b: CriterionCheck,
}

impl CriteriaBreakdown {
    pub fn evaluate(wpi: u8, total_ss: u8) -> Self {
        Self {
            wpi,
            total_ss,
            criterion_1a: CriterionCheck {
                wpi_met: wpi >= CRITERION_1A_MIN_WPI,
                ss_met: total_ss >= CRITERION_1A_MIN_SS,
            },
            criterion_1b: CriterionCheck {
                wpi_met: CRITERION_1B_WPI.contains(&wpi),
                ss_met: total_ss >= CRITERION_1B_MIN_SS,
            },
        }
    }

    pub fn meets_criteria(&self) -> bool {
        self.criterion_1a.met() || self.criterion_1b.met()
    }
}
