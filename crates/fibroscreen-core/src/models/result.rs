use serde::Serialize;
use ts_rs::TS;

pub const WPI_MAX: u8 = 19;
pub const SS_2A_MAX: u8 = 9;
pub const SS_2B_MAX: u8 = 3;
pub const TOTAL_SS_MAX: u8 = 12;

/// Scores and verdict for one submission.
///
/// Built once by the scoring pipeline and never modified. The total SS
/// score is derived from its two parts at construction, so
/// `total_ss_score() == ss_2a_score() + ss_2b_score()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    wpi_score: u8,
    ss_2a_score: u8,
    ss_2b_score: u8,
    total_ss_score: u8,
    meets_criteria: bool,
}

impl AssessmentResult {
    pub fn new(wpi_score: u8, ss_2a_score: u8, ss_2b_score: u8, meets_criteria: bool) -> Self {
        Self {
            wpi_score,
            ss_2a_score,
            ss_2b_score,
            total_ss_score: ss_2a_score + ss_2b_score,
            meets_criteria,
        }
    }

    pub fn wpi_score(&self) -> u8 {
        self.wpi_score
    }

    pub fn ss_2a_score(&self) -> u8 {
        self.ss_2a_score
    }

    pub fn ss_2b_score(&self) -> u8 {
        self.ss_2b_score
    }

    pub fn total_ss_score(&self) -> u8 {
        self.total_ss_score
    }

    pub fn meets_criteria(&self) -> bool {
        self.meets_criteria
    }
}
