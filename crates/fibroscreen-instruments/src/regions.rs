//! Summaries of a pain-area selection and of a result, for display.

use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;

use fibroscreen_core::catalog::{BodyRegion, PainArea, PainCategory};
use fibroscreen_core::models::result::{
    AssessmentResult, SS_2A_MAX, SS_2B_MAX, TOTAL_SS_MAX, WPI_MAX,
};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct RegionSummary {
    pub region: BodyRegion,
    pub label: String,
    pub painful: usize,
    pub total: usize,
    /// Share of the region's areas that are painful, 0–100.
    pub percentage: f64,
}

/// Painful-area counts per body region, in [`BodyRegion::ALL`] order.
/// The counts sum to the WPI.
pub fn summarize_regions(selected: &BTreeSet<PainArea>) -> Vec<RegionSummary> {
    BodyRegion::ALL
        .iter()
        .map(|&region| {
            let total = region.areas().count();
            let painful = region.areas().filter(|a| selected.contains(a)).count();
            let percentage = if total > 0 {
                painful as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            RegionSummary {
                region,
                label: region.label().to_string(),
                painful,
                total,
                percentage,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CategoryCount {
    pub category: PainCategory,
    pub label: String,
    pub count: usize,
}

/// Pain counts by chart category.
///
/// `None` when nothing is selected or when "None of these areas" is among
/// the selections; there is nothing to chart in either case.
pub fn pain_distribution(selected: &BTreeSet<PainArea>) -> Option<Vec<CategoryCount>> {
    if selected.is_empty() || selected.contains(&PainArea::NoneOfTheseAreas) {
        return None;
    }
    Some(
        PainCategory::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                label: category.label().to_string(),
                count: selected
                    .iter()
                    .filter(|a| a.category() == Some(category))
                    .count(),
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ScoreBar {
    pub label: String,
    pub score: u8,
    pub maximum: u8,
}

/// Each score beside its maximum possible value.
pub fn score_series(result: &AssessmentResult) -> Vec<ScoreBar> {
    [
        ("WPI Score", result.wpi_score(), WPI_MAX),
        ("SS Score 2a", result.ss_2a_score(), SS_2A_MAX),
        ("SS Score 2b", result.ss_2b_score(), SS_2B_MAX),
        ("Total SS", result.total_ss_score(), TOTAL_SS_MAX),
    ]
    .into_iter()
    .map(|(label, score, maximum)| ScoreBar {
        label: label.to_string(),
        score,
        maximum,
    })
    .collect()
}
