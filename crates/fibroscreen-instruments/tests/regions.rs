use std::collections::BTreeSet;

use fibroscreen_core::catalog::{BodyRegion, PainArea, PainCategory};
use fibroscreen_core::models::result::AssessmentResult;
use fibroscreen_instruments::engine::compute_wpi;
use fibroscreen_instruments::regions::{pain_distribution, score_series, summarize_regions};
use pretty_assertions::assert_eq;

#[test]
fn region_counts_sum_to_wpi() {
    let selected = BTreeSet::from([
        PainArea::Neck,
        PainArea::JawRight,
        PainArea::UpperArmLeft,
        PainArea::LowerBack,
        PainArea::NoneOfTheseAreas,
    ]);
    let summary = summarize_regions(&selected);

    let painful: usize = summary.iter().map(|r| r.painful).sum();
    assert_eq!(painful, usize::from(compute_wpi(&selected)));

    let head = &summary[0];
    assert_eq!(head.region, BodyRegion::HeadNeck);
    assert_eq!((head.painful, head.total), (2, 3));
    assert!((head.percentage - 66.666).abs() < 0.01);

    let torso = summary.iter().find(|r| r.region == BodyRegion::Torso).unwrap();
    assert_eq!((torso.painful, torso.total), (1, 4));
    assert_eq!(torso.percentage, 25.0);
}

#[test]
fn distribution_groups_areas_by_category() {
    let selected = BTreeSet::from([
        PainArea::ShoulderGirdleLeft,
        PainArea::LowerArmRight,
        PainArea::HipLeft,
        PainArea::Abdomen,
    ]);
    let counts: Vec<(PainCategory, usize)> = pain_distribution(&selected)
        .unwrap()
        .into_iter()
        .map(|c| (c.category, c.count))
        .collect();

    assert_eq!(
        counts,
        vec![
            (PainCategory::UpperBody, 2),
            (PainCategory::LowerBody, 1),
            (PainCategory::Core, 1),
            (PainCategory::HeadNeck, 0),
        ]
    );
}

#[test]
fn distribution_is_absent_for_empty_or_sentinel_selection() {
    assert!(pain_distribution(&BTreeSet::new()).is_none());
    let with_sentinel = BTreeSet::from([PainArea::Chest, PainArea::NoneOfTheseAreas]);
    assert!(pain_distribution(&with_sentinel).is_none());
}

#[test]
fn score_series_pairs_scores_with_maxima() {
    let series = score_series(&AssessmentResult::new(8, 5, 0, true));
    let bars: Vec<(&str, u8, u8)> = series
        .iter()
        .map(|b| (b.label.as_str(), b.score, b.maximum))
        .collect();
    assert_eq!(
        bars,
        vec![
            ("WPI Score", 8, 19),
            ("SS Score 2a", 5, 9),
            ("SS Score 2b", 0, 3),
            ("Total SS", 5, 12),
        ]
    );
}
