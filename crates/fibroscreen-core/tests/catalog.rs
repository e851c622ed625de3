use std::collections::BTreeSet;

use fibroscreen_core::catalog::{
    BodyRegion, PainArea, PainCategory, SeverityItem, SeverityLevel, Symptom,
};

#[test]
fn pain_catalog_has_nineteen_named_areas_and_one_sentinel() {
    assert_eq!(PainArea::ALL.len(), 20);
    assert_eq!(PainArea::named().count(), 19);
    assert_eq!(
        PainArea::ALL.iter().filter(|a| a.is_sentinel()).count(),
        1
    );
    assert!(PainArea::ALL[19].is_sentinel());
}

#[test]
fn symptom_catalog_has_forty_one_distinct_entries() {
    let ids: BTreeSet<_> = Symptom::all().map(Symptom::id).collect();
    let labels: BTreeSet<_> = Symptom::all().map(Symptom::label).collect();
    assert_eq!(Symptom::all().count(), 41);
    assert_eq!(ids.len(), 41);
    assert_eq!(labels.len(), 41);
}

#[test]
fn symptom_table_is_indexed_by_discriminant() {
    for (index, symptom) in Symptom::all().enumerate() {
        assert_eq!(symptom as usize, index);
    }
    assert_eq!(Symptom::BladderSpasms.label(), "Bladder spasms");
    assert_eq!(
        Symptom::Raynauds.label(),
        "Raynauld's (fingers/toes turn white/blue in cold)"
    );
}

#[test]
fn areas_parse_from_id_or_label() {
    assert_eq!("neck".parse::<PainArea>().unwrap(), PainArea::Neck);
    assert_eq!(
        "Shoulder girdle, left".parse::<PainArea>().unwrap(),
        PainArea::ShoulderGirdleLeft
    );
    assert_eq!(
        "hip (buttock) RIGHT".parse::<PainArea>().unwrap(),
        PainArea::HipRight
    );
    assert_eq!(
        "None of these areas".parse::<PainArea>().unwrap(),
        PainArea::NoneOfTheseAreas
    );
    assert!("Elbow".parse::<PainArea>().is_err());
}

#[test]
fn symptoms_parse_from_id_or_label() {
    assert_eq!("headache".parse::<Symptom>().unwrap(), Symptom::Headache);
    assert_eq!(
        "Pain/cramps in abdomen".parse::<Symptom>().unwrap(),
        Symptom::AbdominalPainCramps
    );
    let err = "Hiccups".parse::<Symptom>().unwrap_err();
    assert_eq!(err.to_string(), "unknown symptom: Hiccups");
}

#[test]
fn every_named_area_belongs_to_exactly_one_region() {
    for area in PainArea::named() {
        assert!(area.region().is_some(), "{area} has no region");
        assert!(area.category().is_some(), "{area} has no category");
    }
    assert_eq!(PainArea::NoneOfTheseAreas.region(), None);
    assert_eq!(PainArea::NoneOfTheseAreas.category(), None);

    let sizes: Vec<usize> = BodyRegion::ALL.iter().map(|r| r.areas().count()).collect();
    assert_eq!(sizes, vec![3, 6, 4, 6]);
}

#[test]
fn categories_follow_body_regions() {
    assert_eq!(PainArea::Neck.category(), Some(PainCategory::HeadNeck));
    assert_eq!(PainArea::UpperArmLeft.category(), Some(PainCategory::UpperBody));
    assert_eq!(PainArea::HipRight.category(), Some(PainCategory::LowerBody));
    assert_eq!(PainArea::LowerBack.category(), Some(PainCategory::Core));
}

#[test]
fn severity_levels_cover_zero_to_three() {
    for value in 0..=3u8 {
        assert_eq!(SeverityLevel::try_from(value).unwrap().value(), value);
    }
    assert!(SeverityLevel::try_from(4).is_err());
    assert_eq!(SeverityLevel::Severe.to_string(), "3 - Severe: pervasive, continuous, life disturbing problems");
}

#[test]
fn severity_item_errors_name_the_item() {
    let err = SeverityItem::Cognitive.rate(7).unwrap_err();
    assert_eq!(err.to_string(), "cognitive rating 7 is outside range [0, 3]");
}

#[test]
fn severity_level_serializes_as_number() {
    assert_eq!(serde_json::to_string(&SeverityLevel::Moderate).unwrap(), "2");
    let level: SeverityLevel = serde_json::from_str("1").unwrap();
    assert_eq!(level, SeverityLevel::Mild);
    assert!(serde_json::from_str::<SeverityLevel>("5").is_err());
}
