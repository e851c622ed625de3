use fibroscreen_cli::commands::{catalog_text, verify_file, CatalogKind, CompletedAssessment};
use fibroscreen_cli::config::{ExportFormat, FibroscreenConfig};
use fibroscreen_cli::form::FormArgs;
use fibroscreen_core::catalog::{PainArea, Symptom};
use jiff::civil::date;

fn scored(form: FormArgs) -> CompletedAssessment {
    CompletedAssessment::new(form.into_input().unwrap(), date(2024, 3, 9).at(14, 5, 7, 0))
}

fn high_severity_form() -> FormArgs {
    FormArgs {
        pain_areas: vec![PainArea::Neck, PainArea::Chest],
        fatigue: 3,
        waking: 3,
        cognitive: 3,
        symptoms: Symptom::all().take(12).collect(),
        input: None,
    }
}

#[test]
fn flags_are_scored_through_the_pipeline() {
    let completed = scored(high_severity_form());
    assert_eq!(completed.result.wpi_score(), 2);
    assert_eq!(completed.result.total_ss_score(), 11);
    assert!(!completed.result.meets_criteria());
}

#[test]
fn submission_file_is_read_and_validated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submission.json");
    std::fs::write(
        &path,
        r#"{
            "pain_areas": ["upper_back", "lower_back", "neck", "chest", "abdomen", "jaw_left", "jaw_right", "hip_left"],
            "fatigue": 2, "waking_unrefreshed": 2, "cognitive": 1
        }"#,
    )
    .unwrap();

    let completed = scored(FormArgs {
        input: Some(path),
        ..Default::default()
    });
    assert_eq!(completed.result.wpi_score(), 8);
    assert_eq!(completed.result.ss_2a_score(), 5);
    assert!(completed.result.meets_criteria());
}

#[test]
fn invalid_submission_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submission.json");
    std::fs::write(&path, r#"{ "fatigue": 9 }"#).unwrap();

    let err = FormArgs {
        input: Some(path),
        ..Default::default()
    }
    .into_input()
    .unwrap_err();
    assert!(err.to_string().contains("fatigue rating 9 is outside range [0, 3]"));
}

#[test]
fn exports_are_written_and_verify() {
    let dir = tempfile::tempdir().unwrap();
    let config = FibroscreenConfig {
        export_formats: vec![ExportFormat::Json, ExportFormat::Csv, ExportFormat::Report],
        ..Default::default()
    };

    let written = scored(high_severity_form())
        .write_exports(dir.path(), &config)
        .unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "fibromyalgia_assessment_20240309_140507.json",
            "fibromyalgia_assessment_20240309_140507.csv",
            "fibromyalgia_assessment_20240309_140507.txt",
        ]
    );

    let record = verify_file(&written[0]).unwrap();
    assert_eq!(record.total_ss_score, 11);
    assert_eq!(record.assessment_date, "2024-03-09 14:05:07");
}

#[test]
fn tampered_export_fails_verification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");
    let mut record = scored(high_severity_form()).record();
    record.meets_diagnostic_criteria = true;
    std::fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

    let err = verify_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("inconsistent meets_diagnostic_criteria"));
}

#[test]
fn custom_report_template_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("short.txt");
    std::fs::write(&template, "WPI={{ breakdown.wpi }} SS={{ breakdown.total_ss }}").unwrap();
    let config = FibroscreenConfig {
        report_template: Some(template),
        ..Default::default()
    };

    let out = scored(high_severity_form())
        .render(ExportFormat::Report, &config)
        .unwrap();
    assert_eq!(out, "WPI=2 SS=11");
}

#[test]
fn catalogs_list_every_entry() {
    let areas = catalog_text(CatalogKind::PainAreas, "fm2010").unwrap();
    assert!(areas.contains("Arms & Shoulders"));
    assert!(areas.contains("none_of_these_areas"));
    assert_eq!(areas.lines().filter(|l| l.starts_with("  ")).count(), 19);

    let symptoms = catalog_text(CatalogKind::Symptoms, "fm2010").unwrap();
    assert_eq!(symptoms.lines().count(), 41);

    let severity = catalog_text(CatalogKind::Severity, "fm2010").unwrap();
    assert!(severity.contains("Waking unrefreshed (--waking)"));
    assert!(severity.contains("0 - No problem"));

    assert!(catalog_text(CatalogKind::Instrument, "fm2010").unwrap().contains("Widespread Pain Index"));
    assert!(catalog_text(CatalogKind::Instrument, "phq9").is_err());
}
