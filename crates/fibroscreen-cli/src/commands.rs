use std::path::{Path, PathBuf};

use clap::ValueEnum;
use eyre::WrapErr;
use jiff::civil::DateTime;

use fibroscreen_core::catalog::{BodyRegion, PainArea, SeverityItem, SeverityLevel, Symptom};
use fibroscreen_core::export_names;
use fibroscreen_core::models::record::{ASSESSMENT_DATE_FORMAT, AssessmentRecord};
use fibroscreen_core::models::result::AssessmentResult;
use fibroscreen_core::models::submission::AssessmentInput;
use fibroscreen_export::render::{ReportView, render_report, render_template};
use fibroscreen_export::{csv, json};
use fibroscreen_instruments::verify::verify_record;
use fibroscreen_instruments::{engine, require_instrument};

use crate::config::{ExportFormat, FibroscreenConfig};

/// A scored submission together with the time it was scored.
#[derive(Debug, Clone)]
pub struct CompletedAssessment {
    pub input: AssessmentInput,
    pub result: AssessmentResult,
    pub assessed_at: DateTime,
}

impl CompletedAssessment {
    pub fn new(input: AssessmentInput, assessed_at: DateTime) -> Self {
        let result = engine::assess(&input);
        Self {
            input,
            result,
            assessed_at,
        }
    }

    pub fn record(&self) -> AssessmentRecord {
        AssessmentRecord::new(&self.input, &self.result, self.assessed_at)
    }

    pub fn report_view(&self) -> ReportView {
        let date = self.assessed_at.strftime(ASSESSMENT_DATE_FORMAT).to_string();
        ReportView::new(&self.input, &self.result, &date)
    }

    /// Render in `format`. Text reports use the configured template if any.
    pub fn render(&self, format: ExportFormat, config: &FibroscreenConfig) -> eyre::Result<String> {
        let rendered = match format {
            ExportFormat::Json => json::to_json(&self.record())?,
            ExportFormat::Csv => csv::to_csv(&self.record()),
            ExportFormat::Report => match &config.report_template {
                Some(path) => {
                    let template = std::fs::read_to_string(path).wrap_err_with(|| {
                        format!("failed to read report template {}", path.display())
                    })?;
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "custom".to_string());
                    render_template(&name, &template, &self.report_view())?
                }
                None => render_report(&self.report_view())?,
            },
        };
        Ok(rendered)
    }

    /// Write each configured format into `dir`, returning the written paths.
    pub fn write_exports(&self, dir: &Path, config: &FibroscreenConfig) -> eyre::Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create export directory {}", dir.display()))?;

        let mut written = Vec::new();
        for &format in &config.export_formats {
            let name = match format {
                ExportFormat::Json => export_names::json(self.assessed_at),
                ExportFormat::Csv => export_names::csv(self.assessed_at),
                ExportFormat::Report => export_names::report(self.assessed_at),
            };
            let path = dir.join(name);
            std::fs::write(&path, self.render(format, config)?)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), ?format, "export written");
            written.push(path);
        }
        Ok(written)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    PainAreas,
    Symptoms,
    Severity,
    Instrument,
}

/// Plain-text listing of one of the fixed catalogs. `instrument_id` selects
/// the instrument described by [`CatalogKind::Instrument`].
pub fn catalog_text(kind: CatalogKind, instrument_id: &str) -> eyre::Result<String> {
    let mut out = String::new();
    match kind {
        CatalogKind::PainAreas => {
            for region in BodyRegion::ALL {
                out.push_str(&format!("{}\n", region.label()));
                for area in region.areas() {
                    out.push_str(&format!("  {:<24} {}\n", area.id(), area.label()));
                }
            }
            let sentinel = PainArea::NoneOfTheseAreas;
            out.push_str(&format!("{:<26} {}\n", sentinel.id(), sentinel.label()));
        }
        CatalogKind::Symptoms => {
            for symptom in Symptom::all() {
                out.push_str(&format!("{:<32} {}\n", symptom.id(), symptom.label()));
            }
        }
        CatalogKind::Severity => {
            for item in SeverityItem::ALL {
                out.push_str(&format!("{} (--{})\n", item.label(), flag_name(item)));
            }
            for level in SeverityLevel::ALL {
                out.push_str(&format!("  {level}\n"));
            }
        }
        CatalogKind::Instrument => {
            out.push_str(&require_instrument(instrument_id)?.describe());
        }
    }
    Ok(out)
}

fn flag_name(item: SeverityItem) -> &'static str {
    match item {
        SeverityItem::Fatigue => "fatigue",
        SeverityItem::WakingUnrefreshed => "waking",
        SeverityItem::Cognitive => "cognitive",
    }
}

/// Read an exported JSON record and check it.
pub fn verify_file(path: &Path) -> eyre::Result<AssessmentRecord> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read record {}", path.display()))?;
    let record = json::from_json(&contents)?;
    verify_record(&record).wrap_err_with(|| format!("{} failed verification", path.display()))?;
    Ok(record)
}
