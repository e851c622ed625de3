use serde::Serialize;
use tera::{Context, Tera};

use fibroscreen_core::models::result::AssessmentResult;
use fibroscreen_core::models::submission::AssessmentInput;
use fibroscreen_instruments::criteria::CriteriaBreakdown;
use fibroscreen_instruments::regions::{score_series, summarize_regions};

use crate::error::ExportError;

pub const REPORT_TEMPLATE_NAME: &str = "report.txt";
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.txt.tera");

/// Symptoms listed by name in the report before the rest are summarised.
pub const SYMPTOMS_LISTED: usize = 10;

pub const DISCLAIMER: &str = "This survey is not meant to substitute for a diagnosis by a medical \
professional. Patients should not diagnose themselves. Always consult your medical professional \
for advice and treatment. This assessment is intended to give insight into research on \
diagnostic criteria and symptom severity measurement for fibromyalgia.";

pub const CITATION: &str =
    "Based on: Wolfe F, et al. Arthritis Care Res DOI 10.1002/acr.20140. Fibromyalgia Network.";

/// Template context for the assessment report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub assessment_date: String,
    pub scores: Vec<ScoreLine>,
    pub meets_criteria: bool,
    pub verdict: String,
    pub breakdown: CriteriaBreakdown,
    pub regions: Vec<RegionLine>,
    pub pain_areas: Vec<String>,
    pub symptom_count: usize,
    pub symptoms_listed: Vec<String>,
    pub symptoms_more: usize,
    pub disclaimer: &'static str,
    pub citation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreLine {
    pub label: String,
    pub score: u8,
    pub maximum: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionLine {
    pub label: String,
    pub painful: usize,
    pub total: usize,
    pub percentage: String,
}

impl ReportView {
    pub fn new(input: &AssessmentInput, result: &AssessmentResult, assessment_date: &str) -> Self {
        let verdict = format!(
            "Patient {} the New Fibromyalgia Diagnostic Criteria",
            if result.meets_criteria() { "MEETS" } else { "DOES NOT MEET" }
        );

        let scores = score_series(result)
            .into_iter()
            .map(|bar| ScoreLine {
                label: bar.label,
                score: bar.score,
                maximum: bar.maximum,
            })
            .collect();

        let regions = summarize_regions(&input.pain_areas)
            .into_iter()
            .map(|r| RegionLine {
                label: r.label,
                painful: r.painful,
                total: r.total,
                percentage: format!("{:.0}%", r.percentage),
            })
            .collect();

        let symptoms: Vec<String> = input
            .other_symptoms
            .iter()
            .map(|s| s.label().to_string())
            .collect();

        Self {
            assessment_date: assessment_date.to_string(),
            scores,
            meets_criteria: result.meets_criteria(),
            verdict,
            breakdown: CriteriaBreakdown::evaluate(result.wpi_score(), result.total_ss_score()),
            regions,
            pain_areas: input
                .named_pain_areas()
                .map(|a| a.label().to_string())
                .collect(),
            symptom_count: symptoms.len(),
            symptoms_more: symptoms.len().saturating_sub(SYMPTOMS_LISTED),
            symptoms_listed: symptoms.into_iter().take(SYMPTOMS_LISTED).collect(),
            disclaimer: DISCLAIMER,
            citation: CITATION,
        }
    }
}

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    view: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "template rendered");
    Ok(rendered)
}

/// Render the built-in plain-text report.
pub fn render_report(view: &ReportView) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, view)
}
