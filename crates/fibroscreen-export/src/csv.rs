use fibroscreen_core::models::record::AssessmentRecord;

pub const HEADER: [&str; 8] = [
    "Assessment Date",
    "WPI Score",
    "SS 2a Score",
    "SS 2b Score",
    "Total SS Score",
    "Meets Criteria",
    "Pain Areas Count",
    "Other Symptoms Count",
];

/// One header row and one data row. Booleans are written `True`/`False`
/// and the pain area count excludes "None of these areas".
pub fn to_csv(record: &AssessmentRecord) -> String {
    let row = [
        field(&record.assessment_date),
        record.wpi_score.to_string(),
        record.ss_2a_score.to_string(),
        record.ss_2b_score.to_string(),
        record.total_ss_score.to_string(),
        if record.meets_diagnostic_criteria { "True" } else { "False" }.to_string(),
        record.pain_area_count().to_string(),
        record.symptom_count().to_string(),
    ];

    let mut csv = HEADER.join(",");
    csv.push('\n');
    csv.push_str(&row.join(","));
    csv.push('\n');
    csv
}

/// Quote a field if it contains a delimiter, quote or line break.
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
