use fibroscreen_core::models::record::AssessmentRecord;

use crate::error::ExportError;

/// Pretty-printed JSON (two-space indent) of a record.
pub fn to_json(record: &AssessmentRecord) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn from_json(json: &str) -> Result<AssessmentRecord, ExportError> {
    Ok(serde_json::from_str(json)?)
}
