use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown pain area: {0}")]
    UnknownPainArea(String),

    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("{field} rating {value} is outside range [0, 3]")]
    SeverityOutOfRange { field: String, value: u8 },
}
