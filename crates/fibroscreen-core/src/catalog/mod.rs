//! Fixed questionnaire catalogs.

pub mod pain_area;
pub mod severity;
pub mod symptom;

pub use pain_area::{BodyRegion, PainArea, PainCategory};
pub use severity::{SeverityItem, SeverityLevel};
pub use symptom::Symptom;
