//! fibroscreen-instruments
//!
//! The fibromyalgia diagnostic criteria instrument: its domains and score
//! ranges, the scoring engine, the criteria breakdown, region summaries, and
//! verification of exported records. Pure computation, no I/O.

pub mod criteria;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod regions;
pub mod scoring;
pub mod verify;

use error::InstrumentError;
use scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "fm2010").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The domains and subscales this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Range and type for a subscale id or a domain composite id.
    fn score_slot(&self, id: &str) -> Option<(&str, ScoreRange, ScoreType)> {
        self.domains().iter().find_map(|domain| {
            if domain.id == id {
                let range = domain.composite_range?;
                let score_type = domain.composite_score_type?;
                return Some((domain.name.as_str(), range, score_type));
            }
            domain
                .subscales
                .iter()
                .find(|s| s.id == id)
                .map(|s| (s.name.as_str(), s.range, s.score_type))
        })
    }

    /// Validate a set of score entries against this instrument's ranges.
    /// Entries with unrecognised ids are skipped.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            if let Some((name, range, score_type)) = self.score_slot(&entry.subscale_id)
                && !range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: range,
                    score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        name,
                        entry.value,
                        range.min,
                        range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Strict variant of [`Instrument::validate_scores`]: unknown ids are
    /// rejected and the first range violation is returned as an error.
    fn check_scores(&self, scores: &[ScoreEntry]) -> Result<(), InstrumentError> {
        if let Some(unknown) = scores
            .iter()
            .find(|e| self.score_slot(&e.subscale_id).is_none())
        {
            return Err(InstrumentError::UnknownSubscale {
                instrument_id: self.id().to_string(),
                subscale_id: unknown.subscale_id.clone(),
            });
        }
        match self.validate_scores(scores).into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Plain-text outline of the domains, subscales and ranges.
    fn describe(&self) -> String {
        let mut output = format!("## {} ({})\n\n", self.name(), self.id());
        for domain in self.domains() {
            output.push_str(&format!("### {}", domain.name));
            if let Some(range) = domain.composite_range {
                output.push_str(&format!(" [{}-{}]", range.min, range.max));
            }
            output.push('\n');
            if let Some(description) = &domain.description {
                output.push_str(&format!("{description}\n"));
            }
            for subscale in &domain.subscales {
                output.push_str(&format!(
                    "- {} ({}): {}-{}\n",
                    subscale.name, subscale.id, subscale.range.min, subscale.range.max
                ));
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::fm2010::Fm2010)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, failing with [`InstrumentError::UnknownInstrument`].
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
