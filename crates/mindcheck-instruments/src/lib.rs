//! mindcheck-instruments
//!
//! Standardized questionnaire definitions (PHQ-9, GAD-7), their scorers, and
//! the rule-based suggestion engine. Pure computation, no I/O.

pub mod assess;
pub mod error;
pub mod instruments;
pub mod scoring;
pub mod suggestions;

use error::InstrumentError;
use scoring::{Item, ResponseOption, ScoreRange, SeverityBand};

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The question stem shown above the items.
    fn prompt(&self) -> &str;

    /// Items in administration order.
    fn items(&self) -> &[Item];

    /// Allowed answer for each item.
    fn answer_range(&self) -> ScoreRange {
        ScoreRange { min: 0, max: 3 }
    }

    /// Labels for each allowed answer, lowest first.
    fn response_options(&self) -> &[ResponseOption] {
        &scoring::FREQUENCY_OPTIONS
    }

    /// Severity bands covering the full total-score range, lowest first.
    fn bands(&self) -> Vec<SeverityBand>;

    /// Sum the answers. Fails only when the answer count is wrong; item
    /// ranges are the caller's responsibility.
    fn total(&self, answers: &[u8]) -> Result<u8, InstrumentError> {
        let expected = self.items().len();
        if answers.len() != expected {
            return Err(InstrumentError::InvalidInput {
                instrument_id: self.id().to_string(),
                expected,
                actual: answers.len(),
            });
        }
        let sum: u32 = answers.iter().map(|&a| u32::from(a)).sum();
        Ok(u8::try_from(sum).unwrap_or(u8::MAX))
    }

    /// Highest possible total.
    fn max_total(&self) -> u8 {
        self.answer_range().max * self.items().len() as u8
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
