use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid input for '{instrument_id}': expected {expected} answers, got {actual}")]
    InvalidInput {
        instrument_id: String,
        expected: usize,
        actual: usize,
    },
}
