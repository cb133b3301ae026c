use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid mood: {0}")]
    InvalidMood(String),
}
