use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned no usable text")]
    EmptyResponse,

    #[error("model call timed out after {0:?}")]
    Timeout(std::time::Duration),
}
