use thiserror::Error;

/// Errors emitted while evaluating a dataset.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("generation error: {0}")]
    Generation(#[from] eccgen_generate::GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
