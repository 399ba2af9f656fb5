use thiserror::Error;

/// Core error type shared across eccgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A sequence index does not fit the fixed-width identifier format.
    #[error("identifier overflow: {0}")]
    IdentifierOverflow(String),
    /// A code does not name a known catalog entry.
    #[error("unknown code: {0}")]
    UnknownCode(String),
}

/// Convenience alias for results returned by eccgen crates.
pub type Result<T> = std::result::Result<T, Error>;
