//! Generator errors.

use thiserror::Error;

/// An error raised while emitting generated code.
///
/// The generator never retries and never swallows: the first failing write
/// stops generation and the caller discards whatever partial output reached
/// the sink.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
