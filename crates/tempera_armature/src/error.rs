//! Parse errors.

use tempera_carton::String;
use tempera_relief::Position;
use thiserror::Error;

/// An error raised during parsing, carrying the position it was detected at.
///
/// Parsers collect these in a side vector rather than aborting, so a single
/// pass can report several problems while still producing a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {}, col {}", .position.line, .position.col)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
