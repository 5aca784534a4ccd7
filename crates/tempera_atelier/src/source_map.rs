//! Source map between template source and generated Go.
//!
//! The map is two append-only tables: one entry per embedded Go expression
//! copied into the output, and one symbol range bracketing each emitted
//! top-level declaration. Order is meaningful and duplicates are permitted;
//! lookup strategy is left to consumers such as the language server.

use serde::{Deserialize, Serialize};
use tempera_relief::{Expression, Range};

/// A correspondence between a source range in the template and a target
/// range in the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SourceMapEntry {
    pub source: Range,
    pub target: Range,
}

/// The source map accumulated over one generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub expressions: Vec<SourceMapEntry>,
    pub symbol_ranges: Vec<SourceMapEntry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `expression` was written to `target` in the output.
    pub fn add_expression(&mut self, expression: &Expression, target: Range) {
        self.expressions.push(SourceMapEntry {
            source: expression.range,
            target,
        });
    }

    /// Record the full extent of an emitted top-level declaration.
    pub fn add_symbol(&mut self, source: Range, target: Range) {
        self.symbol_ranges.push(SourceMapEntry { source, target });
    }
}
