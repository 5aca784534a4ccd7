//! Atelier - Go code generation for tempera templates.
//!
//! This crate turns a parsed template file into a Go source file in which
//! every template declaration is a function returning a renderable
//! component. Alongside the emitted code it produces a source map
//! correlating byte ranges in the template with byte ranges in the output,
//! and a digest of the literal text fragments used for cheap change
//! detection by watch pipelines.
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop. This atelier produces
//! Go source: components that write their HTML to a buffer at render time.

pub mod changes;
mod codegen;
pub mod errors;
pub mod options;
pub mod range_writer;
pub mod source_map;

use serde::{Deserialize, Serialize};
use tempera_carton::String;
use tempera_relief::TemplateFile;

pub use changes::{has_code_changed, has_text_changed};
pub use errors::GenerateError;
pub use options::GeneratorOptions;
pub use range_writer::RangeWriter;
pub use source_map::{SourceMap, SourceMapEntry};

/// Everything a generation run produces besides the emitted bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOutput {
    #[serde(rename = "meta")]
    pub options: GeneratorOptions,
    #[serde(rename = "sourceMap")]
    pub source_map: SourceMap,
    pub literals: Vec<String>,
}

/// Generate Go code from `template` into `writer`.
///
/// Returns the source map and literal digest for the run. On failure,
/// partial output may have reached the sink; the caller should discard it.
pub fn generate<W: std::io::Write>(
    template: &TemplateFile,
    writer: &mut W,
    options: GeneratorOptions,
) -> Result<GeneratorOutput, GenerateError> {
    let mut generator = codegen::Generator::new(template, writer, options);
    generator.generate()?;
    Ok(generator.into_output())
}
