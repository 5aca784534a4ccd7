//! Generator options.

use serde::{Deserialize, Serialize};
use tempera_carton::String;

/// Configuration for a single generation run.
///
/// Options participate in change detection (except `generated_date`), so they
/// are carried inside [`crate::GeneratorOutput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Compiler version embedded as a `// templ: version:` comment.
    pub version: String,
    /// File name used in runtime error messages produced by generated code.
    pub file_name: String,
    /// Replace the generated-file marker with a placeholder of matching
    /// shape, so editor tooling does not disable features on the file.
    pub skip_code_generated_comment: bool,
    /// RFC3339 timestamp embedded as a `// templ: generated:` comment.
    /// Excluded from change detection.
    pub generated_date: String,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed the compiler version in the generated code.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Embed the generation timestamp (RFC3339) in the generated code.
    pub fn with_generated_date(mut self, date: impl Into<String>) -> Self {
        self.generated_date = date.into();
        self
    }

    /// Set the file name reported in template rendering error messages.
    /// Absolute paths are reduced to the file basename.
    pub fn with_file_name(mut self, name: &str) -> Self {
        let path = std::path::Path::new(name);
        if path.is_absolute() {
            self.file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().as_ref().into())
                .unwrap_or_default();
        } else {
            self.file_name = name.into();
        }
        self
    }

    /// Skip the code-generated comment at the top of the file.
    pub fn with_skip_code_generated_comment(mut self) -> Self {
        self.skip_code_generated_comment = true;
        self
    }
}
