//! Change detection between generator outputs.
//!
//! Watch and build pipelines use these to decide whether the Go toolchain
//! needs to run again (the code shape changed) or whether only user-visible
//! text moved (a development server can hot-swap literals).

use crate::GeneratorOutput;

/// Returns true if the generated Go code differs between the previous and
/// updated outputs. The generated date is not considered.
pub fn has_code_changed(previous: &GeneratorOutput, updated: &GeneratorOutput) -> bool {
    if previous.options.version != updated.options.version {
        return true;
    }
    if previous.options.file_name != updated.options.file_name {
        return true;
    }
    if previous.options.skip_code_generated_comment != updated.options.skip_code_generated_comment {
        return true;
    }
    if previous.literals.len() != updated.literals.len() {
        return true;
    }
    if previous.source_map.expressions.len() != updated.source_map.expressions.len() {
        return true;
    }
    previous
        .source_map
        .expressions
        .iter()
        .zip(updated.source_map.expressions.iter())
        .any(|(prev, next)| prev != next)
}

/// Returns true if the text literals differ between the previous and updated
/// outputs.
pub fn has_text_changed(previous: &GeneratorOutput, updated: &GeneratorOutput) -> bool {
    if previous.literals.len() != updated.literals.len() {
        return true;
    }
    previous
        .literals
        .iter()
        .zip(updated.literals.iter())
        .any(|(prev, next)| prev != next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_map::{SourceMap, SourceMapEntry};
    use crate::GeneratorOptions;
    use tempera_relief::{Position, Range};

    fn output() -> GeneratorOutput {
        let mut source_map = SourceMap::new();
        source_map.expressions.push(SourceMapEntry {
            source: Range::new(Position::new(0, 0, 0), Position::new(4, 0, 4)),
            target: Range::new(Position::new(100, 5, 0), Position::new(104, 5, 4)),
        });
        GeneratorOutput {
            options: GeneratorOptions::new()
                .with_version("v1")
                .with_file_name("index.templ"),
            source_map,
            literals: vec!["<p>".into(), "hello".into(), "</p>".into()],
        }
    }

    #[test]
    fn test_identical_outputs_are_unchanged() {
        let a = output();
        let b = output();
        assert!(!has_code_changed(&a, &b));
        assert!(!has_text_changed(&a, &b));
    }

    #[test]
    fn test_generated_date_is_ignored() {
        let a = output();
        let mut b = output();
        b.options.generated_date = "2024-06-01T00:00:00Z".into();
        assert!(!has_code_changed(&a, &b));
    }

    #[test]
    fn test_version_change_is_code_change() {
        let a = output();
        let mut b = output();
        b.options.version = "v2".into();
        assert!(has_code_changed(&a, &b));
    }

    #[test]
    fn test_moved_expression_is_code_change() {
        let a = output();
        let mut b = output();
        b.source_map.expressions[0].target.to.col += 1;
        assert!(has_code_changed(&a, &b));
    }

    #[test]
    fn test_literal_edit_is_text_change_only() {
        let a = output();
        let mut b = output();
        b.literals[1] = "goodbye".into();
        assert!(has_text_changed(&a, &b));
        assert!(!has_code_changed(&a, &b));
    }

    #[test]
    fn test_literal_count_change_is_both() {
        let a = output();
        let mut b = output();
        b.literals.push(" ".into());
        assert!(has_text_changed(&a, &b));
        assert!(has_code_changed(&a, &b));
    }
}
