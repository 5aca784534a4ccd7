//! Armature - error-tolerant template parsing for tempera.
//!
//! This crate carries the template-element grammar: `@Component(args)`
//! invocations with an optional brace-delimited children block. Parsing is
//! error tolerant: when a body fails to parse or a closing brace is missing,
//! the partially built node is still returned alongside the error, so the
//! generator and the language server can keep working on incomplete input.
//!
//! ## Name Origin
//!
//! An **armature** is the frame a sculptor builds on. The parser is the
//! frame the rest of the compiler builds on, and it has to stay standing
//! even when the material is incomplete.

pub mod error;
pub mod expression;
pub mod input;
pub mod template_element;

pub use error::ParseError;
pub use input::ParseInput;

use tempera_relief::TemplElementExpression;

/// Parse a template-element invocation (`@Component(...)`, optionally with a
/// children block) from the start of `source`.
///
/// Returns the node, partial if necessary, and every error encountered.
pub fn parse_template_element(source: &str) -> (Option<TemplElementExpression>, Vec<ParseError>) {
    let mut input = ParseInput::new(source);
    let mut errors = Vec::new();
    let node = template_element::parse_templ_element(&mut input, &mut errors);
    (node, errors)
}
