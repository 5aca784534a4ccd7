//! The template-element parser: `@Component(args)` with an optional
//! brace-delimited children block.
//!
//! Recovery matters more than rejection here: downstream tooling works on
//! partial trees, so every failure path still returns whatever was built.

use tempera_relief::{Node, TemplElementExpression, Text, TrailingSpace, Whitespace};

use crate::error::ParseError;
use crate::expression::parse_template_expression;
use crate::input::ParseInput;

/// Parse a template-element invocation. Returns `None`, with the input
/// consumed up to the failure point, only when no node could be formed at
/// all; otherwise the (possibly partial) node is returned and problems are
/// pushed onto `errors`.
pub fn parse_templ_element(
    input: &mut ParseInput,
    errors: &mut Vec<ParseError>,
) -> Option<TemplElementExpression> {
    // The prefix gates the whole grammar.
    if !input.take_literal("@") {
        return None;
    }

    let Some(expression) = parse_template_expression(input) else {
        errors.push(ParseError::new(
            "templ element: expected Go expression",
            input.position(),
        ));
        return None;
    };
    let mut element = TemplElementExpression {
        expression,
        children: Vec::new(),
    };

    // Without an open brace the element is self-closing.
    if !take_open_brace_with_padding(input) {
        return Some(element);
    }

    // Once a children block has started, it must conclude.
    let (children, ok) = parse_nodes(input, errors);
    element.children = children;
    if !ok {
        errors.push(ParseError::new(
            format!(
                "@{}: expected nodes, but none were found",
                element.expression.value
            ),
            input.position(),
        ));
        return Some(element);
    }

    if !take_close_brace_with_padding(input) {
        errors.push(ParseError::new(
            format!("@{}: missing end (expected '}}')", element.expression.value),
            input.position(),
        ));
        return Some(element);
    }

    Some(element)
}

/// Parse child nodes until a closing brace or end of input. The second
/// return value is false when a child failed to parse.
fn parse_nodes(input: &mut ParseInput, errors: &mut Vec<ParseError>) -> (Vec<Node>, bool) {
    let mut nodes = Vec::new();
    loop {
        if input.is_eof() || at_close_brace(input) {
            return (nodes, true);
        }
        let Some(c) = input.peek() else {
            return (nodes, true);
        };
        if c == '@' {
            match parse_templ_element(input, errors) {
                Some(child) => nodes.push(Node::TemplElement(child)),
                None => return (nodes, false),
            }
            continue;
        }
        if c.is_whitespace() {
            let run = input.take_while(char::is_whitespace);
            nodes.push(Node::Whitespace(Whitespace { value: run.into() }));
            continue;
        }
        let run = input.take_while(|c| c != '@' && c != '}' && c != '\n');
        if run.is_empty() {
            return (nodes, false);
        }
        nodes.push(Node::Text(Text {
            value: run.into(),
            trailing_space: TrailingSpace::None,
        }));
    }
}

/// Consume an opening brace with surrounding padding. The input is left
/// untouched when no brace is present.
fn take_open_brace_with_padding(input: &mut ParseInput) -> bool {
    let cp = input.checkpoint();
    input.take_while(|c| c == ' ' || c == '\t');
    if !input.take_literal("{") {
        input.restore(cp);
        return false;
    }
    input.take_while(char::is_whitespace);
    true
}

/// Consume a closing brace with leading padding. The input is left
/// untouched when no brace is present.
fn take_close_brace_with_padding(input: &mut ParseInput) -> bool {
    let cp = input.checkpoint();
    input.take_while(char::is_whitespace);
    if !input.take_literal("}") {
        input.restore(cp);
        return false;
    }
    true
}

/// True when the next non-whitespace character is a closing brace. Consumes
/// nothing.
fn at_close_brace(input: &mut ParseInput) -> bool {
    let cp = input.checkpoint();
    input.take_while(char::is_whitespace);
    let found = input.peek() == Some('}');
    input.restore(cp);
    found
}
