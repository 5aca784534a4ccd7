//! Small text helpers shared across the code generator.

use tempera_carton::hash::short_hash;
use tempera_carton::String;

/// Escape text for inclusion in HTML, matching Go's `html.EscapeString`.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            c => out.push(c),
        }
    }
    out
}

/// Render `s` as a backtick-quoted Go string, splicing any embedded
/// backticks with a quoted concatenation.
pub(crate) fn create_go_string(s: &str) -> String {
    let mut out = String::default();
    out.push('`');
    let sections: Vec<&str> = s.split('`').collect();
    for (i, section) in sections.iter().enumerate() {
        out.push_str(section);
        if i + 1 < sections.len() {
            out.push_str("` + \"`\" + `");
        }
    }
    out.push('`');
    out
}

/// Reduce a Go parameter list to its comma-separated variable names.
pub(crate) fn strip_types(parameters: &str) -> String {
    let mut out = String::default();
    for (i, param) in parameters.split(',').enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let name = param.trim().split(' ').next().unwrap_or("").trim();
        out.push_str(name);
    }
    out
}

/// The browser-global function name for a script template: the user name
/// plus a short digest of the body, so edits produce distinct symbols.
pub(crate) fn function_name(name: &str, body: &str) -> String {
    let mut out = String::from("__templ_");
    out.push_str(name);
    out.push('_');
    out.push_str(&short_hash(body));
    out
}

/// Whether an attribute key holds a JavaScript event handler.
pub(crate) fn is_script_attribute(name: &str) -> bool {
    name.starts_with("on") || name.starts_with("hx-on:")
}

/// Whether the element/attribute pair takes a URL value.
pub(crate) fn is_url_attribute(element_name: &str, attr_name: &str) -> bool {
    match element_name {
        "a" | "link" => attr_name == "href",
        "form" => attr_name == "action",
        "object" => attr_name == "data",
        _ => false,
    }
}
