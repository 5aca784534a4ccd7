//! Static HTML element classification tables.
//!
//! Emission needs two element classes: void elements, which never receive a
//! closing tag, and block elements, which suppress the normalized space that
//! would otherwise be written between adjacent inline nodes.

use phf::phf_set;

/// Elements that have no closing tag.
pub static VOID_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr"
};

/// Elements rendered as blocks.
///
/// The HTML block-level element set, plus the document-structure tags
/// (`html`, `head`, `body`, `title`, `script`, `style`) that are equally
/// never separated from siblings by meaningful whitespace.
pub static BLOCK_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "address", "article", "aside", "blockquote", "body", "canvas", "dd",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hr", "html",
    "li", "main", "nav", "noscript", "ol", "p", "pre", "script", "section",
    "style", "table", "tfoot", "title", "ul", "video"
};

/// Check if an element is void (self-closing, no end tag).
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(tag)
}

/// Check if an element is block-level for whitespace normalization purposes.
#[inline]
pub fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(tag)
}
