//! Relief - template AST for tempera.
//!
//! This crate defines the tree the parser produces and the generator
//! consumes: a template file is a header, a package declaration, and a list
//! of top-level templates whose bodies mix HTML-like markup, embedded Go
//! expressions, and control flow.
//!
//! ## Name Origin
//!
//! A **relief** is a sculpture raised from a flat backing. The AST is the
//! raised form of the flat template source: the shape the rest of the
//! compiler works against.

pub mod ast;

pub use ast::*;
