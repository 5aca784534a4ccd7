//! Carton - the toolbox crate for tempera.
//!
//! This crate provides the foundational utilities shared by the tempera
//! compiler crates, much like a carton (artist's portfolio case) holds the
//! essential tools and materials for the rest of the workshop.
//!
//! # Modules
//!
//! - **dom_tag_config**: static element classification tables (void and
//!   block elements) used by emission and whitespace decisions
//! - **hash**: SHA-256 helpers for deriving stable generated symbol names

pub mod dom_tag_config;
pub mod hash;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_set, Set as PhfSet};

pub use dom_tag_config::*;
