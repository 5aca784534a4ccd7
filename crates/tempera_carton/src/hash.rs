//! SHA-256 hashing utilities.
//!
//! Generated script components carry a short content digest in their function
//! name so that renaming a template or editing its body produces a distinct
//! global symbol in the browser.

use core::fmt::Write;

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `data` as a lowercase hex string.
pub fn sha256_hex(data: &str) -> crate::String {
    let digest = Sha256::digest(data.as_bytes());
    let mut out = crate::String::with_capacity(64);
    for b in digest {
        // Writing to a string buffer cannot fail.
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// First 4 hex characters of the SHA-256 digest of `data`.
#[inline]
pub fn short_hash(data: &str) -> crate::String {
    let mut hex = sha256_hex(data);
    hex.truncate(4);
    hex
}
