//! Authentication primitives.
//!
//! - [`password`] -- admin password verification (SHA-256 hex or Argon2id).
//! - [`token`] -- bearer header parsing and opaque session tokens.

pub mod password;
pub mod token;
