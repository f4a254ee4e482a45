//! Admin password hashing and verification.
//!
//! Stored hashes come in two shapes:
//!
//! - a 64-character SHA-256 hex digest of the password (rows seeded by hand);
//! - an Argon2id PHC string (rows seeded by this server on startup).
//!
//! [`verify_password`] accepts either. New hashes are always Argon2id.

use std::sync::LazyLock;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand_core::OsRng;
use sitekit_core::hashing::{digest_eq, sha256_hex};

/// PHC identifier prefix of Argon2 hashes.
const ARGON2_PREFIX: &str = "$argon2";

/// Argon2id hash checked when the username is unknown, so a miss costs the
/// same as a wrong password.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    hash_password("sitekit-unknown-user").expect("OS RNG available for salt generation")
});

/// Argon2id PHC string for `password` under a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
}

/// Check `password` against a stored hash of either shape.
///
/// A mismatch is `Ok(false)`. Only an Argon2 string that fails to parse is
/// an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, argon2::password_hash::Error> {
    if stored.starts_with(ARGON2_PREFIX) {
        let parsed_hash = PasswordHash::new(stored)?;
        return match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        };
    }

    Ok(digest_eq(&sha256_hex(password.as_bytes()), stored))
}

/// Verify `password` against the stored hash of a looked-up account, or
/// against [`DUMMY_HASH`] when there is none. A missing account never
/// verifies.
pub fn verify_login(password: &str, stored: Option<&str>) -> Result<bool, argon2::password_hash::Error> {
    match stored {
        Some(stored) => verify_password(password, stored),
        None => {
            verify_password(password, dummy_hash())?;
            Ok(false)
        }
    }
}

/// The Argon2id PHC string used for unknown usernames.
pub fn dummy_hash() -> &'static str {
    DUMMY_HASH.as_str()
}
