//! Admin password verification.
//!
//! The admin gate is a single shared password; configuration carries only its
//! SHA-256 hex digest, never the plaintext.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a password, as stored in configuration.
pub fn password_hash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare a supplied password against the configured digest.
pub fn verify_password(password: &str, expected_hex: &str) -> bool {
    password_hash(password).eq_ignore_ascii_case(expected_hex.trim())
}
