//! Password hashing and verification (Argon2id).
//!
//! Hashes are stored as PHC-format strings (`$argon2id$v=19$...`) in the
//! `password_hash` column of the users table. Plaintext passwords never
//! touch the database.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::ServiceError;

/// Hash a password with a fresh random salt. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            log::error!("Password hashing failed: {}", e);
            ServiceError::Internal
        })
}

/// Verify a password against a stored PHC hash. A malformed stored hash
/// counts as a mismatch so sign-in stays a uniform yes/no.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
