//! Argon2id hashing for account passwords and camp staff PINs.
//!
//! Secrets are stored only as PHC strings; plaintext never reaches the
//! database.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

/// Hash a secret with Argon2id and a fresh random salt.
///
/// Returns the PHC string (`$argon2id$...`) to store.
pub fn hash_secret(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a secret against a stored PHC string.
///
/// An unparseable stored hash counts as a non-match, so callers can treat
/// the result as plain credential failure.
pub fn verify_secret(plain: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}
