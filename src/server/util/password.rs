//! Argon2id password hashing.
//!
//! Hashes are stored in PHC string format so the algorithm parameters and salt travel with
//! the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::server::error::Error;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// # Returns
/// - `Ok(String)`: PHC formatted hash including algorithm, params & salt
/// - `Err(Error::PasswordHashError)`: Hashing failed
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Ok(hash.to_string())
}
