//! Credential hashing for the admin registry.
//!
//! Passwords are stored as salted PBKDF2-HMAC-SHA256 digests and verified
//! with a constant-time comparison to mitigate timing attacks. The stored
//! form is `pbkdf2-sha256$<iterations>$<salt b64>$<digest b64>`, so the
//! iteration count can be raised later without invalidating old hashes.

use base64::engine::general_purpose::STANDARD_NO_PAD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand_core::{OsRng, RngCore};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::errors::AppError;

const SCHEME: &str = "pbkdf2-sha256";
const ITERATIONS: u32 = 600_000;
const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let digest = derive(password, &salt, ITERATIONS);
    format!(
        "{}${}${}${}",
        SCHEME,
        ITERATIONS,
        B64.encode(salt),
        B64.encode(digest)
    )
}

/// Check a password against a stored hash.
///
/// A malformed stored hash is an internal error, not a failed login; it
/// means the registry itself is corrupt.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AppError> {
    let mut parts = stored.splitn(4, '$');
    let (Some(scheme), Some(iterations), Some(salt_b64), Some(digest_b64)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    if scheme != SCHEME {
        return Err(malformed());
    }
    let iterations: u32 = iterations.parse().map_err(|_| malformed())?;
    let salt = B64.decode(salt_b64).map_err(|_| malformed())?;
    let expected = B64.decode(digest_b64).map_err(|_| malformed())?;

    let actual = derive(password, &salt, iterations);

    // Constant-time comparison to prevent timing attacks
    Ok(actual.as_slice().ct_eq(expected.as_slice()).into())
}

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut out);
    out
}

fn malformed() -> AppError {
    AppError::Internal("Malformed password hash in admin registry".to_string())
}
