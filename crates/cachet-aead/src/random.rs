//! Secure random number generation.
//!
//! All randomness comes from the operating system CSPRNG. These helpers
//! exist for callers generating fresh keys and nonces; nonce uniqueness per
//! key remains the caller's responsibility.

use crate::error::AeadError;
use crate::suite::Algorithm;

/// Fill a buffer with random bytes from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`AeadError::RandomFailed`] if the underlying OS CSPRNG fails.
pub fn fill_random(buf: &mut [u8]) -> Result<(), AeadError> {
    getrandom::getrandom(buf).map_err(|_| AeadError::RandomFailed)
}

/// Generate a random key of the exact length `algorithm` requires.
///
/// # Errors
///
/// Returns [`AeadError::RandomFailed`] if the underlying OS CSPRNG fails.
pub fn random_key(algorithm: Algorithm) -> Result<Vec<u8>, AeadError> {
    let mut key = vec![0u8; algorithm.key_len()];
    fill_random(&mut key)?;
    Ok(key)
}

/// Generate a random nonce of the exact length `algorithm` requires.
///
/// Random nonces are only collision-safe for the extended-nonce
/// [`Algorithm::XChaCha20Poly1305Ietf`]; for the short-nonce algorithms a
/// counter scheme is the safer choice.
///
/// # Errors
///
/// Returns [`AeadError::RandomFailed`] if the underlying OS CSPRNG fails.
pub fn random_nonce(algorithm: Algorithm) -> Result<Vec<u8>, AeadError> {
    let mut nonce = vec![0u8; algorithm.nonce_len()];
    fill_random(&mut nonce)?;
    Ok(nonce)
}
