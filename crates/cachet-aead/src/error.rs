//! AEAD error types.

use crate::suite::Algorithm;
use thiserror::Error;

/// Errors reported by the AEAD layer.
///
/// Every buffer crossing the layer boundary has an exact, profile-derived
/// expected length; mismatches are rejected here before the cipher primitive
/// runs. Authentication failures are all-or-nothing: no plaintext is ever
/// returned alongside [`AeadError::AuthenticationFailed`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AeadError {
    /// Algorithm identifier not recognized
    #[error("unknown algorithm: {name:?}")]
    UnknownAlgorithm {
        /// The identifier that failed to parse
        name: String,
    },

    /// Hardware-gated algorithm not usable on this host
    #[error("{algorithm} is not available on this host")]
    AlgorithmUnavailable {
        /// The unavailable algorithm
        algorithm: Algorithm,
    },

    /// Invalid key length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid nonce length
    #[error("invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid authentication tag length
    #[error("invalid tag length: expected {expected}, got {actual}")]
    InvalidTagLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Combined ciphertext shorter than one authentication tag
    #[error("ciphertext too short: need at least {min} bytes, got {actual}")]
    CiphertextTooShort {
        /// Minimum valid length (the tag length)
        min: usize,
        /// Actual length
        actual: usize,
    },

    /// Tag verification failed during decryption
    #[error("decryption failed: authentication failure")]
    AuthenticationFailed,

    /// Primitive-internal fault during encryption
    #[error("encryption failed")]
    EncryptionFailed,

    /// Random number generation failed
    #[error("random number generation failed")]
    RandomFailed,
}
