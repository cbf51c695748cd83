//! Precomputed key-schedule contexts.

use super::backend::Backend;
use super::cipher::{self, DetachedCiphertext};
use crate::error::AeadError;
use crate::suite::{Algorithm, Profile};
use std::fmt;

/// A key expanded once, reusable across many messages.
///
/// Built through [`AeadCipher::build_context`](super::cipher::AeadCipher::build_context).
/// The context is immutable after construction and may be shared read-only
/// across threads; it holds the expanded schedule only, never the original
/// key slice. Dropping it discards the schedule (ChaCha20 key material is
/// zeroized).
///
/// Operations on a context are byte-for-byte interchangeable with the
/// raw-key operations on [`AeadCipher`](super::cipher::AeadCipher): either
/// path decrypts the other's output.
#[derive(Clone)]
pub struct PrecomputedContext {
    backend: Backend,
}

impl PrecomputedContext {
    pub(crate) fn from_backend(backend: Backend) -> Self {
        Self { backend }
    }

    /// The algorithm this context was built for.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.backend.algorithm()
    }

    /// Parameter profile for this context's algorithm.
    ///
    /// Always available: the context could not have been built otherwise.
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile::new(self.algorithm(), true)
    }

    /// Encrypt `plaintext` in combined mode under this context.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidNonceLength`] or
    /// [`AeadError::EncryptionFailed`].
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        cipher::seal_combined(&self.backend, plaintext, aad, nonce)
    }

    /// Decrypt a combined-mode buffer under this context.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::CiphertextTooShort`],
    /// [`AeadError::InvalidNonceLength`] or
    /// [`AeadError::AuthenticationFailed`] with no plaintext produced.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        cipher::open_combined(&self.backend, ciphertext, aad, nonce)
    }

    /// Encrypt `plaintext` in detached mode under this context.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidNonceLength`] or
    /// [`AeadError::EncryptionFailed`].
    pub fn encrypt_detached(
        &self,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
    ) -> Result<DetachedCiphertext, AeadError> {
        cipher::seal_detached(&self.backend, plaintext, aad, nonce)
    }

    /// Decrypt a detached ciphertext/tag pair under this context.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidTagLength`],
    /// [`AeadError::InvalidNonceLength`] or
    /// [`AeadError::AuthenticationFailed`] with no plaintext produced.
    pub fn decrypt_detached(
        &self,
        ciphertext: &[u8],
        tag: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        cipher::open_detached(&self.backend, ciphertext, tag, aad, nonce)
    }
}

impl fmt::Debug for PrecomputedContext {
    // Never expose the expanded schedule.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrecomputedContext")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}
