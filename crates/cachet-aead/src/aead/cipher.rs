//! Combined and detached AEAD operations.
//!
//! [`AeadCipher`] is the raw-key entry point: each call validates every
//! buffer against the algorithm profile, expands the key into an ephemeral
//! prepared state, runs the transform, and discards the state. Callers
//! encrypting many messages under one key should build a
//! [`PrecomputedContext`](super::context::PrecomputedContext) instead; both
//! paths produce byte-identical output and accept each other's output.
//!
//! Combined mode is layered over detached mode, so the byte layout invariant
//! `combined = ciphertext || tag` holds structurally.

use super::backend::Backend;
use crate::capability::{CapabilityProbe, HostProbe};
use crate::error::AeadError;
use crate::suite::{Algorithm, Profile, TAG_SIZE};

/// Detached authentication tag (16 bytes for all supported algorithms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag([u8; TAG_SIZE]);

impl Tag {
    /// Create a tag from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, returning `None` on a length mismatch.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != TAG_SIZE {
            return None;
        }
        let mut bytes = [0u8; TAG_SIZE];
        bytes.copy_from_slice(slice);
        Some(Self(bytes))
    }

    /// Get raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Output of a detached-mode encryption.
///
/// Ciphertext and tag are independent buffers, for layouts that store or
/// transmit the tag separately (fixed-layout records, out-of-band MACs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetachedCiphertext {
    /// Encrypted message, same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Authentication tag over ciphertext and associated data.
    pub tag: Tag,
}

impl DetachedCiphertext {
    /// Concatenate into the combined layout, `ciphertext || tag`.
    #[must_use]
    pub fn into_combined(self) -> Vec<u8> {
        let mut combined = self.ciphertext;
        combined.extend_from_slice(self.tag.as_bytes());
        combined
    }
}

/// AEAD engine dispatching over algorithm profiles.
///
/// Carries no per-request state; one instance may serve any number of
/// threads. The capability probe defaults to live CPU detection and can be
/// replaced, which is how availability gating is exercised in tests.
#[derive(Debug, Clone, Default)]
pub struct AeadCipher<P: CapabilityProbe = HostProbe> {
    probe: P,
}

impl AeadCipher<HostProbe> {
    /// Create an engine backed by host CPU detection.
    #[must_use]
    pub fn new() -> Self {
        Self { probe: HostProbe }
    }
}

impl<P: CapabilityProbe> AeadCipher<P> {
    /// Create an engine with an injected capability probe.
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Whether `algorithm` is usable under this engine's probe.
    pub fn is_available(&self, algorithm: Algorithm) -> bool {
        self.probe.is_available(algorithm)
    }

    /// Parameter profile for `algorithm`, with availability evaluated
    /// against this engine's probe.
    pub fn profile(&self, algorithm: Algorithm) -> Profile {
        Profile::new(algorithm, self.is_available(algorithm))
    }

    /// Expand `key` once for reuse across many messages.
    ///
    /// This is the performance lever for algorithms with an expensive key
    /// schedule (AES-256-GCM): the expansion cost is paid here instead of on
    /// every call.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::AlgorithmUnavailable`] or
    /// [`AeadError::InvalidKeyLength`].
    pub fn build_context(
        &self,
        algorithm: Algorithm,
        key: &[u8],
    ) -> Result<super::context::PrecomputedContext, AeadError> {
        let backend = Backend::new(algorithm, key, &self.probe)?;
        tracing::trace!(algorithm = %algorithm, "built precomputed context");
        Ok(super::context::PrecomputedContext::from_backend(backend))
    }

    /// Encrypt `plaintext` in combined mode.
    ///
    /// Returns a buffer of `plaintext.len() + tag_len` bytes with the tag
    /// occupying the trailing bytes. `aad` is authenticated but not
    /// encrypted; `None` and `Some(b"")` are both accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidNonceLength`],
    /// [`AeadError::InvalidKeyLength`], [`AeadError::AlgorithmUnavailable`]
    /// or [`AeadError::EncryptionFailed`].
    pub fn encrypt(
        &self,
        algorithm: Algorithm,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        check_nonce(algorithm, nonce)?;
        let backend = Backend::new(algorithm, key, &self.probe)?;
        seal_combined(&backend, plaintext, aad, nonce)
    }

    /// Decrypt a combined-mode buffer.
    ///
    /// Returns exactly `ciphertext.len() - tag_len` bytes of plaintext.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::CiphertextTooShort`] before any primitive work
    /// if the input cannot contain a tag, the usual shape errors, or
    /// [`AeadError::AuthenticationFailed`] with no plaintext produced.
    pub fn decrypt(
        &self,
        algorithm: Algorithm,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        check_combined(algorithm, ciphertext)?;
        check_nonce(algorithm, nonce)?;
        let backend = Backend::new(algorithm, key, &self.probe)?;
        open_combined(&backend, ciphertext, aad, nonce)
    }

    /// Encrypt `plaintext` in detached mode.
    ///
    /// # Errors
    ///
    /// Same failure set as [`AeadCipher::encrypt`].
    pub fn encrypt_detached(
        &self,
        algorithm: Algorithm,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
        key: &[u8],
    ) -> Result<DetachedCiphertext, AeadError> {
        check_nonce(algorithm, nonce)?;
        let backend = Backend::new(algorithm, key, &self.probe)?;
        seal_detached(&backend, plaintext, aad, nonce)
    }

    /// Decrypt a detached ciphertext/tag pair.
    ///
    /// The tag length is validated exactly equal to the profile tag length.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::InvalidTagLength`], the usual shape errors, or
    /// [`AeadError::AuthenticationFailed`] with no plaintext produced.
    pub fn decrypt_detached(
        &self,
        algorithm: Algorithm,
        ciphertext: &[u8],
        tag: &[u8],
        aad: Option<&[u8]>,
        nonce: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let tag = check_tag(algorithm, tag)?;
        check_nonce(algorithm, nonce)?;
        let backend = Backend::new(algorithm, key, &self.probe)?;
        backend.open_detached(nonce, ciphertext, &tag, aad.unwrap_or_default())
    }
}

pub(crate) fn check_nonce(algorithm: Algorithm, nonce: &[u8]) -> Result<(), AeadError> {
    if nonce.len() != algorithm.nonce_len() {
        return Err(AeadError::InvalidNonceLength {
            expected: algorithm.nonce_len(),
            actual: nonce.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_combined(algorithm: Algorithm, ciphertext: &[u8]) -> Result<(), AeadError> {
    if ciphertext.len() < algorithm.tag_len() {
        return Err(AeadError::CiphertextTooShort {
            min: algorithm.tag_len(),
            actual: ciphertext.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_tag(algorithm: Algorithm, tag: &[u8]) -> Result<Tag, AeadError> {
    Tag::from_slice(tag).ok_or(AeadError::InvalidTagLength {
        expected: algorithm.tag_len(),
        actual: tag.len(),
    })
}

pub(crate) fn seal_detached(
    backend: &Backend,
    plaintext: &[u8],
    aad: Option<&[u8]>,
    nonce: &[u8],
) -> Result<DetachedCiphertext, AeadError> {
    check_nonce(backend.algorithm(), nonce)?;
    let (ciphertext, tag) = backend.seal_detached(nonce, plaintext, aad.unwrap_or_default())?;
    Ok(DetachedCiphertext { ciphertext, tag })
}

pub(crate) fn seal_combined(
    backend: &Backend,
    plaintext: &[u8],
    aad: Option<&[u8]>,
    nonce: &[u8],
) -> Result<Vec<u8>, AeadError> {
    seal_detached(backend, plaintext, aad, nonce).map(DetachedCiphertext::into_combined)
}

pub(crate) fn open_combined(
    backend: &Backend,
    ciphertext: &[u8],
    aad: Option<&[u8]>,
    nonce: &[u8],
) -> Result<Vec<u8>, AeadError> {
    let algorithm = backend.algorithm();
    check_combined(algorithm, ciphertext)?;
    check_nonce(algorithm, nonce)?;

    let (body, tag) = ciphertext.split_at(ciphertext.len() - algorithm.tag_len());
    let tag = check_tag(algorithm, tag)?;
    backend.open_detached(nonce, body, &tag, aad.unwrap_or_default())
}

pub(crate) fn open_detached(
    backend: &Backend,
    ciphertext: &[u8],
    tag: &[u8],
    aad: Option<&[u8]>,
    nonce: &[u8],
) -> Result<Vec<u8>, AeadError> {
    let algorithm = backend.algorithm();
    let tag = check_tag(algorithm, tag)?;
    check_nonce(algorithm, nonce)?;
    backend.open_detached(nonce, ciphertext, &tag, aad.unwrap_or_default())
}
