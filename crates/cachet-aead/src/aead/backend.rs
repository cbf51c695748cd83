//! Primitive dispatch.
//!
//! One prepared cipher per algorithm. Constructing a [`Backend`] performs the
//! key-schedule expansion, so it doubles as the precomputation step; the
//! key-path operations build one ephemerally and drop it after a single call.
//!
//! Buffer lengths are validated by the layer above; this module trusts the
//! primitives only for the cryptographic transform and maps their opaque
//! failures to [`AeadError::EncryptionFailed`] and
//! [`AeadError::AuthenticationFailed`].

use super::chacha_legacy::LegacyChaCha20Poly1305;
use super::cipher::Tag;
use crate::capability::CapabilityProbe;
use crate::error::AeadError;
use crate::suite::Algorithm;
use aes_gcm::Aes256Gcm;
use chacha20poly1305::aead::generic_array::GenericArray;
use chacha20poly1305::aead::generic_array::typenum::U16;
use chacha20poly1305::aead::{AeadCore, AeadInPlace, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, XChaCha20Poly1305};
use zeroize::Zeroize;

/// Prepared cipher state for one algorithm.
#[derive(Clone)]
pub(crate) enum Backend {
    Aes256Gcm(Box<Aes256Gcm>),
    ChaCha20Poly1305(LegacyChaCha20Poly1305),
    ChaCha20Poly1305Ietf(ChaCha20Poly1305),
    XChaCha20Poly1305Ietf(XChaCha20Poly1305),
}

impl Backend {
    /// Expand `key` into a prepared cipher for `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::AlgorithmUnavailable`] when the probe reports the
    /// algorithm unusable, and [`AeadError::InvalidKeyLength`] for a key of
    /// the wrong length. The key material is never retained beyond the
    /// prepared state.
    pub(crate) fn new(
        algorithm: Algorithm,
        key: &[u8],
        probe: &dyn CapabilityProbe,
    ) -> Result<Self, AeadError> {
        if !probe.is_available(algorithm) {
            return Err(AeadError::AlgorithmUnavailable { algorithm });
        }
        if key.len() != algorithm.key_len() {
            return Err(AeadError::InvalidKeyLength {
                expected: algorithm.key_len(),
                actual: key.len(),
            });
        }

        Ok(match algorithm {
            Algorithm::Aes256Gcm => {
                Self::Aes256Gcm(Box::new(Aes256Gcm::new(GenericArray::from_slice(key))))
            }
            Algorithm::ChaCha20Poly1305 => {
                let mut key_bytes = [0u8; 32];
                key_bytes.copy_from_slice(key);
                let backend = Self::ChaCha20Poly1305(LegacyChaCha20Poly1305::new(key_bytes));
                key_bytes.zeroize();
                backend
            }
            Algorithm::ChaCha20Poly1305Ietf => {
                Self::ChaCha20Poly1305Ietf(ChaCha20Poly1305::new(GenericArray::from_slice(key)))
            }
            Algorithm::XChaCha20Poly1305Ietf => {
                Self::XChaCha20Poly1305Ietf(XChaCha20Poly1305::new(GenericArray::from_slice(key)))
            }
        })
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        match self {
            Self::Aes256Gcm(_) => Algorithm::Aes256Gcm,
            Self::ChaCha20Poly1305(_) => Algorithm::ChaCha20Poly1305,
            Self::ChaCha20Poly1305Ietf(_) => Algorithm::ChaCha20Poly1305Ietf,
            Self::XChaCha20Poly1305Ietf(_) => Algorithm::XChaCha20Poly1305Ietf,
        }
    }

    /// Encrypt `plaintext`, returning ciphertext and detached tag.
    ///
    /// `nonce` must already have the profile length for this algorithm.
    pub(crate) fn seal_detached(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<(Vec<u8>, Tag), AeadError> {
        match self {
            Self::Aes256Gcm(cipher) => seal_with(cipher.as_ref(), nonce, plaintext, aad),
            Self::ChaCha20Poly1305(cipher) => {
                let mut nonce_bytes = [0u8; super::chacha_legacy::NONCE_LEN];
                nonce_bytes.copy_from_slice(nonce);
                let (ciphertext, tag) = cipher.seal_detached(&nonce_bytes, plaintext, aad);
                Ok((ciphertext, Tag::from_bytes(tag)))
            }
            Self::ChaCha20Poly1305Ietf(cipher) => seal_with(cipher, nonce, plaintext, aad),
            Self::XChaCha20Poly1305Ietf(cipher) => seal_with(cipher, nonce, plaintext, aad),
        }
    }

    /// Verify `tag` and decrypt `ciphertext`, all-or-nothing.
    ///
    /// `nonce` must already have the profile length for this algorithm.
    pub(crate) fn open_detached(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        tag: &Tag,
        aad: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        match self {
            Self::Aes256Gcm(cipher) => open_with(cipher.as_ref(), nonce, ciphertext, tag, aad),
            Self::ChaCha20Poly1305(cipher) => {
                let mut nonce_bytes = [0u8; super::chacha_legacy::NONCE_LEN];
                nonce_bytes.copy_from_slice(nonce);
                cipher.open_detached(&nonce_bytes, ciphertext, tag.as_bytes(), aad)
            }
            Self::ChaCha20Poly1305Ietf(cipher) => open_with(cipher, nonce, ciphertext, tag, aad),
            Self::XChaCha20Poly1305Ietf(cipher) => open_with(cipher, nonce, ciphertext, tag, aad),
        }
    }
}

fn seal_with<C>(
    cipher: &C,
    nonce: &[u8],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, Tag), AeadError>
where
    C: AeadInPlace + AeadCore<TagSize = U16>,
{
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(nonce), aad, &mut buffer)
        .map_err(|_| AeadError::EncryptionFailed)?;
    Ok((buffer, Tag::from_bytes(tag.into())))
}

fn open_with<C>(
    cipher: &C,
    nonce: &[u8],
    ciphertext: &[u8],
    tag: &Tag,
    aad: &[u8],
) -> Result<Vec<u8>, AeadError>
where
    C: AeadInPlace + AeadCore<TagSize = U16>,
{
    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            aad,
            &mut buffer,
            GenericArray::from_slice(tag.as_bytes()),
        )
        .map_err(|_| AeadError::AuthenticationFailed)?;
    Ok(buffer)
}
