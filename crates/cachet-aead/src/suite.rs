//! Algorithm parameter tables.
//!
//! One [`Profile`] per supported algorithm, fixed at process start and never
//! mutated. All four algorithms use 256-bit keys and 128-bit tags; they
//! differ only in nonce length and in whether availability is gated on
//! hardware support.

use crate::capability::{CapabilityProbe, HostProbe};
use crate::error::AeadError;
use std::fmt;

/// Key size shared by all supported algorithms (32 bytes / 256 bits).
pub const KEY_SIZE: usize = 32;

/// Authentication tag size shared by all supported algorithms (16 bytes).
pub const TAG_SIZE: usize = 16;

/// AES-256-GCM nonce size (12 bytes / 96 bits).
pub const AES256GCM_NONCE_SIZE: usize = 12;

/// ChaCha20-Poly1305 (original construction) nonce size (8 bytes / 64 bits).
pub const CHACHA20POLY1305_NONCE_SIZE: usize = 8;

/// ChaCha20-Poly1305-IETF nonce size (12 bytes / 96 bits).
pub const CHACHA20POLY1305_IETF_NONCE_SIZE: usize = 12;

/// XChaCha20-Poly1305-IETF nonce size (24 bytes / 192 bits).
pub const XCHACHA20POLY1305_IETF_NONCE_SIZE: usize = 24;

/// Supported AEAD algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// AES-256-GCM. Hardware-accelerated only; availability must be checked
    /// via [`crate::capability`] before use.
    Aes256Gcm,
    /// ChaCha20-Poly1305, the original construction with a 64-bit nonce.
    ChaCha20Poly1305,
    /// ChaCha20-Poly1305 as specified in RFC 8439 (96-bit nonce).
    ChaCha20Poly1305Ietf,
    /// XChaCha20-Poly1305 with an extended 192-bit nonce, safe for random
    /// nonce generation.
    XChaCha20Poly1305Ietf,
}

/// All supported algorithms, in registry order.
pub const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::Aes256Gcm,
    Algorithm::ChaCha20Poly1305,
    Algorithm::ChaCha20Poly1305Ietf,
    Algorithm::XChaCha20Poly1305Ietf,
];

impl Algorithm {
    /// Secret key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        KEY_SIZE
    }

    /// Public nonce length in bytes.
    #[must_use]
    pub const fn nonce_len(self) -> usize {
        match self {
            Self::Aes256Gcm => AES256GCM_NONCE_SIZE,
            Self::ChaCha20Poly1305 => CHACHA20POLY1305_NONCE_SIZE,
            Self::ChaCha20Poly1305Ietf => CHACHA20POLY1305_IETF_NONCE_SIZE,
            Self::XChaCha20Poly1305Ietf => XCHACHA20POLY1305_IETF_NONCE_SIZE,
        }
    }

    /// Authentication tag length in bytes.
    #[must_use]
    pub const fn tag_len(self) -> usize {
        TAG_SIZE
    }

    /// Whether availability depends on hardware support.
    #[must_use]
    pub const fn hardware_gated(self) -> bool {
        matches!(self, Self::Aes256Gcm)
    }

    /// Wire identifier for this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes256Gcm => "aes256gcm",
            Self::ChaCha20Poly1305 => "chacha20poly1305",
            Self::ChaCha20Poly1305Ietf => "chacha20poly1305-ietf",
            Self::XChaCha20Poly1305Ietf => "xchacha20poly1305-ietf",
        }
    }

    /// Parse a wire identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::UnknownAlgorithm`] for an unrecognized identifier.
    pub fn from_name(name: &str) -> Result<Self, AeadError> {
        ALGORITHMS
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| AeadError::UnknownAlgorithm {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable parameter record for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// The algorithm this profile describes.
    pub algorithm: Algorithm,
    /// Secret key length in bytes.
    pub key_len: usize,
    /// Public nonce length in bytes.
    pub nonce_len: usize,
    /// Authentication tag length in bytes.
    pub tag_len: usize,
    /// Whether the algorithm is usable on this host.
    pub available: bool,
}

impl Profile {
    pub(crate) fn new(algorithm: Algorithm, available: bool) -> Self {
        Self {
            algorithm,
            key_len: algorithm.key_len(),
            nonce_len: algorithm.nonce_len(),
            tag_len: algorithm.tag_len(),
            available,
        }
    }
}

/// Look up the parameter profile for an algorithm.
///
/// Availability reflects the host hardware probe; use
/// [`crate::AeadCipher::profile`] to evaluate against an injected probe.
#[must_use]
pub fn profile_for(algorithm: Algorithm) -> Profile {
    Profile::new(algorithm, HostProbe.is_available(algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_table_matches_registry() {
        let expected = [
            (Algorithm::Aes256Gcm, 32, 12, 16),
            (Algorithm::ChaCha20Poly1305, 32, 8, 16),
            (Algorithm::ChaCha20Poly1305Ietf, 32, 12, 16),
            (Algorithm::XChaCha20Poly1305Ietf, 32, 24, 16),
        ];

        for (algorithm, key_len, nonce_len, tag_len) in expected {
            assert_eq!(algorithm.key_len(), key_len);
            assert_eq!(algorithm.nonce_len(), nonce_len);
            assert_eq!(algorithm.tag_len(), tag_len);
        }
    }

    #[test]
    fn only_aes_is_hardware_gated() {
        for algorithm in ALGORITHMS {
            assert_eq!(
                algorithm.hardware_gated(),
                algorithm == Algorithm::Aes256Gcm
            );
        }
    }

    #[test]
    fn wire_names_roundtrip() {
        for algorithm in ALGORITHMS {
            assert_eq!(Algorithm::from_name(algorithm.name()).unwrap(), algorithm);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = Algorithm::from_name("aes128gcm").unwrap_err();
        assert!(matches!(err, AeadError::UnknownAlgorithm { name } if name == "aes128gcm"));
    }

    #[test]
    fn profile_carries_algorithm_parameters() {
        let profile = profile_for(Algorithm::XChaCha20Poly1305Ietf);
        assert_eq!(profile.algorithm, Algorithm::XChaCha20Poly1305Ietf);
        assert_eq!(profile.key_len, 32);
        assert_eq!(profile.nonce_len, 24);
        assert_eq!(profile.tag_len, 16);
        assert!(profile.available);
    }
}
