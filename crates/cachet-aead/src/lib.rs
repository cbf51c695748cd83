//! # Cachet AEAD
//!
//! A uniform authenticated-encryption-with-associated-data (AEAD) layer over
//! interchangeable cipher primitives.
//!
//! This crate provides:
//! - Per-algorithm parameter profiles and wire identifiers
//! - Hardware capability detection for AES-256-GCM
//! - Combined mode (ciphertext with appended tag) and detached mode
//!   (ciphertext and tag as separate buffers)
//! - A precomputed-context fast path amortizing key-schedule expansion
//! - Strict buffer-contract validation before any primitive runs, and an
//!   all-or-nothing failure model for decryption
//!
//! ## Supported Algorithms
//!
//! | Algorithm | Key | Nonce | Tag | Availability |
//! |-----------|-----|-------|-----|--------------|
//! | AES-256-GCM | 32 | 12 | 16 | hardware-gated |
//! | ChaCha20-Poly1305 | 32 | 8 | 16 | always |
//! | ChaCha20-Poly1305-IETF | 32 | 12 | 16 | always |
//! | XChaCha20-Poly1305-IETF | 32 | 24 | 16 | always |
//!
//! Callers supply keys and nonces and are responsible for nonce uniqueness
//! per key; this layer does not manage key storage, rotation, or nonce
//! policy, and offers whole-message operations only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod aead;
pub mod capability;
pub mod constant_time;
pub mod error;
pub mod random;
pub mod suite;

pub use aead::{AeadCipher, DetachedCiphertext, PrecomputedContext, Tag};
pub use capability::{CapabilityProbe, HostProbe, aes256gcm_available};
pub use error::AeadError;
pub use random::{fill_random, random_key, random_nonce};
pub use suite::{ALGORITHMS, Algorithm, Profile, profile_for};
