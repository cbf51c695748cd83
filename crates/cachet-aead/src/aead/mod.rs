//! AEAD orchestration.
//!
//! Four operation shapes (combined encrypt/decrypt and detached
//! encrypt/decrypt), each usable with a raw key through [`AeadCipher`] or
//! with a [`PrecomputedContext`] built once per key. The two paths are
//! observably interchangeable.
//!
//! ## Module Organization
//!
//! - [`cipher`] - The [`AeadCipher`] engine, [`Tag`] and [`DetachedCiphertext`]
//! - [`context`] - The [`PrecomputedContext`] fast path
//! - `backend` - Internal dispatch to the cipher primitives
//! - `chacha_legacy` - The pre-IETF ChaCha20-Poly1305 construction
//!
//! ## Usage
//!
//! ```
//! use cachet_aead::{AeadCipher, Algorithm};
//!
//! # fn main() -> Result<(), cachet_aead::AeadError> {
//! let engine = AeadCipher::new();
//! let key = cachet_aead::random_key(Algorithm::XChaCha20Poly1305Ietf)?;
//! let nonce = cachet_aead::random_nonce(Algorithm::XChaCha20Poly1305Ietf)?;
//!
//! let sealed = engine.encrypt(
//!     Algorithm::XChaCha20Poly1305Ietf,
//!     b"secret",
//!     Some(b"metadata"),
//!     &nonce,
//!     &key,
//! )?;
//! let opened = engine.decrypt(
//!     Algorithm::XChaCha20Poly1305Ietf,
//!     &sealed,
//!     Some(b"metadata"),
//!     &nonce,
//!     &key,
//! )?;
//! assert_eq!(opened, b"secret");
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod context;

pub(crate) mod backend;
pub(crate) mod chacha_legacy;

pub use cipher::{AeadCipher, DetachedCiphertext, Tag};
pub use context::PrecomputedContext;
