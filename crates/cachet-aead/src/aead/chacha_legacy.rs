//! Original ChaCha20-Poly1305 construction (64-bit nonce).
//!
//! This is the pre-IETF AEAD construction: the Poly1305 one-time key is the
//! first 32 bytes of the ChaCha20 keystream at block 0, the message is
//! encrypted starting at block 1, and the tag is computed over
//! `ad || len(ad) || ciphertext || len(ciphertext)` with both lengths as
//! unpadded 64-bit little-endian words. It differs from RFC 8439 in nonce
//! length and MAC input layout, so it cannot be assembled from the IETF
//! cipher types; it is built here from the ChaCha20 stream cipher and the
//! raw Poly1305 MAC.
//!
//! Verification runs before any decryption: a forged tag never produces
//! plaintext bytes.

use crate::constant_time;
use crate::error::AeadError;
use chacha20::ChaCha20Legacy;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use poly1305::Poly1305;
use poly1305::universal_hash::KeyInit;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key length in bytes.
pub(crate) const KEY_LEN: usize = 32;

/// Nonce length in bytes.
pub(crate) const NONCE_LEN: usize = 8;

/// Tag length in bytes.
pub(crate) const TAG_LEN: usize = 16;

/// Prepared legacy ChaCha20-Poly1305 cipher.
///
/// ChaCha20 has no key schedule to expand, so the prepared state is the key
/// itself, zeroized on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub(crate) struct LegacyChaCha20Poly1305 {
    key: [u8; KEY_LEN],
}

impl LegacyChaCha20Poly1305 {
    pub(crate) fn new(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Encrypt `plaintext`, returning the ciphertext and detached tag.
    pub(crate) fn seal_detached(
        &self,
        nonce: &[u8; NONCE_LEN],
        plaintext: &[u8],
        aad: &[u8],
    ) -> (Vec<u8>, [u8; TAG_LEN]) {
        let (mut cipher, mac_key) = self.prepare(nonce);

        let mut ciphertext = plaintext.to_vec();
        cipher.apply_keystream(&mut ciphertext);

        let tag = compute_tag(&mac_key, aad, &ciphertext);
        (ciphertext, tag)
    }

    /// Verify `tag`, then decrypt `ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::AuthenticationFailed`] if the tag does not match;
    /// no plaintext is produced in that case.
    pub(crate) fn open_detached(
        &self,
        nonce: &[u8; NONCE_LEN],
        ciphertext: &[u8],
        tag: &[u8; TAG_LEN],
        aad: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let (mut cipher, mac_key) = self.prepare(nonce);

        let expected = compute_tag(&mac_key, aad, ciphertext);
        if !constant_time::verify_16(&expected, tag) {
            return Err(AeadError::AuthenticationFailed);
        }

        let mut plaintext = ciphertext.to_vec();
        cipher.apply_keystream(&mut plaintext);
        Ok(plaintext)
    }

    /// Set up the stream cipher and derive the one-time Poly1305 key.
    ///
    /// Consumes keystream block 0 for the MAC key, leaving the cipher
    /// positioned at block 1 for the message.
    fn prepare(&self, nonce: &[u8; NONCE_LEN]) -> (ChaCha20Legacy, Mac) {
        let mut cipher = ChaCha20Legacy::new((&self.key).into(), nonce.into());

        let mut block0 = [0u8; 64];
        cipher.apply_keystream(&mut block0);

        let mut mac_key = [0u8; 32];
        mac_key.copy_from_slice(&block0[..32]);
        block0.zeroize();

        (cipher, Mac(mac_key))
    }
}

/// One-time Poly1305 key, zeroized on drop.
struct Mac([u8; 32]);

impl Drop for Mac {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

fn compute_tag(mac_key: &Mac, aad: &[u8], ciphertext: &[u8]) -> [u8; TAG_LEN] {
    let mut mac_data = Vec::with_capacity(aad.len() + ciphertext.len() + 16);
    mac_data.extend_from_slice(aad);
    mac_data.extend_from_slice(&(aad.len() as u64).to_le_bytes());
    mac_data.extend_from_slice(ciphertext);
    mac_data.extend_from_slice(&(ciphertext.len() as u64).to_le_bytes());

    Poly1305::new(poly1305::Key::from_slice(&mac_key.0))
        .compute_unpadded(&mac_data)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vector from draft-agl-tls-chacha20poly1305, also used by the
    // libsodium test suite for crypto_aead_chacha20poly1305.
    const KEY: &str = "4290bcb154173531f314af57f3be3b5006da371ece272afa1b5dbdd1100a1007";
    const NONCE: &str = "cd7cf67be39c794a";
    const AAD: &str = "87e229d4500845a079c0";
    const PLAINTEXT: &str = "86d09974840bded2a5ca";
    const CIPHERTEXT: &str = "e3e446f7ede9a19b62a4";
    const TAG: &str = "677dabf4e3d24b876bb284753896e1d6";

    fn fixed_cipher() -> (LegacyChaCha20Poly1305, [u8; NONCE_LEN]) {
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&hex::decode(KEY).unwrap());
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&hex::decode(NONCE).unwrap());
        (LegacyChaCha20Poly1305::new(key), nonce)
    }

    #[test]
    fn matches_reference_vector() {
        let (cipher, nonce) = fixed_cipher();
        let aad = hex::decode(AAD).unwrap();
        let plaintext = hex::decode(PLAINTEXT).unwrap();

        let (ciphertext, tag) = cipher.seal_detached(&nonce, &plaintext, &aad);
        assert_eq!(hex::encode(&ciphertext), CIPHERTEXT);
        assert_eq!(hex::encode(tag), TAG);
    }

    #[test]
    fn opens_reference_vector() {
        let (cipher, nonce) = fixed_cipher();
        let aad = hex::decode(AAD).unwrap();
        let ciphertext = hex::decode(CIPHERTEXT).unwrap();
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&hex::decode(TAG).unwrap());

        let plaintext = cipher.open_detached(&nonce, &ciphertext, &tag, &aad).unwrap();
        assert_eq!(hex::encode(plaintext), PLAINTEXT);
    }

    #[test]
    fn forged_tag_is_rejected() {
        let (cipher, nonce) = fixed_cipher();
        let aad = hex::decode(AAD).unwrap();
        let ciphertext = hex::decode(CIPHERTEXT).unwrap();
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&hex::decode(TAG).unwrap());
        tag[0] ^= 0x01;

        let err = cipher
            .open_detached(&nonce, &ciphertext, &tag, &aad)
            .unwrap_err();
        assert_eq!(err, AeadError::AuthenticationFailed);
    }

    #[test]
    fn empty_message_roundtrips() {
        let (cipher, nonce) = fixed_cipher();

        let (ciphertext, tag) = cipher.seal_detached(&nonce, b"", b"");
        assert!(ciphertext.is_empty());

        let plaintext = cipher.open_detached(&nonce, &ciphertext, &tag, b"").unwrap();
        assert!(plaintext.is_empty());
    }
}
