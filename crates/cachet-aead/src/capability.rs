//! Hardware capability detection.
//!
//! AES-256-GCM is only offered where the CPU provides the required
//! acceleration (AES-NI, SSSE3 and CLMUL on x86, the AES extension on
//! aarch64); there is no software fallback. The probe result is cached for
//! the process lifetime since CPU features do not change while running.

use crate::suite::Algorithm;
use std::sync::OnceLock;

static AES256GCM_SUPPORTED: OnceLock<bool> = OnceLock::new();

/// Queries whether hardware-gated algorithms are usable.
///
/// The default implementation, [`HostProbe`], asks the CPU. Tests and
/// embedders can inject a fixed answer through
/// [`crate::AeadCipher::with_probe`].
pub trait CapabilityProbe: Send + Sync {
    /// Whether AES-256-GCM is usable.
    fn hardware_aes256gcm(&self) -> bool;

    /// Whether `algorithm` is usable. Algorithms without a hardware gate are
    /// always available.
    fn is_available(&self, algorithm: Algorithm) -> bool {
        !algorithm.hardware_gated() || self.hardware_aes256gcm()
    }
}

/// Capability probe backed by runtime CPU feature detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl CapabilityProbe for HostProbe {
    fn hardware_aes256gcm(&self) -> bool {
        aes256gcm_available()
    }
}

/// Check hardware support for AES-256-GCM on this host.
///
/// The first call probes the CPU; later calls return the cached result.
#[must_use]
pub fn aes256gcm_available() -> bool {
    *AES256GCM_SUPPORTED.get_or_init(|| {
        let supported = detect_aes256gcm();
        tracing::debug!(supported, "probed hardware support for aes256gcm");
        supported
    })
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_aes256gcm() -> bool {
    std::arch::is_x86_feature_detected!("aes")
        && std::arch::is_x86_feature_detected!("ssse3")
        && std::arch::is_x86_feature_detected!("pclmulqdq")
}

#[cfg(target_arch = "aarch64")]
fn detect_aes256gcm() -> bool {
    std::arch::is_aarch64_feature_detected!("aes")
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_aes256gcm() -> bool {
    false
}
