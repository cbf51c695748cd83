//! Constant-time comparisons.
//!
//! Tag verification must not leak, through timing, how many bytes matched.
//! Execution time of these helpers depends only on slice length, not content.

use subtle::ConstantTimeEq;

/// Constant-time comparison of byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
#[must_use]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Timing-safe 16-byte tag comparison.
#[must_use]
#[inline(never)]
pub fn verify_16(a: &[u8; 16], b: &[u8; 16]) -> bool {
    ct_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices_compare_equal() {
        assert!(ct_eq(b"same bytes", b"same bytes"));
        assert!(ct_eq(b"", b""));
    }

    #[test]
    fn different_slices_compare_unequal() {
        assert!(!ct_eq(b"same bytes", b"same bytez"));
        assert!(!ct_eq(b"short", b"longer slice"));
    }

    #[test]
    fn verify_16_detects_single_bit_difference() {
        let a = [0x42u8; 16];
        let mut b = a;
        assert!(verify_16(&a, &b));

        b[7] ^= 0x01;
        assert!(!verify_16(&a, &b));
    }
}
