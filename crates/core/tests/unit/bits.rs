//! Bit-field primitive tests.
//!
//! Exercises `slice`, `ones`, `set_slice`, `bit`, and `sign_extend` on fixed
//! cases and with property tests over arbitrary words and ranges.

use proptest::prelude::*;
use rv32_core::common::bits::{bit, ones, set_slice, sign_extend, slice};

#[test]
fn slice_extracts_inclusive_range() {
    assert_eq!(slice(0xDEAD_BEEF, 0, 7), 0xEF);
    assert_eq!(slice(0xDEAD_BEEF, 8, 15), 0xBE);
    assert_eq!(slice(0xDEAD_BEEF, 28, 31), 0xD);
    assert_eq!(slice(0xDEAD_BEEF, 0, 31), 0xDEAD_BEEF);
}

#[test]
fn slice_single_bit() {
    assert_eq!(slice(0x8000_0000, 31, 31), 1);
    assert_eq!(slice(0x8000_0000, 30, 30), 0);
    assert!(bit(0x0000_0010, 4));
    assert!(!bit(0x0000_0010, 5));
}

#[test]
fn ones_builds_masks_in_place() {
    assert_eq!(ones(0, 0), 0x0000_0001);
    assert_eq!(ones(0, 31), u32::MAX);
    assert_eq!(ones(12, 31), 0xFFFF_F000);
    assert_eq!(ones(7, 11), 0x0000_0F80);
}

#[test]
fn set_slice_only_touches_range() {
    assert_eq!(set_slice(0, 0xEF, 0, 7), 0xEF);
    assert_eq!(set_slice(u32::MAX, 0, 8, 15), 0xFFFF_00FF);
    // Oversized values are masked to the range width.
    assert_eq!(set_slice(0, 0x1FF, 0, 7), 0xFF);
}

#[test]
fn sign_extend_copies_sign_bit_upward() {
    assert_eq!(sign_extend(0xFFF, 11), 0xFFFF_FFFF);
    assert_eq!(sign_extend(0x7FF, 11), 0x0000_07FF);
    assert_eq!(sign_extend(0x80, 7), 0xFFFF_FF80);
    // Sign bit 31 is the identity.
    assert_eq!(sign_extend(0x8000_0000, 31), 0x8000_0000);
}

/// A `(low, high)` pair with `low <= high <= 31`.
fn bit_range() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=31).prop_flat_map(|low| (Just(low), low..=31))
}

proptest! {
    #[test]
    fn slice_of_set_slice_recovers_value(word: u32, value: u32, (low, high) in bit_range()) {
        let written = set_slice(word, value, low, high);
        let width_mask = ones(low, high) >> low;
        prop_assert_eq!(slice(written, low, high), value & width_mask);
    }

    #[test]
    fn set_slice_preserves_bits_outside_range(word: u32, value: u32, (low, high) in bit_range()) {
        let written = set_slice(word, value, low, high);
        let outside = !ones(low, high);
        prop_assert_eq!(written & outside, word & outside);
    }

    #[test]
    fn sign_extend_preserves_low_bits(value: u32, sign_bit in 0u32..=31) {
        let extended = sign_extend(value, sign_bit);
        prop_assert_eq!(slice(extended, 0, sign_bit), slice(value, 0, sign_bit));
    }
}
