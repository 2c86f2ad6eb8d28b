//! Bit-Field Utilities.
//!
//! Pure functions for working with inclusive bit ranges of a 32-bit word:
//! extracting a range as a right-aligned value, writing a range, testing a
//! single bit, and sign-extending from an arbitrary bit position. Every other
//! component composes these primitives; no other module performs raw
//! shift/mask arithmetic.
//!
//! Range bounds are a precondition, not an error path: an out-of-range index
//! is a programming error in the caller and panics rather than being silently
//! truncated.

/// Index of the most significant bit of a word.
const MSB: u32 = 31;

/// Extracts bits `[low, high]` inclusive of `word`, right-aligned.
///
/// `slice(w, 0, 6)` is the 7-bit opcode field; `slice(w, 31, 31)` is the
/// sign bit.
///
/// # Panics
///
/// Panics if `low > high` or `high > 31`.
#[inline]
pub fn slice(word: u32, low: u32, high: u32) -> u32 {
    assert!(low <= high, "bad slice: low {low} > high {high}");
    assert!(high <= MSB, "bad slice: high {high} out of bounds");
    let left = MSB - high;
    (word << left) >> (left + low)
}

/// Returns a mask with ones in bits `[low, high]` inclusive, zeroes elsewhere.
///
/// # Panics
///
/// Panics if `low > high` or `high > 31`.
#[inline]
pub fn ones(low: u32, high: u32) -> u32 {
    slice(u32::MAX, low, high) << low
}

/// Returns `word` with bits `[low, high]` replaced by the low-order
/// `(high - low + 1)` bits of `value`; all other bits are unchanged.
///
/// # Panics
///
/// Panics if `low > high` or `high > 31`.
#[inline]
pub fn set_slice(word: u32, value: u32, low: u32, high: u32) -> u32 {
    let mask = ones(low, high);
    (word & !mask) | ((value << low) & mask)
}

/// Tests bit `index` of `word`.
///
/// # Panics
///
/// Panics if `index > 31`.
#[inline]
pub fn bit(word: u32, index: u32) -> bool {
    slice(word, index, index) == 1
}

/// Sign-extends `value` from bit position `sign_bit`: the bit at `sign_bit`
/// is replicated into every higher bit position.
///
/// `sign_extend(0xFFF, 11)` is `0xFFFF_FFFF` (the 12-bit value -1 widened
/// to 32 bits).
///
/// # Panics
///
/// Panics if `sign_bit > 31`.
#[inline]
pub fn sign_extend(value: u32, sign_bit: u32) -> u32 {
    assert!(sign_bit <= MSB, "bad sign extend: bit {sign_bit} out of bounds");
    if sign_bit == MSB {
        return value;
    }
    let fill = if bit(value, sign_bit) { u32::MAX } else { 0 };
    set_slice(value, fill, sign_bit + 1, MSB)
}
