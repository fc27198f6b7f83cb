//! Masking and slicing ranges of bits
use crate::{
    int::{shr_or_zero, Integer},
    mask::create_bit_mask,
};

/// Clears every bit of `value` outside `pos..pos + len`.
///
/// Usage: `mask_bits(value, 0, 10)` keeps the low 10 bits of `value`.
pub fn mask_bits<T: Integer>(value: T, pos: u32, len: u32) -> T {
    value & create_bit_mask::<T>(pos, len)
}

/// Returns the `len` bits of `value` starting at `pos`, moved down to bit 0.
///
/// `get_bit_slice(0x37AB, 9, 5)` is `0x001B`:
/// ```text
/// 0011 0111 1010 1011 -> 0000 0000 0001 1011
/// ```
///
/// The shift is zero-filling for signed types as well, so a slice that covers the sign
/// bit comes back as a plain `len`-bit number.
pub fn get_bit_slice<T: Integer>(value: T, pos: u32, len: u32) -> T {
    shr_or_zero(mask_bits(value, pos, len), pos)
}
