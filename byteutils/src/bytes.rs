//! Byte extraction
use crate::{
    bits::mask_bits,
    int::{shr_or_zero, Integer},
};

/// Returns byte `index` of `value`, counting from the least significant byte.
///
/// `get_byte(0xAB01CD, 1)` is `0x01`. Indices past the last byte of `T` give `0`.
pub fn get_byte<T: Integer>(value: T, index: u32) -> u8 {
    let shifted = match index.checked_mul(8) {
        Some(shift) => shr_or_zero(value, shift),
        None => T::zero(),
    };
    let byte = mask_bits(shifted, 0, 8);
    // Only an `i8` can still be negative here
    byte.to_i16().map_or(0, |byte| byte as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_byte() {
        // 0xAB CD EF 01 23 45 67 89
        let value: u64 = 0xABCDEF0123456789;

        assert_eq!(get_byte(value, 0), 0x89);
        assert_eq!(get_byte(value, 1), 0x67);
        assert_eq!(get_byte(value, 2), 0x45);
        assert_eq!(get_byte(value, 3), 0x23);
        assert_eq!(get_byte(value, 4), 0x01);
        assert_eq!(get_byte(value, 5), 0xEF);
        assert_eq!(get_byte(value, 6), 0xCD);
        assert_eq!(get_byte(value, 7), 0xAB);
    }

    #[test]
    fn test_get_byte_matches_shift() {
        let samples = [0u64, 1, 0xABCDEF0123456789, 0x8000_0000_0000_0000, u64::MAX];
        for value in samples {
            for index in 0..8 {
                assert_eq!(get_byte(value, index), ((value >> (8 * index)) & 0xFF) as u8);
            }
        }
    }

    #[test]
    fn test_get_byte_signed() {
        assert_eq!(get_byte(-1i64, 7), 0xFF);
        assert_eq!(get_byte(i32::MIN, 3), 0x80);
        assert_eq!(get_byte(i32::MIN, 0), 0x00);
        assert_eq!(get_byte(-2i8, 0), 0xFE);
        assert_eq!(get_byte(i8::MIN, 0), 0x80);
        assert_eq!(get_byte(0xAB01CDi32, 1), 0x01);
        assert_eq!(get_byte(0xAB01CD_i32.wrapping_neg(), 2), 0x54);
    }

    #[test]
    fn test_get_byte_widths() {
        assert_eq!(get_byte(0xA5u8, 0), 0xA5);
        assert_eq!(get_byte(0xBEEFu16, 1), 0xBE);
        assert_eq!(get_byte(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10u128, 15), 0x01);
        assert_eq!(get_byte(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10u128, 9), 0x07);
    }

    #[test]
    fn test_get_byte_out_of_range() {
        assert_eq!(get_byte(0xFFu8, 1), 0);
        assert_eq!(get_byte(u32::MAX, 4), 0);
        assert_eq!(get_byte(-1i64, 8), 0);
        assert_eq!(get_byte(u128::MAX, 16), 0);
        assert_eq!(get_byte(u64::MAX, u32::MAX), 0);
    }
}
