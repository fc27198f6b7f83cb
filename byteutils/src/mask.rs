//! Bit mask construction
use crate::int::{shl_or_zero, Integer};

/// Creates a mask with bits `pos..pos + len` set.
///
/// Usage: `value & create_bit_mask::<u32>(0, 10)` keeps the low 10 bits of `value`.
///
/// Bits that would land past the top of `T` are dropped, so an out-of-range request
/// yields a truncated (possibly zero) mask rather than a panic.
pub fn create_bit_mask<T: Integer>(pos: u32, len: u32) -> T {
    // Wraps to all ones when `len` is the full width
    let ones = shl_or_zero(T::one(), len).wrapping_sub(&T::one());
    shl_or_zero(ones, pos)
}

/// A bit mask known at compile time.
///
/// `MASK` fails to evaluate, and so fails the build, when `POS + LEN` runs past the
/// width of the implementing type.
pub trait ConstBitMask<const POS: u32, const LEN: u32>: Integer {
    const MASK: Self;
}

macro_rules! impl_const_bit_mask {
    ($($int:ty => $uint:ty),* $(,)?) => {
        $(
            impl<const POS: u32, const LEN: u32> ConstBitMask<POS, LEN> for $int {
                #[allow(clippy::unnecessary_cast)]
                const MASK: Self = {
                    assert!(POS <= <$uint>::BITS, "bit position exceeds the integer width");
                    assert!(LEN <= <$uint>::BITS - POS, "bit range exceeds the integer width");
                    if LEN == 0 {
                        0
                    } else {
                        ((<$uint>::MAX >> (<$uint>::BITS - LEN)) << POS) as $int
                    }
                };
            }
        )*
    };
}

impl_const_bit_mask!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

/// Creates a bit mask at compile time.
///
/// Produces the same value as [`create_bit_mask`], but a range that does not fit in `T`
/// is a compile error:
///
/// ```compile_fail
/// const BAD: u8 = byteutils::create_bit_mask_const::<u8, 4, 5>();
/// ```
pub const fn create_bit_mask_const<T, const POS: u32, const LEN: u32>() -> T
where
    T: ConstBitMask<POS, LEN>,
{
    T::MASK
}
