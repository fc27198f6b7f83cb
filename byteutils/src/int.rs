use num_traits::{CheckedShl, PrimInt, WrappingSub};

/// Any primitive integer, signed or unsigned.
///
/// Implemented for every type that satisfies the bounds, so it never needs to be
/// implemented by hand.
pub trait Integer: PrimInt + CheckedShl + WrappingSub {}

impl<T> Integer for T where T: PrimInt + CheckedShl + WrappingSub {}

/// Number of bits in `T`.
pub fn bit_width<T: Integer>() -> u32 {
    T::zero().count_zeros()
}

/// `value << shift`, or zero once every bit has been shifted out.
pub(crate) fn shl_or_zero<T: Integer>(value: T, shift: u32) -> T {
    value.checked_shl(shift).unwrap_or_else(T::zero)
}

/// Zero-filling `value >> shift`, or zero once every bit has been shifted out.
pub(crate) fn shr_or_zero<T: Integer>(value: T, shift: u32) -> T {
    if shift < bit_width::<T>() {
        value.unsigned_shr(shift)
    } else {
        T::zero()
    }
}
