//! # byteutils
//!
//! Generic bit and byte manipulation primitives for code that decodes or builds packed
//! binary data. Every function works on any primitive integer type and none of them
//! panic: positions past the end of the integer produce the bits an unbounded integer
//! would have, truncated to the target type.
//!
//! ```
//! use byteutils::{create_bit_mask, create_bit_mask_const, get_bit_slice, get_byte, mask_bits};
//!
//! // 0011 0111 1010 1011 -> 0011 0110 0000 0000
//! assert_eq!(mask_bits(0x37AB_u16, 9, 5), 0x3600);
//! // 0011 0111 1010 1011 -> 0000 0000 0001 1011
//! assert_eq!(get_bit_slice(0x37AB_u16, 9, 5), 0x001B);
//! assert_eq!(get_byte(0xAB01CD_u32, 1), 0x01);
//!
//! const FIELD: u16 = create_bit_mask_const::<u16, 9, 5>();
//! assert_eq!(FIELD, create_bit_mask::<u16>(9, 5));
//! ```
//!
//! Callers that take bit positions from untrusted input can validate them once with
//! [`BitRange`] instead.
pub mod bits;
pub mod bytes;
mod int;
pub mod mask;
pub mod range;

pub use bits::{get_bit_slice, mask_bits};
pub use bytes::get_byte;
pub use int::{bit_width, Integer};
pub use mask::{create_bit_mask, create_bit_mask_const, ConstBitMask};
pub use range::{BitRange, BitRangeError};
