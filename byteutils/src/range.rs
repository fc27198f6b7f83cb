//! Validated bit ranges
//!
//! The free functions in this crate trust their arguments. [`BitRange`] checks a position
//! and length against the width of an integer type once, up front, for callers that get
//! them from somewhere they do not control.
use std::{
    fmt::{Display, Formatter},
    marker::PhantomData,
};

use thiserror::Error;

use crate::{
    bits::{get_bit_slice, mask_bits},
    int::{bit_width, Integer},
    mask::create_bit_mask,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BitRangeError {
    #[error("Bit position {pos} is past the end of a {width}-bit integer.")]
    PositionOutOfRange { pos: u32, width: u32 },
    #[error("{len} bits starting at bit {pos} do not fit in a {width}-bit integer.")]
    LengthOutOfRange { pos: u32, len: u32, width: u32 },
}

/// A run of `len` bits starting at bit `pos`
///
/// Every `BitRange<T>` lies entirely inside `T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitRange<T> {
    pos: u32,
    len: u32,
    int: PhantomData<T>,
}

impl<T: Integer> BitRange<T> {
    pub fn new(pos: u32, len: u32) -> Result<Self, BitRangeError> {
        let width = bit_width::<T>();
        if pos > width {
            return Err(BitRangeError::PositionOutOfRange { pos, width });
        }
        if len > width - pos {
            return Err(BitRangeError::LengthOutOfRange { pos, len, width });
        }
        Ok(Self {
            pos,
            len,
            int: PhantomData,
        })
    }

    /// The eight bits of byte `index`, counting from the least significant byte.
    pub fn byte(index: u32) -> Result<Self, BitRangeError> {
        let Some(pos) = index.checked_mul(8) else {
            return Err(BitRangeError::PositionOutOfRange {
                pos: u32::MAX,
                width: bit_width::<T>(),
            });
        };
        Self::new(pos, 8)
    }

    pub fn pos(&self) -> u32 {
        self.pos
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    /// First bit after the range.
    pub fn end(&self) -> u32 {
        self.pos + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mask(&self) -> T {
        create_bit_mask(self.pos, self.len)
    }

    pub fn mask_bits(&self, value: T) -> T {
        mask_bits(value, self.pos, self.len)
    }

    pub fn slice(&self, value: T) -> T {
        get_bit_slice(value, self.pos, self.len)
    }
}

impl<T> Display for BitRange<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "bits {}..{}", self.pos, self.pos + self.len)
    }
}
