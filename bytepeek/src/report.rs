use std::fmt::Display;

use anyhow::Result;
use byteutils::{bit_width, create_bit_mask, get_bit_slice, get_byte, mask_bits, BitRange};
use serde::Serialize;

use crate::value::{binary, hex, parse_value, IntType, Word};

/// A value shown both as hex and as grouped binary.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Bits {
    pub hex: String,
    pub binary: String,
}

impl Bits {
    fn new<T: Word>(value: T) -> Self {
        let width = bit_width::<T>();
        Self {
            hex: hex(value.to_bits(), width),
            binary: binary(value.to_bits(), width),
        }
    }
}

impl Display for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.hex, self.binary)
    }
}

#[derive(Serialize, Debug)]
pub struct MaskReport {
    #[serde(rename = "type")]
    pub int_type: IntType,
    pub pos: u32,
    pub len: u32,
    pub mask: Bits,
}

impl MaskReport {
    pub fn build<T: Word>(int_type: IntType, pos: u32, len: u32, unchecked: bool) -> Result<Self> {
        let mask: T = if unchecked {
            create_bit_mask(pos, len)
        } else {
            BitRange::<T>::new(pos, len)?.mask()
        };
        log::info!("Mask for {len} bits at {pos} of {int_type}: {mask:?}");

        Ok(Self {
            int_type,
            pos,
            len,
            mask: Bits::new(mask),
        })
    }
}

impl Display for MaskReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "type: {}", self.int_type)?;
        writeln!(f, "bits: {}..{}", self.pos, self.pos.saturating_add(self.len))?;
        writeln!(f, "mask: {}", self.mask)?;
        Ok(())
    }
}

#[derive(Serialize, Debug)]
pub struct SliceReport {
    #[serde(rename = "type")]
    pub int_type: IntType,
    pub pos: u32,
    pub len: u32,
    pub value: Bits,
    pub mask: Bits,
    pub masked: Bits,
    pub slice: Bits,
}

impl SliceReport {
    pub fn build<T: Word>(
        int_type: IntType,
        input: &str,
        pos: u32,
        len: u32,
        unchecked: bool,
    ) -> Result<Self> {
        let value: T = parse_value(input)?;

        let (mask, masked, slice) = if unchecked {
            (
                create_bit_mask::<T>(pos, len),
                mask_bits(value, pos, len),
                get_bit_slice(value, pos, len),
            )
        } else {
            let range = BitRange::<T>::new(pos, len)?;
            (range.mask(), range.mask_bits(value), range.slice(value))
        };
        log::info!("Slice of {len} bits at {pos} from {value:?}: {slice:?}");

        Ok(Self {
            int_type,
            pos,
            len,
            value: Bits::new(value),
            mask: Bits::new(mask),
            masked: Bits::new(masked),
            slice: Bits::new(slice),
        })
    }
}

impl Display for SliceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  type: {}", self.int_type)?;
        writeln!(f, "  bits: {}..{}", self.pos, self.pos.saturating_add(self.len))?;
        writeln!(f, " value: {}", self.value)?;
        writeln!(f, "  mask: {}", self.mask)?;
        writeln!(f, "masked: {}", self.masked)?;
        writeln!(f, " slice: {}", self.slice)?;
        Ok(())
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Byte {
    pub index: u32,
    pub byte: String,
}

#[derive(Serialize, Debug)]
pub struct ByteReport {
    #[serde(rename = "type")]
    pub int_type: IntType,
    pub value: Bits,
    pub bytes: Vec<Byte>,
}

impl ByteReport {
    pub fn build<T: Word>(
        int_type: IntType,
        input: &str,
        index: Option<u32>,
        unchecked: bool,
    ) -> Result<Self> {
        let value: T = parse_value(input)?;

        let indices = match index {
            Some(index) => {
                if !unchecked {
                    BitRange::<T>::byte(index)?;
                }
                index..index.saturating_add(1)
            }
            None => 0..bit_width::<T>() / 8,
        };

        let bytes: Vec<Byte> = indices
            .map(|index| Byte {
                index,
                byte: hex(get_byte(value, index).into(), 8),
            })
            .collect();
        log::info!("Bytes of {value:?}: {bytes:?}");

        Ok(Self {
            int_type,
            value: Bits::new(value),
            bytes,
        })
    }
}

impl Display for ByteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " type: {}", self.int_type)?;
        writeln!(f, "value: {}", self.value)?;
        for byte in &self.bytes {
            writeln!(f, "byte {}: {}", byte.index, byte.byte)?;
        }
        Ok(())
    }
}
