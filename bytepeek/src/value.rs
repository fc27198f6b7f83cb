use std::fmt::{Debug, Display};

use anyhow::{bail, Context, Result};
use byteutils::{bit_width, Integer};
use clap::ValueEnum;
use serde::Serialize;

/// The primitive integer types values can be read as.
#[derive(ValueEnum, Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntType {
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
}

impl Display for IntType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IntType::U8 => "u8",
            IntType::U16 => "u16",
            IntType::U32 => "u32",
            IntType::U64 => "u64",
            IntType::U128 => "u128",
            IntType::Usize => "usize",
            IntType::I8 => "i8",
            IntType::I16 => "i16",
            IntType::I32 => "i32",
            IntType::I64 => "i64",
            IntType::I128 => "i128",
            IntType::Isize => "isize",
        };
        write!(f, "{name}")
    }
}

/// Calls a generic function with the concrete type named by an [`IntType`].
macro_rules! with_int_type {
    ($int_type:expr, $($f:ident)::+($($arg:expr),* $(,)?)) => {
        match $int_type {
            $crate::value::IntType::U8 => $($f)::+::<u8>($($arg),*),
            $crate::value::IntType::U16 => $($f)::+::<u16>($($arg),*),
            $crate::value::IntType::U32 => $($f)::+::<u32>($($arg),*),
            $crate::value::IntType::U64 => $($f)::+::<u64>($($arg),*),
            $crate::value::IntType::U128 => $($f)::+::<u128>($($arg),*),
            $crate::value::IntType::Usize => $($f)::+::<usize>($($arg),*),
            $crate::value::IntType::I8 => $($f)::+::<i8>($($arg),*),
            $crate::value::IntType::I16 => $($f)::+::<i16>($($arg),*),
            $crate::value::IntType::I32 => $($f)::+::<i32>($($arg),*),
            $crate::value::IntType::I64 => $($f)::+::<i64>($($arg),*),
            $crate::value::IntType::I128 => $($f)::+::<i128>($($arg),*),
            $crate::value::IntType::Isize => $($f)::+::<isize>($($arg),*),
        }
    };
}

/// An integer that can be moved to and from its raw bit pattern.
pub trait Word: Integer + Debug {
    /// Keeps the low bits of `bits` that fit in `Self`.
    fn from_bits(bits: u128) -> Self;
    /// The bit pattern of `self`, zero-extended.
    fn to_bits(self) -> u128;
}

macro_rules! impl_word {
    ($($int:ty => $uint:ty),* $(,)?) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl Word for $int {
                fn from_bits(bits: u128) -> Self {
                    bits as $uint as $int
                }

                fn to_bits(self) -> u128 {
                    self as $uint as u128
                }
            }
        )*
    };
}

impl_word!(
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

/// Parses a decimal, `0x`, `0b` or `0o` literal into `T`.
///
/// Non-negative literals are bit patterns and only need to fit in the width of `T`, so
/// `0xFF` is a valid `i8`. Negative literals must fit in the signed range of `T`.
pub fn parse_value<T: Word>(input: &str) -> Result<T> {
    let width = bit_width::<T>();
    let cleaned: String = input.trim().chars().filter(|&c| c != '_').collect();

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let lower = digits.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else {
        (10, lower.as_str())
    };

    if digits.is_empty() {
        bail!("No digits in value {input:?}");
    }

    let magnitude = u128::from_str_radix(digits, radix)
        .with_context(|| format!("Could not parse {input:?} as a base {radix} number"))?;

    let bits = if negative {
        if T::min_value() >= T::zero() {
            bail!("Negative value {input:?} given for an unsigned type");
        }
        if magnitude > 1u128 << (width - 1) {
            bail!("Value {input:?} does not fit in a signed {width}-bit integer");
        }
        magnitude.wrapping_neg()
    } else {
        if width < 128 && magnitude >> width != 0 {
            bail!("Value {input:?} does not fit in {width} bits");
        }
        magnitude
    };

    let value = T::from_bits(bits);
    log::info!("Parsed {input:?} as {value:?}");
    Ok(value)
}

/// Zero-padded hex digits for a `width`-bit pattern, e.g. `0x37ab`.
pub fn hex(bits: u128, width: u32) -> String {
    let digits = width.div_ceil(4) as usize;
    format!("{bits:#0w$x}", w = digits + 2)
}

/// Binary digits for a `width`-bit pattern in groups of four, e.g. `0011 0111 1010 1011`.
pub fn binary(bits: u128, width: u32) -> String {
    let digits = format!("{bits:0w$b}", w = width as usize);
    let offset = digits.len() % 4;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 4 - offset) % 4 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("0x37AB").unwrap(), 0x37AB);
        assert_eq!(parse_value::<u16>("0x37ab").unwrap(), 0x37AB);
        assert_eq!(parse_value::<u16>("14251").unwrap(), 0x37AB);
        assert_eq!(parse_value::<u16>("0b0011_0111_1010_1011").unwrap(), 0x37AB);
        assert_eq!(parse_value::<u16>("0o33653").unwrap(), 0x37AB);
        assert_eq!(parse_value::<u64>("0xABCD_EF01_2345_6789").unwrap(), 0xABCDEF0123456789);
        assert_eq!(parse_value::<u128>(&u128::MAX.to_string()).unwrap(), u128::MAX);
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_value::<i16>("0xB7AB").unwrap(), 0xB7ABu16 as i16);
        assert_eq!(parse_value::<i16>("-1").unwrap(), -1);
        assert_eq!(parse_value::<i8>("-128").unwrap(), i8::MIN);
        assert_eq!(parse_value::<i8>("0xFF").unwrap(), -1);
        assert_eq!(parse_value::<i128>("-0x1").unwrap(), -1);
        assert_eq!(
            parse_value::<i128>(&i128::MIN.to_string()).unwrap(),
            i128::MIN
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_value::<u8>("0x100").is_err());
        assert!(parse_value::<u8>("-1").is_err());
        assert!(parse_value::<i8>("-129").is_err());
        assert!(parse_value::<u32>("").is_err());
        assert!(parse_value::<u32>("0x").is_err());
        assert!(parse_value::<u32>("12z").is_err());
        assert!(parse_value::<u128>("0x1_0000_0000_0000_0000_0000_0000_0000_0000").is_err());
    }

    #[test]
    fn test_word_bits() {
        assert_eq!(Word::to_bits(-1i8), 0xFF);
        assert_eq!(Word::to_bits(i64::MIN), 1u128 << 63);
        assert_eq!(<i16 as Word>::from_bits(0x1_B7AB), 0xB7ABu16 as i16);
        assert_eq!(<u32 as Word>::from_bits(u128::MAX), u32::MAX);
    }

    #[test]
    fn test_format() {
        assert_eq!(hex(0x37AB, 16), "0x37ab");
        assert_eq!(hex(0x1B, 16), "0x001b");
        assert_eq!(hex(0x5, 8), "0x05");
        assert_eq!(binary(0x37AB, 16), "0011 0111 1010 1011");
        assert_eq!(binary(0x1B, 16), "0000 0000 0001 1011");
        assert_eq!(binary(0x5, 6), "00 0101");
    }

    #[test]
    fn test_int_type_names() {
        assert_eq!(IntType::U16.to_string(), "u16");
        assert_eq!(IntType::Isize.to_string(), "isize");
        assert_eq!(IntType::from_str("i64", false), Ok(IntType::I64));
    }
}
