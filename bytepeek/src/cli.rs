use clap::{Args, Parser, Subcommand};

use crate::value::IntType;

#[derive(Parser, Debug)]
#[command(author, about, version, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Build a bit mask
    #[command(visible_alias = "m")]
    Mask(MaskArgs),
    /// Mask a range of bits in a value and shift it down to bit 0
    #[command(visible_alias = "s")]
    Slice(SliceArgs),
    /// Extract one or all bytes of a value
    #[command(visible_alias = "b")]
    Byte(ByteArgs),
}

#[derive(Args, Clone, Debug)]
pub struct MaskArgs {
    /// Integer type to build the mask for
    #[arg(short = 't', long = "type", value_enum, default_value_t = IntType::U32)]
    pub int_type: IntType,

    /// Position of the first bit
    #[arg(short, long)]
    pub pos: u32,

    /// Number of bits
    #[arg(short, long)]
    pub len: u32,

    /// Skip the range check and show the truncated result
    #[arg(long)]
    pub unchecked: bool,
}

#[derive(Args, Clone, Debug)]
pub struct SliceArgs {
    /// Integer type of the value
    #[arg(short = 't', long = "type", value_enum, default_value_t = IntType::U32)]
    pub int_type: IntType,

    /// Position of the first bit
    #[arg(short, long)]
    pub pos: u32,

    /// Number of bits
    #[arg(short, long)]
    pub len: u32,

    /// Skip the range check and show the truncated result
    #[arg(long)]
    pub unchecked: bool,

    /// The value to slice, in decimal, 0x hex, 0b binary or 0o octal
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args, Clone, Debug)]
pub struct ByteArgs {
    /// Integer type of the value
    #[arg(short = 't', long = "type", value_enum, default_value_t = IntType::U32)]
    pub int_type: IntType,

    /// Byte to extract, counting from the least significant byte. All bytes if omitted
    #[arg(short, long)]
    pub index: Option<u32>,

    /// Skip the range check and show the truncated result
    #[arg(long)]
    pub unchecked: bool,

    /// The value to read bytes from, in decimal, 0x hex, 0b binary or 0o octal
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}
