mod cli;
mod report;
#[macro_use]
mod value;

use std::fmt::Display;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::*,
    report::{ByteReport, MaskReport, SliceReport},
};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.verbose {
        simple_logger::init_with_level(log::Level::Info)?;
    } else {
        simple_logger::init_with_level(log::Level::Warn)?;
    }

    match &args.command {
        Commands::Mask(command) => mask(command, args.json),
        Commands::Slice(command) => slice(command, args.json),
        Commands::Byte(command) => byte(command, args.json),
    }
}

fn mask(args: &MaskArgs, json: bool) -> Result<()> {
    let report = with_int_type!(
        args.int_type,
        MaskReport::build(args.int_type, args.pos, args.len, args.unchecked)
    )?;
    print_report(&report, json)
}

fn slice(args: &SliceArgs, json: bool) -> Result<()> {
    let report = with_int_type!(
        args.int_type,
        SliceReport::build(args.int_type, &args.value, args.pos, args.len, args.unchecked)
    )?;
    print_report(&report, json)
}

fn byte(args: &ByteArgs, json: bool) -> Result<()> {
    let report = with_int_type!(
        args.int_type,
        ByteReport::build(args.int_type, &args.value, args.index, args.unchecked)
    )?;
    print_report(&report, json)
}

fn print_report<R: Serialize + Display>(report: &R, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
