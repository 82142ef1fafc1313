//! `urlq man` – render the man page to stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;
use std::io::{self, Write};

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let man = Man::new(Cli::command());
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf)?;
    io::stdout().write_all(&buf)?;
    Ok(())
}
