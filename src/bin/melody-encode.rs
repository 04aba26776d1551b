// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::Result;
use clap::Parser;

use melody_cipher::cli::{init_logging, print_ciphers, write_lines, CommonArgs};
use melody_cipher::{Codec, Format};

/// Encode plain text into musical notes using Melody Cipher.
///
/// Output is for display: spaces stay as spaces, so it cannot be decoded.
#[derive(Parser, Debug)]
#[command(name = "melody-encode", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);

    let registry = cli.common.registry()?;
    if cli.common.list {
        return print_ciphers(&registry);
    }

    let scale = cli.common.scale(&registry)?;
    let input = cli.common.input_source().read()?;

    write_lines(Codec::new(scale, Format::Inline).encode_lines(&input))
}
