// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use melody_cipher::cli::{init_logging, print_ciphers, write_lines, CommonArgs};
use melody_cipher::{Codec, Format};

/// Encode or decode text to musical notes using Melody Cipher.
///
/// Encoded output writes spaces as `/` and unknown characters as `?`.
/// Each input line becomes one output line.
#[derive(Parser, Debug)]
#[command(name = "melody-cipher", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Decode a sequence of notes instead of encoding
    #[arg(long)]
    decode: bool,
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
    let codec = Codec::new(scale, Format::Explicit);

    if cli.decode {
        info!(bytes = input.len(), "decoding");
        write_lines([codec.decode(&input)?])
    } else {
        info!(bytes = input.len(), "encoding");
        write_lines(codec.encode_lines(&input))
    }
}
