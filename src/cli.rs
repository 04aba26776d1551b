// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Front-end plumbing shared by the `melody-cipher` and `melody-encode`
//! binaries: arguments, logging, input acquisition and output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::ScaleFile;
use crate::music::{Scale, ScaleRegistry};

/// Arguments common to both command-line tools
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Cipher (scale) to use; see --list
    #[arg(long, required_unless_present = "list")]
    pub cipher: Option<String>,

    /// Input text. If omitted, read from --file or stdin.
    #[arg(long)]
    pub text: Option<String>,

    /// Path to a file containing the input (takes precedence over --text)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// YAML or TOML file with extra scale definitions
    #[arg(long, value_name = "PATH")]
    pub scales: Option<PathBuf>,

    /// List available ciphers and exit
    #[arg(long)]
    pub list: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Build the registry: presets plus anything from `--scales`
    pub fn registry(&self) -> Result<ScaleRegistry> {
        load_registry(self.scales.as_deref())
    }

    /// Resolve `--cipher` against the registry
    pub fn scale<'r>(&self, registry: &'r ScaleRegistry) -> Result<&'r Scale> {
        let name = self
            .cipher
            .as_deref()
            .ok_or_else(|| anyhow!("--cipher is required"))?;
        let scale = registry.get(name).with_context(|| {
            format!("Available ciphers: {}", registry.available().join(", "))
        })?;
        info!(cipher = scale.name(), radix = %scale.radix(), "selected cipher");
        Ok(scale)
    }

    pub fn input_source(&self) -> InputSource {
        InputSource::select(self.file.clone(), self.text.clone())
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Preset registry extended with the definitions in `scales`, if given
pub fn load_registry(scales: Option<&Path>) -> Result<ScaleRegistry> {
    let mut registry = ScaleRegistry::new();
    if let Some(path) = scales {
        ScaleFile::load(path)?.register_into(&mut registry)?;
    }
    Ok(registry)
}

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Text(String),
    Stdin,
}

impl InputSource {
    /// Apply precedence: file, then text, then stdin
    pub fn select(file: Option<PathBuf>, text: Option<String>) -> Self {
        match (file, text) {
            (Some(path), _) => InputSource::File(path),
            (None, Some(text)) => InputSource::Text(text),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Read the input from this process's stdin, file or argument
    pub fn read(self) -> Result<String> {
        self.read_from(io::stdin().lock())
    }

    /// Read the input, taking stdin from `stdin`.
    ///
    /// Empty stdin counts as no input; empty `--text` or files are processed.
    /// File and stdin text have `\r\n` line endings folded to `\n`.
    pub fn read_from<R: Read>(self, mut stdin: R) -> Result<String> {
        match self {
            InputSource::File(path) => {
                debug!(path = %path.display(), "reading input file");
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Error reading file: {}", path.display()))?;
                Ok(normalize_line_endings(contents))
            }
            InputSource::Text(text) => Ok(text),
            InputSource::Stdin => {
                debug!("reading input from stdin");
                let mut contents = String::new();
                stdin
                    .read_to_string(&mut contents)
                    .context("Error reading standard input")?;
                if contents.is_empty() {
                    bail!("No input text provided.");
                }
                Ok(normalize_line_endings(contents))
            }
        }
    }
}

fn normalize_line_endings(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

/// Print every registered cipher with its radix and notes
pub fn print_ciphers(registry: &ScaleRegistry) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Available ciphers:")?;
    for scale in registry.scales() {
        writeln!(
            out,
            "  {:<34} {:<8} {}: {}",
            scale.name(),
            scale.radix(),
            scale.description(),
            scale.notes().join(" ")
        )?;
    }
    Ok(())
}

/// Write lines to stdout, one per line
pub fn write_lines<I, S>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()?;
    Ok(())
}
