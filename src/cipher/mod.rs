// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note-pair codec.
//!
//! Characters are written as two note symbols (a high and a low digit in
//! the scale's radix). Spaces, newlines and unmappable characters become
//! single marker tokens. The token stream is text: tokens separated by
//! single spaces, lines separated by `\n`.

mod decoder;
mod encoder;
pub mod token;

pub use token::{render_lines, Token};

use std::fmt;

use crate::error::CipherError;
use crate::music::Scale;

/// Marker token spellings
pub mod markers {
    /// Space in the explicit format
    pub const SPACE: &str = "/";
    /// Newline in the explicit format (a backslash followed by `n`)
    pub const NEWLINE: &str = "\\n";
    /// Unmappable character, both formats
    pub const UNKNOWN: &str = "?";
    /// Space in the inline format
    pub const INLINE_SPACE: &str = " ";
    /// Line break in the inline format
    pub const INLINE_NEWLINE: &str = "\n";

    /// Character emitted by the decoder for anything it cannot recover
    pub const UNKNOWN_CHAR: char = '?';

    /// Check whether a token is one of the explicit-format markers
    pub fn is_marker(token: &str) -> bool {
        matches!(token, SPACE | NEWLINE | UNKNOWN)
    }
}

/// Serialization variant for marker tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Spaces print as bare spaces. Display only; cannot be decoded.
    Inline,
    /// Spaces print as `/`, newlines as `\n`. Decodable.
    #[default]
    Explicit,
}

impl Format {
    pub fn space_marker(self) -> &'static str {
        match self {
            Format::Inline => markers::INLINE_SPACE,
            Format::Explicit => markers::SPACE,
        }
    }

    pub fn newline_marker(self) -> &'static str {
        match self {
            Format::Inline => markers::INLINE_NEWLINE,
            Format::Explicit => markers::NEWLINE,
        }
    }

    pub fn is_decodable(self) -> bool {
        matches!(self, Format::Explicit)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Inline => write!(f, "inline"),
            Format::Explicit => write!(f, "explicit"),
        }
    }
}

/// Encoder/decoder bound to one scale and one serialization variant
#[derive(Debug, Clone, Copy)]
pub struct Codec<'s> {
    scale: &'s Scale,
    format: Format,
}

impl<'s> Codec<'s> {
    pub fn new(scale: &'s Scale, format: Format) -> Self {
        Self { scale, format }
    }

    pub fn scale(&self) -> &'s Scale {
        self.scale
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Convert text to its token sequence
    pub fn tokenize(&self, text: &str) -> Vec<Token<'s>> {
        encoder::tokenize(self.scale, text)
    }

    /// Encode text into formatted token lines
    pub fn encode_lines(&self, text: &str) -> Vec<String> {
        render_lines(&self.tokenize(text), self.format)
    }

    /// Encode text into a token stream
    pub fn encode(&self, text: &str) -> String {
        self.encode_lines(text).join("\n")
    }

    /// Decode a token stream back to text.
    ///
    /// Malformed tokens decode to `?`; the only error is asking to decode
    /// the inline format.
    pub fn decode(&self, stream: &str) -> Result<String, CipherError> {
        if !self.format.is_decodable() {
            return Err(CipherError::UndecodableFormat);
        }
        Ok(decoder::decode_stream(self.scale, stream))
    }
}

/// Encode `text` under `scale` in the given format
pub fn encode(text: &str, scale: &Scale, format: Format) -> String {
    Codec::new(scale, format).encode(text)
}

/// Decode an explicit-format token stream under `scale`
pub fn decode(stream: &str, scale: &Scale) -> String {
    decoder::decode_stream(scale, stream)
}
