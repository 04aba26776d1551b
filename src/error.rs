// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration errors raised by the cipher library.
//!
//! Malformed token streams are not errors: the decoder degrades them
//! to `?` in its output instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),

    #[error("Scale '{name}' has {len} notes; expected 8 or 12")]
    InvalidScaleSize { name: String, len: usize },

    #[error("Scale '{name}' contains invalid note symbol {symbol:?}")]
    InvalidSymbol { name: String, symbol: String },

    #[error("Scale '{name}' repeats note symbol {symbol:?}")]
    DuplicateSymbol { name: String, symbol: String },

    #[error("A cipher named '{0}' is already registered")]
    DuplicateScale(String),

    #[error("The inline format cannot be decoded")]
    UndecodableFormat,
}
