// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Melody Cipher: a reversible substitution cipher that writes characters
//! as pairs of note names from a fixed scale.
//!
//! No cryptographic security is claimed; this is a novelty encoding.

pub mod cipher;
pub mod cli;
pub mod config;
pub mod error;
pub mod music;

pub use cipher::{decode, encode, Codec, Format, Token};
pub use error::CipherError;
pub use music::{Radix, Scale, ScalePreset, ScaleRegistry};
