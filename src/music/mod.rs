// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Musical scales used as cipher alphabets.
//!
//! This module provides the preset note tables and the registry that
//! resolves a cipher name to its scale.

pub mod scale;

pub use scale::{Radix, Scale, ScalePreset, ScaleRegistry};
