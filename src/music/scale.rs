// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definitions used as cipher alphabets.
//!
//! Provides the six preset scales, radix selection by scale size,
//! symbol-to-digit lookup, and a registry that resolves cipher names.

use std::collections::HashMap;
use std::fmt;

use crate::cipher::markers;
use crate::error::CipherError;

/// Digit base of a scale, determined by how many notes it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// 8 notes; encodes letter indices A=0..Z=25
    Base8,
    /// 12 notes; encodes raw character codes
    Base12,
}

impl Radix {
    /// Pick the radix for a scale holding `len` notes
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(Radix::Base8),
            12 => Some(Radix::Base12),
            _ => None,
        }
    }

    /// Numeric base
    pub fn value(self) -> u32 {
        match self {
            Radix::Base8 => 8,
            Radix::Base12 => 12,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base-{}", self.value())
    }
}

/// Built-in cipher scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalePreset {
    Duochroma,
    OctatonicHalfWhole,
    LocrianPlus2,
    DorianFlat2,
    DiminishedOctatonicWholeHalf,
    BebopMixolydian,
}

impl ScalePreset {
    /// All presets in listing order
    pub const ALL: [ScalePreset; 6] = [
        ScalePreset::Duochroma,
        ScalePreset::OctatonicHalfWhole,
        ScalePreset::LocrianPlus2,
        ScalePreset::DorianFlat2,
        ScalePreset::DiminishedOctatonicWholeHalf,
        ScalePreset::BebopMixolydian,
    ];

    /// Note symbols, in digit order
    pub fn notes(self) -> &'static [&'static str] {
        match self {
            ScalePreset::Duochroma => &[
                "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
            ],
            ScalePreset::OctatonicHalfWhole => &["E", "F", "G", "G#", "A#", "B", "C#", "D"],
            ScalePreset::LocrianPlus2 => &["E", "F", "F#", "G", "A", "Bb", "C", "D"],
            ScalePreset::DorianFlat2 => &["E", "F", "G", "A", "B", "C", "C#", "D"],
            ScalePreset::DiminishedOctatonicWholeHalf => {
                &["E", "F#", "G", "A", "A#", "B", "C", "D#"]
            }
            ScalePreset::BebopMixolydian => &["E", "F#", "G#", "A", "B", "C#", "D", "D#"],
        }
    }

    /// Cipher name as given on the command line
    pub fn name(self) -> &'static str {
        match self {
            ScalePreset::Duochroma => "duochroma",
            ScalePreset::OctatonicHalfWhole => "octatonic_half_whole",
            ScalePreset::LocrianPlus2 => "locrian_plus2",
            ScalePreset::DorianFlat2 => "dorian_flat2",
            ScalePreset::DiminishedOctatonicWholeHalf => "diminished_octatonic_whole_half",
            ScalePreset::BebopMixolydian => "bebop_mixolydian",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            ScalePreset::Duochroma => "Base-12 Chromatic scale",
            ScalePreset::OctatonicHalfWhole => "Base-8 Octatonic Half-Whole",
            ScalePreset::LocrianPlus2 => "Base-8 Locrian + 2",
            ScalePreset::DorianFlat2 => "Base-8 Dorian b2",
            ScalePreset::DiminishedOctatonicWholeHalf => "Base-8 Diminished Octatonic Whole-Half",
            ScalePreset::BebopMixolydian => "Base-8 Jazzy Bebop Mixolydian",
        }
    }

    /// Look up a preset by its exact cipher name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }
}

impl fmt::Display for ScalePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An ordered, immutable cipher alphabet
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    name: String,
    description: String,
    radix: Radix,
    notes: Vec<String>,
}

impl Scale {
    /// Build a scale from arbitrary note symbols, validating them
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        notes: Vec<String>,
    ) -> Result<Self, CipherError> {
        let name = name.into();

        let radix = Radix::from_len(notes.len()).ok_or_else(|| CipherError::InvalidScaleSize {
            name: name.clone(),
            len: notes.len(),
        })?;

        for (i, symbol) in notes.iter().enumerate() {
            if symbol.is_empty()
                || symbol.chars().any(char::is_whitespace)
                || markers::is_marker(symbol)
            {
                return Err(CipherError::InvalidSymbol {
                    name,
                    symbol: symbol.clone(),
                });
            }
            if notes[..i].contains(symbol) {
                return Err(CipherError::DuplicateSymbol {
                    name,
                    symbol: symbol.clone(),
                });
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            radix,
            notes,
        })
    }

    /// Build one of the preset scales
    pub fn preset(preset: ScalePreset) -> Self {
        let notes = preset.notes();
        Self {
            name: preset.name().to_string(),
            description: preset.description().to_string(),
            // Preset tables only come in the two supported sizes
            radix: if notes.len() == 12 {
                Radix::Base12
            } else {
                Radix::Base8
            },
            notes: notes.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Note symbols in digit order
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Symbol for a digit. Callers reduce digits below the radix first.
    pub fn symbol(&self, digit: u32) -> &str {
        &self.notes[digit as usize % self.notes.len()]
    }

    /// Digit value (0-based position) of a symbol, if it belongs to this scale
    pub fn digit_of(&self, symbol: &str) -> Option<u32> {
        self.notes
            .iter()
            .position(|n| n == symbol)
            .map(|i| i as u32)
    }

    /// Check if a symbol is in this scale
    pub fn contains(&self, symbol: &str) -> bool {
        self.digit_of(symbol).is_some()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.notes.join(", "))
    }
}

/// Named scales available to the codec, built once per invocation
#[derive(Debug, Clone)]
pub struct ScaleRegistry {
    scales: HashMap<String, Scale>,
    order: Vec<String>,
}

impl Default for ScaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleRegistry {
    /// Create a registry holding the six presets
    pub fn new() -> Self {
        let mut registry = Self {
            scales: HashMap::new(),
            order: Vec::new(),
        };
        for preset in ScalePreset::ALL {
            registry.insert(Scale::preset(preset));
        }
        registry
    }

    fn insert(&mut self, scale: Scale) {
        self.order.push(scale.name().to_string());
        self.scales.insert(scale.name().to_string(), scale);
    }

    /// Register a custom scale. Names must not shadow an existing entry.
    pub fn register(&mut self, scale: Scale) -> Result<(), CipherError> {
        if self.scales.contains_key(scale.name()) {
            return Err(CipherError::DuplicateScale(scale.name().to_string()));
        }
        self.insert(scale);
        Ok(())
    }

    /// Get a scale by cipher name
    pub fn get(&self, name: &str) -> Result<&Scale, CipherError> {
        self.scales
            .get(name)
            .ok_or_else(|| CipherError::UnknownCipher(name.to_string()))
    }

    /// All registered scales: presets first, then custom in registration order
    pub fn scales(&self) -> impl Iterator<Item = &Scale> {
        self.order.iter().filter_map(|name| self.scales.get(name))
    }

    /// List all available cipher names
    pub fn available(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}
