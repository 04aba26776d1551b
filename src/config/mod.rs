// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Custom scale definition files.
//!
//! A scale file lists extra cipher alphabets that are registered next to
//! the built-in presets. YAML is the default; files ending in `.toml`
//! are read as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::music::{Scale, ScaleRegistry};

/// Root of a scale definition file
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ScaleFile {
    /// Scale definitions
    #[serde(default)]
    pub scales: Vec<ScaleDefinition>,
}

impl ScaleFile {
    /// Load scale definitions, picking the parser by file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scale file: {:?}", path))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        parsed.with_context(|| format!("Invalid scale file: {:?}", path))
    }

    /// Parse scale definitions from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML scale definitions")
    }

    /// Parse scale definitions from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML scale definitions")
    }

    /// Validate every definition and add it to `registry`
    pub fn register_into(&self, registry: &mut ScaleRegistry) -> Result<()> {
        for def in &self.scales {
            let scale = def.to_scale()?;
            debug!(name = scale.name(), radix = %scale.radix(), "registering custom scale");
            registry.register(scale)?;
        }
        Ok(())
    }
}

/// A single custom scale
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScaleDefinition {
    /// Cipher name used with `--cipher`
    pub name: String,
    /// Shown by `--list`
    #[serde(default)]
    pub description: String,
    /// Note symbols in digit order; 8 or 12 of them
    pub notes: Vec<String>,
}

impl ScaleDefinition {
    /// Create a validated scale from this definition
    pub fn to_scale(&self) -> Result<Scale> {
        let description = if self.description.is_empty() {
            format!("Custom base-{} scale", self.notes.len())
        } else {
            self.description.clone()
        };
        Scale::new(self.name.clone(), description, self.notes.clone())
            .with_context(|| format!("Invalid scale definition '{}'", self.name))
    }
}
