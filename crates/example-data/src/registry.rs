//! Seed registry types and JSON parsing.
//!
//! This module defines the seed registry structure that holds named seed
//! definitions and the vocabularies generated photos draw from. The registry
//! is loaded from JSON and provides deterministic seed lookups.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing named seeds and tag vocabularies.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "lightingTags": ["dramatic"],
///     "colorToneTags": ["warm"],
///     "specialties": ["Portrait"],
///     "seeds": [{"name": "test", "seed": 42, "photographerCount": 2, "photosPerPhotographer": 4}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    lighting_tags: Vec<String>,
    color_tone_tags: Vec<String>,
    specialties: Vec<String>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - Any vocabulary is empty or holds a blank entry
    /// - The seeds array is empty or a seed asks for no photographers
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let lighting_tags = validate_vocabulary(raw.lighting_tags, "lightingTags")?;
        let color_tone_tags = validate_vocabulary(raw.color_tone_tags, "colorToneTags")?;
        let specialties = validate_vocabulary(raw.specialties, "specialties")?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| {
                if s.photographer_count == 0 {
                    return Err(RegistryError::NoPhotographers { name: s.name });
                }
                Ok(SeedDefinition {
                    name: s.name,
                    seed: s.seed,
                    photographer_count: s.photographer_count,
                    photos_per_photographer: s.photos_per_photographer,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: raw.version,
            lighting_tags,
            color_tone_tags,
            specialties,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the lighting vocabulary woven into descriptions.
    #[must_use]
    pub fn lighting_tags(&self) -> &[String] {
        &self.lighting_tags
    }

    /// Returns the colour-tone vocabulary woven into descriptions.
    #[must_use]
    pub fn color_tone_tags(&self) -> &[String] {
        &self.color_tone_tags
    }

    /// Returns the photographer specialty vocabulary.
    #[must_use]
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

fn validate_vocabulary(
    entries: Vec<String>,
    field: &'static str,
) -> Result<Vec<String>, RegistryError> {
    if entries.is_empty() {
        return Err(RegistryError::EmptyVocabulary { field });
    }
    if let Some(index) = entries.iter().position(|entry| entry.trim().is_empty()) {
        return Err(RegistryError::BlankVocabularyEntry { field, index });
    }
    Ok(entries)
}

/// A named seed definition for deterministic dataset generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    photographer_count: usize,
    photos_per_photographer: usize,
}

impl SeedDefinition {
    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of photographers to generate.
    #[must_use]
    pub const fn photographer_count(&self) -> usize {
        self.photographer_count
    }

    /// Returns the number of photos generated for each photographer.
    #[must_use]
    pub const fn photos_per_photographer(&self) -> usize {
        self.photos_per_photographer
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    lighting_tags: Vec<String>,
    color_tone_tags: Vec<String>,
    specialties: Vec<String>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    photographer_count: usize,
    photos_per_photographer: usize,
}
