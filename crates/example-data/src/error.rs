//! Error types for the example-data crate.
//!
//! This module defines semantic error enums for registry parsing and dataset
//! generation, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
///
/// These errors cover file I/O, JSON parsing, schema validation, and seed
/// lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// A vocabulary list is empty.
    #[error("registry vocabulary '{field}' must not be empty")]
    EmptyVocabulary {
        /// JSON field holding the vocabulary.
        field: &'static str,
    },

    /// A vocabulary entry is blank once trimmed.
    #[error("blank entry in registry vocabulary '{field}' at index {index}")]
    BlankVocabularyEntry {
        /// JSON field holding the vocabulary.
        field: &'static str,
        /// Index of the blank entry.
        index: usize,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// A seed definition asks for no photographers.
    #[error("seed '{name}' must request at least one photographer")]
    NoPhotographers {
        /// The offending seed name.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during dataset generation.
///
/// These errors indicate failures in the generation process itself, such as
/// the inability to produce valid display names or unique usernames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid display name after maximum retries.
    #[error("failed to generate valid display name after {max_attempts} attempts")]
    DisplayNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Failed to derive a unique username after maximum retries.
    #[error("failed to derive a unique username from '{base}' after {max_attempts} attempts")]
    UsernameGenerationFailed {
        /// Username stem derived from the display name.
        base: String,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
