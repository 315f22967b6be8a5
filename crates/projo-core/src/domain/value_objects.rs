//! Domain value objects: Archetype.
//!
//! # Design
//!
//! Pure value types: `Copy` and compared by value. The directory
//! and file catalogs for each archetype live in `catalog.rs`; this file only
//! defines the type, its string form and its parser.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add an `ArchetypeDef` entry in `catalog.rs`
//!
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Archetype ────────────────────────────────────────────────────────────────

/// The kind of project to generate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    #[default]
    Api,
    Cli,
    Microservice,
    Library,
}

impl Archetype {
    /// Every archetype, in catalog order.
    pub const ALL: [Archetype; 4] = [Self::Api, Self::Cli, Self::Microservice, Self::Library];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Cli => "cli",
            Self::Microservice => "microservice",
            Self::Library => "library",
        }
    }

    /// Short synonyms accepted by the parser.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Microservice => &["micro"],
            Self::Library => &["lib"],
            Self::Api | Self::Cli => &[],
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    /// Canonicalize user input, synonyms included.
    ///
    /// Unrecognized tags are an error. There is no fallback archetype.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "cli" => Ok(Self::Cli),
            "microservice" | "micro" => Ok(Self::Microservice),
            "library" | "lib" => Ok(Self::Library),
            other => Err(DomainError::UnknownArchetype { tag: other.into() }),
        }
    }
}
