//! Application services - orchestrate use cases.
//!
//! `GenerateService` turns a configuration into a project tree;
//! `CatalogService` answers questions about the built-in archetypes.

pub mod catalog_service;
pub mod generate_service;

mod render;

pub use catalog_service::{ArchetypeInfo, CatalogService, VerifyReport};
pub use generate_service::{GenerateService, GenerationPlan, GenerationReport};

#[cfg(test)]
pub(crate) mod fakes;
