//! Application layer for projo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but owns no catalog
//! data or validation rules. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArchetypeInfo, // DTO for `projo list`
    CatalogService,
    GenerateService,
    GenerationPlan,
    GenerationReport,
    VerifyReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateStore};

pub use error::{ApplicationError, TemplateFailure, TemplatePhase};
