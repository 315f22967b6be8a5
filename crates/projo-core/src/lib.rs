//! projo Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the projo Go
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            projo-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService, CatalogService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Filesystem, Store, Renderer)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     projo-adapters (Infrastructure)     │
//! │ (LocalFilesystem, HandlebarsRenderer)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Archetype, ProjectConfig, catalog)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use projo_core::prelude::*;
//!
//! let config = ProjectConfig::builder()
//!     .name("orders")
//!     .module("example.com/orders")
//!     .archetype("cli".parse()?)
//!     .output_path("./out")
//!     .build()?;
//!
//! let service = GenerateService::new(store, renderer, filesystem);
//! let report = service.generate(&config)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArchetypeInfo, CatalogService, GenerateService, GenerationPlan, GenerationReport,
        TemplateFailure, TemplatePhase,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Archetype, DEFAULT_TOOLCHAIN_VERSION, ProjectConfig, ProjectConfigBuilder,
        ProjectStructure, RenderContext, TemplateId, resolve,
    };
    pub use crate::error::{ErrorKind, ProjoError, ProjoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
