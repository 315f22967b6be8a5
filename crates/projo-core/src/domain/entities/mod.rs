pub mod common;
pub mod config;
pub mod project_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use config::ProjectConfig;
pub use project_structure::ProjectStructure;
pub use template::{RenderContext, TemplateId};
