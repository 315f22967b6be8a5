//! Template store adapters.

mod builtin;
mod memory;

pub use builtin::BuiltinTemplates;
pub use memory::InMemoryStore;
