//! In-memory template store.

use std::collections::HashMap;

use projo_core::{application::ports::TemplateStore, domain::TemplateId};

use super::builtin::builtin_body;

/// Map-backed template store.
///
/// Starts empty or as a copy of the built-in catalog; individual bodies can
/// be replaced or removed. Used to exercise failure paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    bodies: HashMap<TemplateId, String>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in templates loaded.
    pub fn with_builtin() -> Self {
        Self {
            bodies: TemplateId::ALL
                .iter()
                .map(|id| (*id, builtin_body(*id).to_string()))
                .collect(),
        }
    }

    /// Insert or replace a body.
    pub fn insert(&mut self, id: TemplateId, body: impl Into<String>) -> &mut Self {
        self.bodies.insert(id, body.into());
        self
    }

    /// Remove a body.
    pub fn remove(&mut self, id: TemplateId) -> Option<String> {
        self.bodies.remove(&id)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl TemplateStore for InMemoryStore {
    fn body(&self, id: TemplateId) -> Option<&str> {
        self.bodies.get(&id).map(String::as_str)
    }

    fn ids(&self) -> Vec<TemplateId> {
        let mut ids: Vec<_> = self.bodies.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
