//! Hand-written port fakes for service tests.

use std::collections::HashMap;

use crate::application::{
    error::TemplateFailure,
    ports::{TemplateRenderer, TemplateStore},
};
use crate::domain::{RenderContext, TemplateId};

/// Store that returns the same tiny body for every identifier unless
/// overridden.
pub(crate) struct FakeStore {
    bodies: HashMap<TemplateId, String>,
}

impl FakeStore {
    pub(crate) fn uniform(body: &str) -> Self {
        Self {
            bodies: TemplateId::ALL
                .iter()
                .map(|id| (*id, body.to_string()))
                .collect(),
        }
    }

    pub(crate) fn with(mut self, id: TemplateId, body: &str) -> Self {
        self.bodies.insert(id, body.to_string());
        self
    }

    pub(crate) fn without(mut self, id: TemplateId) -> Self {
        self.bodies.remove(&id);
        self
    }
}

impl TemplateStore for FakeStore {
    fn body(&self, id: TemplateId) -> Option<&str> {
        self.bodies.get(&id).map(String::as_str)
    }

    fn ids(&self) -> Vec<TemplateId> {
        let mut ids: Vec<_> = self.bodies.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// `{{field}}` substitution with the same failure modes as the real
/// renderer: an unclosed tag is a parse error, an unknown field a render
/// error.
pub(crate) struct FakeRenderer;

impl TemplateRenderer for FakeRenderer {
    fn render(
        &self,
        _name: &str,
        body: &str,
        context: &RenderContext<'_>,
    ) -> Result<String, TemplateFailure> {
        let mut out = String::new();
        let mut rest = body;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| TemplateFailure::parse("unclosed tag"))?;
            let field = after[..end].trim();
            let value = context
                .get(field)
                .ok_or_else(|| TemplateFailure::render(format!("unknown field '{field}'")))?;
            out.push_str(value);
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
