//! Grounding context handed to the external model.

use serde_json::Value;

use lumina_core::Content;

use crate::error::ChatError;

/// Read-only JSON projection of the site's expertise and case studies.
///
/// Recomputed from the catalog for every call; never cached across messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextSnapshot {
    pub expertise: Value,
    pub projects: Value,
}

impl ContextSnapshot {
    pub fn from_content(content: &Content) -> Result<Self, ChatError> {
        Ok(Self {
            expertise: serde_json::to_value(&content.expertise.items)?,
            projects: serde_json::to_value(&content.projects.items)?,
        })
    }

    /// Snapshot with no grounding data.
    pub fn empty() -> Self {
        Self {
            expertise: Value::Array(Vec::new()),
            projects: Value::Array(Vec::new()),
        }
    }
}
