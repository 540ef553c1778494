//! Explicit site selection state.
//!
//! Holds the current language and the currently open case study. Consumers
//! receive this value (or a [`Locale`] derived from it) as a parameter
//! instead of reading ambient globals.

use tracing::debug;

use crate::content::catalog;
use crate::error::{LuminaError, Result};
use crate::types::{Content, Language, ProjectItem};

/// A language together with its content bundle.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    pub language: Language,
    pub content: &'static Content,
}

impl Locale {
    /// Locale backed by the built-in catalog.
    pub fn of(language: Language) -> Self {
        Self {
            language,
            content: catalog(language),
        }
    }
}

/// Language and project-modal selection for one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteState {
    language: Language,
    selected_project: Option<u32>,
}

impl SiteState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            selected_project: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        debug!(from = %self.language, to = %language, "Language changed");
        self.language = language;
    }

    /// Switch between English and Spanish, returning the new language.
    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggle());
        self.language
    }

    /// Content bundle for the current language.
    pub fn content(&self) -> &'static Content {
        catalog(self.language)
    }

    pub fn locale(&self) -> Locale {
        Locale::of(self.language)
    }

    /// Open the case-study modal for `id`.
    ///
    /// Unknown ids leave the selection untouched.
    pub fn open_project(&mut self, id: u32) -> Result<&'static ProjectItem> {
        let project = self
            .content()
            .project(id)
            .ok_or(LuminaError::UnknownProject(id))?;
        self.selected_project = Some(id);
        debug!(project_id = id, "Project opened");
        Ok(project)
    }

    pub fn close_project(&mut self) {
        self.selected_project = None;
    }

    /// The open case study, translated into the current language.
    pub fn selected_project(&self) -> Option<&'static ProjectItem> {
        self.selected_project
            .and_then(|id| self.content().project(id))
    }
}
