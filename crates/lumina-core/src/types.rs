use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LuminaError;

// =============================================================================
// Enums
// =============================================================================

/// Language of the site content and of chat replies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Spanish (default).
    #[default]
    Es,
}

impl Language {
    /// Short tag used on the wire and in model instructions.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Human-readable name, in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// The other supported language.
    pub fn toggle(self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// All supported languages.
    pub fn all() -> [Language; 2] {
        [Language::En, Language::Es]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LuminaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Es),
            other => Err(LuminaError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Icon shown next to an expertise card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseIcon {
    Architecture,
    Performance,
    Integration,
}

// =============================================================================
// Content catalog
// =============================================================================

/// One localized bundle of every string the site renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub nav: NavContent,
    pub hero: HeroContent,
    pub expertise: ExpertiseSection,
    pub process: ProcessSection,
    pub journey: JourneySection,
    pub projects: ProjectsSection,
    pub chat: ChatContent,
    pub footer: FooterContent,
}

impl Content {
    /// Look up a case study by id.
    pub fn project(&self, id: u32) -> Option<&ProjectItem> {
        self.projects.items.iter().find(|p| p.id == id)
    }

    /// Look up an expertise card by id.
    pub fn expertise_item(&self, id: &str) -> Option<&ExpertiseItem> {
        self.expertise.items.iter().find(|e| e.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavContent {
    pub home: String,
    pub expertise: String,
    pub projects: String,
    pub journey: String,
    pub contact: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub greeting: String,
    pub role: String,
    pub description: String,
    pub cta_explore: String,
    pub cta_contact: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ExpertiseItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Specific tools or concepts listed on the card.
    pub tech_list: Vec<String>,
    pub icon: ExpertiseIcon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSection {
    pub title: String,
    pub items: Vec<ProcessItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessItem {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySection {
    pub title: String,
    pub milestones: Vec<JourneyMilestone>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyMilestone {
    pub id: u32,
    pub year: String,
    pub title: String,
    pub description: String,
    /// Background image URL.
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSection {
    pub title: String,
    pub view_case_study: String,
    pub labels: ProjectLabels,
    pub items: Vec<ProjectItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLabels {
    pub problem: String,
    pub architecture: String,
    pub highlights: String,
    pub outcome: String,
    pub stack: String,
}

/// A case study shown in the project modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: u32,
    pub title: String,
    pub short_desc: String,
    pub link: String,
    pub repo: String,
    /// The technical challenge.
    pub problem: String,
    /// Decisions taken and why.
    pub architecture: String,
    pub highlights: Vec<String>,
    /// Business impact.
    pub outcome: String,
    pub stack: Vec<String>,
    pub images: Vec<String>,
}

/// Labels of the chat widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContent {
    pub title: String,
    pub welcome: String,
    pub placeholder: String,
    /// Shown while a reply is outstanding.
    pub thinking: String,
    /// Appended when no reply could be produced at all.
    pub connection_error: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub cta_title: String,
    pub cta_description: String,
    pub rights: String,
}
