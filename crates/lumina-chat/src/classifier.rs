//! Local fallback classifier.
//!
//! Maps a free-text utterance to a keyword bucket and returns one of the
//! bucket's canned replies in the requested language. Matching is plain
//! lower-cased substring search; the first bucket in priority order with any
//! matching trigger wins.

use std::fmt;

use rand::Rng;
use tracing::debug;

use lumina_core::Language;

use crate::error::ChatError;

// =============================================================================
// Buckets
// =============================================================================

/// Named group of triggers sharing one reply family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKind {
    /// Technology and stack choices.
    Stack,
    /// Process, methodology, code review.
    Methodology,
    Contact,
    /// Used when nothing else matches.
    Default,
}

impl BucketKind {
    /// Evaluation order. Earlier buckets win over later ones.
    pub const PRIORITY: [BucketKind; 4] = [
        BucketKind::Stack,
        BucketKind::Methodology,
        BucketKind::Contact,
        BucketKind::Default,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BucketKind::Stack => "stack",
            BucketKind::Methodology => "methodology",
            BucketKind::Contact => "contact",
            BucketKind::Default => "default",
        }
    }
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidate replies per language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedReplies {
    pub en: Vec<String>,
    pub es: Vec<String>,
}

impl LocalizedReplies {
    pub fn for_language(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }
}

/// Trigger keywords and replies for one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordBucket {
    pub kind: BucketKind,
    /// Lower-case substrings; any one of them selects the bucket.
    pub triggers: Vec<String>,
    pub replies: LocalizedReplies,
}

impl KeywordBucket {
    pub fn new(kind: BucketKind, triggers: &[&str], en: &[&str], es: &[&str]) -> Self {
        Self {
            kind,
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            replies: LocalizedReplies {
                en: en.iter().map(|r| r.to_string()).collect(),
                es: es.iter().map(|r| r.to_string()).collect(),
            },
        }
    }

    /// Whether any trigger occurs in the already lower-cased utterance.
    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }
}

/// The built-in bucket tables, in priority order.
pub fn default_buckets() -> Vec<KeywordBucket> {
    vec![
        KeywordBucket::new(
            BucketKind::Stack,
            &["stack", "react", "tech", "tecnología"],
            &[
                "For the frontend, I rely on React within a Next.js framework for optimal hydration strategies.",
                "State management depends on complexity: Context for simple data, Redux/Zustand for complex global state, and React Query for server state.",
                "I implement automated CI/CD pipelines ensuring every commit is linted, tested, and ready for deployment.",
            ],
            &["Para el frontend, uso React/Next.js. La gestión de estado depende de la complejidad: React Query para estado de servidor y Zustand/Redux para estado de cliente."],
        ),
        KeywordBucket::new(
            BucketKind::Methodology,
            &["method", "process", "metodología", "proceso"],
            &[
                "I advocate for Domain-Driven Design (DDD) to align the software structure with the business reality.",
                "Code reviews are non-negotiable. They are not just for error checking, but for knowledge sharing.",
                "I prioritize Core Web Vitals from day one, treating performance as a feature, not an afterthought.",
            ],
            &["Abogo por Domain-Driven Design (DDD). Las revisiones de código son obligatorias para asegurar la calidad y compartir conocimiento."],
        ),
        KeywordBucket::new(
            BucketKind::Contact,
            &["contact", "email", "contacto"],
            &[
                "If you want to discuss your system's architecture, please reach out via the contact options.",
                "My CV detailing my engineering background is available via the button above.",
            ],
            &["Si deseas discutir la arquitectura de tu sistema, contáctame a través de las opciones en pantalla."],
        ),
        KeywordBucket::new(
            BucketKind::Default,
            &[],
            &[
                "I architect systems focusing on modularity and testability.",
                "My preference lies in statically typed languages like TypeScript for maintainability.",
                "I believe in 'Convention over Configuration' but tailored to the project's scale.",
            ],
            &["Arquitecturo sistemas enfocados en modularidad y testeabilidad. Prefiero lenguajes tipados como TypeScript."],
        ),
    ]
}

// =============================================================================
// FallbackClassifier
// =============================================================================

/// How a reply is picked among a bucket's candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplySelection {
    /// Always the first candidate.
    #[default]
    Canonical,
    /// Uniformly random candidate.
    Random,
}

/// Rule-based keyword classifier with localized canned replies.
#[derive(Debug, Clone)]
pub struct FallbackClassifier {
    buckets: Vec<KeywordBucket>,
    selection: ReplySelection,
}

impl Default for FallbackClassifier {
    fn default() -> Self {
        Self::new(ReplySelection::Canonical)
    }
}

impl FallbackClassifier {
    /// Classifier over the built-in tables.
    pub fn new(selection: ReplySelection) -> Self {
        Self::with_buckets(default_buckets(), selection)
    }

    /// Classifier over caller-supplied tables.
    ///
    /// Buckets are re-ordered into [`BucketKind::PRIORITY`] order; tables are
    /// not validated here, see [`FallbackClassifier::validate`].
    pub fn with_buckets(mut buckets: Vec<KeywordBucket>, selection: ReplySelection) -> Self {
        buckets.sort_by_key(|b| priority_rank(b.kind));
        Self { buckets, selection }
    }

    pub fn buckets(&self) -> &[KeywordBucket] {
        &self.buckets
    }

    /// Bucket for an utterance: the first in priority order with a matching
    /// trigger, `Default` otherwise.
    pub fn classify(&self, utterance: &str) -> BucketKind {
        let lowered = utterance.to_lowercase();
        self.buckets
            .iter()
            .filter(|b| b.kind != BucketKind::Default)
            .find(|b| b.matches(&lowered))
            .map(|b| b.kind)
            .unwrap_or(BucketKind::Default)
    }

    /// Canned reply for an utterance in `language`.
    ///
    /// Fails only when the selected bucket is missing or has no candidate for
    /// that language.
    pub fn reply(&self, utterance: &str, language: Language) -> Result<String, ChatError> {
        let kind = self.classify(utterance);
        let candidates = self
            .buckets
            .iter()
            .find(|b| b.kind == kind)
            .map(|b| b.replies.for_language(language))
            .unwrap_or_default();

        let picked = match self.selection {
            ReplySelection::Canonical => candidates.first(),
            ReplySelection::Random if candidates.is_empty() => None,
            ReplySelection::Random => {
                let idx = rand::rng().random_range(0..candidates.len());
                candidates.get(idx)
            }
        };

        debug!(bucket = %kind, language = %language, "Fallback bucket selected");
        picked
            .cloned()
            .ok_or(ChatError::EmptyCandidates(kind, language))
    }

    /// Every reply the classifier can produce for `language`.
    pub fn all_replies(&self, language: Language) -> Vec<&str> {
        self.buckets
            .iter()
            .flat_map(|b| b.replies.for_language(language))
            .map(String::as_str)
            .collect()
    }

    /// Check that every bucket kind is present with replies in every language.
    pub fn validate(&self) -> Result<(), ChatError> {
        for kind in BucketKind::PRIORITY {
            let bucket = self.buckets.iter().find(|b| b.kind == kind);
            for language in Language::all() {
                let has_reply = bucket
                    .map(|b| !b.replies.for_language(language).is_empty())
                    .unwrap_or(false);
                if !has_reply {
                    return Err(ChatError::EmptyCandidates(kind, language));
                }
            }
        }
        Ok(())
    }
}

fn priority_rank(kind: BucketKind) -> usize {
    BucketKind::PRIORITY
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(BucketKind::PRIORITY.len())
}

// =============================================================================
// Tests
// =============================================================================
