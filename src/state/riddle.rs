//! Riddle catalog and answer matching.
//!
//! The catalog holds a fixed number of themed riddle sets; one set is chosen
//! uniformly at random when a session is created and stays fixed for its
//! whole duration. Answers match by exact equality after normalization
//! (lowercase, diacritics stripped, trimmed), never by substring.

use rand::rngs::StdRng;
use rand::Rng;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text for answer comparison.
///
/// Lowercases, decomposes accented characters (NFD) and discards the
/// combining marks, then trims surrounding whitespace. Applied identically
/// to player input and to answer keywords, so "SÓMBRA " and "sombra"
/// compare equal. Idempotent.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// A single riddle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Riddle {
    /// Position within its set (1-indexed, display only)
    pub id: u32,
    /// The question the entity asks
    pub question: String,
    /// Accepted answers; matching is case- and diacritic-insensitive
    pub answer_keywords: Vec<String>,
    /// Optional hint revealed on request
    pub hint: Option<String>,
}

impl Riddle {
    /// Check whether `input` is an accepted answer.
    pub fn matches(&self, input: &str) -> bool {
        let normalized = normalize(input);
        self.answer_keywords
            .iter()
            .any(|keyword| normalize(keyword) == normalized)
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }
}

/// A fixed, ordered sequence of riddles sharing a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiddleSet {
    pub theme: String,
    pub riddles: Vec<Riddle>,
}

impl RiddleSet {
    pub fn len(&self) -> usize {
        self.riddles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riddles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Riddle> {
        self.riddles.get(index)
    }
}

/// Content errors.
///
/// These indicate a broken content build, not a runtime condition, so they
/// surface only at catalog construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    EmptyCatalog,
    EmptySet { set: usize },
    MissingKeywords { set: usize, riddle: u32 },
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "Riddle catalog has no sets"),
            Self::EmptySet { set } => write!(f, "Riddle set {} has no riddles", set),
            Self::MissingKeywords { set, riddle } => {
                write!(f, "Riddle {} in set {} has no answer keywords", riddle, set)
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// The full riddle catalog: an ordered sequence of sets.
#[derive(Debug, Clone)]
pub struct RiddleCatalog {
    sets: Vec<RiddleSet>,
}

impl RiddleCatalog {
    /// Build a catalog, validating the content.
    ///
    /// Rejects an empty catalog, an empty set, and any riddle without
    /// answer keywords.
    pub fn new(sets: Vec<RiddleSet>) -> Result<Self, ContentError> {
        if sets.is_empty() {
            return Err(ContentError::EmptyCatalog);
        }
        for (i, set) in sets.iter().enumerate() {
            if set.is_empty() {
                return Err(ContentError::EmptySet { set: i });
            }
            for riddle in &set.riddles {
                if riddle.answer_keywords.is_empty() {
                    return Err(ContentError::MissingKeywords {
                        set: i,
                        riddle: riddle.id,
                    });
                }
            }
        }
        Ok(Self { sets })
    }

    /// The built-in catalog: four themed sets of ten riddles.
    ///
    /// The content is compiled in and known-good; a test validates it
    /// against the same rules `new` enforces.
    pub fn builtin() -> Self {
        Self {
            sets: super::content::builtin_sets(),
        }
    }

    /// Select one set uniformly at random.
    ///
    /// Called once per session; the catalog is never empty by construction.
    pub fn choose(&self, rng: &mut StdRng) -> &RiddleSet {
        &self.sets[rng.random_range(0..self.sets.len())]
    }

    pub fn sets(&self) -> &[RiddleSet] {
        &self.sets
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}
