//! Lexical translation of free-text answers
//!
//! Some answers arrive in the reporting form's source language. Known phrases
//! are mapped to canonical display strings; anything else passes through.

use rustc_hash::FxHashMap;

use crate::models::raw::{RawRecord, RawValue};

/// Sentinel for an absent answer
pub const NOT_AVAILABLE: &str = "N/A";

/// Known phrases and their canonical display strings
pub const DEFAULT_TRANSLATIONS: [(&str, &str); 3] = [
    ("Verbal aggression", "Verbal Aggression"),
    ("Handen (bijv. slaan, stoten)", "Hands (e.g., hitting, punching)"),
    ("Geen duidelijke aanleiding", "No apparent provocation"),
];

/// Immutable phrase dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalTranslator {
    translations: FxHashMap<String, String>,
}

impl Default for LexicalTranslator {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_TRANSLATIONS)
    }
}

impl LexicalTranslator {
    /// Build a translator from `(known phrase, canonical phrase)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            translations: pairs
                .into_iter()
                .map(|(known, canonical)| (known.into(), canonical.into()))
                .collect(),
        }
    }

    /// A translator that passes every phrase through unchanged
    #[must_use]
    pub fn empty() -> Self {
        Self {
            translations: FxHashMap::default(),
        }
    }

    /// Canonical phrase for `text`, the text itself if unknown
    #[must_use]
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        self.translations.get(text).map_or(text, String::as_str)
    }

    /// Translate a raw cell; absent or empty cells become [`NOT_AVAILABLE`]
    #[must_use]
    pub fn translate_value(&self, value: Option<&RawValue>) -> String {
        RawRecord::text_of(value).map_or_else(
            || NOT_AVAILABLE.to_string(),
            |text| self.translate(&text).to_string(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
