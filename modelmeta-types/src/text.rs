//! Localized text for field names and descriptions.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A lowercase language tag such as `en`, `de` or `pt-br`.
///
/// Deserialization goes through [`Language::parse`], so tags read from
/// records are normalized and validated like any other input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const ENGLISH: Self = Self(Cow::Borrowed("en"));
    pub const GERMAN: Self = Self(Cow::Borrowed("de"));
    pub const FRENCH: Self = Self(Cow::Borrowed("fr"));

    /// Language used when a text has no entry for the requested language.
    pub const DEFAULT: Self = Self::ENGLISH;

    /// Parses a language tag: a 2-3 letter primary subtag, optionally
    /// followed by `-` and a 2-8 character alphanumeric region/variant.
    /// The result is lowercased.
    pub fn parse(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        let mut parts = lower.splitn(2, '-');
        let primary = parts.next().unwrap_or_default();
        let primary_ok = (2..=3).contains(&primary.len())
            && primary.chars().all(|c| c.is_ascii_alphabetic());
        let rest_ok = parts.next().is_none_or(|rest| {
            (2..=8).contains(&rest.len()) && rest.chars().all(|c| c.is_ascii_alphanumeric())
        });
        if primary_ok && rest_ok {
            Ok(Self(Cow::Owned(lower)))
        } else {
            Err(Error::InvalidLanguage(s.to_string()))
        }
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0.into_owned()
    }
}

/// Text available in one or more languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    /// Creates an empty text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text with a single entry in the default language.
    #[must_use]
    pub fn en(text: impl Into<String>) -> Self {
        Self::new().with(Language::DEFAULT, text)
    }

    /// Returns the text with `text` set for `language`.
    #[must_use]
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.0.insert(language, text.into());
        self
    }

    /// Sets the text for `language`, returning the previous entry.
    pub fn insert(&mut self, language: Language, text: impl Into<String>) -> Option<String> {
        self.0.insert(language, text.into())
    }

    /// Returns the text for exactly `language`.
    #[must_use]
    pub fn get(&self, language: &Language) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Returns the text for `language`, falling back to the default language
    /// and then to any available entry.
    #[must_use]
    pub fn get_or_fallback(&self, language: &Language) -> Option<&str> {
        self.get(language)
            .or_else(|| self.get(&Language::DEFAULT))
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    /// Iterates over the languages this text is available in.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.0.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_or_fallback(&Language::DEFAULT).unwrap_or_default())
    }
}
