//! Site languages and bilingual text.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ModelError;

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// Bahasa Indonesia, the primary language.
    #[default]
    Id,
    /// English.
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Id, Locale::En];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    /// The other site language, used for fallbacks and `hreflang` alternates.
    pub const fn other(&self) -> Locale {
        match self {
            Locale::Id => Locale::En,
            Locale::En => Locale::Id,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "id-id" | "in" => Ok(Locale::Id),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(ModelError::UnknownLocale(other.to_string())),
        }
    }
}

/// The same text in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedString {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub en: String,
}

impl LocalizedString {
    pub fn new(id: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            en: en.into(),
        }
    }

    /// Text for `locale`, falling back to the other language when blank.
    pub fn get(&self, locale: Locale) -> &str {
        let primary = self.raw(locale);
        if primary.trim().is_empty() {
            self.raw(locale.other())
        } else {
            primary
        }
    }

    fn raw(&self, locale: Locale) -> &str {
        match locale {
            Locale::Id => &self.id,
            Locale::En => &self.en,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.id.trim().is_empty() && self.en.trim().is_empty()
    }
}
