// SPDX-License-Identifier: MPL-2.0
//! Display languages.

use std::fmt;

/// Languages the display is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    English,
    #[default]
    Russian,
    Azerbaijani,
    Hebrew,
}

impl Language {
    /// All languages, in selector order.
    pub const ALL: [Self; 4] = [
        Self::English,
        Self::Russian,
        Self::Azerbaijani,
        Self::Hebrew,
    ];

    /// BCP-47 tag of the translation resource.
    #[must_use]
    pub fn locale_tag(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Russian => "ru",
            Self::Azerbaijani => "az",
            Self::Hebrew => "he",
        }
    }

    /// Short label shown on the language toggle.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Russian => "RU",
            Self::Azerbaijani => "AZ",
            Self::Hebrew => "HE",
        }
    }

    /// English name, used when asking the text service to answer in this language.
    #[must_use]
    pub fn english_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Russian => "Russian",
            Self::Azerbaijani => "Azerbaijani",
            Self::Hebrew => "Hebrew",
        }
    }

    /// Whether text in this language runs right to left.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Hebrew)
    }

    /// Matches a locale tag on its primary language subtag
    /// (`ru-RU` → Russian, `he_IL` → Hebrew, `iw` → Hebrew).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::English),
            "ru" => Some(Self::Russian),
            "az" => Some(Self::Azerbaijani),
            "he" | "iw" => Some(Self::Hebrew),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_russian() {
        assert_eq!(Language::default(), Language::Russian);
    }

    #[test]
    fn from_tag_matches_primary_subtag() {
        assert_eq!(Language::from_tag("en-US"), Some(Language::English));
        assert_eq!(Language::from_tag("EN_gb"), Some(Language::English));
        assert_eq!(Language::from_tag("ru-RU"), Some(Language::Russian));
        assert_eq!(Language::from_tag("az"), Some(Language::Azerbaijani));
        assert_eq!(Language::from_tag("he_IL.UTF-8"), Some(Language::Hebrew));
        assert_eq!(Language::from_tag("iw"), Some(Language::Hebrew));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn locale_tags_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.locale_tag()), Some(language));
        }
    }

    #[test]
    fn only_hebrew_is_rtl() {
        let rtl: Vec<_> = Language::ALL.into_iter().filter(|l| l.is_rtl()).collect();
        assert_eq!(rtl, vec![Language::Hebrew]);
    }
}
