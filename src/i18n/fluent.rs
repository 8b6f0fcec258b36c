// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::domain::language::Language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("loaded", &self.bundles.len())
            .finish()
    }
}

impl I18n {
    /// Loads every supported language and resolves the active one.
    ///
    /// Files in `i18n_dir` named `<locale-tag>.ftl` replace the embedded
    /// resource for that language.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<&Path>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for language in Language::ALL {
            let Some(source) = load_source(language, i18n_dir) else {
                tracing::warn!(locale = language.locale_tag(), "no translation resource found");
                continue;
            };
            if let Some(bundle) = build_bundle(language, source) {
                bundles.insert(language, bundle);
            }
        }

        let current = resolve_language(cli_lang.as_deref(), config, sys_locale::get_locale())
            .unwrap_or_default();

        Self { bundles, current }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        if self.bundles.contains_key(&language) {
            self.current = language;
        } else {
            tracing::warn!(locale = language.locale_tag(), "language has no translations loaded");
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn load_source(language: Language, i18n_dir: Option<&Path>) -> Option<String> {
    let filename = format!("{}.ftl", language.locale_tag());

    if let Some(dir) = i18n_dir {
        let path = dir.join(&filename);
        if path.is_file() {
            match std::fs::read_to_string(&path) {
                Ok(content) => return Some(content),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to read translation override");
                }
            }
        }
    }

    Asset::get(&filename).map(|content| String::from_utf8_lossy(content.data.as_ref()).into_owned())
}

fn build_bundle(language: Language, source: String) -> Option<FluentBundle<FluentResource>> {
    let locale: LanguageIdentifier = match language.locale_tag().parse() {
        Ok(locale) => locale,
        Err(err) => {
            tracing::warn!(locale = language.locale_tag(), %err, "invalid locale tag");
            return None;
        }
    };

    // A resource with syntax errors still carries every entry that parsed.
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        tracing::warn!(
            locale = language.locale_tag(),
            errors = errors.len(),
            "translation file has syntax errors"
        );
        partial
    });

    let mut bundle = FluentBundle::new(vec![locale]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(
            locale = language.locale_tag(),
            errors = errors.len(),
            "duplicate translation entries"
        );
    }
    Some(bundle)
}

fn resolve_language(
    cli_lang: Option<&str>,
    config: &Config,
    os_locale: Option<String>,
) -> Option<Language> {
    // 1. Check CLI args
    if let Some(language) = cli_lang.and_then(Language::from_tag) {
        return Some(language);
    }

    // 2. Check config file
    if let Some(language) = config.general.language.as_deref().and_then(Language::from_tag) {
        return Some(language);
    }

    // 3. Check OS locale
    os_locale.as_deref().and_then(Language::from_tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use tempfile::tempdir;

    fn config_with_language(tag: &str) -> Config {
        Config {
            general: GeneralConfig {
                language: Some(tag.to_string()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn cli_language_wins_over_config_and_os() {
        let config = config_with_language("ru");
        let language = resolve_language(Some("he"), &config, Some("az-AZ".into()));
        assert_eq!(language, Some(Language::Hebrew));
    }

    #[test]
    fn config_language_used_when_cli_unknown() {
        let config = config_with_language("az");
        let language = resolve_language(Some("fr"), &config, Some("en-US".into()));
        assert_eq!(language, Some(Language::Azerbaijani));
    }

    #[test]
    fn os_locale_is_last_resort() {
        let language = resolve_language(None, &Config::default(), Some("en_GB.UTF-8".into()));
        assert_eq!(language, Some(Language::English));
        assert_eq!(resolve_language(None, &Config::default(), Some("ja-JP".into())), None);
    }

    #[test]
    fn every_embedded_language_is_loaded() {
        let i18n = I18n::new(Some("en".into()), None, &Config::default());
        for language in Language::ALL {
            assert!(i18n.bundles.contains_key(&language), "{language:?} missing");
        }
    }

    #[test]
    fn translates_and_switches_language() {
        let mut i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.language(), Language::English);
        assert_eq!(i18n.tr("light-candles"), "Light Candles");

        i18n.set_language(Language::Russian);
        assert_eq!(i18n.tr("light-candles"), "Зажечь свечи");
        assert_eq!(i18n.tr("shamash"), "Шамаш");
    }

    #[test]
    fn day_heading_takes_argument() {
        let mut i18n = I18n::new(Some("en".into()), None, &Config::default());
        assert_eq!(i18n.tr_with_args("day-heading", &[("day", "3")]), "Day 3");
        i18n.set_language(Language::Azerbaijani);
        assert_eq!(i18n.tr_with_args("day-heading", &[("day", "8")]), "Gün 8");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en".into()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn all_languages_share_the_same_keys() {
        let mut i18n = I18n::new(Some("en".into()), None, &Config::default());
        let keys = [
            "window-title",
            "app-title",
            "app-subtitle",
            "select-night",
            "light-candles",
            "reset",
            "get-insight",
            "insight-loading",
            "insight-error",
            "blessing-title",
            "blessing-text",
            "blessing-note",
            "shamash",
            "insight-placeholder",
            "footer",
        ];
        for language in Language::ALL {
            i18n.set_language(language);
            for key in keys {
                assert!(!i18n.tr(key).starts_with("MISSING"), "{language:?} lacks {key}");
            }
        }
    }

    #[test]
    fn directory_override_replaces_embedded_resource() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("en-US.ftl"), "reset = Start over\n")
            .expect("failed to write override");

        let i18n = I18n::new(Some("en".into()), Some(dir.path()), &Config::default());
        assert_eq!(i18n.tr("reset"), "Start over");
        assert_eq!(i18n.tr("shamash"), "MISSING: shamash");
    }
}
