use crate::i18n::{first_duplicate, LanguageCode, Locale, SelectorError, DEFAULT_CAPACITY};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    // Candidates
    pub languages: Vec<LanguageCode>,
    pub translation_key: String,

    // Initial selection
    pub url_parameter: String,

    // Shortlist
    pub capacity: usize,
    pub has_language_detection: bool,

    // Display
    pub flags: bool,
    pub locale: Locale,
    pub catalog_dir: Option<PathBuf>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            languages: parse_languages("en,fr,de,es"),
            translation_key: "languages".to_string(),
            url_parameter: "lang".to_string(),
            capacity: DEFAULT_CAPACITY,
            has_language_detection: false,
            flags: false,
            locale: "en".parse().unwrap_or_default(),
            catalog_dir: None,
        }
    }
}

impl SelectorConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            // Candidates
            languages: std::env::var("SELECTOR_LANGUAGES")
                .map(|v| parse_languages(&v))
                .unwrap_or(defaults.languages),
            translation_key: std::env::var("SELECTOR_TRANSLATION_KEY")
                .unwrap_or(defaults.translation_key),

            // Initial selection
            url_parameter: std::env::var("SELECTOR_URL_PARAMETER")
                .unwrap_or(defaults.url_parameter),

            // Shortlist
            capacity: match std::env::var("SELECTOR_CAPACITY") {
                Ok(v) => v
                    .trim()
                    .parse()
                    .with_context(|| format!("SELECTOR_CAPACITY is not a number: {}", v))?,
                Err(_) => defaults.capacity,
            },
            has_language_detection: std::env::var("SELECTOR_DETECTION")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.has_language_detection),

            // Display
            flags: std::env::var("SELECTOR_FLAGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.flags),
            locale: match std::env::var("SELECTOR_LOCALE") {
                Ok(v) => v
                    .trim()
                    .parse()
                    .with_context(|| format!("SELECTOR_LOCALE is not a valid locale: {}", v))?,
                Err(_) => defaults.locale,
            },
            catalog_dir: std::env::var("SELECTOR_CATALOG_DIR").ok().map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the selector cannot be built from.
    pub fn validate(&self) -> Result<(), SelectorError> {
        if self.languages.is_empty() {
            return Err(SelectorError::Config(
                "at least one language is required".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(SelectorError::Config(
                "shortlist capacity must be at least 1".to_string(),
            ));
        }
        if let Some(code) = first_duplicate(&self.languages) {
            return Err(SelectorError::Config(format!(
                "language {} is listed more than once",
                code
            )));
        }
        Ok(())
    }
}

/// Split a comma-separated language list, dropping blanks.
pub fn parse_languages(list: &str) -> Vec<LanguageCode> {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(LanguageCode::from)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "SELECTOR_LANGUAGES",
        "SELECTOR_TRANSLATION_KEY",
        "SELECTOR_URL_PARAMETER",
        "SELECTOR_CAPACITY",
        "SELECTOR_DETECTION",
        "SELECTOR_FLAGS",
        "SELECTOR_LOCALE",
        "SELECTOR_CATALOG_DIR",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_languages() {
        let languages = parse_languages(" en, fr ,,de ");
        assert_eq!(languages, vec!["en".into(), "fr".into(), LanguageCode::from("de")]);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SelectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.capacity, 3);
        assert_eq!(config.locale.to_string(), "en");
    }

    #[test]
    fn test_validate_rejects_empty_languages() {
        let config = SelectorConfig {
            languages: Vec::new(),
            ..SelectorConfig::default()
        };
        assert!(matches!(config.validate(), Err(SelectorError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = SelectorConfig {
            capacity: 0,
            ..SelectorConfig::default()
        };
        assert!(matches!(config.validate(), Err(SelectorError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_languages() {
        let config = SelectorConfig {
            languages: parse_languages("en,fr,en"),
            ..SelectorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(SelectorError::Config(
                "language en is listed more than once".to_string()
            ))
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = SelectorConfig::from_env().unwrap();
        assert_eq!(config, SelectorConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SELECTOR_LANGUAGES", "ase,bfi,gsg,ils");
        std::env::set_var("SELECTOR_TRANSLATION_KEY", "signedLanguages");
        std::env::set_var("SELECTOR_URL_PARAMETER", "sil");
        std::env::set_var("SELECTOR_CAPACITY", "2");
        std::env::set_var("SELECTOR_DETECTION", "true");
        std::env::set_var("SELECTOR_FLAGS", "1");
        std::env::set_var("SELECTOR_LOCALE", "de-AT");
        std::env::set_var("SELECTOR_CATALOG_DIR", "/tmp/i18n");

        let config = SelectorConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.languages.len(), 4);
        assert_eq!(config.translation_key, "signedLanguages");
        assert_eq!(config.url_parameter, "sil");
        assert_eq!(config.capacity, 2);
        assert!(config.has_language_detection);
        assert!(config.flags);
        assert_eq!(config.locale.to_string(), "de-AT");
        assert_eq!(config.catalog_dir, Some(PathBuf::from("/tmp/i18n")));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_capacity() {
        clear_env();
        std::env::set_var("SELECTOR_CAPACITY", "three");
        let result = SelectorConfig::from_env();
        clear_env();

        let error = result.unwrap_err().to_string();
        assert!(error.contains("SELECTOR_CAPACITY"));
    }

    #[test]
    #[serial]
    fn test_from_env_zero_capacity_is_rejected() {
        clear_env();
        std::env::set_var("SELECTOR_CAPACITY", "0");
        let result = SelectorConfig::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
