//! Signed-language registry and the language → region index built from it.
//!
//! The registry is an IANA-style table of signed languages, each tied to a
//! spoken language and a country. The built-in table is embedded at compile
//! time and parsed once on first access.

use crate::i18n::language::{INTERNATIONAL_SIGN, UNKNOWN_REGION};
use crate::i18n::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, error};

const REGISTRY_JSON: &str = include_str!("../../assets/signed_languages.json");

/// One signed language entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedLanguageRecord {
    /// Signed language code (e.g., "ase", "gsg")
    pub signed: String,

    /// Associated spoken language code (e.g., "en", "de")
    pub language: String,

    /// Lowercase country code used for flags (e.g., "us", "de")
    pub country: String,

    /// English name of the signed language
    #[serde(default)]
    pub name: String,
}

/// Which record field a language code is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryField {
    /// Match spoken language codes against `language`
    Language,
    /// Match signed language codes against `signed`
    Signed,
}

impl RegistryField {
    /// The `languages` namespace lists spoken languages; every other
    /// namespace lists signed languages.
    pub fn for_namespace(namespace: &str) -> Self {
        if namespace == "languages" {
            RegistryField::Language
        } else {
            RegistryField::Signed
        }
    }

    fn value<'a>(&self, record: &'a SignedLanguageRecord) -> &'a str {
        match self {
            RegistryField::Language => &record.language,
            RegistryField::Signed => &record.signed,
        }
    }
}

/// Read-only table of signed-language records.
#[derive(Debug, Clone, Default)]
pub struct SignedLanguageRegistry {
    records: Vec<SignedLanguageRecord>,
}

/// Built-in registry instance (initialized lazily)
static REGISTRY: OnceLock<SignedLanguageRegistry> = OnceLock::new();

impl SignedLanguageRegistry {
    /// Get the built-in registry.
    pub fn get() -> &'static SignedLanguageRegistry {
        REGISTRY.get_or_init(|| {
            Self::from_json(REGISTRY_JSON).unwrap_or_else(|e| {
                error!("Failed to parse built-in signed language registry: {}", e);
                Self::default()
            })
        })
    }

    pub fn from_records(records: Vec<SignedLanguageRecord>) -> Self {
        Self { records }
    }

    /// Parse a registry from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<SignedLanguageRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[SignedLanguageRecord] {
        &self.records
    }

    /// First record whose `field` equals `code`.
    pub fn find(&self, field: RegistryField, code: &str) -> Option<&SignedLanguageRecord> {
        self.records
            .iter()
            .find(|record| field.value(record) == code)
    }
}

/// Language code → region code for the candidate languages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionIndex {
    regions: HashMap<LanguageCode, String>,
}

impl RegionIndex {
    /// Map every candidate to the country of its first matching record.
    ///
    /// Unmatched candidates map to `"xx"`. International Sign always maps to
    /// itself, whatever the registry says.
    pub fn build(
        candidates: &[LanguageCode],
        records: &[SignedLanguageRecord],
        field: RegistryField,
    ) -> Self {
        let mut regions = HashMap::with_capacity(candidates.len() + 1);

        for code in candidates {
            let region = records
                .iter()
                .find(|record| field.value(record) == code.as_str())
                .map(|record| record.country.clone());

            let region = region.unwrap_or_else(|| {
                debug!("No registry region for language {}", code);
                UNKNOWN_REGION.to_string()
            });
            regions.insert(code.clone(), region);
        }

        regions.insert(
            LanguageCode::from(INTERNATIONAL_SIGN),
            INTERNATIONAL_SIGN.to_string(),
        );

        Self { regions }
    }

    /// Region for `code`; `"xx"` for codes outside the index.
    pub fn region(&self, code: &LanguageCode) -> &str {
        self.regions
            .get(code)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGION)
    }

    /// Codes that resolved to the unknown region.
    pub fn unmapped(&self) -> impl Iterator<Item = &LanguageCode> {
        self.regions
            .iter()
            .filter(|(_, region)| region.as_str() == UNKNOWN_REGION)
            .map(|(code, _)| code)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
