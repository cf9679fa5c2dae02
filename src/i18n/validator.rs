//! Catalog coverage validation.
//!
//! Checks that every candidate language can be displayed without surfacing a
//! raw translation key, and that it has a region for its flag.

use crate::i18n::language::UNKNOWN_REGION;
use crate::i18n::{LanguageCode, RegionIndex, Translate};

/// Validation report containing errors and warnings about a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Candidates whose fallback key is missing from the catalog
    pub errors: Vec<String>,

    /// Candidates without a registry region
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog and registry coverage of a candidate list.
pub struct CoverageValidator;

impl CoverageValidator {
    /// Validate `candidates` of `namespace` against a catalog and a region index.
    ///
    /// A catalog that answers a key with the key itself has no entry for it.
    /// International Sign never needs a registry region.
    pub fn validate(
        candidates: &[LanguageCode],
        namespace: &str,
        catalog: &dyn Translate,
        regions: &RegionIndex,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        for code in candidates {
            let key = format!("{}.{}", namespace, code);
            if catalog.translate(&key) == key {
                report
                    .errors
                    .push(format!("Missing translation for {}", key));
            }

            if !code.is_international_sign() && regions.region(code) == UNKNOWN_REGION {
                report
                    .warnings
                    .push(format!("No registry region for {}", code));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::language::codes;
    use crate::i18n::{RegistryField, SignedLanguageRecord};
    use std::collections::HashMap;

    fn catalog(keys: &[&str]) -> HashMap<String, String> {
        keys.iter()
            .map(|key| (key.to_string(), format!("name of {}", key)))
            .collect()
    }

    fn regions(candidates: &[LanguageCode]) -> RegionIndex {
        let records = vec![SignedLanguageRecord {
            signed: "ase".to_string(),
            language: "en".to_string(),
            country: "us".to_string(),
            name: "American Sign Language".to_string(),
        }];
        RegionIndex::build(candidates, &records, RegistryField::Signed)
    }

    #[test]
    fn test_clean_report() {
        let candidates = codes(&["ase", "ils"]);
        let report = CoverageValidator::validate(
            &candidates,
            "signedLanguages",
            &catalog(&["signedLanguages.ase", "signedLanguages.ils"]),
            &regions(&candidates),
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_translation_is_error() {
        let candidates = codes(&["ase"]);
        let report = CoverageValidator::validate(
            &candidates,
            "signedLanguages",
            &catalog(&[]),
            &regions(&candidates),
        );
        assert!(report.has_errors());
        assert!(report.errors[0].contains("signedLanguages.ase"));
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_unmapped_region_is_warning() {
        let candidates = codes(&["gsg"]);
        let report = CoverageValidator::validate(
            &candidates,
            "signedLanguages",
            &catalog(&["signedLanguages.gsg"]),
            &regions(&candidates),
        );
        assert!(!report.has_errors());
        assert_eq!(report.warnings, vec!["No registry region for gsg".to_string()]);
    }

    #[test]
    fn test_default_report_is_clean() {
        assert!(ValidationReport::default().is_clean());
    }
}
