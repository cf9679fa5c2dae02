//! Display name resolution for language and region codes.
//!
//! A name is produced by a locale-native formatter when one is available for
//! the reference locale, and by the translation catalog otherwise. The
//! catalog fallback never fails: a missing entry surfaces as its literal key.

use crate::i18n::cldr::{self, NameTable};
use crate::i18n::{LanguageCode, Locale, ResolutionMetrics, Translate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// What a code names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Language,
    Region,
}

impl NameKind {
    /// Name kind served by a translation namespace.
    ///
    /// Only `languages` and `countries` have locale-native names; other
    /// namespaces (e.g. `signedLanguages`) always use the catalog.
    pub fn for_namespace(namespace: &str) -> Option<Self> {
        match namespace {
            "languages" => Some(NameKind::Language),
            "countries" => Some(NameKind::Region),
            _ => None,
        }
    }
}

/// A locale-native formatter for one locale and name kind.
pub trait DisplayNames: Send + Sync {
    /// The locale the formatter actually resolved to.
    fn resolved_locale(&self) -> &Locale;

    /// Display name for `code`. Formatters may echo the code back when they
    /// have no name for it.
    fn of(&self, code: &str) -> Option<String>;
}

/// Source of locale-native formatters.
pub trait DisplayNamesProvider: Send + Sync {
    /// Formatter for `locale`, or `None` when formatting is unavailable.
    fn display_names(&self, locale: &Locale, kind: NameKind) -> Option<Box<dyn DisplayNames>>;
}

/// Provider for environments without locale data; every name falls back to
/// the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplayNames;

impl DisplayNamesProvider for NoDisplayNames {
    fn display_names(&self, _locale: &Locale, _kind: NameKind) -> Option<Box<dyn DisplayNames>> {
        None
    }
}

/// Provider backed by the embedded CLDR subset.
///
/// Locales are matched by exact tag, then by language subtag, then the
/// default locale is used. Unknown codes are echoed back in canonical case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDisplayNames;

impl DisplayNamesProvider for BuiltinDisplayNames {
    fn display_names(&self, locale: &Locale, kind: NameKind) -> Option<Box<dyn DisplayNames>> {
        let tables = match kind {
            NameKind::Language => cldr::LANGUAGE_NAMES,
            NameKind::Region => cldr::REGION_NAMES,
        };

        let tag = locale.to_string();
        let find = |wanted: &str| tables.iter().find(|(table_tag, _)| *table_tag == wanted);
        let (resolved, names) = find(tag.as_str())
            .or_else(|| find(locale.language.as_str()))
            .or_else(|| find(cldr::DEFAULT_LOCALE))?;

        Some(Box::new(TableDisplayNames {
            locale: resolved.parse().ok()?,
            names: *names,
            kind,
        }))
    }
}

struct TableDisplayNames {
    locale: Locale,
    names: NameTable,
    kind: NameKind,
}

impl DisplayNames for TableDisplayNames {
    fn resolved_locale(&self) -> &Locale {
        &self.locale
    }

    fn of(&self, code: &str) -> Option<String> {
        let canonical = match self.kind {
            NameKind::Language => code.to_ascii_lowercase(),
            NameKind::Region => code.to_ascii_uppercase(),
        };

        let name = self
            .names
            .iter()
            .find(|(key, _)| *key == canonical)
            .map(|(_, name)| name.to_string());

        Some(name.unwrap_or(canonical))
    }
}

/// Display names for every candidate under one reference locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayNameCache {
    locale: Option<Locale>,
    names: HashMap<LanguageCode, String>,
}

impl DisplayNameCache {
    /// Reference locale the names were computed for.
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn get(&self, code: &LanguageCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &str)> {
        self.names.iter().map(|(code, name)| (code, name.as_str()))
    }
}

/// Resolves codes of one translation namespace to display names.
pub struct DisplayNameResolver {
    namespace: String,
    kind: Option<NameKind>,
    provider: Arc<dyn DisplayNamesProvider>,
    translator: Arc<dyn Translate>,
    metrics: Arc<ResolutionMetrics>,
}

impl DisplayNameResolver {
    pub fn new(
        namespace: impl Into<String>,
        provider: Arc<dyn DisplayNamesProvider>,
        translator: Arc<dyn Translate>,
    ) -> Self {
        let namespace = namespace.into();
        Self {
            kind: NameKind::for_namespace(&namespace),
            namespace,
            provider,
            translator,
            metrics: Arc::new(ResolutionMetrics::new()),
        }
    }

    /// Override the name kind derived from the namespace.
    pub fn with_kind(mut self, kind: Option<NameKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<ResolutionMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn kind(&self) -> Option<NameKind> {
        self.kind
    }

    /// Catalog key used when locale-native formatting is rejected.
    pub fn fallback_key(&self, code: &LanguageCode) -> String {
        format!("{}.{}", self.namespace, code)
    }

    /// Locale-native formatter for `locale`, if it really serves `locale`.
    ///
    /// A formatter that resolved to a different locale is discarded.
    pub fn formatter(&self, locale: &Locale) -> Option<Box<dyn DisplayNames>> {
        let kind = self.kind?;
        let formatter = self.provider.display_names(locale, kind)?;

        if formatter.resolved_locale() != locale {
            error!(
                "Failed to set language display names for locale {} (resolved {})",
                locale,
                formatter.resolved_locale()
            );
            return None;
        }

        Some(formatter)
    }

    /// Resolve a single code under `locale`.
    pub fn resolve_name(&self, code: &LanguageCode, locale: &Locale) -> String {
        let formatter = self.formatter(locale);
        self.resolve_with(code, locale, formatter.as_deref())
    }

    /// Resolve every code under `locale` into a fresh cache.
    pub fn resolve_all(&self, codes: &[LanguageCode], locale: &Locale) -> DisplayNameCache {
        let formatter = self.formatter(locale);
        let names = codes
            .iter()
            .map(|code| (code.clone(), self.resolve_with(code, locale, formatter.as_deref())))
            .collect();

        DisplayNameCache {
            locale: Some(locale.clone()),
            names,
        }
    }

    fn resolve_with(
        &self,
        code: &LanguageCode,
        locale: &Locale,
        formatter: Option<&dyn DisplayNames>,
    ) -> String {
        if let Some(formatter) = formatter {
            if code.is_two_letter() {
                let name = formatter.of(&code.as_str().to_uppercase());
                // An echoed code means the formatter had no name for it.
                if let Some(name) = name.filter(|name| {
                    !name.is_empty() && !name.eq_ignore_ascii_case(code.as_str())
                }) {
                    self.metrics.record_native_name();
                    return name;
                }
            }
        }

        let key = self.fallback_key(code);
        debug!("Using translation table for {}", key);
        self.metrics.record_fallback_name();
        self.translator.translate_in(locale, &key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> Locale {
        tag.parse().unwrap()
    }

    fn table() -> Arc<dyn Translate> {
        let mut table = HashMap::new();
        table.insert("languages.en".to_string(), "English (table)".to_string());
        table.insert("languages.ase".to_string(), "ASL (table)".to_string());
        table.insert("countries.us".to_string(), "USA (table)".to_string());
        table.insert("signedLanguages.gs".to_string(), "GS (table)".to_string());
        Arc::new(table)
    }

    fn resolver(namespace: &str) -> DisplayNameResolver {
        DisplayNameResolver::new(namespace, Arc::new(BuiltinDisplayNames), table())
    }

    /// Formatter that claims every locale and echoes codes back unchanged.
    struct EchoProvider;

    struct EchoNames(Locale);

    impl DisplayNames for EchoNames {
        fn resolved_locale(&self) -> &Locale {
            &self.0
        }

        fn of(&self, code: &str) -> Option<String> {
            Some(code.to_string())
        }
    }

    impl DisplayNamesProvider for EchoProvider {
        fn display_names(&self, locale: &Locale, _kind: NameKind) -> Option<Box<dyn DisplayNames>> {
            Some(Box::new(EchoNames(locale.clone())))
        }
    }

    // ==================== Name Kind Tests ====================

    #[test]
    fn test_kind_for_namespace() {
        assert_eq!(NameKind::for_namespace("languages"), Some(NameKind::Language));
        assert_eq!(NameKind::for_namespace("countries"), Some(NameKind::Region));
        assert_eq!(NameKind::for_namespace("signedLanguages"), None);
    }

    // ==================== Built-in Formatter Tests ====================

    #[test]
    fn test_builtin_resolves_exact_locale() {
        let names = BuiltinDisplayNames
            .display_names(&locale("de"), NameKind::Language)
            .unwrap();
        assert_eq!(names.resolved_locale(), &locale("de"));
        assert_eq!(names.of("FR").as_deref(), Some("Französisch"));
    }

    #[test]
    fn test_builtin_falls_back_to_language_subtag() {
        let names = BuiltinDisplayNames
            .display_names(&locale("fr-CA"), NameKind::Region)
            .unwrap();
        assert_eq!(names.resolved_locale(), &locale("fr"));
    }

    #[test]
    fn test_builtin_echoes_unknown_codes() {
        let names = BuiltinDisplayNames
            .display_names(&locale("en"), NameKind::Language)
            .unwrap();
        assert_eq!(names.of("QQ").as_deref(), Some("qq"));

        let regions = BuiltinDisplayNames
            .display_names(&locale("en"), NameKind::Region)
            .unwrap();
        assert_eq!(regions.of("qq").as_deref(), Some("QQ"));
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_resolve_native_language_name() {
        let resolver = resolver("languages");
        assert_eq!(resolver.resolve_name(&"en".into(), &locale("de")), "Englisch");
        assert_eq!(resolver.resolve_name(&"en".into(), &locale("en")), "English");
    }

    #[test]
    fn test_resolve_native_region_name() {
        let resolver = resolver("countries");
        assert_eq!(resolver.resolve_name(&"us".into(), &locale("fr")), "États-Unis");
    }

    #[test]
    fn test_unsupported_locale_uses_table() {
        let resolver = resolver("languages");
        assert_eq!(
            resolver.resolve_name(&"en".into(), &locale("xx-YY")),
            "English (table)"
        );
    }

    #[test]
    fn test_mismatched_resolved_locale_discards_formatter() {
        let resolver = resolver("languages");
        assert!(resolver.formatter(&locale("de-CH")).is_none());
        assert!(resolver.formatter(&locale("de")).is_some());
    }

    #[test]
    fn test_non_two_letter_code_uses_table() {
        let resolver = resolver("languages");
        assert_eq!(resolver.resolve_name(&"ase".into(), &locale("en")), "ASL (table)");
    }

    #[test]
    fn test_namespace_without_kind_never_formats() {
        let resolver = resolver("signedLanguages");
        assert!(resolver.formatter(&locale("en")).is_none());
        assert_eq!(resolver.resolve_name(&"gs".into(), &locale("en")), "GS (table)");
    }

    #[test]
    fn test_unknown_code_surfaces_key() {
        let resolver = resolver("languages");
        assert_eq!(resolver.resolve_name(&"qq".into(), &locale("en")), "languages.qq");
    }

    #[test]
    fn test_no_formatter_provider_uses_table() {
        let resolver =
            DisplayNameResolver::new("languages", Arc::new(NoDisplayNames), table());
        assert_eq!(resolver.resolve_name(&"en".into(), &locale("en")), "English (table)");
    }

    #[test]
    fn test_kind_override() {
        let resolver = resolver("languages").with_kind(None);
        assert_eq!(resolver.resolve_name(&"en".into(), &locale("en")), "English (table)");
    }

    // Echo detection cannot tell "no locale data" from a name that happens to
    // be spelled like its code; both fall back to the table.
    #[test]
    fn test_echoed_code_is_treated_as_unresolved() {
        let resolver = DisplayNameResolver::new("languages", Arc::new(EchoProvider), table());
        assert_eq!(resolver.resolve_name(&"en".into(), &locale("en")), "English (table)");
    }

    // ==================== Batch Tests ====================

    #[test]
    fn test_resolve_all_fills_cache() {
        let metrics = Arc::new(ResolutionMetrics::new());
        let resolver = resolver("languages").with_metrics(Arc::clone(&metrics));
        let codes = crate::i18n::language::codes(&["en", "fr", "ase"]);

        let cache = resolver.resolve_all(&codes, &locale("fr"));

        assert_eq!(cache.locale(), Some(&locale("fr")));
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&"en".into()), Some("anglais"));
        assert_eq!(cache.get(&"ase".into()), Some("ASL (table)"));
        assert_eq!(metrics.native_names(), 2);
        assert_eq!(metrics.fallback_names(), 1);
    }

    #[test]
    fn test_fallback_uses_requested_locale() {
        let catalog = Arc::new(crate::i18n::InMemoryCatalog::builtin(locale("en")));
        let resolver =
            DisplayNameResolver::new("signedLanguages", Arc::new(BuiltinDisplayNames), catalog);
        let codes = crate::i18n::language::codes(&["gsg", "ase"]);

        let cache = resolver.resolve_all(&codes, &locale("de"));

        assert_eq!(cache.locale(), Some(&locale("de")));
        assert_eq!(cache.get(&"gsg".into()), Some("Deutsche Gebärdensprache"));
        assert_eq!(
            resolver.resolve_name(&"gsg".into(), &locale("fr")),
            "Langue des signes allemande"
        );
    }

    #[test]
    fn test_fallback_key_format() {
        let resolver = resolver("signedLanguages");
        assert_eq!(resolver.fallback_key(&"ase".into()), "signedLanguages.ase");
    }
}
