/// Strings of one translation namespace for one locale.
///
/// Keys are unprefixed; the catalog stores them as `"{namespace}.{key}"`.
#[derive(Debug, Clone)]
pub struct ScopeStrings {
    pub namespace: &'static str,
    pub locale: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

// ==================== Spoken Language Names ====================

/// English spoken language names (canonical)
pub const ENGLISH_LANGUAGES: ScopeStrings = ScopeStrings {
    namespace: "languages",
    locale: "en",
    entries: &[
        ("de", "German"),
        ("en", "English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("he", "Hebrew"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
    ],
};

/// German spoken language names
pub const GERMAN_LANGUAGES: ScopeStrings = ScopeStrings {
    namespace: "languages",
    locale: "de",
    entries: &[
        ("de", "Deutsch"),
        ("en", "Englisch"),
        ("es", "Spanisch"),
        ("fr", "Französisch"),
        ("he", "Hebräisch"),
        ("it", "Italienisch"),
        ("pt", "Portugiesisch"),
    ],
};

/// French spoken language names
pub const FRENCH_LANGUAGES: ScopeStrings = ScopeStrings {
    namespace: "languages",
    locale: "fr",
    entries: &[
        ("de", "Allemand"),
        ("en", "Anglais"),
        ("es", "Espagnol"),
        ("fr", "Français"),
        ("he", "Hébreu"),
        ("it", "Italien"),
        ("pt", "Portugais"),
    ],
};

// ==================== Signed Language Names ====================

/// English signed language names (canonical)
pub const ENGLISH_SIGNED_LANGUAGES: ScopeStrings = ScopeStrings {
    namespace: "signedLanguages",
    locale: "en",
    entries: &[
        ("ase", "American Sign Language"),
        ("bfi", "British Sign Language"),
        ("fsl", "French Sign Language"),
        ("gsg", "German Sign Language"),
        ("ils", "International Sign"),
        ("isr", "Israeli Sign Language"),
        ("ssp", "Spanish Sign Language"),
    ],
};

/// German signed language names
pub const GERMAN_SIGNED_LANGUAGES: ScopeStrings = ScopeStrings {
    namespace: "signedLanguages",
    locale: "de",
    entries: &[
        ("ase", "Amerikanische Gebärdensprache"),
        ("bfi", "Britische Gebärdensprache"),
        ("fsl", "Französische Gebärdensprache"),
        ("gsg", "Deutsche Gebärdensprache"),
        ("ils", "International Sign"),
        ("isr", "Israelische Gebärdensprache"),
        ("ssp", "Spanische Gebärdensprache"),
    ],
};

/// French signed language names
pub const FRENCH_SIGNED_LANGUAGES: ScopeStrings = ScopeStrings {
    namespace: "signedLanguages",
    locale: "fr",
    entries: &[
        ("ase", "Langue des signes américaine"),
        ("bfi", "Langue des signes britannique"),
        ("fsl", "Langue des signes française"),
        ("gsg", "Langue des signes allemande"),
        ("ils", "Signes internationaux"),
        ("isr", "Langue des signes israélienne"),
        ("ssp", "Langue des signes espagnole"),
    ],
};

// ==================== Country Names ====================

/// English country names (canonical)
pub const ENGLISH_COUNTRIES: ScopeStrings = ScopeStrings {
    namespace: "countries",
    locale: "en",
    entries: &[
        ("de", "Germany"),
        ("es", "Spain"),
        ("fr", "France"),
        ("gb", "United Kingdom"),
        ("il", "Israel"),
        ("us", "United States"),
    ],
};

/// Every scope loaded into the built-in catalog.
pub const BUILTIN_SCOPES: &[ScopeStrings] = &[
    ENGLISH_LANGUAGES,
    GERMAN_LANGUAGES,
    FRENCH_LANGUAGES,
    ENGLISH_SIGNED_LANGUAGES,
    GERMAN_SIGNED_LANGUAGES,
    FRENCH_SIGNED_LANGUAGES,
    ENGLISH_COUNTRIES,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_keys_are_unique() {
        for scope in BUILTIN_SCOPES {
            for (i, (key, _)) in scope.entries.iter().enumerate() {
                assert!(
                    !scope.entries[i + 1..].iter().any(|(other, _)| other == key),
                    "duplicate key {} in {} ({})",
                    key,
                    scope.namespace,
                    scope.locale
                );
            }
        }
    }

    #[test]
    fn test_translated_scopes_cover_canonical_keys() {
        let pairs = [
            (&ENGLISH_LANGUAGES, &GERMAN_LANGUAGES),
            (&ENGLISH_LANGUAGES, &FRENCH_LANGUAGES),
            (&ENGLISH_SIGNED_LANGUAGES, &GERMAN_SIGNED_LANGUAGES),
            (&ENGLISH_SIGNED_LANGUAGES, &FRENCH_SIGNED_LANGUAGES),
        ];

        for (canonical, translated) in pairs {
            for (key, _) in canonical.entries {
                assert!(
                    translated.entries.iter().any(|(other, _)| other == key),
                    "{} ({}) is missing {}",
                    translated.namespace,
                    translated.locale,
                    key
                );
            }
        }
    }

    #[test]
    fn test_no_empty_strings() {
        for scope in BUILTIN_SCOPES {
            for (key, value) in scope.entries {
                assert!(!value.is_empty(), "{}.{} is empty", scope.namespace, key);
            }
        }
    }
}
