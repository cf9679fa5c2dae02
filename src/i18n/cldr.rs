//! Embedded display-name data for the built-in formatter.
//!
//! A small CLDR-derived subset: language names keyed by lowercase ISO 639-1
//! code and region names keyed by uppercase ISO 3166-1 code, per locale.

pub(crate) type NameTable = &'static [(&'static str, &'static str)];

/// Locales the built-in formatter supports, in lookup order.
pub(crate) const LANGUAGE_NAMES: &[(&str, NameTable)] = &[
    ("en", EN_LANGUAGES),
    ("de", DE_LANGUAGES),
    ("fr", FR_LANGUAGES),
    ("es", ES_LANGUAGES),
];

pub(crate) const REGION_NAMES: &[(&str, NameTable)] = &[
    ("en", EN_REGIONS),
    ("de", DE_REGIONS),
    ("fr", FR_REGIONS),
    ("es", ES_REGIONS),
];

/// Locale used when no requested locale is supported.
pub(crate) const DEFAULT_LOCALE: &str = "en";

const EN_LANGUAGES: NameTable = &[
    ("ar", "Arabic"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("zh", "Chinese"),
];

const DE_LANGUAGES: NameTable = &[
    ("ar", "Arabisch"),
    ("de", "Deutsch"),
    ("el", "Griechisch"),
    ("en", "Englisch"),
    ("es", "Spanisch"),
    ("fr", "Französisch"),
    ("he", "Hebräisch"),
    ("hi", "Hindi"),
    ("it", "Italienisch"),
    ("ja", "Japanisch"),
    ("ko", "Koreanisch"),
    ("nl", "Niederländisch"),
    ("pl", "Polnisch"),
    ("pt", "Portugiesisch"),
    ("ru", "Russisch"),
    ("sv", "Schwedisch"),
    ("tr", "Türkisch"),
    ("zh", "Chinesisch"),
];

const FR_LANGUAGES: NameTable = &[
    ("ar", "arabe"),
    ("de", "allemand"),
    ("el", "grec"),
    ("en", "anglais"),
    ("es", "espagnol"),
    ("fr", "français"),
    ("he", "hébreu"),
    ("hi", "hindi"),
    ("it", "italien"),
    ("ja", "japonais"),
    ("ko", "coréen"),
    ("nl", "néerlandais"),
    ("pl", "polonais"),
    ("pt", "portugais"),
    ("ru", "russe"),
    ("sv", "suédois"),
    ("tr", "turc"),
    ("zh", "chinois"),
];

const ES_LANGUAGES: NameTable = &[
    ("ar", "árabe"),
    ("de", "alemán"),
    ("el", "griego"),
    ("en", "inglés"),
    ("es", "español"),
    ("fr", "francés"),
    ("he", "hebreo"),
    ("hi", "hindi"),
    ("it", "italiano"),
    ("ja", "japonés"),
    ("ko", "coreano"),
    ("nl", "neerlandés"),
    ("pl", "polaco"),
    ("pt", "portugués"),
    ("ru", "ruso"),
    ("sv", "sueco"),
    ("tr", "turco"),
    ("zh", "chino"),
];

const EN_REGIONS: NameTable = &[
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CN", "China"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("IL", "Israel"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("MX", "Mexico"),
    ("US", "United States"),
];

const DE_REGIONS: NameTable = &[
    ("AR", "Argentinien"),
    ("AT", "Österreich"),
    ("AU", "Australien"),
    ("BR", "Brasilien"),
    ("CA", "Kanada"),
    ("CH", "Schweiz"),
    ("CN", "China"),
    ("DE", "Deutschland"),
    ("ES", "Spanien"),
    ("FR", "Frankreich"),
    ("GB", "Vereinigtes Königreich"),
    ("IL", "Israel"),
    ("IT", "Italien"),
    ("JP", "Japan"),
    ("MX", "Mexiko"),
    ("US", "Vereinigte Staaten"),
];

const FR_REGIONS: NameTable = &[
    ("AR", "Argentine"),
    ("AT", "Autriche"),
    ("AU", "Australie"),
    ("BR", "Brésil"),
    ("CA", "Canada"),
    ("CH", "Suisse"),
    ("CN", "Chine"),
    ("DE", "Allemagne"),
    ("ES", "Espagne"),
    ("FR", "France"),
    ("GB", "Royaume-Uni"),
    ("IL", "Israël"),
    ("IT", "Italie"),
    ("JP", "Japon"),
    ("MX", "Mexique"),
    ("US", "États-Unis"),
];

const ES_REGIONS: NameTable = &[
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BR", "Brasil"),
    ("CA", "Canadá"),
    ("CH", "Suiza"),
    ("CN", "China"),
    ("DE", "Alemania"),
    ("ES", "España"),
    ("FR", "Francia"),
    ("GB", "Reino Unido"),
    ("IL", "Israel"),
    ("IT", "Italia"),
    ("JP", "Japón"),
    ("MX", "México"),
    ("US", "Estados Unidos"),
];
