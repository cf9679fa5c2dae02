//! Language selection and locale resolution.
//!
//! This module decides which language is active, keeps a short list of
//! quick-access languages, resolves language codes to display names and maps
//! them to region codes for flags.
//!
//! # Architecture
//!
//! - `language`: Opaque `LanguageCode` type and well-known codes
//! - `shortlist`: Fixed-capacity, most-recently-added list of languages
//! - `display_names`: Locale-native names with a translation-table fallback
//! - `registry`: Signed-language registry and the language → region index
//! - `catalog`: Translation catalog interface and an in-memory implementation
//! - `selector`: Selection state machine and the async-wired selector
//! - `params`: Initial-parameter sources (URL query strings)
//! - `metrics`: Resolution counters
//! - `validator`: Catalog and registry coverage checks
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{LanguageSelector, QueryParams};
//!
//! let selector = LanguageSelector::builder(config)
//!     .parameters(QueryParams::parse("?lang=fr"))
//!     .build()?;
//!
//! let name = selector.display_name(&"fr".into());
//! let flag = selector.region_code(&"fr".into());
//! ```

mod catalog;
mod cldr;
mod display_names;
mod error;
pub mod language;
mod metrics;
mod params;
mod registry;
mod selector;
mod shortlist;
mod strings;
mod validator;

/// Reference locale for display names.
pub type Locale = unic_langid::LanguageIdentifier;

pub use catalog::{CatalogEvent, InMemoryCatalog, Translate, TranslationCatalog};
pub use display_names::{
    BuiltinDisplayNames, DisplayNameCache, DisplayNameResolver, DisplayNames,
    DisplayNamesProvider, NameKind, NoDisplayNames,
};
pub use error::{Result, SelectorError};
pub use language::{LanguageCode, INTERNATIONAL_SIGN, UNKNOWN_REGION};
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use params::{ParameterSource, QueryParams};
pub use registry::{RegionIndex, RegistryField, SignedLanguageRecord, SignedLanguageRegistry};
pub use selector::{
    DetectionSignal, LanguageSelector, LanguageSelectorBuilder, SelectionSnapshot, SelectorState,
};
pub(crate) use shortlist::first_duplicate;
pub use shortlist::{Shortlist, DEFAULT_CAPACITY};
pub use strings::{ScopeStrings, BUILTIN_SCOPES};
pub use validator::{CoverageValidator, ValidationReport};
