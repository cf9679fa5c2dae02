//! Translation catalog: key → string lookup plus load notifications.
//!
//! Keys are flat, namespaced strings (`"languages.en"`). A lookup that misses
//! returns the key itself so that a missing entry is visible instead of
//! failing.

use crate::i18n::strings::BUILTIN_SCOPES;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

/// Capacity of the catalog event channel.
pub(crate) const EVENT_CAPACITY: usize = 32;

/// Key → string lookup. Never fails.
pub trait Translate: Send + Sync {
    /// Translate `key` under the active locale, or return `key` unchanged.
    fn translate(&self, key: &str) -> String;

    /// Translate `key` under `locale`, or return `key` unchanged.
    ///
    /// Sources without per-locale tables answer from their only table.
    fn translate_in(&self, _locale: &Locale, key: &str) -> String {
        self.translate(key)
    }
}

/// Events published by a translation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// Strings for `namespace` finished loading for `locale`.
    Loaded { namespace: String, locale: Locale },
}

/// A translation catalog with an active locale and load notifications.
pub trait TranslationCatalog: Translate {
    fn active_locale(&self) -> Locale;

    /// Receiver notified whenever the active locale changes.
    fn locale_changes(&self) -> watch::Receiver<Locale>;

    /// Receiver for load events published after this call.
    fn events(&self) -> broadcast::Receiver<CatalogEvent>;

    /// Whether `namespace` has already been loaded for `locale`.
    fn is_loaded(&self, namespace: &str, locale: &Locale) -> bool;
}

/// Catalog holding flat string tables per locale in memory.
pub struct InMemoryCatalog {
    tables: RwLock<HashMap<Locale, HashMap<String, String>>>,
    loaded: RwLock<HashSet<(String, Locale)>>,
    locale_tx: watch::Sender<Locale>,
    events_tx: broadcast::Sender<CatalogEvent>,
}

impl InMemoryCatalog {
    /// Create an empty catalog with `locale` active.
    pub fn new(locale: Locale) -> Self {
        let (locale_tx, _) = watch::channel(locale);
        let (events_tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            tables: RwLock::new(HashMap::new()),
            loaded: RwLock::new(HashSet::new()),
            locale_tx,
            events_tx,
        }
    }

    /// Create a catalog preloaded with the built-in language name tables.
    pub fn builtin(locale: Locale) -> Self {
        let catalog = Self::new(locale);
        for scope in BUILTIN_SCOPES {
            let Ok(scope_locale) = scope.locale.parse::<Locale>() else {
                warn!("Skipping built-in scope with invalid locale {}", scope.locale);
                continue;
            };
            catalog.insert_scope(
                scope.namespace,
                scope_locale,
                scope
                    .entries
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string())),
            );
        }
        catalog
    }

    /// Switch the active locale. Setting the current locale again is ignored.
    pub fn set_active_locale(&self, locale: Locale) {
        self.locale_tx.send_if_modified(|current| {
            if *current == locale {
                false
            } else {
                *current = locale;
                true
            }
        });
    }

    /// Add the strings of one namespace for one locale and announce it.
    ///
    /// Keys are given without the namespace prefix (`"en"`, not
    /// `"languages.en"`).
    pub fn insert_scope<I>(&self, namespace: &str, locale: Locale, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        {
            let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
            let table = tables.entry(locale.clone()).or_default();
            for (key, value) in entries {
                table.insert(format!("{}.{}", namespace, key), value);
            }
        }
        self.loaded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((namespace.to_string(), locale.clone()));

        debug!("Loaded translation scope {} for {}", namespace, locale);

        // No subscribers is not an error: nobody is waiting for this scope.
        let _ = self.events_tx.send(CatalogEvent::Loaded {
            namespace: namespace.to_string(),
            locale,
        });
    }

    /// Load one namespace from a JSON object of strings.
    ///
    /// Nested objects are flattened with `.` separators; non-string leaves
    /// are ignored.
    pub fn load_scope_json(&self, namespace: &str, locale: Locale, json: &str) -> Result<usize> {
        let value: Value = serde_json::from_str(json)
            .with_context(|| format!("Failed to parse {} strings for {}", namespace, locale))?;

        let Value::Object(map) = value else {
            anyhow::bail!("Translation file for {} ({}) is not a JSON object", namespace, locale);
        };

        let mut entries = Vec::new();
        for (key, value) in &map {
            flatten_into(key, value, &mut entries);
        }
        let count = entries.len();
        self.insert_scope(namespace, locale, entries);
        Ok(count)
    }

    /// Load every `<dir>/<namespace>/<locale>.json` file.
    ///
    /// Returns the number of locales loaded.
    pub fn load_dir(&self, dir: &Path, namespace: &str) -> Result<usize> {
        let scope_dir = dir.join(namespace);
        let entries = std::fs::read_dir(&scope_dir)
            .with_context(|| format!("Failed to read translation directory {}", scope_dir.display()))?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let locale: Locale = match stem.parse() {
                Ok(locale) => locale,
                Err(e) => {
                    warn!("Skipping {}: invalid locale ({})", path.display(), e);
                    continue;
                }
            };

            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            self.load_scope_json(namespace, locale, &json)?;
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Look up `key` under a specific locale.
    pub fn lookup(&self, locale: &Locale, key: &str) -> Option<String> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(locale)
            .and_then(|table| table.get(key))
            .cloned()
    }
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::String(text) => out.push((prefix.to_string(), text.clone())),
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{}.{}", prefix, key), nested, out);
            }
        }
        _ => {}
    }
}

impl Translate for InMemoryCatalog {
    fn translate(&self, key: &str) -> String {
        self.translate_in(&self.active_locale(), key)
    }

    fn translate_in(&self, locale: &Locale, key: &str) -> String {
        self.lookup(locale, key).unwrap_or_else(|| key.to_string())
    }
}

impl TranslationCatalog for InMemoryCatalog {
    fn active_locale(&self) -> Locale {
        self.locale_tx.borrow().clone()
    }

    fn locale_changes(&self) -> watch::Receiver<Locale> {
        self.locale_tx.subscribe()
    }

    fn events(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events_tx.subscribe()
    }

    fn is_loaded(&self, namespace: &str, locale: &Locale) -> bool {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(namespace.to_string(), locale.clone()))
    }
}

impl<T: Translate + ?Sized> Translate for std::sync::Arc<T> {
    fn translate(&self, key: &str) -> String {
        (**self).translate(key)
    }

    fn translate_in(&self, locale: &Locale, key: &str) -> String {
        (**self).translate_in(locale, key)
    }
}

impl Translate for HashMap<String, String> {
    fn translate(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}
