//! Language selector: active language, quick-access shortlist and the cached
//! display data shown next to it.
//!
//! `SelectorState` is the synchronous state machine. `LanguageSelector` wraps
//! it for use from async code: it publishes a snapshot after every selection,
//! recomputes display names when the catalog's locale changes, and applies an
//! externally detected language when one arrives.
//!
//! # Example
//!
//! ```rust,ignore
//! let selector = LanguageSelector::builder(SelectorConfig::default())
//!     .parameters(QueryParams::parse("?lang=es"))
//!     .build()?;
//!
//! assert_eq!(selector.shortlist(), codes(&["es", "en", "fr"]));
//! selector.select_by_index(1)?;
//! ```

use crate::config::SelectorConfig;
use crate::i18n::{
    BuiltinDisplayNames, CatalogEvent, CoverageValidator, DisplayNameCache, DisplayNameResolver,
    DisplayNamesProvider, InMemoryCatalog, LanguageCode, Locale, MetricsReport, ParameterSource,
    RegionIndex, RegistryField, ResolutionMetrics, Result, SelectorError, Shortlist,
    SignedLanguageRegistry, Translate, TranslationCatalog, ValidationReport,
};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Capacity of the language change channel.
const CHANGE_CAPACITY: usize = 16;

/// Future resolving to an externally detected language, if any.
pub type DetectionSignal = Pin<Box<dyn Future<Output = Option<LanguageCode>> + Send>>;

/// Observable selection state, published atomically after each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    /// Active language; `None` while auto-detection is selected
    pub active: Option<LanguageCode>,

    /// Quick-access languages, most recently added first
    pub shortlist: Vec<LanguageCode>,

    /// Visible index of the active entry (index 0 is auto-detect in detection mode)
    pub selected_index: isize,
}

/// Selection state machine over a shortlist.
#[derive(Debug, Clone)]
pub struct SelectorState {
    shortlist: Shortlist,
    active: Option<LanguageCode>,
    selected_index: isize,
    has_language_detection: bool,
}

impl SelectorState {
    /// Seed the shortlist from `candidates`, with nothing selected yet.
    pub fn new(
        candidates: &[LanguageCode],
        capacity: usize,
        has_language_detection: bool,
    ) -> Result<Self> {
        let shortlist = Shortlist::initialize(candidates, capacity)?;
        let offset = usize::from(has_language_detection);
        Ok(Self {
            selected_index: shortlist.visible_index(None, offset),
            shortlist,
            active: None,
            has_language_detection,
        })
    }

    /// Starting selection: an explicit request wins, otherwise the first
    /// candidate. Auto-detection is only re-armed through the detection slot.
    pub fn initial_selection(
        &self,
        requested: Option<LanguageCode>,
        candidates: &[LanguageCode],
    ) -> Option<LanguageCode> {
        requested.or_else(|| candidates.first().cloned())
    }

    /// Slots shown before the shortlist (the auto-detect entry).
    pub fn offset(&self) -> usize {
        usize::from(self.has_language_detection)
    }

    /// Make `code` the active language.
    ///
    /// Selecting the active language again does nothing. `None` re-arms
    /// auto-detection and is ignored outside detection mode. Returns `true`
    /// if the state changed.
    pub fn select(&mut self, code: Option<LanguageCode>) -> bool {
        if code == self.active {
            return false;
        }
        if code.is_none() && !self.has_language_detection {
            debug!("Ignoring empty selection outside detection mode");
            return false;
        }

        self.shortlist.promote(code.as_ref());
        self.active = code;
        self.selected_index = self.index_for(self.active.as_ref());
        true
    }

    /// Select the entry at a visible index.
    ///
    /// # Errors
    /// `SelectorError::Index` if no entry is shown at `index`; the state is
    /// left untouched.
    pub fn select_by_index(&mut self, index: usize) -> Result<bool> {
        if index == 0 && self.has_language_detection {
            return Ok(self.select(None));
        }

        let offset = self.offset();
        let code = index
            .checked_sub(offset)
            .and_then(|position| self.shortlist.get(position))
            .cloned()
            .ok_or(SelectorError::Index {
                index,
                len: self.shortlist.len() + offset,
            })?;

        Ok(self.select(Some(code)))
    }

    /// Visible index `code` would have; `offset - 1` when not listed.
    pub fn index_for(&self, code: Option<&LanguageCode>) -> isize {
        self.shortlist.visible_index(code, self.offset())
    }

    pub fn active(&self) -> Option<&LanguageCode> {
        self.active.as_ref()
    }

    pub fn shortlist(&self) -> &Shortlist {
        &self.shortlist
    }

    pub fn selected_index(&self) -> isize {
        self.selected_index
    }

    pub fn has_language_detection(&self) -> bool {
        self.has_language_detection
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            active: self.active.clone(),
            shortlist: self.shortlist.as_slice().to_vec(),
            selected_index: self.selected_index,
        }
    }
}

/// Spawned subscriptions, aborted when released or dropped.
#[derive(Default)]
struct SubscriptionGuard {
    handles: Vec<JoinHandle<()>>,
}

impl SubscriptionGuard {
    fn push(&mut self, handle: JoinHandle<()>) {
        self.handles.push(handle);
    }

    fn active(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn release(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// State shared between the selector and its subscription tasks.
struct Shared {
    candidates: Arc<[LanguageCode]>,
    state: Mutex<SelectorState>,
    names: Mutex<DisplayNameCache>,
    regions: RegionIndex,
    resolver: DisplayNameResolver,
    catalog: Arc<dyn TranslationCatalog>,
    metrics: Arc<ResolutionMetrics>,
    flags: bool,
    snapshot_tx: watch::Sender<SelectionSnapshot>,
    names_tx: watch::Sender<Option<Locale>>,
    changes_tx: broadcast::Sender<Option<LanguageCode>>,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, SelectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn names(&self) -> MutexGuard<'_, DisplayNameCache> {
        self.names.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish while the state lock is held so no other selection interleaves.
    fn publish(&self, state: &SelectorState) {
        self.metrics.record_selection();
        self.snapshot_tx.send_replace(state.snapshot());
        // A change nobody listens to is not an error.
        let _ = self.changes_tx.send(state.active().cloned());
    }

    fn select(&self, code: Option<LanguageCode>) -> bool {
        let mut state = self.state();
        let changed = state.select(code);
        if changed {
            self.publish(&state);
        }
        changed
    }

    fn select_by_index(&self, index: usize) -> Result<bool> {
        let mut state = self.state();
        let changed = state.select_by_index(index)?;
        if changed {
            self.publish(&state);
        }
        Ok(changed)
    }

    /// Rebuild every display name for `locale`, unless already built for it.
    fn refresh_names(&self, locale: &Locale) -> bool {
        if self.names().locale() == Some(locale) {
            debug!("Display names already computed for {}", locale);
            return false;
        }

        let cache = self.resolver.resolve_all(&self.candidates, locale);
        {
            let mut names = self.names();
            if names.locale() == Some(locale) {
                return false;
            }
            *names = cache;
        }

        self.metrics.record_recomputation();
        self.names_tx.send_replace(Some(locale.clone()));
        info!(
            "Recomputed {} display names for locale {}",
            self.candidates.len(),
            locale
        );
        true
    }
}

/// Recompute display names when the active locale changes and the
/// selector's namespace is loaded for it.
async fn follow_catalog(
    shared: Arc<Shared>,
    mut locales: watch::Receiver<Locale>,
    mut events: broadcast::Receiver<CatalogEvent>,
) {
    let namespace = shared.resolver.namespace().to_string();

    loop {
        tokio::select! {
            changed = locales.changed() => {
                if changed.is_err() {
                    break;
                }
                let locale = locales.borrow_and_update().clone();
                if shared.catalog.is_loaded(&namespace, &locale) {
                    shared.refresh_names(&locale);
                } else {
                    debug!("Waiting for {} strings for locale {}", namespace, locale);
                }
            }
            event = events.recv() => {
                match event {
                    Ok(CatalogEvent::Loaded { namespace: loaded, locale }) => {
                        if loaded == namespace && locale == shared.catalog.active_locale() {
                            shared.refresh_names(&locale);
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("Catalog subscription lagged, {} events skipped", skipped);
                        let locale = shared.catalog.active_locale();
                        if shared.catalog.is_loaded(&namespace, &locale) {
                            shared.refresh_names(&locale);
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }
}

/// Apply the detected language once it is known.
async fn follow_detection(shared: Arc<Shared>, signal: DetectionSignal) {
    match signal.await {
        Some(code) => {
            info!("Applying detected language {}", code);
            shared.select(Some(code));
        }
        None => debug!("Language detection finished without a result"),
    }
}

/// Builder for [`LanguageSelector`].
pub struct LanguageSelectorBuilder {
    config: SelectorConfig,
    catalog: Option<Arc<dyn TranslationCatalog>>,
    provider: Arc<dyn DisplayNamesProvider>,
    registry: Option<SignedLanguageRegistry>,
    parameters: Option<Box<dyn ParameterSource>>,
    detection: Option<DetectionSignal>,
}

impl LanguageSelectorBuilder {
    /// Translation catalog; defaults to the built-in catalog in the
    /// configured locale.
    pub fn catalog(mut self, catalog: Arc<dyn TranslationCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Locale-native formatter source; defaults to the built-in tables.
    pub fn display_names(mut self, provider: Arc<dyn DisplayNamesProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Signed-language registry; defaults to the built-in registry.
    pub fn registry(mut self, registry: SignedLanguageRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Source of the initial language, read once during `build`.
    pub fn parameters(mut self, parameters: impl ParameterSource + 'static) -> Self {
        self.parameters = Some(Box::new(parameters));
        self
    }

    /// Signal carrying an externally detected language.
    pub fn detection<F>(mut self, signal: F) -> Self
    where
        F: Future<Output = Option<LanguageCode>> + Send + 'static,
    {
        self.detection = Some(Box::pin(signal));
        self
    }

    /// Build the selector and start its subscriptions.
    ///
    /// Subscriptions need a Tokio runtime; outside of one the selector still
    /// works but keeps the display names of the initial locale.
    ///
    /// # Errors
    /// `SelectorError::Config` for an empty language list or zero capacity.
    pub fn build(self) -> Result<LanguageSelector> {
        let config = self.config;
        config.validate()?;

        let candidates: Arc<[LanguageCode]> = config.languages.clone().into();
        let mut state = SelectorState::new(
            &candidates,
            config.capacity,
            config.has_language_detection,
        )?;

        let requested = self
            .parameters
            .as_ref()
            .and_then(|parameters| parameters.get(&config.url_parameter))
            .filter(|value| !value.is_empty())
            .map(LanguageCode::from);
        let initial = state.initial_selection(requested, &candidates);
        state.select(initial);

        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(InMemoryCatalog::builtin(config.locale.clone())));
        let locales = catalog.locale_changes();
        let events = catalog.events();

        let metrics = Arc::new(ResolutionMetrics::new());
        let translator: Arc<dyn Translate> = Arc::new(Arc::clone(&catalog));
        let resolver = DisplayNameResolver::new(&config.translation_key, self.provider, translator)
            .with_metrics(Arc::clone(&metrics));

        let field = RegistryField::for_namespace(&config.translation_key);
        let regions = match &self.registry {
            Some(registry) => RegionIndex::build(&candidates, registry.records(), field),
            None => RegionIndex::build(&candidates, SignedLanguageRegistry::get().records(), field),
        };
        metrics.record_unmapped_regions(regions.unmapped().count());

        let locale = catalog.active_locale();
        let names = resolver.resolve_all(&candidates, &locale);

        let (snapshot_tx, _) = watch::channel(state.snapshot());
        let (names_tx, _) = watch::channel(Some(locale));
        let (changes_tx, _) = broadcast::channel(CHANGE_CAPACITY);

        let shared = Arc::new(Shared {
            candidates,
            state: Mutex::new(state),
            names: Mutex::new(names),
            regions,
            resolver,
            catalog,
            metrics,
            flags: config.flags,
            snapshot_tx,
            names_tx,
            changes_tx,
        });

        let mut subscriptions = SubscriptionGuard::default();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                subscriptions.push(runtime.spawn(follow_catalog(
                    Arc::clone(&shared),
                    locales,
                    events,
                )));
                if let Some(signal) = self.detection {
                    subscriptions.push(runtime.spawn(follow_detection(Arc::clone(&shared), signal)));
                }
            }
            Err(_) => {
                warn!("No async runtime; display names will not follow locale changes");
            }
        }

        Ok(LanguageSelector {
            shared,
            subscriptions,
        })
    }
}

/// Language selector component.
///
/// Each instance owns its shortlist, selection and caches. Dropping it (or
/// calling [`teardown`](Self::teardown)) releases every subscription.
pub struct LanguageSelector {
    shared: Arc<Shared>,
    subscriptions: SubscriptionGuard,
}

impl LanguageSelector {
    pub fn builder(config: SelectorConfig) -> LanguageSelectorBuilder {
        LanguageSelectorBuilder {
            config,
            catalog: None,
            provider: Arc::new(BuiltinDisplayNames),
            registry: None,
            parameters: None,
            detection: None,
        }
    }

    /// Build a selector with the built-in catalog, formatter and registry.
    pub fn new(config: SelectorConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    // ==================== Selection ====================

    /// Make `code` the active language; `None` re-arms auto-detection.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&self, code: Option<LanguageCode>) -> bool {
        self.shared.select(code)
    }

    /// Select the entry shown at `index`.
    ///
    /// # Errors
    /// `SelectorError::Index` when nothing is shown at `index`.
    pub fn select_by_index(&self, index: usize) -> Result<bool> {
        self.shared.select_by_index(index)
    }

    pub fn active_code(&self) -> Option<LanguageCode> {
        self.shared.state().active().cloned()
    }

    pub fn shortlist(&self) -> Vec<LanguageCode> {
        self.shared.state().shortlist().as_slice().to_vec()
    }

    pub fn selected_index(&self) -> isize {
        self.shared.state().selected_index()
    }

    /// Visible index `code` would have right now.
    pub fn index_for(&self, code: Option<&LanguageCode>) -> isize {
        self.shared.state().index_for(code)
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.shared.state().snapshot()
    }

    /// Receiver of the selection snapshot, updated after every change.
    pub fn subscribe(&self) -> watch::Receiver<SelectionSnapshot> {
        self.shared.snapshot_tx.subscribe()
    }

    /// Receiver of language change notifications.
    pub fn changes(&self) -> broadcast::Receiver<Option<LanguageCode>> {
        self.shared.changes_tx.subscribe()
    }

    pub fn candidates(&self) -> &[LanguageCode] {
        &self.shared.candidates
    }

    pub fn has_language_detection(&self) -> bool {
        self.shared.state().has_language_detection()
    }

    // ==================== Display Data ====================

    /// Display name of `code` in the current display locale.
    ///
    /// Candidates are served from the cache; other codes are resolved on
    /// demand.
    pub fn display_name(&self, code: &LanguageCode) -> String {
        let names = self.shared.names();
        if let Some(name) = names.get(code) {
            return name.to_string();
        }

        let locale = names
            .locale()
            .cloned()
            .unwrap_or_else(|| self.shared.catalog.active_locale());
        drop(names);
        self.shared.resolver.resolve_name(code, &locale)
    }

    pub fn display_names(&self) -> DisplayNameCache {
        self.shared.names().clone()
    }

    /// Locale the cached display names were computed for.
    pub fn display_locale(&self) -> Option<Locale> {
        self.shared.names().locale().cloned()
    }

    /// Receiver notified whenever display names are recomputed.
    pub fn display_locale_changes(&self) -> watch::Receiver<Option<Locale>> {
        self.shared.names_tx.subscribe()
    }

    /// Recompute display names for `locale` now.
    ///
    /// Returns `false` if they were already computed for it.
    pub fn refresh_display_names(&self, locale: &Locale) -> bool {
        self.shared.refresh_names(locale)
    }

    /// Region code of `code` for iconography.
    pub fn region_code(&self, code: &LanguageCode) -> String {
        self.shared.regions.region(code).to_string()
    }

    /// Flag region of `code`, when flags are enabled.
    pub fn flag(&self, code: &LanguageCode) -> Option<String> {
        self.shared.flags.then(|| self.region_code(code))
    }

    // ==================== Diagnostics ====================

    pub fn metrics(&self) -> MetricsReport {
        self.shared.metrics.report()
    }

    /// Check catalog and registry coverage of the candidates.
    pub fn validate_coverage(&self) -> ValidationReport {
        CoverageValidator::validate(
            &self.shared.candidates,
            self.shared.resolver.namespace(),
            &self.shared.catalog,
            &self.shared.regions,
        )
    }

    // ==================== Lifecycle ====================

    /// Number of subscriptions still running.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.active()
    }

    /// Release every subscription. Later catalog events and detection
    /// results are ignored.
    pub fn teardown(&mut self) {
        self.subscriptions.release();
    }
}
