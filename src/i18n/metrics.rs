//! Resolution metrics and observability module.
//!
//! Counts how display names and regions were resolved for one selector
//! instance: locale-native names, translation-table fallbacks, unmapped
//! regions and cache recomputations.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-selector resolution counters.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Names produced by a locale-native formatter
    native_names: AtomicUsize,

    /// Names taken from the translation table
    fallback_names: AtomicUsize,

    /// Candidate languages without a registry region
    unmapped_regions: AtomicUsize,

    /// Full display-name cache rebuilds
    recomputations: AtomicUsize,

    /// Selections that changed the active language
    selections: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_native_name(&self) {
        self.native_names.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_name(&self) {
        self.fallback_names.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unmapped_regions(&self, count: usize) {
        self.unmapped_regions.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_recomputation(&self) {
        self.recomputations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_selection(&self) {
        self.selections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn native_names(&self) -> usize {
        self.native_names.load(Ordering::Relaxed)
    }

    pub fn fallback_names(&self) -> usize {
        self.fallback_names.load(Ordering::Relaxed)
    }

    pub fn unmapped_regions(&self) -> usize {
        self.unmapped_regions.load(Ordering::Relaxed)
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }

    pub fn selections(&self) -> usize {
        self.selections.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let native = self.native_names();
        let fallback = self.fallback_names();
        let total = native + fallback;
        let native_rate = if total > 0 {
            (native as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            native_names: native,
            fallback_names: fallback,
            native_rate,
            unmapped_regions: self.unmapped_regions(),
            recomputations: self.recomputations(),
            selections: self.selections(),
        }
    }
}

/// Snapshot of the resolution counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub native_names: usize,
    pub fallback_names: usize,

    /// Share of names resolved natively, as a percentage (0-100)
    pub native_rate: f64,

    pub unmapped_regions: usize,
    pub recomputations: usize,
    pub selections: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = ResolutionMetrics::new();
        assert_eq!(metrics.native_names(), 0);
        assert_eq!(metrics.fallback_names(), 0);
        assert_eq!(metrics.unmapped_regions(), 0);
        assert_eq!(metrics.recomputations(), 0);
        assert_eq!(metrics.selections(), 0);
    }

    #[test]
    fn test_record_counters() {
        let metrics = ResolutionMetrics::new();
        metrics.record_native_name();
        metrics.record_native_name();
        metrics.record_fallback_name();
        metrics.record_unmapped_regions(3);
        metrics.record_recomputation();
        metrics.record_selection();

        assert_eq!(metrics.native_names(), 2);
        assert_eq!(metrics.fallback_names(), 1);
        assert_eq!(metrics.unmapped_regions(), 3);
        assert_eq!(metrics.recomputations(), 1);
        assert_eq!(metrics.selections(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let first = ResolutionMetrics::new();
        let second = ResolutionMetrics::new();
        first.record_selection();
        assert_eq!(second.selections(), 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = ResolutionMetrics::new().report();
        assert_eq!(report.native_rate, 0.0);
        assert_eq!(report.native_names, 0);
    }

    #[test]
    fn test_report_native_rate() {
        let metrics = ResolutionMetrics::new();
        for _ in 0..3 {
            metrics.record_native_name();
        }
        metrics.record_fallback_name();

        let report = metrics.report();
        assert!((report.native_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_serialization() {
        let metrics = ResolutionMetrics::new();
        metrics.record_fallback_name();
        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"fallback_names\":1"));
        assert!(json.contains("native_rate"));
    }
}
