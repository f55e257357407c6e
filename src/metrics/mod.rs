use prometheus::{
    Counter, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Prometheus metrics for the search catalog
#[derive(Clone)]
pub struct SearchMetrics {
    // Counters
    pub searches_total: CounterVec,
    pub search_errors: CounterVec,
    pub snapshot_loads: Counter,

    // Gauges
    pub snapshot_records: Gauge,
    pub healthy: Gauge,

    // Histograms
    pub search_latency: Histogram,

    // Registry
    registry: Arc<Registry>,
}

impl SearchMetrics {
    /// Create a new SearchMetrics instance
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        // Counters
        let searches_total = CounterVec::new(
            Opts::new("facetdex_searches_total", "Total number of searches by kind"),
            &["kind"],
        )?;
        registry.register(Box::new(searches_total.clone()))?;

        let search_errors = CounterVec::new(
            Opts::new(
                "facetdex_search_errors_total",
                "Total number of failed searches by error kind",
            ),
            &["kind"],
        )?;
        registry.register(Box::new(search_errors.clone()))?;

        let snapshot_loads = Counter::with_opts(Opts::new(
            "facetdex_snapshot_loads_total",
            "Number of snapshots loaded and swapped in",
        ))?;
        registry.register(Box::new(snapshot_loads.clone()))?;

        // Gauges
        let snapshot_records = Gauge::with_opts(Opts::new(
            "facetdex_snapshot_records",
            "Records in the live snapshot",
        ))?;
        registry.register(Box::new(snapshot_records.clone()))?;

        let healthy = Gauge::with_opts(Opts::new(
            "facetdex_healthy",
            "1 if the last health check found the snapshot file, 0 otherwise",
        ))?;
        registry.register(Box::new(healthy.clone()))?;

        // Histograms
        let search_latency = Histogram::with_opts(
            HistogramOpts::new("facetdex_search_latency_seconds", "Search latency")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5]),
        )?;
        registry.register(Box::new(search_latency.clone()))?;

        Ok(Self {
            searches_total,
            search_errors,
            snapshot_loads,
            snapshot_records,
            healthy,
            search_latency,
            registry: Arc::new(registry),
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Record a completed search; `kind` is `text` or `browse`
    pub fn record_search(&self, kind: &str, duration_secs: f64) {
        self.searches_total.with_label_values(&[kind]).inc();
        self.search_latency.observe(duration_secs);
    }

    /// Record a failed search
    pub fn record_search_error(&self, kind: &str) {
        self.search_errors.with_label_values(&[kind]).inc();
    }

    /// Record a snapshot swap
    pub fn record_load(&self, records: usize) {
        self.snapshot_loads.inc();
        self.snapshot_records.set(records as f64);
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.set(if healthy { 1.0 } else { 0.0 });
    }

    /// Render all metrics in the text exposition format
    pub fn gather_text(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_are_exposed() {
        let metrics = SearchMetrics::new().unwrap();
        metrics.record_search("text", 0.002);
        metrics.record_search("browse", 0.001);
        metrics.record_search_error("unsupported_facet");
        metrics.record_load(3);
        metrics.set_healthy(true);

        let text = metrics.gather_text().unwrap();
        assert!(text.contains("facetdex_searches_total{kind=\"text\"} 1"));
        assert!(text.contains("facetdex_search_errors_total{kind=\"unsupported_facet\"} 1"));
        assert!(text.contains("facetdex_snapshot_records 3"));
        assert!(text.contains("facetdex_snapshot_loads_total 1"));
        assert!(text.contains("facetdex_healthy 1"));
        assert!(text.contains("facetdex_search_latency_seconds_count 2"));
    }

    #[test]
    fn test_separate_instances_do_not_share_state() {
        let a = SearchMetrics::new().unwrap();
        let b = SearchMetrics::new().unwrap();
        a.record_load(10);
        assert_eq!(a.snapshot_records.get(), 10.0);
        assert_eq!(b.snapshot_records.get(), 0.0);
    }
}
