//! Metrics collection using Prometheus

use crate::rank::Rank;
use crate::roster::RosterUpdate;
use anyhow::Result;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the rank services
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Rank domain metrics
    rank_metrics: RankMetrics,

    /// Performance metrics
    performance_metrics: PerformanceMetrics,
}

/// Rank domain metrics
#[derive(Clone)]
pub struct RankMetrics {
    /// Rank payloads checked at ingestion, by outcome
    pub validations_total: IntCounterVec,

    /// Team average recomputations
    pub roster_recalculations_total: IntCounter,

    /// Scale value of the most recently computed team average
    pub last_average_scalar: IntGauge,

    /// Entities evaluated by rank filters, by result
    pub filter_candidates_total: IntCounterVec,
}

/// Performance metrics
#[derive(Clone)]
pub struct PerformanceMetrics {
    /// Time spent computing a team average
    pub aggregation_duration: Histogram,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let rank_metrics = RankMetrics::new(&registry)?;
        let performance_metrics = PerformanceMetrics::new(&registry)?;

        Ok(Self {
            registry,
            rank_metrics,
            performance_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Get rank metrics
    pub fn rank(&self) -> &RankMetrics {
        &self.rank_metrics
    }

    /// Get performance metrics
    pub fn performance(&self) -> &PerformanceMetrics {
        &self.performance_metrics
    }

    /// Record the outcome of a rank validation
    pub fn record_validation(&self, valid: bool) {
        let outcome = if valid { "valid" } else { "malformed" };
        self.rank_metrics
            .validations_total
            .with_label_values(&[outcome])
            .inc();
    }

    /// Record a roster change and the time spent recomputing its average
    pub fn record_roster_update(&self, update: &RosterUpdate, duration: Duration) {
        self.record_aggregation(update.average_rank.as_ref(), duration);
    }

    /// Record an average rank computation
    pub fn record_aggregation(&self, average: Option<&Rank>, duration: Duration) {
        self.rank_metrics.roster_recalculations_total.inc();

        if let Some(rank) = average {
            self.rank_metrics.last_average_scalar.set(rank.to_scalar());
        }

        self.performance_metrics
            .aggregation_duration
            .observe(duration.as_secs_f64());
    }

    /// Record a filter pass over `kept + dropped` candidates
    pub fn record_filter(&self, kept: usize, dropped: usize) {
        self.rank_metrics
            .filter_candidates_total
            .with_label_values(&["kept"])
            .inc_by(kept as u64);
        self.rank_metrics
            .filter_candidates_total
            .with_label_values(&["dropped"])
            .inc_by(dropped as u64);
    }

    /// Render all metrics in the Prometheus text format
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl RankMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let validations_total = IntCounterVec::new(
            Opts::new(
                "scrim_rank_validations_total",
                "Rank payloads validated, by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(validations_total.clone()))?;

        let roster_recalculations_total = IntCounter::new(
            "scrim_rank_roster_recalculations_total",
            "Team average rank recomputations",
        )?;
        registry.register(Box::new(roster_recalculations_total.clone()))?;

        let last_average_scalar = IntGauge::new(
            "scrim_rank_last_average_scalar",
            "Scale value of the most recent team average rank",
        )?;
        registry.register(Box::new(last_average_scalar.clone()))?;

        let filter_candidates_total = IntCounterVec::new(
            Opts::new(
                "scrim_rank_filter_candidates_total",
                "Entities evaluated by rank filters, by result",
            ),
            &["result"],
        )?;
        registry.register(Box::new(filter_candidates_total.clone()))?;

        Ok(Self {
            validations_total,
            roster_recalculations_total,
            last_average_scalar,
            filter_candidates_total,
        })
    }
}

impl PerformanceMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let aggregation_duration = Histogram::with_opts(
            HistogramOpts::new(
                "scrim_rank_aggregation_duration_seconds",
                "Time spent computing a team average rank",
            )
            .buckets(vec![0.000_001, 0.000_01, 0.000_1, 0.001, 0.01]),
        )?;
        registry.register(Box::new(aggregation_duration.clone()))?;

        Ok(Self {
            aggregation_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Tier;
    use crate::utils::{current_timestamp, generate_id};

    #[test]
    fn test_metrics_collector_creation() {
        let collector = MetricsCollector::new().expect("Failed to create metrics collector");

        let _rank = collector.rank();
        let _performance = collector.performance();
    }

    #[test]
    fn test_validation_recording() {
        let collector = MetricsCollector::new().unwrap();

        collector.record_validation(true);
        collector.record_validation(true);
        collector.record_validation(false);

        let validations = &collector.rank().validations_total;
        assert_eq!(validations.with_label_values(&["valid"]).get(), 2);
        assert_eq!(validations.with_label_values(&["malformed"]).get(), 1);
    }

    #[test]
    fn test_roster_update_recording() {
        let collector = MetricsCollector::new().unwrap();
        let update = RosterUpdate {
            team_id: generate_id(),
            member_count: 3,
            average_rank: Some(Rank::floor(Tier::Ouro)),
            updated_at: current_timestamp(),
        };

        collector.record_roster_update(&update, Duration::from_micros(3));

        assert_eq!(collector.rank().roster_recalculations_total.get(), 1);
        assert_eq!(collector.rank().last_average_scalar.get(), 1200);
        assert_eq!(
            collector.performance().aggregation_duration.get_sample_count(),
            1
        );
    }

    #[test]
    fn test_filter_recording_and_render() {
        let collector = MetricsCollector::new().unwrap();
        collector.record_filter(4, 6);

        let text = collector.render().unwrap();
        assert!(text.contains("scrim_rank_filter_candidates_total{result=\"kept\"} 4"));
        assert!(text.contains("scrim_rank_filter_candidates_total{result=\"dropped\"} 6"));
    }

    #[test]
    fn test_metrics_timer() {
        let collector = MetricsCollector::new().expect("Failed to create metrics collector");
        let timer = collector.start_timer();

        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.elapsed();

        assert!(duration >= Duration::from_millis(10));

        let final_duration = timer.stop();
        assert!(final_duration >= Duration::from_millis(10));
    }
}
