//! Metrics for the rank services
//!
//! Counters are recorded by the callers of the rank core (ingestion, roster
//! updates, filters); the core functions themselves stay pure.

pub mod collector;

pub use collector::{MetricsCollector, MetricsTimer, PerformanceMetrics, RankMetrics};
