//! Diagnostics sinks for easing evaluations
//!
//! Easing functions stay pure; a sink only observes what a traced easing
//! computed. Plotters and tests use [`RecordingSink`], `--trace` style
//! debugging uses [`TracingSink`], and everything else gets [`NoopSink`].

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::DomainWarning;

/// One evaluation of an easing function
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub input: f64,
    pub output: f64,
}

/// Receiver of evaluation records
pub trait DiagnosticsSink: Send + Sync {
    /// Called once per traced evaluation with the input and the result
    fn record(&self, easing: &str, point: TracePoint);

    /// Called when a traced easing receives progress outside [0, 1] and
    /// does not tolerate overshoot
    fn domain_warning(&self, warning: &DomainWarning) {
        tracing::warn!("{}", warning);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn record(&self, _easing: &str, _point: TracePoint) {}

    fn domain_warning(&self, _warning: &DomainWarning) {}
}

/// Forwards to an inner sink only the kinds of report that are switched on
pub struct FilteredSink {
    inner: Arc<dyn DiagnosticsSink>,
    records: bool,
    warnings: bool,
}

impl FilteredSink {
    pub fn new(inner: Arc<dyn DiagnosticsSink>, records: bool, warnings: bool) -> Self {
        Self {
            inner,
            records,
            warnings,
        }
    }
}

impl DiagnosticsSink for FilteredSink {
    fn record(&self, easing: &str, point: TracePoint) {
        if self.records {
            self.inner.record(easing, point);
        }
    }

    fn domain_warning(&self, warning: &DomainWarning) {
        if self.warnings {
            self.inner.domain_warning(warning);
        }
    }
}

/// Forwards records to `tracing` at TRACE level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, easing: &str, point: TracePoint) {
        tracing::trace!(
            easing,
            input = point.input,
            output = point.output,
            "In: {:.3} -> Out: {:.3}",
            point.input,
            point.output
        );
    }
}

/// Collects records in memory, in evaluation order
#[derive(Debug, Default)]
pub struct RecordingSink {
    points: Mutex<Vec<TracePoint>>,
    warnings: Mutex<Vec<DomainWarning>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of the recorded points
    pub fn points(&self) -> Vec<TracePoint> {
        self.points.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Snapshot of the recorded domain warnings
    pub fn warnings(&self) -> Vec<DomainWarning> {
        self.warnings.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        if let Ok(mut points) = self.points.lock() {
            points.clear();
        }
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.clear();
        }
    }
}

impl DiagnosticsSink for RecordingSink {
    fn record(&self, _easing: &str, point: TracePoint) {
        if let Ok(mut points) = self.points.lock() {
            points.push(point);
        }
    }

    fn domain_warning(&self, warning: &DomainWarning) {
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(warning.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.record("quad-in", TracePoint { input: 0.5, output: 0.25 });
        sink.record("quad-in", TracePoint { input: 1.0, output: 1.0 });

        let points = sink.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], TracePoint { input: 0.5, output: 0.25 });
        assert_eq!(points[1].input, 1.0);
    }

    #[test]
    fn test_recording_sink_clear() {
        let sink = RecordingSink::new();
        sink.record("linear", TracePoint { input: 0.1, output: 0.1 });
        sink.domain_warning(&DomainWarning {
            easing: "linear".into(),
            input: 2.0,
        });
        sink.clear();
        assert!(sink.points().is_empty());
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_filtered_sink_drops_disabled_reports() {
        let recorder = RecordingSink::new();
        let sink = FilteredSink::new(recorder.clone(), false, true);
        sink.record("linear", TracePoint { input: 0.5, output: 0.5 });
        sink.domain_warning(&DomainWarning {
            easing: "linear".into(),
            input: -1.0,
        });
        assert!(recorder.points().is_empty());
        assert_eq!(recorder.warnings().len(), 1);
    }

    #[test]
    fn test_trace_point_serializes() {
        let json = serde_json::to_string(&TracePoint { input: 0.5, output: 0.25 }).unwrap();
        assert_eq!(json, r#"{"input":0.5,"output":0.25}"#);
    }
}
