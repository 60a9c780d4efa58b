//! L3 Molecular Layer: A single in-flight interpolation
//!
//! Combines an easing, the timing utilities and a start/end value pair.
//! The host drives the run by calling [`AnimationRun::start`] once and
//! [`AnimationRun::tick`] on every frame; each call that produces an event
//! returns it and hands it to every subscribed listener.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::timing::{is_complete, progress};
use super::value::Value;
use crate::easing::Easing;
use crate::error::{Error, Result};

/// Lifecycle of a run: Pending → Running → Completed | Cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Pending,
    Running,
    Completed,
    Cancelled,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Pending => "pending",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Cancelled => "cancelled",
        }
    }

    /// Completed and Cancelled runs never emit again
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Cancelled)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of progress event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// First event of a run, carrying the t = 0 sample
    Begin,
    /// Intermediate sample
    Animate,
    /// Last event of a completed run, carrying the exact end value
    End,
}

/// Progress event delivered to collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationEvent {
    pub kind: EventKind,
    /// Interpolated value at this instant
    pub value: Value,
    /// Raw (un-eased) progress in [0, 1]
    pub progress: f64,
    /// Host timestamp the event was produced at
    pub timestamp_ms: f64,
}

/// Everything needed to construct a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub start_value: Value,
    pub end_value: Value,
    pub duration_ms: f64,
    pub easing: Easing,
}

type Listener = Box<dyn FnMut(&AnimationEvent) + Send>;

/// One interpolation from `start_value` to `end_value` over `duration_ms`
pub struct AnimationRun {
    start_value: Value,
    end_value: Value,
    duration_ms: f64,
    easing: Easing,
    state: RunState,
    /// Set by `start`
    start_timestamp: Option<f64>,
    /// Timestamp of the last emitted event, for strict ordering
    last_timestamp: Option<f64>,
    listeners: Vec<Listener>,
}

impl AnimationRun {
    /// Validate the configuration and create a Pending run
    ///
    /// Fails with an invalid-configuration error when the duration is not
    /// a positive finite number or the values disagree on dimensionality.
    pub fn new(
        start_value: impl Into<Value>,
        end_value: impl Into<Value>,
        duration_ms: f64,
        easing: Easing,
    ) -> Result<Self> {
        let start_value = start_value.into();
        let end_value = end_value.into();

        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(Error::InvalidDuration(duration_ms));
        }
        if start_value.dimensions() != end_value.dimensions() {
            return Err(Error::DimensionMismatch {
                start: start_value.dimensions(),
                end: end_value.dimensions(),
            });
        }
        if start_value.dimensions() == 0 {
            return Err(Error::EmptyValue);
        }

        Ok(Self {
            start_value,
            end_value,
            duration_ms,
            easing,
            state: RunState::Pending,
            start_timestamp: None,
            last_timestamp: None,
            listeners: Vec::new(),
        })
    }

    pub fn from_config(config: RunConfig) -> Result<Self> {
        Self::new(
            config.start_value,
            config.end_value,
            config.duration_ms,
            config.easing,
        )
    }

    /// Register a listener for every event this run emits from now on
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&AnimationEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    pub fn start_value(&self) -> &Value {
        &self.start_value
    }

    pub fn end_value(&self) -> &Value {
        &self.end_value
    }

    pub fn start_timestamp(&self) -> Option<f64> {
        self.start_timestamp
    }

    /// Interpolated value at raw progress `p` (eased, not clamped)
    pub fn value_at(&self, p: f64) -> Value {
        self.start_value.lerp(&self.end_value, self.easing.apply(p))
    }

    /// Pending → Running; emits `Begin` with the t = 0 sample
    pub fn start(&mut self, now_ms: f64) -> Result<AnimationEvent> {
        if self.state != RunState::Pending {
            return Err(Error::InvalidState {
                expected: RunState::Pending.as_str(),
                actual: self.state.as_str(),
            });
        }
        if !now_ms.is_finite() {
            return Err(Error::InvalidValue(format!("start timestamp {}", now_ms)));
        }

        self.state = RunState::Running;
        self.start_timestamp = Some(now_ms);
        tracing::debug!(
            easing = self.easing.name(),
            duration_ms = self.duration_ms,
            "Animation run started"
        );

        let event = AnimationEvent {
            kind: EventKind::Begin,
            value: self.value_at(0.0),
            progress: 0.0,
            timestamp_ms: now_ms,
        };
        self.emit(&event);
        Ok(event)
    }

    /// Advance the run to `now_ms`
    ///
    /// Returns `None` when the run is not Running or when `now_ms` is not a
    /// finite timestamp past the previous event. Once the duration has elapsed the run
    /// emits `End` with the exact end value and completes.
    pub fn tick(&mut self, now_ms: f64) -> Option<AnimationEvent> {
        if self.state != RunState::Running || !now_ms.is_finite() {
            return None;
        }
        if self.last_timestamp.is_some_and(|last| now_ms <= last) {
            return None;
        }
        let start = self.start_timestamp?;
        let elapsed = now_ms - start;

        let event = if is_complete(elapsed, self.duration_ms) {
            self.state = RunState::Completed;
            tracing::debug!(
                easing = self.easing.name(),
                elapsed_ms = elapsed,
                "Animation run completed"
            );
            AnimationEvent {
                kind: EventKind::End,
                value: self.end_value.clone(),
                progress: 1.0,
                timestamp_ms: now_ms,
            }
        } else {
            let p = progress(elapsed, self.duration_ms);
            AnimationEvent {
                kind: EventKind::Animate,
                value: self.value_at(p),
                progress: p,
                timestamp_ms: now_ms,
            }
        };

        self.emit(&event);
        if self.state.is_terminal() {
            self.listeners.clear();
        }
        Some(event)
    }

    /// Running (or Pending) → Cancelled; no further events are emitted
    ///
    /// Calling this on a Completed or Cancelled run does nothing.
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        tracing::debug!(
            easing = self.easing.name(),
            state = %self.state,
            "Animation run cancelled"
        );
        self.state = RunState::Cancelled;
        self.listeners.clear();
    }

    fn emit(&mut self, event: &AnimationEvent) {
        self.last_timestamp = Some(event.timestamp_ms);
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for AnimationRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRun")
            .field("start_value", &self.start_value)
            .field("end_value", &self.end_value)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("state", &self.state)
            .field("start_timestamp", &self.start_timestamp)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::easing::{catalogue, penner};

    fn linear() -> Easing {
        Easing::new("linear", catalogue::linear::ease_none)
    }

    fn collect(run: &mut AnimationRun) -> Arc<Mutex<Vec<AnimationEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        run.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        events
    }

    #[test]
    fn test_linear_scenario() {
        let mut run = AnimationRun::new(0.0, 100.0, 500.0, linear()).unwrap();
        let events = collect(&mut run);

        let begin = run.start(1000.0).unwrap();
        assert_eq!(begin.kind, EventKind::Begin);
        assert_eq!(begin.value, Value::scalar(0.0));

        let mid = run.tick(1250.0).unwrap();
        assert_eq!(mid.kind, EventKind::Animate);
        assert!((mid.value.as_scalar().unwrap() - 50.0).abs() < 1e-9);
        assert_eq!(mid.progress, 0.5);

        let end = run.tick(1500.0).unwrap();
        assert_eq!(end.kind, EventKind::End);
        assert_eq!(end.value, Value::scalar(100.0));
        assert_eq!(run.state(), RunState::Completed);

        assert!(run.tick(1600.0).is_none());

        let events = events.lock().unwrap();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Begin, EventKind::Animate, EventKind::End]);
    }

    #[test]
    fn test_late_tick_jumps_to_end() {
        let mut run = AnimationRun::new(0.0, 1.0, 100.0, linear()).unwrap();
        run.start(0.0).unwrap();
        let end = run.tick(10_000.0).unwrap();
        assert_eq!(end.kind, EventKind::End);
        assert_eq!(end.progress, 1.0);
    }

    #[test]
    fn test_end_value_is_exact() {
        // End carries the configured value, not a recomputed interpolation
        let mut run = AnimationRun::new(0.1, 0.3, 100.0, linear()).unwrap();
        run.start(0.0).unwrap();
        let end = run.tick(100.0).unwrap();
        assert_eq!(end.value, Value::scalar(0.3));
    }

    #[test]
    fn test_two_dimensional_run() {
        let mut run = AnimationRun::new((0.0, 0.0), (10.0, 20.0), 400.0, linear()).unwrap();
        run.start(0.0).unwrap();
        let mid = run.tick(200.0).unwrap();
        assert_eq!(mid.value, Value::from((5.0, 10.0)));
    }

    #[test]
    fn test_eased_progress_applies_to_every_component() {
        let quad = Easing::new("quad-in", catalogue::quad::ease_in);
        let mut run =
            AnimationRun::new([0.0, 100.0, 50.0], [100.0, 0.0, 50.0], 100.0, quad).unwrap();
        run.start(0.0).unwrap();
        let mid = run.tick(50.0).unwrap();
        assert_eq!(mid.progress, 0.5);
        assert_eq!(mid.value, Value::from([25.0, 75.0, 50.0]));
    }

    #[test]
    fn test_cancel_before_first_tick() {
        let mut run = AnimationRun::new(0.0, 100.0, 500.0, linear()).unwrap();
        let events = collect(&mut run);
        run.start(0.0).unwrap();
        run.cancel();

        assert!(run.tick(250.0).is_none());
        assert!(run.tick(600.0).is_none());
        assert_eq!(run.state(), RunState::Cancelled);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Begin);
    }

    #[test]
    fn test_cancel_is_idempotent_after_completion() {
        let mut run = AnimationRun::new(0.0, 1.0, 10.0, linear()).unwrap();
        run.start(0.0).unwrap();
        run.tick(10.0).unwrap();
        run.cancel();
        assert_eq!(run.state(), RunState::Completed);
        run.cancel();
        assert_eq!(run.state(), RunState::Completed);
    }

    #[test]
    fn test_non_increasing_ticks_are_ignored() {
        let mut run = AnimationRun::new(0.0, 1.0, 100.0, linear()).unwrap();
        run.start(50.0).unwrap();
        assert!(run.tick(50.0).is_none());
        assert!(run.tick(40.0).is_none());
        assert!(run.tick(60.0).is_some());
        assert!(run.tick(60.0).is_none());
    }

    #[test]
    fn test_non_finite_timestamps_are_ignored() {
        let mut run = AnimationRun::new(0.0, 1.0, 100.0, linear()).unwrap();
        assert!(matches!(run.start(f64::NAN), Err(Error::InvalidValue(_))));
        assert_eq!(run.state(), RunState::Pending);

        run.start(0.0).unwrap();
        assert!(run.tick(f64::NAN).is_none());
        assert!(run.tick(f64::INFINITY).is_none());

        let event = run.tick(10.0).unwrap();
        assert_eq!(event.kind, EventKind::Animate);
        assert_eq!(event.timestamp_ms, 10.0);
        assert!(run.tick(5.0).is_none());
    }

    #[test]
    fn test_start_twice_fails() {
        let mut run = AnimationRun::new(0.0, 1.0, 100.0, linear()).unwrap();
        run.start(0.0).unwrap();
        let err = run.start(1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidState { actual: "running", .. }));
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut run = AnimationRun::new(0.0, 1.0, 100.0, linear()).unwrap();
        assert!(run.tick(10.0).is_none());
        assert_eq!(run.state(), RunState::Pending);
    }

    #[test]
    fn test_invalid_configuration() {
        let err = AnimationRun::new(0.0, 1.0, 0.0, linear()).unwrap_err();
        assert!(matches!(err, Error::InvalidDuration(_)));
        assert!(err.is_invalid_configuration());

        let err = AnimationRun::new(0.0, 1.0, -5.0, linear()).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = AnimationRun::new(0.0, 1.0, f64::NAN, linear()).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = AnimationRun::new((0.0, 0.0), 1.0, 100.0, linear()).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { start: 2, end: 1 }));

        let empty = Vec::<f64>::new;
        let err = AnimationRun::new(empty(), empty(), 100.0, linear()).unwrap_err();
        assert!(matches!(err, Error::EmptyValue));
    }

    #[test]
    fn test_overshooting_easing_leaves_range() {
        let back = Easing::from_absolute("penner-back-out", penner::back::ease_out).overshooting();
        let mut run = AnimationRun::new(0.0, 100.0, 100.0, back).unwrap();
        run.start(0.0).unwrap();
        let peak = (1..100)
            .filter_map(|t| run.tick(t as f64))
            .filter_map(|e| e.value.as_scalar())
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(peak > 100.0);
    }

    #[test]
    fn test_event_serializes() {
        let event = AnimationEvent {
            kind: EventKind::Animate,
            value: Value::from((1.0, 2.0)),
            progress: 0.5,
            timestamp_ms: 16.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"animate","value":[1.0,2.0],"progress":0.5,"timestamp_ms":16.0}"#
        );
    }
}
