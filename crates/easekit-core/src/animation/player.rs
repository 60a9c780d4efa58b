//! L2 Organism Layer: Real-time driver for animation runs
//!
//! Owns a run inside a tokio task, ticks it on a fixed interval and forwards
//! every event over a channel until the run completes or is cancelled.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, warn};

use super::run::{AnimationEvent, AnimationRun, RunState};
use crate::config::{AnimationConfig, AnimationConfigExt};

/// Shortest tick a player schedules
pub const MIN_TICK: Duration = Duration::from_millis(1);

/// Schedules ticks for animation runs
#[derive(Debug, Clone, Copy)]
pub struct Player {
    tick: Duration,
}

impl Default for Player {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl Player {
    /// Create a player ticking every `tick`, floored at [`MIN_TICK`]
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(MIN_TICK),
        }
    }

    /// Create a player ticking at the configured frame rate
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.tick_duration())
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Start `run` on a new task and return a handle to its events
    ///
    /// The run is moved into the task and dropped once it reaches a
    /// terminal state. Must be called from within a tokio runtime.
    pub fn play(&self, run: AnimationRun) -> PlayerHandle {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let task = tokio::spawn(drive(run, self.tick, event_tx, cancel_rx));

        PlayerHandle {
            events: event_rx,
            cancel_tx,
            task,
        }
    }
}

/// Handle to a run being played
///
/// Dropping the handle cancels the run.
pub struct PlayerHandle {
    events: mpsc::UnboundedReceiver<AnimationEvent>,
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<RunState>,
}

impl PlayerHandle {
    /// Next event, or `None` once the run has stopped emitting
    pub async fn next_event(&mut self) -> Option<AnimationEvent> {
        self.events.recv().await
    }

    /// Request cancellation; no event is emitted after the next tick boundary
    pub fn cancel(&self) {
        if self.cancel_tx.send(true).is_err() {
            debug!("Cancel requested for a run that already stopped");
        }
    }

    /// Wait for the run to stop and return its terminal state
    ///
    /// Events not yet received are discarded. A panic inside the task is
    /// resumed on the caller.
    pub async fn finish(self) -> RunState {
        let PlayerHandle {
            events,
            cancel_tx,
            task,
        } = self;
        drop(events);
        let state = match task.await {
            Ok(state) => state,
            Err(e) if e.is_panic() => {
                error!("Animation task panicked");
                std::panic::resume_unwind(e.into_panic())
            }
            Err(e) => {
                warn!("Animation task aborted: {}", e);
                RunState::Cancelled
            }
        };
        drop(cancel_tx);
        state
    }
}

async fn drive(
    mut run: AnimationRun,
    tick: Duration,
    event_tx: mpsc::UnboundedSender<AnimationEvent>,
    mut cancel_rx: watch::Receiver<bool>,
) -> RunState {
    let origin = Instant::now();
    let now_ms = move || origin.elapsed().as_secs_f64() * 1000.0;
    let send = |event: AnimationEvent| {
        if event_tx.send(event).is_err() {
            debug!("Dropped animation event: receiver closed");
        }
    };

    match run.start(now_ms()) {
        Ok(begin) => send(begin),
        Err(e) => {
            warn!("Animation run could not start: {}", e);
            return run.state();
        }
    }

    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // Skip the first tick (fires immediately)
    interval.tick().await;

    loop {
        tokio::select! {
            biased;

            result = cancel_rx.changed() => {
                if result.is_err() || *cancel_rx.borrow() {
                    run.cancel();
                    break;
                }
            }

            _ = interval.tick() => {
                if let Some(event) = run.tick(now_ms()) {
                    send(event);
                }
                if run.state().is_terminal() {
                    break;
                }
            }
        }
    }

    debug!(state = %run.state(), "Animation task finished");
    run.state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::run::EventKind;
    use crate::animation::value::Value;
    use crate::easing::{catalogue, Easing};

    fn linear_run(from: impl Into<Value>, to: impl Into<Value>, duration_ms: f64) -> AnimationRun {
        let easing = Easing::new("linear", catalogue::linear::ease_none);
        AnimationRun::new(from, to, duration_ms, easing).unwrap()
    }

    async fn drain(handle: &mut PlayerHandle) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        while let Some(event) = handle.next_event().await {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_plays_to_completion() {
        let player = Player::new(Duration::from_millis(16));
        let mut handle = player.play(linear_run(0.0, 100.0, 500.0));

        let events = drain(&mut handle).await;
        assert_eq!(handle.finish().await, RunState::Completed);

        assert_eq!(events.first().map(|e| e.kind), Some(EventKind::Begin));
        assert_eq!(events.last().map(|e| e.kind), Some(EventKind::End));
        assert_eq!(events.iter().filter(|e| e.kind == EventKind::End).count(), 1);
        assert_eq!(events.last().unwrap().value, Value::scalar(100.0));

        for pair in events.windows(2) {
            assert!(pair[0].timestamp_ms < pair[1].timestamp_ms);
        }
        assert!(events.len() > 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_tick_is_floored() {
        let player = Player::new(Duration::ZERO);
        assert_eq!(player.tick(), MIN_TICK);

        let mut handle = player.play(linear_run(0.0, 10.0, 20.0));
        let events = drain(&mut handle).await;
        assert_eq!(handle.finish().await, RunState::Completed);
        assert_eq!(events.first().map(|e| e.kind), Some(EventKind::Begin));
        assert_eq!(events.last().map(|e| e.kind), Some(EventKind::End));
        assert_eq!(events.last().unwrap().value, Value::scalar(10.0));
    }

    #[tokio::test]
    #[should_panic(expected = "listener failed")]
    async fn test_task_panic_reaches_caller() {
        let mut run = linear_run(0.0, 1.0, 50.0);
        run.subscribe(|event| {
            if event.kind == EventKind::Animate {
                panic!("listener failed");
            }
        });
        let handle = Player::new(Duration::from_millis(1)).play(run);
        handle.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_first_tick() {
        let player = Player::new(Duration::from_millis(16));
        let mut handle = player.play(linear_run(0.0, 100.0, 500.0));
        handle.cancel();

        let events = drain(&mut handle).await;
        assert_eq!(handle.finish().await, RunState::Cancelled);
        assert!(events
            .iter()
            .all(|e| e.kind != EventKind::Animate && e.kind != EventKind::End));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_run() {
        let player = Player::new(Duration::from_millis(10));
        let mut handle = player.play(linear_run(0.0, 1.0, 1000.0));

        let mut seen = 0;
        while let Some(event) = handle.next_event().await {
            seen += 1;
            if event.kind == EventKind::Animate && event.progress > 0.2 {
                handle.cancel();
                break;
            }
        }
        assert!(seen > 1);
        assert_eq!(handle.finish().await, RunState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_runs_are_independent() {
        let player = Player::new(Duration::from_millis(16));
        let mut short = player.play(linear_run((0.0, 0.0), (10.0, 20.0), 100.0));
        let mut long = player.play(linear_run(0.0, 1.0, 300.0));

        let (short_events, long_events) = tokio::join!(drain(&mut short), drain(&mut long));

        assert_eq!(short_events.last().unwrap().value, Value::from((10.0, 20.0)));
        assert_eq!(long_events.last().unwrap().value, Value::scalar(1.0));
        assert!(short_events.len() < long_events.len());
        assert_eq!(short.finish().await, RunState::Completed);
        assert_eq!(long.finish().await, RunState::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_started_run_is_not_replayed() {
        let mut run = linear_run(0.0, 1.0, 100.0);
        run.start(0.0).unwrap();

        let mut handle = Player::new(Duration::from_millis(16)).play(run);
        let events = drain(&mut handle).await;
        assert!(events.is_empty());
        assert_eq!(handle.finish().await, RunState::Running);
    }
}
