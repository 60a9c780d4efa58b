//! Animation sampler
//!
//! Interpolates a start value toward an end value over a duration, shaping
//! progress with an [`Easing`](crate::easing::Easing).
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `value` - Multi-dimensional animated values
//! - `timing` - Time calculation utilities (progress, interpolation)
//!
//! ## L3 Molecular Layer
//! - `run` - A single run combining atoms, driven by the host clock
//!
//! ## L2 Organism Layer
//! - `player` - Tokio task ticking a run at a fixed frame rate
//!
//! # Usage
//!
//! ```
//! use easekit_core::animation::{AnimationRun, EventKind, Value};
//! use easekit_core::easing::{catalogue, Easing};
//!
//! let easing = Easing::new("linear", catalogue::linear::ease_none);
//! let mut run = AnimationRun::new(0.0, 100.0, 500.0, easing).unwrap();
//!
//! run.start(0.0).unwrap();
//! let mid = run.tick(250.0).unwrap();
//! assert_eq!(mid.value, Value::scalar(50.0));
//!
//! let end = run.tick(500.0).unwrap();
//! assert_eq!(end.kind, EventKind::End);
//! ```

// L4 Atomic Layer
pub mod timing;
pub mod value;

// L3 Molecular Layer
pub mod run;

// L2 Organism Layer
pub mod player;

// Re-exports for convenient access
pub use player::{Player, PlayerHandle};
pub use run::{AnimationEvent, AnimationRun, EventKind, RunConfig, RunState};
pub use value::Value;
