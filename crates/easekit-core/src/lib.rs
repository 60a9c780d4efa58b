pub mod animation;
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod easing;
pub mod error;

pub use animation::{
    AnimationEvent, AnimationRun, EventKind, Player, PlayerHandle, RunState, Value,
};
pub use color::Rgb;
pub use config::{AnimationConfigExt, AppConfig};
pub use diagnostics::{
    DiagnosticsSink, FilteredSink, NoopSink, RecordingSink, TracePoint, TracingSink,
};
pub use easing::{Easing, EasingRegistry};
pub use error::{DomainWarning, Error, Result};
