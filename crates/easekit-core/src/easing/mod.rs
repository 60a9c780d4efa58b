//! Easing function catalogue
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `builders` - Family builders (polynomial degree, sinusoidal frequency)
//! - `catalogue` - Normalized curves built from the family builders
//! - `penner` - Absolute-time `(t, b, c, d)` curves
//! - `adapter` - Conversions between the two conventions
//!
//! ## L3 Molecular Layer
//! - [`Easing`] - A named, shareable normalized curve
//! - `registry` - Immutable name → [`Easing`] mapping
//!
//! # Usage
//!
//! ```
//! use easekit_core::easing::{catalogue, Easing, EasingRegistry};
//!
//! let quad = Easing::new("quad-in", catalogue::quad::ease_in);
//! assert_eq!(quad.apply(0.5), 0.25);
//!
//! let registry = EasingRegistry::standard();
//! let bounce = registry.resolve("penner-bounce-out").unwrap();
//! assert!((bounce.apply(1.0) - 1.0).abs() < 1e-9);
//! ```

// L4 Atomic Layer
pub mod adapter;
pub mod builders;
pub mod catalogue;
pub mod penner;

// L3 Molecular Layer
pub mod registry;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::diagnostics::{DiagnosticsSink, TracePoint};
use crate::error::DomainWarning;

pub use adapter::{from_absolute, to_absolute};
pub use builders::{polynomial_in, polynomial_in_out, polynomial_out, sinusoidal};
pub use penner::AbsoluteFn;
pub use registry::{EasingRegistry, RegistryEntry};

/// A named normalized easing curve
///
/// Cheap to clone; the underlying function is shared.
#[derive(Clone)]
pub struct Easing {
    name: Cow<'static, str>,
    overshoot: bool,
    func: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl Easing {
    /// Wrap a normalized function under a name
    pub fn new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            overshoot: false,
            func: Arc::new(func),
        }
    }

    /// Wrap an absolute-time function through [`from_absolute`]
    pub fn from_absolute<F>(name: impl Into<Cow<'static, str>>, absolute: F) -> Self
    where
        F: Fn(f64, f64, f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(name, from_absolute(absolute))
    }

    /// Mark the curve as designed to leave [0, 1] (back, elastic, bounce),
    /// which silences domain warnings for out-of-range progress
    pub fn overshooting(mut self) -> Self {
        self.overshoot = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tolerates_overshoot(&self) -> bool {
        self.overshoot
    }

    /// Apply the easing function to a progress value
    #[inline]
    pub fn apply(&self, p: f64) -> f64 {
        (self.func)(p)
    }

    /// Absolute-time view of this curve: `b + c · f(t / d)`
    pub fn absolute(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        to_absolute(|p| self.apply(p))(t, b, c, d)
    }

    /// Decorate the curve so every evaluation is reported to `sink`
    ///
    /// The returned easing computes exactly what `self` computes.
    pub fn traced(&self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        let inner = self.clone();
        let name = self.name.clone();
        let check_domain = !self.overshoot;
        Self {
            name: self.name.clone(),
            overshoot: self.overshoot,
            func: Arc::new(move |p| {
                let output = inner.apply(p);
                if check_domain && !(0.0..=1.0).contains(&p) {
                    sink.domain_warning(&DomainWarning {
                        easing: name.to_string(),
                        input: p,
                    });
                }
                sink.record(&name, TracePoint { input: p, output });
                output
            }),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::new("linear", catalogue::linear::ease_none)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Easing")
            .field("name", &self.name)
            .field("overshoot", &self.overshoot)
            .finish_non_exhaustive()
    }
}
