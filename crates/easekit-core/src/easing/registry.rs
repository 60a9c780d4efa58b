//! L3 Molecular Layer: Named easing registry
//!
//! Built once at startup and then only read. Collaborators (selectors,
//! command lines, config files) receive the registry explicitly instead of
//! looking curves up in ambient state.

use std::collections::HashMap;

use super::{catalogue, penner, Easing};
use crate::error::{Error, Result};

/// A registered easing with its human-readable label
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub label: String,
    pub easing: Easing,
}

impl RegistryEntry {
    pub fn key(&self) -> &str {
        self.easing.name()
    }
}

/// Immutable name → easing mapping, listed in insertion order
#[derive(Debug, Clone, Default)]
pub struct EasingRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl EasingRegistry {
    /// Empty registry, for collaborators assembling their own selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Every curve in the catalogue
    ///
    /// Normalized curves use short keys (`quad-in`); absolute-time curves
    /// viewed through the adapter use `penner-<family>-<variant>`.
    pub fn standard() -> Self {
        use catalogue::*;

        let registry = Self::new()
            .with_entry("Linear speed", Easing::new("linear", linear::ease_none))
            .with_entry("Linear Ease In", Easing::new("linear-in", linear::ease_in))
            .with_entry("Linear Ease Out", Easing::new("linear-out", linear::ease_out))
            .with_entry("Linear Ease In/Out", Easing::new("linear-in-out", linear::ease_in_out))
            .with_entry("Linear Ping-Pong", Easing::new("linear-ping-pong", linear::ping_pong))
            .with_entry("Quadratic Ease In", Easing::new("quad-in", quad::ease_in))
            .with_entry("Quadratic Ease Out", Easing::new("quad-out", quad::ease_out))
            .with_entry("Quadratic Ease In/Out", Easing::new("quad-in-out", quad::ease_in_out))
            .with_entry("Cubic Ease In", Easing::new("cubic-in", cubic::ease_in))
            .with_entry("Cubic Ease Out", Easing::new("cubic-out", cubic::ease_out))
            .with_entry("Cubic Ease In/Out", Easing::new("cubic-in-out", cubic::ease_in_out))
            .with_entry("Quartic Ease In", Easing::new("quart-in", quart::ease_in))
            .with_entry("Quartic Ease Out", Easing::new("quart-out", quart::ease_out))
            .with_entry("Quartic Ease In/Out", Easing::new("quart-in-out", quart::ease_in_out))
            .with_entry("Quintic Ease In", Easing::new("quint-in", quint::ease_in))
            .with_entry("Quintic Ease Out", Easing::new("quint-out", quint::ease_out))
            .with_entry("Quintic Ease In/Out", Easing::new("quint-in-out", quint::ease_in_out))
            .with_entry("Sine Ease In", Easing::new("sine-in", sine::ease_in))
            .with_entry("Sine Ease Out", Easing::new("sine-out", sine::ease_out))
            .with_entry("Sine Ease In/Out", Easing::new("sine-in-out", sine::ease_in_out))
            .with_entry("Sine Ping-Pong", Easing::new("sine-ping-pong", sine::ping_pong));

        penner_families()
            .into_iter()
            .fold(registry, |registry, (family, label, overshoot, curves)| {
                let variants = [("in", "Ease In"), ("out", "Ease Out"), ("in-out", "Ease In/Out")];
                variants
                    .into_iter()
                    .zip(curves)
                    .fold(registry, |registry, ((suffix, variant), curve)| {
                        let key = format!("penner-{}-{}", family, suffix);
                        let easing = Easing::from_absolute(key, curve);
                        let easing = if overshoot { easing.overshooting() } else { easing };
                        registry.with_entry(format!("{} {} (absolute)", label, variant), easing)
                    })
            })
    }

    /// Add an entry, replacing any existing entry with the same key
    pub fn with_entry(mut self, label: impl Into<String>, easing: Easing) -> Self {
        let entry = RegistryEntry {
            label: label.into(),
            easing,
        };
        let existing = self.index.get(entry.key()).copied();
        match existing {
            Some(i) => self.entries[i] = entry,
            None => {
                self.index.insert(entry.key().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Easing> {
        self.index.get(key).map(|&i| &self.entries[i].easing)
    }

    /// Like [`get`](Self::get) but a missing key is an error
    pub fn resolve(&self, key: &str) -> Result<Easing> {
        self.get(key)
            .cloned()
            .ok_or_else(|| Error::UnknownEasing(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type PennerFamily = (&'static str, &'static str, bool, [penner::AbsoluteFn; 3]);

fn penner_families() -> Vec<PennerFamily> {
    use penner::*;

    vec![
        ("linear", "Linear", false, [linear::ease_in, linear::ease_out, linear::ease_in_out]),
        ("quad", "Quadratic", false, [quad::ease_in, quad::ease_out, quad::ease_in_out]),
        ("cubic", "Cubic", false, [cubic::ease_in, cubic::ease_out, cubic::ease_in_out]),
        ("quart", "Quartic", false, [quart::ease_in, quart::ease_out, quart::ease_in_out]),
        ("quint", "Quintic", false, [quint::ease_in, quint::ease_out, quint::ease_in_out]),
        ("sine", "Sine", false, [sine::ease_in, sine::ease_out, sine::ease_in_out]),
        ("expo", "Exponential", false, [expo::ease_in, expo::ease_out, expo::ease_in_out]),
        ("circ", "Circular", false, [circ::ease_in, circ::ease_out, circ::ease_in_out]),
        ("back", "Back", true, [back::ease_in, back::ease_out, back::ease_in_out]),
        ("elastic", "Elastic", true, [elastic::ease_in, elastic::ease_out, elastic::ease_in_out]),
        ("bounce", "Bounce", true, [bounce::ease_in, bounce::ease_out, bounce::ease_in_out]),
    ]
}
