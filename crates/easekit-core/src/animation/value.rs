//! L4 Atomic Layer: Multi-dimensional animated values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::timing::lerp;
use crate::error::Error;

/// An animated quantity with one or more components
///
/// A scalar, an x/y position and an RGB color are all values; the same
/// eased progress is applied to every component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(Vec<f64>);

impl Value {
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    pub fn scalar(v: f64) -> Self {
        Self(vec![v])
    }

    /// Number of components
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// The single component of a one-dimensional value
    pub fn as_scalar(&self) -> Option<f64> {
        match self.0.as_slice() {
            [v] => Some(*v),
            _ => None,
        }
    }

    /// Component-wise `self + (to - self) · t`
    ///
    /// Components beyond the shorter of the two values are dropped; callers
    /// validate dimensions up front.
    pub fn lerp(&self, to: &Value, t: f64) -> Value {
        Value(
            self.0
                .iter()
                .zip(&to.0)
                .map(|(&from, &to)| lerp(from, to, t))
                .collect(),
        )
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::scalar(v)
    }
}

impl From<(f64, f64)> for Value {
    fn from((x, y): (f64, f64)) -> Self {
        Self(vec![x, y])
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl From<Vec<f64>> for Value {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{:.3}", v)?;
        }
        Ok(())
    }
}

/// Parses comma-separated components, e.g. `"12.5"` or `"0, 40"`
impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(Error::InvalidValue(s.to_string()));
        }
        s.split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidValue(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value)
    }
}
