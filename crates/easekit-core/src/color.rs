//! RGB colors as animation values

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::animation::timing::lerp_u8;
use crate::animation::Value;
use crate::error::{Error, Result};

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"(?i)^#([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").expect("Invalid regex pattern")
    })
}

fn rgb_pattern() -> &'static Regex {
    static RGB: OnceLock<Regex> = OnceLock::new();
    RGB.get_or_init(|| {
        Regex::new(r"(?i)^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$")
            .expect("Invalid regex pattern")
    })
}

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert a 3-component value back to a color, rounding and clamping
    /// each channel to 0..=255
    pub fn from_value(value: &Value) -> Result<Self> {
        match value.components() {
            [r, g, b] => Ok(Self::new(channel(*r), channel(*g), channel(*b))),
            other => Err(Error::InvalidColor(format!(
                "expected 3 components, got {}",
                other.len()
            ))),
        }
    }

    /// Channel-wise interpolation
    pub fn lerp(&self, to: &Rgb, t: f64) -> Rgb {
        Rgb::new(
            lerp_u8(self.r, to.r, t),
            lerp_u8(self.g, to.g, t),
            lerp_u8(self.b, to.b, t),
        )
    }
}

fn channel(v: f64) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.round().clamp(0.0, 255.0) as u8
    }
}

impl From<Rgb> for Value {
    fn from(color: Rgb) -> Self {
        Value::from([color.r as f64, color.g as f64, color.b as f64])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rrggbb` or `rgb(r, g, b)`
impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(caps) = hex_pattern().captures(s) {
            let parse = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| invalid());
            return Ok(Self::new(parse(1)?, parse(2)?, parse(3)?));
        }

        if let Some(caps) = rgb_pattern().captures(s) {
            let parse = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
            return Ok(Self::new(parse(1)?, parse(2)?, parse(3)?));
        }

        Err(invalid())
    }
}
