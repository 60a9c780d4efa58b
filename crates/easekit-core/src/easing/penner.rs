//! L4 Atomic Layer: Absolute-time easing functions
//!
//! The classic Penner convention: every function takes elapsed time `t`,
//! begin value `b`, total change `c` and duration `d`, and returns the
//! position at time `t`. Valid for `0 <= t <= d` with `d > 0`; the
//! position is `b` at `t = 0` and `b + c` at `t = d`.

use std::f64::consts::PI;

/// Signature shared by every function in this module
pub type AbsoluteFn = fn(f64, f64, f64, f64) -> f64;

/// Constant speed
pub mod linear {
    #[inline]
    pub fn ease_none(t: f64, b: f64, c: f64, d: f64) -> f64 {
        c * t / d + b
    }

    #[inline]
    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_none(t, b, c, d)
    }

    #[inline]
    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_none(t, b, c, d)
    }

    #[inline]
    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_none(t, b, c, d)
    }
}

/// Quadratic acceleration
pub mod quad {
    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d;
        c * t * t + b
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d;
        -c * t * (t - 2.0) + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            return c / 2.0 * t * t + b;
        }
        let t = t - 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

/// Cubic acceleration
pub mod cubic {
    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d;
        c * t * t * t + b
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d - 1.0;
        c * (t * t * t + 1.0) + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            return c / 2.0 * t * t * t + b;
        }
        let t = t - 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    }
}

/// Quartic acceleration
pub mod quart {
    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d;
        c * t.powi(4) + b
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d - 1.0;
        -c * (t.powi(4) - 1.0) + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            return c / 2.0 * t.powi(4) + b;
        }
        let t = t - 2.0;
        -c / 2.0 * (t.powi(4) - 2.0) + b
    }
}

/// Quintic acceleration
pub mod quint {
    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d;
        c * t.powi(5) + b
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d - 1.0;
        c * (t.powi(5) + 1.0) + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            return c / 2.0 * t.powi(5) + b;
        }
        let t = t - 2.0;
        c / 2.0 * (t.powi(5) + 2.0) + b
    }
}

/// Sinusoidal acceleration
pub mod sine {
    use super::PI;

    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        -c * (t / d * (PI / 2.0)).cos() + c + b
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        c * (t / d * (PI / 2.0)).sin() + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
    }
}

/// Exponential acceleration, exact at both ends
pub mod expo {
    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        if t == 0.0 {
            return b;
        }
        c * 2.0_f64.powf(10.0 * (t / d - 1.0)) + b
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        if t == d {
            return b + c;
        }
        c * (1.0 - 2.0_f64.powf(-10.0 * t / d)) + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        if t == 0.0 {
            return b;
        }
        if t == d {
            return b + c;
        }
        let t = t / (d / 2.0);
        if t < 1.0 {
            return c / 2.0 * 2.0_f64.powf(10.0 * (t - 1.0)) + b;
        }
        c / 2.0 * (2.0 - 2.0_f64.powf(-10.0 * (t - 1.0))) + b
    }
}

/// Circular acceleration
pub mod circ {
    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d;
        -c * ((1.0 - t * t).sqrt() - 1.0) + b
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d - 1.0;
        c * (1.0 - t * t).sqrt() + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / (d / 2.0);
        if t < 1.0 {
            return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
        }
        let t = t - 2.0;
        c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
    }
}

/// Overshoots the target slightly and backtracks to it
pub mod back {
    /// Default overshoot, roughly a 10% excursion
    pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

    /// Scale applied to the overshoot by the in-out variant
    pub const IN_OUT_SCALE: f64 = 1.525;

    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_in_with(t, b, c, d, DEFAULT_OVERSHOOT)
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_out_with(t, b, c, d, DEFAULT_OVERSHOOT)
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_in_out_with(t, b, c, d, DEFAULT_OVERSHOOT)
    }

    pub fn ease_in_with(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
        let t = t / d;
        c * t * t * ((s + 1.0) * t - s) + b
    }

    pub fn ease_out_with(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
        let t = t / d - 1.0;
        c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
    }

    pub fn ease_in_out_with(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
        let s = s * IN_OUT_SCALE;
        let t = t / (d / 2.0);
        if t < 1.0 {
            return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
        }
        let t = t - 2.0;
        c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
    }
}

/// Damped sine oscillation around the target
///
/// `amplitude` below `|c|` (or absent) falls back to `c`; an absent or
/// zero `period` falls back to `0.3·d` (`0.45·d` for in-out).
pub mod elastic {
    use super::PI;

    /// Default period as a fraction of the duration
    pub const DEFAULT_PERIOD: f64 = 0.3;

    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_in_with(t, b, c, d, None, None)
    }

    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_out_with(t, b, c, d, None, None)
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        ease_in_out_with(t, b, c, d, None, None)
    }

    /// Resolve amplitude, period and phase shift before any division
    fn shape(
        c: f64,
        default_period: f64,
        amplitude: Option<f64>,
        period: Option<f64>,
    ) -> (f64, f64, f64) {
        let p = match period {
            Some(p) if p != 0.0 && p.is_finite() => p,
            _ => default_period,
        };
        match amplitude {
            Some(a) if a != 0.0 && a >= c.abs() => (a, p, p / (2.0 * PI) * (c / a).asin()),
            _ => (c, p, p / 4.0),
        }
    }

    pub fn ease_in_with(
        t: f64,
        b: f64,
        c: f64,
        d: f64,
        amplitude: Option<f64>,
        period: Option<f64>,
    ) -> f64 {
        if t == 0.0 {
            return b;
        }
        let t = t / d;
        if t == 1.0 {
            return b + c;
        }
        let (a, p, s) = shape(c, d * DEFAULT_PERIOD, amplitude, period);
        let t = t - 1.0;
        -(a * 2.0_f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
    }

    pub fn ease_out_with(
        t: f64,
        b: f64,
        c: f64,
        d: f64,
        amplitude: Option<f64>,
        period: Option<f64>,
    ) -> f64 {
        if t == 0.0 {
            return b;
        }
        let t = t / d;
        if t == 1.0 {
            return b + c;
        }
        let (a, p, s) = shape(c, d * DEFAULT_PERIOD, amplitude, period);
        a * 2.0_f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
    }

    pub fn ease_in_out_with(
        t: f64,
        b: f64,
        c: f64,
        d: f64,
        amplitude: Option<f64>,
        period: Option<f64>,
    ) -> f64 {
        if t == 0.0 {
            return b;
        }
        let t = t / (d / 2.0);
        if t == 2.0 {
            return b + c;
        }
        let (a, p, s) = shape(c, d * (DEFAULT_PERIOD * 1.5), amplitude, period);
        let t = t - 1.0;
        let wave = ((t * d - s) * (2.0 * PI) / p).sin();
        if t < 0.0 {
            return -0.5 * (a * 2.0_f64.powf(10.0 * t) * wave) + b;
        }
        a * 2.0_f64.powf(-10.0 * t) * wave * 0.5 + c + b
    }
}

/// Decaying bounces at the destination
pub mod bounce {
    pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        let t = t / d;
        if t < 1.0 / 2.75 {
            c * (7.5625 * t * t) + b
        } else if t < 2.0 / 2.75 {
            let t = t - 1.5 / 2.75;
            c * (7.5625 * t * t + 0.75) + b
        } else if t < 2.5 / 2.75 {
            let t = t - 2.25 / 2.75;
            c * (7.5625 * t * t + 0.9375) + b
        } else {
            let t = t - 2.625 / 2.75;
            c * (7.5625 * t * t + 0.984375) + b
        }
    }

    pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
        c - ease_out(d - t, 0.0, c, d) + b
    }

    pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
        if t < d / 2.0 {
            ease_in(t * 2.0, 0.0, c, d) * 0.5 + b
        } else {
            ease_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
        }
    }
}
