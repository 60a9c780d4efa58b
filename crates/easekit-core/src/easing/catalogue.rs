//! L4 Atomic Layer: Normalized easing catalogue
//!
//! Every function maps progress `p` (conventionally in [0, 1]) to eased
//! progress. f(0) = 0 and f(1) = 1 unless the curve is a ping-pong, which
//! returns to 0 at p = 1. Inputs outside [0, 1] are evaluated as-is.

use std::f64::consts::FRAC_PI_2;

use super::builders::{polynomial_in, polynomial_in_out, polynomial_out, sinusoidal};

/// Constant speed
pub mod linear {
    /// Identity mapping
    #[inline]
    pub fn ease_none(p: f64) -> f64 {
        p
    }

    /// Identical to [`ease_none`]
    #[inline]
    pub fn ease_in(p: f64) -> f64 {
        p
    }

    /// Identical to [`ease_none`]
    #[inline]
    pub fn ease_out(p: f64) -> f64 {
        p
    }

    /// Identical to [`ease_none`]
    #[inline]
    pub fn ease_in_out(p: f64) -> f64 {
        p
    }

    /// Rises 0 → 1 over the first half, falls back to 0 over the second
    #[inline]
    pub fn ping_pong(p: f64) -> f64 {
        1.0 - (2.0 * p - 1.0).abs()
    }
}

macro_rules! polynomial_family {
    ($(#[$doc:meta])* $name:ident, $degree:expr) => {
        $(#[$doc])*
        pub mod $name {
            use super::*;

            /// Polynomial degree of this family
            pub const DEGREE: u32 = $degree;

            #[inline]
            pub fn ease_in(p: f64) -> f64 {
                polynomial_in(DEGREE)(p)
            }

            #[inline]
            pub fn ease_out(p: f64) -> f64 {
                polynomial_out(DEGREE)(p)
            }

            #[inline]
            pub fn ease_in_out(p: f64) -> f64 {
                polynomial_in_out(DEGREE)(p)
            }
        }
    };
}

polynomial_family!(
    /// Quadratic (p²) acceleration
    quad,
    2
);
polynomial_family!(
    /// Cubic (p³) acceleration
    cubic,
    3
);
polynomial_family!(
    /// Quartic (p⁴) acceleration
    quart,
    4
);
polynomial_family!(
    /// Quintic (p⁵) acceleration
    quint,
    5
);

/// Cosine-based acceleration
pub mod sine {
    use super::*;

    /// f(p) = 1 - cos(p·π/2)
    #[inline]
    pub fn ease_in(p: f64) -> f64 {
        1.0 - (p * FRAC_PI_2).cos()
    }

    /// f(p) = sin(p·π/2)
    #[inline]
    pub fn ease_out(p: f64) -> f64 {
        (p * FRAC_PI_2).sin()
    }

    /// Standard ease curve, sinusoidal frequency 1
    #[inline]
    pub fn ease_in_out(p: f64) -> f64 {
        sinusoidal(1.0)(p)
    }

    /// Sinusoidal frequency 2: 0 → 1 → 0
    #[inline]
    pub fn ping_pong(p: f64) -> f64 {
        sinusoidal(2.0)(p)
    }
}
