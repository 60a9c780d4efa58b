//! L4 Atomic Layer: Family builders for normalized easing curves
//!
//! Each builder returns a pure `p -> p'` function for one member of a
//! parametric family, so the per-degree catalogue entries share a single
//! definition of the shape.

use std::f64::consts::PI;

/// Polynomial ease-in of degree `n`: f(p) = pⁿ
///
/// # Arguments
/// * `n` - Polynomial degree (1 = linear, 2 = quadratic, ...)
#[inline]
pub fn polynomial_in(n: u32) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    debug_assert!(n >= 1, "polynomial degree must be at least 1");
    move |p: f64| p.powi(n as i32)
}

/// Polynomial ease-out of degree `n`: f(p) = p^(1/n)
///
/// Degree 2 uses a plain square root.
#[inline]
pub fn polynomial_out(n: u32) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    debug_assert!(n >= 1, "polynomial degree must be at least 1");
    move |p: f64| match n {
        1 => p,
        2 => p.sqrt(),
        _ => p.powf(1.0 / n as f64),
    }
}

/// Polynomial ease-in-out of degree `n`
///
/// Accelerates as 2ⁿ⁻¹·pⁿ up to the midpoint, then mirrors the curve so
/// that it decelerates into 1. Odd and even degrees need opposite signs on
/// the second half because (p-1)ⁿ is negative below 1 only for odd n.
#[inline]
pub fn polynomial_in_out(n: u32) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    debug_assert!(n >= 1, "polynomial degree must be at least 1");
    let scale = 2.0_f64.powi(n as i32 - 1);
    move |p: f64| {
        if p < 0.5 {
            scale * p.powi(n as i32)
        } else if n % 2 == 0 {
            -scale * (p - 1.0).powi(n as i32) + 1.0
        } else {
            scale * (p - 1.0).powi(n as i32) + 1.0
        }
    }
}

/// Sinusoidal curve with frequency `f`: f(p) = cos(f·π·p + π)/2 + 0.5
///
/// `f = 1` is the classic ease-in-out (0 → 1); `f = 2` rises and falls
/// back (0 → 1 → 0).
#[inline]
pub fn sinusoidal(frequency: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync + 'static {
    move |p: f64| (frequency * PI * p + PI).cos() / 2.0 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_polynomial_boundaries() {
        for n in 1..=6 {
            for f in [
                &polynomial_in(n) as &dyn Fn(f64) -> f64,
                &polynomial_out(n),
                &polynomial_in_out(n),
            ] {
                assert!(f(0.0).abs() < EPSILON, "degree {} at p=0", n);
                assert!((f(1.0) - 1.0).abs() < EPSILON, "degree {} at p=1", n);
            }
        }
    }

    #[test]
    fn test_polynomial_in_out_continuous_at_midpoint() {
        for n in 1..=6 {
            let f = polynomial_in_out(n);
            let below = f(0.5 - 1e-12);
            let at = f(0.5);
            assert!((at - 0.5).abs() < EPSILON, "degree {} midpoint = {}", n, at);
            assert!((below - at).abs() < 1e-9, "degree {} jumps at midpoint", n);
        }
    }

    #[test]
    fn test_polynomial_in_out_odd_degree_values() {
        let cubic = polynomial_in_out(3);
        // 4·0.25³ and its mirror
        assert!((cubic(0.25) - 0.0625).abs() < EPSILON);
        assert!((cubic(0.75) - 0.9375).abs() < EPSILON);
    }

    #[test]
    fn test_polynomial_out_is_inverse_of_in() {
        for n in 2..=5 {
            let ease_in = polynomial_in(n);
            let ease_out = polynomial_out(n);
            for i in 0..=10 {
                let p = i as f64 / 10.0;
                assert!((ease_in(ease_out(p)) - p).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_sinusoidal_frequencies() {
        let ease = sinusoidal(1.0);
        assert!(ease(0.0).abs() < EPSILON);
        assert!((ease(0.5) - 0.5).abs() < EPSILON);
        assert!((ease(1.0) - 1.0).abs() < EPSILON);

        let ping_pong = sinusoidal(2.0);
        assert!(ping_pong(0.0).abs() < EPSILON);
        assert!((ping_pong(0.5) - 1.0).abs() < EPSILON);
        assert!(ping_pong(1.0).abs() < EPSILON);
    }

    #[test]
    fn test_out_of_range_input_does_not_panic() {
        let f = polynomial_in_out(4);
        assert!(f(1.5).is_finite());
        assert!(f(-0.5).is_finite());
        assert!(sinusoidal(1.0)(3.0).is_finite());
    }
}
