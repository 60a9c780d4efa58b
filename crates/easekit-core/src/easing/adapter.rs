//! L4 Atomic Layer: Conversions between the two calling conventions
//!
//! The normalized form `p -> p'` is canonical. Any normalized curve can be
//! lifted to the absolute `(t, b, c, d)` form, and any absolute curve can
//! be viewed as normalized by fixing `b = 0, c = 1, d = 1`.

/// Lift a normalized curve into the absolute convention:
/// `value(t) = b + c · f(t / d)`
///
/// A non-positive duration has no time to ease over, so the result is the
/// final value `b + c`.
pub fn to_absolute<F>(normalized: F) -> impl Fn(f64, f64, f64, f64) -> f64
where
    F: Fn(f64) -> f64,
{
    move |t, b, c, d| {
        if d <= 0.0 {
            return b + c;
        }
        b + c * normalized(t / d)
    }
}

/// View an absolute curve as a normalized one: `p -> f(p, 0, 1, 1)`
///
/// Boundary values carry over unchanged: whatever the absolute form yields
/// at `t = 0` and `t = d` is what the normalized view yields at 0 and 1.
pub fn from_absolute<F>(absolute: F) -> impl Fn(f64) -> f64
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    move |p| absolute(p, 0.0, 1.0, 1.0)
}
