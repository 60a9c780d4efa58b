//! L4 Atomic Layer: Time calculation utilities for animation runs
//!
//! Timestamps are milliseconds on whatever clock the host ticks with.

/// Raw progress of `elapsed_ms` through `duration_ms`, clamped to [0.0, 1.0]
///
/// A non-positive duration counts as already finished.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Check if a run that has been going for `elapsed_ms` is complete
#[inline]
pub fn is_complete(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor, usually [0.0, 1.0] but overshoot is allowed
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for 8-bit color channels, rounded and saturated
#[inline]
pub fn lerp_u8(from: u8, to: u8, t: f64) -> u8 {
    lerp(from as f64, to as f64, t).round().clamp(0.0, 255.0) as u8
}
