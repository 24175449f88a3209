//! Scalar interpolation helpers shared by the zoom and pivot logic.

use glam::Vec3;

/// Unclamped linear interpolation.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `value` between `a` and `b` as a fraction, clamped to
/// `[0, 1]`. Returns 0 when the span is degenerate.
#[inline]
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((value - a) / span).clamp(0.0, 1.0)
}

/// Per-frame interpolation weight for a rate in units per second.
#[inline]
#[must_use]
pub fn frame_weight(dt: f32, rate: f32) -> f32 {
    (dt * rate).clamp(0.0, 1.0)
}

/// Clamp `value` between two bounds given in either order.
#[inline]
#[must_use]
pub fn clamp_between(value: f32, a: f32, b: f32) -> f32 {
    value.clamp(a.min(b), a.max(b))
}

/// Projection onto the ground plane (Y zeroed).
#[inline]
#[must_use]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(5.0, 18.0, 0.0), 5.0);
        assert_eq!(lerp(5.0, 18.0, 1.0), 18.0);
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
    }

    #[test]
    fn inverse_lerp_clamps_and_handles_degenerate_span() {
        assert_eq!(inverse_lerp(5.0, 18.0, 15.0), 10.0 / 13.0);
        assert_eq!(inverse_lerp(5.0, 18.0, 30.0), 1.0);
        assert_eq!(inverse_lerp(5.0, 18.0, 0.0), 0.0);
        assert_eq!(inverse_lerp(7.0, 7.0, 7.0), 0.0);
    }

    #[test]
    fn frame_weight_saturates() {
        assert_eq!(frame_weight(0.5, 4.0), 1.0);
        assert_eq!(frame_weight(0.0, 4.0), 0.0);
        assert!((frame_weight(0.016, 1.0) - 0.016).abs() < 1e-7);
    }

    #[test]
    fn clamp_between_accepts_reversed_bounds() {
        assert_eq!(clamp_between(50.0, 60.0, 20.0), 50.0);
        assert_eq!(clamp_between(10.0, 60.0, 20.0), 20.0);
        assert_eq!(clamp_between(70.0, 20.0, 60.0), 60.0);
    }

    #[test]
    fn horizontal_drops_height() {
        assert_eq!(horizontal(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 0.0, 3.0));
    }
}
