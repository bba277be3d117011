//! Vector helpers used across the detector.

use nalgebra::Vector3;

/// World axis pointing to the rig's right (the rig faces −y, so +x is its left).
#[inline]
pub fn right_axis() -> Vector3<f32> {
    Vector3::new(-1.0, 0.0, 0.0)
}

/// Normalizes `v`, returning the zero vector when `v` has no usable length.
#[inline]
pub fn normalize_or_zero(v: &Vector3<f32>) -> Vector3<f32> {
    v.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros)
}

/// Forward direction derived from a spine running from `spine_start` to
/// `spine_end` (both bone centers) and the fixed world right axis.
///
/// `up = normalize(end − start)`, `forward = normalize(up × right)`. A
/// degenerate spine (coincident centers) yields the zero vector.
pub fn forward_axis(spine_start: &Vector3<f32>, spine_end: &Vector3<f32>) -> Vector3<f32> {
    let up = normalize_or_zero(&(spine_end - spine_start));
    normalize_or_zero(&up.cross(&right_axis()))
}

/// Extent of a point cloud along x (max − min). Zero for an empty set.
pub fn x_extent<'a>(points: impl IntoIterator<Item = &'a Vector3<f32>>) -> f32 {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in points {
        min = min.min(p.x);
        max = max.max(p.x);
    }
    if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn upright_spine_faces_negative_y() {
        let fwd = forward_axis(&Vector3::new(0.0, 0.0, 1.0), &Vector3::new(0.0, 0.0, 1.5));
        assert!(approx_eq(fwd.x, 0.0));
        assert!(approx_eq(fwd.y, -1.0));
        assert!(approx_eq(fwd.z, 0.0));
    }

    #[test]
    fn degenerate_spine_gives_zero_forward() {
        let p = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(forward_axis(&p, &p), Vector3::zeros());
    }

    #[test]
    fn normalize_or_zero_keeps_direction() {
        let n = normalize_or_zero(&Vector3::new(0.0, 3.0, 4.0));
        assert!(approx_eq(n.norm(), 1.0));
        assert!(approx_eq(n.y, 0.6));
    }

    #[test]
    fn x_extent_of_points() {
        let pts = [
            Vector3::new(-0.5, 0.0, 0.0),
            Vector3::new(0.25, 1.0, 0.0),
            Vector3::new(1.0, -2.0, 3.0),
        ];
        assert!(approx_eq(x_extent(pts.iter()), 1.5));
        assert_eq!(x_extent(std::iter::empty()), 0.0);
    }
}
