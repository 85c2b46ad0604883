//! Axis-aligned bounds of a shell.

use geonav_math::{normalize_degrees, Point3};
use geonav_solid::BoundingBox;

use crate::SphereParams;

/// Smallest axis-aligned box around the shell described by `params`.
pub fn compute_bounding_box(params: &SphereParams) -> BoundingBox {
    let rmax = params.rmax();
    let rmin = params.rmin();
    if params.is_full_sphere() {
        return BoundingBox::cube(rmax);
    }

    let (t1, t2) = (params.theta1(), params.theta2());
    let (st1, st2) = (t1.to_radians().sin(), t2.to_radians().sin());

    // Radii of the shell's projection onto the XY plane
    let mut outer_min = (rmax * st1).min(rmax * st2);
    let mut outer_max = (rmax * st1).max(rmax * st2);
    let inner_min = (rmin * st1).min(rmin * st2);
    let mut inner_max = (rmin * st1).max(rmin * st2);
    if t1 <= 90.0 && t2 >= 90.0 {
        outer_max = rmax;
        inner_max = rmin;
    }
    outer_min = outer_min.min(inner_min);
    outer_max = outer_max.max(inner_max);

    let (phi1, dphi) = (params.phi1(), params.dphi());
    let (s1, c1) = phi1.to_radians().sin_cos();
    let (s2, c2) = (phi1 + dphi).to_radians().sin_cos();
    let xs = [outer_max * c1, outer_max * c2, outer_min * c1, outer_min * c2];
    let ys = [outer_max * s1, outer_max * s2, outer_min * s1, outer_min * s2];
    let mut xmin = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let mut xmax = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut ymin = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let mut ymax = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Widen to the full projected radius wherever the wedge spans an axis
    let spans = |axis: f64| normalize_degrees(axis - phi1) <= dphi;
    if spans(0.0) {
        xmax = outer_max;
    }
    if spans(90.0) {
        ymax = outer_max;
    }
    if spans(180.0) {
        xmin = -outer_max;
    }
    if spans(270.0) {
        ymin = -outer_max;
    }

    let (ct1, ct2) = (t1.to_radians().cos(), t2.to_radians().cos());
    let zs = [rmin * ct1, rmax * ct1, rmin * ct2, rmax * ct2];
    let zmin = zs.iter().copied().fold(f64::INFINITY, f64::min);
    let zmax = zs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    BoundingBox::from_extents(Point3::new(xmin, ymin, zmin), Point3::new(xmax, ymax, zmax))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_full_sphere_is_cube() {
        let p = SphereParams::shell(3.0, 10.0).unwrap();
        let b = compute_bounding_box(&p);
        assert_abs_diff_eq!(b.dx(), 10.0);
        assert_abs_diff_eq!(b.dy(), 10.0);
        assert_abs_diff_eq!(b.dz(), 10.0);
        assert_abs_diff_eq!(b.origin().coords.norm(), 0.0);
    }

    #[test]
    fn test_upper_hemisphere() {
        let p = SphereParams::new(0.0, 10.0, 0.0, 90.0, 0.0, 360.0).unwrap();
        let b = compute_bounding_box(&p);
        assert_abs_diff_eq!(b.min().x, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max().y, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min().z, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max().z, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.origin().z, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_shell() {
        let p = SphereParams::new(5.0, 10.0, 0.0, 180.0, 0.0, 90.0).unwrap();
        let b = compute_bounding_box(&p);
        assert_abs_diff_eq!(b.min().x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max().x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min().y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max().y, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min().z, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max().z, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wrapping_wedge_band() {
        // Equatorial band 60..120 in a wedge wrapping through 0
        let p = SphereParams::new(0.0, 2.0, 60.0, 120.0, 330.0, 30.0).unwrap();
        let b = compute_bounding_box(&p);
        assert_abs_diff_eq!(b.max().x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min().x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max().y, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min().y, -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max().z, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min().z, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_box_encloses_samples() {
        let p = SphereParams::new(1.0, 3.0, 20.0, 70.0, 100.0, 200.0).unwrap();
        let b = compute_bounding_box(&p);
        let (lo, hi) = (b.min(), b.max());
        for i in 0..=10 {
            for j in 0..=10 {
                for r in [1.0, 2.0, 3.0] {
                    let t = (20.0 + 5.0 * i as f64).to_radians();
                    let f = (100.0 + 10.0 * j as f64).to_radians();
                    let q = Point3::new(r * t.sin() * f.cos(), r * t.sin() * f.sin(), r * t.cos());
                    for k in 0..3 {
                        assert!(q[k] >= lo[k] - 1e-9 && q[k] <= hi[k] + 1e-9);
                    }
                }
            }
        }
    }
}
