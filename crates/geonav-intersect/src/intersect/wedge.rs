//! Azimuthal wedges and ray crossings of their bounding half-planes.

use geonav_math::{azimuth_degrees, normalize_degrees, Point3, Tolerance, Vec3};

use crate::Ray;

/// An azimuthal sector about Z, running counter-clockwise from `phi1`.
///
/// Caches the sines and cosines of both bounding planes and of the bisector,
/// which the half-plane tests need on every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    phi1: f64,
    dphi: f64,
    /// `sin(phi1)`.
    pub sin1: f64,
    /// `cos(phi1)`.
    pub cos1: f64,
    /// `sin(phi2)`.
    pub sin2: f64,
    /// `cos(phi2)`.
    pub cos2: f64,
    /// Sine of the bisector angle `phi1 + dphi / 2`.
    pub sin_mid: f64,
    /// Cosine of the bisector angle.
    pub cos_mid: f64,
}

impl Wedge {
    /// Wedge from `phi1` counter-clockwise to `phi2`, both in degrees.
    ///
    /// Coinciding angles describe the full turn.
    pub fn new(phi1: f64, phi2: f64) -> Self {
        let phi1 = normalize_degrees(phi1);
        let mut dphi = (phi2 - phi1).rem_euclid(360.0);
        if dphi <= 0.0 || dphi >= 360.0 {
            dphi = 360.0;
        }
        Self::from_width(phi1, dphi)
    }

    /// The full turn, starting at 0 degrees.
    pub fn full() -> Self {
        Self::from_width(0.0, 360.0)
    }

    fn from_width(phi1: f64, dphi: f64) -> Self {
        let (sin1, cos1) = phi1.to_radians().sin_cos();
        let (sin2, cos2) = (phi1 + dphi).to_radians().sin_cos();
        // Half the width past phi1, so wedges wrapping through 0 keep a true bisector
        let (sin_mid, cos_mid) = (phi1 + 0.5 * dphi).to_radians().sin_cos();
        Self {
            phi1,
            dphi,
            sin1,
            cos1,
            sin2,
            cos2,
            sin_mid,
            cos_mid,
        }
    }

    /// Start angle in degrees, in `[0, 360)`.
    pub fn phi1(&self) -> f64 {
        self.phi1
    }

    /// End angle in degrees, in `[0, 360)`.
    pub fn phi2(&self) -> f64 {
        normalize_degrees(self.phi1 + self.dphi)
    }

    /// Angular width in degrees, in `(0, 360]`.
    pub fn width(&self) -> f64 {
        self.dphi
    }

    /// Bisector angle in degrees.
    pub fn bisector(&self) -> f64 {
        normalize_degrees(self.phi1 + 0.5 * self.dphi)
    }

    /// Whether this wedge covers the whole turn.
    pub fn is_full(&self) -> bool {
        self.dphi >= 360.0
    }

    /// Counter-clockwise angle from `phi1` to `phi`, in `[0, 360)`.
    #[inline]
    pub fn offset(&self, phi: f64) -> f64 {
        normalize_degrees(phi - self.phi1)
    }

    /// Whether the azimuth `phi` (degrees) lies in the wedge, both edges inclusive.
    #[inline]
    pub fn contains_azimuth(&self, phi: f64) -> bool {
        let eps = Tolerance::DEFAULT.angular;
        let offset = self.offset(phi);
        offset <= self.dphi + eps || offset >= 360.0 - eps
    }

    /// Whether `point` lies in the wedge. Points on the Z axis belong to every wedge.
    #[inline]
    pub fn contains_point(&self, point: &Point3) -> bool {
        if point.x * point.x + point.y * point.y < 1e-20 {
            return true;
        }
        self.contains_azimuth(azimuth_degrees(point.x, point.y))
    }

    /// Outward unit normal of the `phi1` half-plane (pointing clockwise).
    pub fn normal1(&self) -> Vec3 {
        Vec3::new(self.sin1, -self.cos1, 0.0)
    }

    /// Outward unit normal of the `phi2` half-plane (pointing counter-clockwise).
    pub fn normal2(&self) -> Vec3 {
        Vec3::new(-self.sin2, self.cos2, 0.0)
    }

    /// Signed position of `(x, y)` relative to the bisector line:
    /// negative on the `phi1` side, positive on the `phi2` side.
    #[inline]
    pub fn bisector_side(&self, x: f64, y: f64) -> f64 {
        y * self.cos_mid - x * self.sin_mid
    }
}

/// Distance along `ray` to the nearest forward crossing of either wedge
/// half-plane.
///
/// A crossing of the `phi1` plane only counts on the `phi1` half (negative
/// side of the bisector), likewise for `phi2`; crossings of the opposite
/// extensions are ignored. Used by rays starting inside the wedge.
pub fn phi_min_distance(ray: &Ray, wedge: &Wedge) -> Option<f64> {
    let p = ray.origin;
    let d = ray.direction.as_ref();
    let mut best: Option<f64> = None;

    let un = d.x * wedge.sin1 - d.y * wedge.cos1;
    if un.abs() > 1e-12 {
        let s = (p.y * wedge.cos1 - p.x * wedge.sin1) / un;
        if s >= 0.0 && wedge.bisector_side(p.x + s * d.x, p.y + s * d.y) <= 0.0 {
            best = Some(s);
        }
    }

    let un = d.x * wedge.sin2 - d.y * wedge.cos2;
    if un.abs() > 1e-12 {
        let s = (p.y * wedge.cos2 - p.x * wedge.sin2) / un;
        if s >= 0.0 && wedge.bisector_side(p.x + s * d.x, p.y + s * d.y) >= 0.0 {
            best = Some(best.map_or(s, |b| b.min(s)));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wedge_normalization() {
        let w = Wedge::new(-90.0, 90.0);
        assert_abs_diff_eq!(w.phi1(), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.width(), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.phi2(), 90.0, epsilon = 1e-9);
        assert!(Wedge::new(0.0, 360.0).is_full());
        assert!(Wedge::full().contains_azimuth(359.9));
    }

    #[test]
    fn test_wrapping_bisector() {
        // 300 -> 60 wraps through 0: the bisector is 0, not 180
        let w = Wedge::new(300.0, 60.0);
        assert_abs_diff_eq!(w.width(), 120.0, epsilon = 1e-12);
        assert!(w.bisector().abs() < 1e-9 || (w.bisector() - 360.0).abs() < 1e-9);
        assert!(w.contains_azimuth(10.0));
        assert!(w.contains_azimuth(310.0));
        assert!(!w.contains_azimuth(180.0));
    }

    #[test]
    fn test_edges_inclusive() {
        let w = Wedge::new(0.0, 90.0);
        assert!(w.contains_point(&Point3::new(7.0, 0.0, 0.0)));
        assert!(w.contains_point(&Point3::new(0.0, 7.0, 0.0)));
        assert!(!w.contains_point(&Point3::new(-7.0, 0.0, 0.0)));
        assert!(w.contains_point(&Point3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn test_outward_normals() {
        let w = Wedge::new(0.0, 90.0);
        assert!((w.normal1() - Vec3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
        assert!((w.normal2() - Vec3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_phi_min_from_inside() {
        let w = Wedge::new(0.0, 90.0);
        // Inside the quarter, heading -Y: leaves through the phi1 half-plane (y = 0)
        let ray = Ray::new(Point3::new(3.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let s = phi_min_distance(&ray, &w).unwrap();
        assert_abs_diff_eq!(s, 2.0, epsilon = 1e-12);
        // Heading -X: leaves through the phi2 half-plane (x = 0)
        let ray = Ray::new(Point3::new(3.0, 2.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let s = phi_min_distance(&ray, &w).unwrap();
        assert_abs_diff_eq!(s, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phi_min_parallel_and_receding() {
        let w = Wedge::new(0.0, 90.0);
        // Heading +X runs parallel to phi1 and away from phi2
        let ray = Ray::new(Point3::new(3.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(phi_min_distance(&ray, &w).is_none());
    }

    #[test]
    fn test_phi_min_reflex_wedge() {
        // 270 degree wedge: the missing quadrant is x > 0, y < 0
        let w = Wedge::new(0.0, 270.0);
        // From the third quadrant heading +X: crosses the phi2 half-plane
        // (negative y axis) at s = 2
        let ray = Ray::new(Point3::new(-2.0, -1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let s = phi_min_distance(&ray, &w).unwrap();
        assert_abs_diff_eq!(s, 2.0, epsilon = 1e-12);
        // From (2, 1) heading -Y: crosses the phi1 half-plane (positive x axis) at s = 1
        let ray = Ray::new(Point3::new(2.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let s = phi_min_distance(&ray, &w).unwrap();
        assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
        // From (-2, 1) heading -Y: crosses only the negative x axis, which is
        // the extension of phi1 and lies inside the wedge
        let ray = Ray::new(Point3::new(-2.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(phi_min_distance(&ray, &w).is_none());
    }
}
