//! Point classification against the shell.

use geonav_math::{polar_degrees, Point3, ORIGIN_R2};

use crate::SphereParams;

/// Which of the shell's constraints a containment test evaluates.
///
/// Surface hits are validated against the constraints of the *other*
/// surfaces, so the distance searches switch single checks off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checks {
    /// Test `rmin <= r <= rmax`.
    pub radius: bool,
    /// Test `theta1 <= theta <= theta2`.
    pub theta: bool,
    /// Test that the azimuth lies in the wedge.
    pub phi: bool,
}

impl Checks {
    /// Every constraint.
    pub const ALL: Self = Self {
        radius: true,
        theta: true,
        phi: true,
    };

    /// Polar and azimuthal constraints, for hits on a sphere.
    pub const ANGULAR: Self = Self {
        radius: false,
        theta: true,
        phi: true,
    };

    /// Radial and azimuthal constraints, for hits on the equator plane.
    pub const RADIUS_PHI: Self = Self {
        radius: true,
        theta: false,
        phi: true,
    };

    /// Radial and polar constraints, for hits on a wedge half-plane.
    pub const RADIUS_THETA: Self = Self {
        radius: true,
        theta: true,
        phi: false,
    };
}

/// Whether `point` satisfies the constraints selected by `checks`.
///
/// Bounds are inclusive. A point at the origin passes every angular check.
pub fn is_inside(params: &SphereParams, point: &Point3, checks: Checks) -> bool {
    let r2 = point.coords.norm_squared();
    if checks.radius {
        let rmin = params.rmin();
        let rmax = params.rmax();
        if params.has_inner_radius() && r2 < rmin * rmin {
            return false;
        }
        if r2 > rmax * rmax {
            return false;
        }
    }
    if r2 < ORIGIN_R2 {
        return true;
    }
    if checks.phi && params.has_phi_cut() && !params.wedge().contains_point(point) {
        return false;
    }
    if checks.theta && params.has_theta_cut() {
        let theta = polar_degrees(point, r2.sqrt());
        if theta < params.theta1() || theta > params.theta2() {
            return false;
        }
    }
    true
}
