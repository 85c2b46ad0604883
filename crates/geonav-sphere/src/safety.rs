//! Conservative distance-to-boundary estimates.
//!
//! Each constraint of the shell contributes a lower bound on the distance to
//! its surface; the estimate is the smallest one. Constraints that do not
//! apply contribute [`BIG`].

use geonav_math::{azimuth_degrees, polar_degrees, Point3, BIG, ORIGIN_R2};

use crate::SphereParams;

/// Distance from a point to a half-plane at angular gap `gap` (degrees),
/// `rho` being the point's distance from the plane's edge.
#[inline]
fn half_plane_bound(rho: f64, gap: f64) -> f64 {
    if gap >= 90.0 {
        rho
    } else {
        rho * gap.to_radians().sin()
    }
}

/// Lower bound on the distance from an outside `point` to the shell.
///
/// Only violated constraints contribute. A point that violates none (an
/// inside point passed by mistake) gets zero.
pub fn safety_outside(params: &SphereParams, point: &Point3) -> f64 {
    let r = point.coords.norm();
    let mut safe = BIG;

    if params.has_inner_radius() && r < params.rmin() {
        safe = safe.min(params.rmin() - r);
    }
    if r > params.rmax() {
        safe = safe.min(r - params.rmax());
    }

    if r * r >= ORIGIN_R2 {
        if params.has_theta_cut() {
            let theta = polar_degrees(point, r);
            if theta < params.theta1() {
                safe = safe.min(r * (params.theta1() - theta).to_radians().sin());
            } else if theta > params.theta2() {
                safe = safe.min(r * (theta - params.theta2()).to_radians().sin());
            }
        }

        let wedge = params.wedge();
        let rho = (point.x * point.x + point.y * point.y).sqrt();
        if params.has_phi_cut() && rho * rho >= ORIGIN_R2 {
            let offset = wedge.offset(azimuth_degrees(point.x, point.y));
            if offset > wedge.width() {
                let to_phi1 = 360.0 - offset;
                let to_phi2 = offset - wedge.width();
                safe = safe
                    .min(half_plane_bound(rho, to_phi1))
                    .min(half_plane_bound(rho, to_phi2));
            }
        }
    }

    if safe >= BIG {
        0.0
    } else {
        safe
    }
}

/// Lower bound on the distance from an inside `point` to the shell boundary.
pub fn safety_inside(params: &SphereParams, point: &Point3) -> f64 {
    let r = point.coords.norm();
    let mut safe = params.rmax() - r;
    if params.has_inner_radius() {
        safe = safe.min(r - params.rmin());
    }

    if r * r < ORIGIN_R2 {
        // The origin is the apex of every polar cone and the edge of the wedge
        if params.has_theta_cut() || params.has_phi_cut() {
            return 0.0;
        }
        return safe.max(0.0);
    }

    if params.has_theta1_surface() || params.has_theta2_surface() {
        let theta = polar_degrees(point, r);
        if params.has_theta1_surface() {
            safe = safe.min(r * (theta - params.theta1()).to_radians().sin());
        }
        if params.has_theta2_surface() {
            safe = safe.min(r * (params.theta2() - theta).to_radians().sin());
        }
    }

    if params.has_phi_cut() {
        let wedge = params.wedge();
        let rho = (point.x * point.x + point.y * point.y).sqrt();
        if rho * rho < ORIGIN_R2 {
            return 0.0;
        }
        let offset = wedge.offset(azimuth_degrees(point.x, point.y));
        // Accepted by the edge tolerance but past the edge: on the boundary
        if offset > wedge.width() {
            return 0.0;
        }
        safe = safe
            .min(half_plane_bound(rho, offset))
            .min(half_plane_bound(rho, wedge.width() - offset));
    }

    safe.max(0.0)
}
