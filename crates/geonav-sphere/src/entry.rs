//! Distance from an outside point to the shell along a ray.

use geonav_intersect::{
    cone_distance, cone_seg_distance, intersect_plane, sphere_crossing, Ray, SphereRoot,
};
use geonav_math::{Dir3, Point3, Vec3, BIG};

use crate::contains::{is_inside, Checks};
use crate::params::{PolarBound, PolarSurface};
use crate::SphereParams;

/// Distance along `dir` from `point` (outside the shell or on its boundary)
/// to the first surface point where the ray enters, or [`BIG`].
///
/// A ray starting outside the outer sphere that hits it inside the angular
/// range, or one starting inside the hole that leaves the hole inside the
/// angular range, enters right there. Every other case collects the
/// crossings of all surfaces that land on the actual boundary patch and
/// keeps the nearest.
pub fn entry_distance(params: &SphereParams, point: &Point3, dir: &Dir3) -> f64 {
    let ray = Ray::from_dir(*point, *dir);
    let r2 = point.coords.norm_squared();
    let rmax = params.rmax();
    let rmin = params.rmin();
    let mut best = BIG;

    if r2 > rmax * rmax {
        // Missing the outer sphere misses the shell
        let Some(s) = sphere_crossing(&ray, rmax, SphereRoot::First) else {
            return BIG;
        };
        if is_inside(params, &ray.at(s), Checks::ANGULAR) {
            return s;
        }
    }

    if params.has_inner_radius() {
        if r2 < rmin * rmin {
            if let Some(s) = sphere_hit(params, &ray, rmin, SphereRoot::First) {
                return s;
            }
        } else {
            for root in [SphereRoot::First, SphereRoot::Second] {
                if let Some(s) = sphere_hit(params, &ray, rmin, root) {
                    best = best.min(s);
                }
            }
        }
    }

    if params.has_theta1_surface() {
        best = best.min(polar_entry(params, &ray, PolarBound::Lower).unwrap_or(BIG));
    }
    if params.has_theta2_surface() {
        best = best.min(polar_entry(params, &ray, PolarBound::Upper).unwrap_or(BIG));
    }
    if params.has_phi_cut() {
        best = best.min(wedge_entry(params, &ray).unwrap_or(BIG));
    }
    best
}

/// Crossing of the sphere of `radius` that lands inside the polar band and
/// the wedge.
pub(crate) fn sphere_hit(params: &SphereParams, ray: &Ray, radius: f64, root: SphereRoot) -> Option<f64> {
    sphere_crossing(ray, radius, root).filter(|&s| is_inside(params, &ray.at(s), Checks::ANGULAR))
}

/// Entry through the surface cut by one polar bound.
fn polar_entry(params: &SphereParams, ray: &Ray, bound: PolarBound) -> Option<f64> {
    match params.polar_surface(bound) {
        PolarSurface::Equator => {
            // Only rays crossing from the other side of the plane
            if ray.origin.z * ray.direction.z >= 0.0 {
                return None;
            }
            let s = intersect_plane(ray, &Point3::origin(), &Vec3::z())?;
            let mut hit = ray.at(s);
            hit.z = 0.0;
            is_inside(params, &hit, Checks::RADIUS_PHI).then_some(s)
        }
        PolarSurface::Cone { r1, z1, r2, z2 } => {
            if params.has_phi_cut() {
                cone_seg_distance(ray, r1, z1, r2, z2, params.wedge())
            } else {
                cone_distance(ray, r1, z1, r2, z2)
            }
        }
    }
}

/// Entry through either wedge half-plane.
///
/// The ray must come from the outer side of the plane, and the hit must lie
/// on the wedge's own half of it (the bisector test) within the radial and
/// polar range.
fn wedge_entry(params: &SphereParams, ray: &Ray) -> Option<f64> {
    let wedge = params.wedge();
    let p = ray.origin.coords;
    let d = ray.direction.as_ref();
    let mut best: Option<f64> = None;

    for (normal, side) in [(wedge.normal1(), -1.0), (wedge.normal2(), 1.0)] {
        let above = p.dot(&normal);
        if above <= 0.0 {
            continue;
        }
        let un = d.dot(&normal);
        if un >= 0.0 {
            continue;
        }
        let s = -above / un;
        let hit = ray.at(s);
        if side * wedge.bisector_side(hit.x, hit.y) < 0.0 {
            continue;
        }
        if best.map_or(true, |b| s < b) && is_inside(params, &hit, Checks::RADIUS_THETA) {
            best = Some(s);
        }
    }
    best
}
