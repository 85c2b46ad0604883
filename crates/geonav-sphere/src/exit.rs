//! Distance from an inside point to the shell boundary, with the exit normal.

use geonav_intersect::{cone_distance, phi_min_distance, sphere_crossing, Ray, SphereRoot};
use geonav_math::{azimuth_degrees, Dir3, Point3, Vec3, BIG, ORIGIN_R2};

use crate::contains::{is_inside, Checks};
use crate::params::{PolarBound, PolarSurface};
use crate::SphereParams;

/// The surface a ray leaves the shell through.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ExitSurface {
    Inner,
    Outer,
    Polar(PolarBound),
    Wedge,
}

/// Nearest candidate seen so far.
struct Nearest {
    distance: f64,
    surface: Option<ExitSurface>,
}

impl Nearest {
    fn offer(&mut self, distance: Option<f64>, surface: ExitSurface) {
        if let Some(s) = distance {
            if s < self.distance {
                self.distance = s;
                self.surface = Some(surface);
            }
        }
    }
}

/// Distance along `dir` from `point` (inside the shell) to the boundary, and
/// the outward unit normal at the exit point.
///
/// Each constraint of the shell is left at the first crossing of its
/// surface, so the exit is the nearest of those crossings. Returns
/// `(BIG, None)` only when the point was not inside to begin with.
pub fn exit_crossing(params: &SphereParams, point: &Point3, dir: &Dir3) -> (f64, Option<Dir3>) {
    let r2 = point.coords.norm_squared();
    let rmax = params.rmax();

    // From the origin a ray pointing into the angular range runs straight to
    // rmax; any other direction leaves at once through a cone apex or wedge edge
    if r2 < ORIGIN_R2 && is_inside(params, &Point3::from(dir.into_inner()), Checks::ANGULAR) {
        return (rmax, Some(*dir));
    }

    let ray = Ray::from_dir(*point, *dir);
    let b = point.coords.dot(dir.as_ref());
    let mut nearest = Nearest {
        distance: BIG,
        surface: None,
    };

    if params.has_inner_radius() {
        let rmin = params.rmin();
        let s = if r2 <= rmin * rmin {
            (b < 0.0).then_some(0.0)
        } else {
            sphere_crossing(&ray, rmin, SphereRoot::First)
        };
        nearest.offer(s, ExitSurface::Inner);
    }

    let s = if r2 >= rmax * rmax && b >= 0.0 {
        Some(0.0)
    } else {
        sphere_crossing(&ray, rmax, SphereRoot::Second)
    };
    nearest.offer(s, ExitSurface::Outer);

    if params.has_theta1_surface() {
        let s = polar_exit(params, &ray, PolarBound::Lower);
        nearest.offer(s, ExitSurface::Polar(PolarBound::Lower));
    }
    if params.has_theta2_surface() {
        let s = polar_exit(params, &ray, PolarBound::Upper);
        nearest.offer(s, ExitSurface::Polar(PolarBound::Upper));
    }
    if params.has_phi_cut() {
        nearest.offer(phi_min_distance(&ray, params.wedge()), ExitSurface::Wedge);
    }

    match nearest.surface {
        Some(surface) => {
            let hit = ray.at(nearest.distance);
            (nearest.distance, Some(exit_normal(params, &hit, surface)))
        }
        None => (BIG, None),
    }
}

fn polar_exit(params: &SphereParams, ray: &Ray, bound: PolarBound) -> Option<f64> {
    match params.polar_surface(bound) {
        PolarSurface::Equator => {
            let (pz, dz) = (ray.origin.z, ray.direction.z);
            // Lower bound at 90 keeps z <= 0, upper bound keeps z >= 0
            let leaving = match bound {
                PolarBound::Lower => dz > 0.0,
                PolarBound::Upper => dz < 0.0,
            };
            leaving.then(|| (-pz / dz).max(0.0))
        }
        PolarSurface::Cone { r1, z1, r2, z2 } => cone_distance(ray, r1, z1, r2, z2),
    }
}

fn exit_normal(params: &SphereParams, hit: &Point3, surface: ExitSurface) -> Dir3 {
    match surface {
        ExitSurface::Inner => Dir3::new_normalize(-hit.coords),
        ExitSurface::Outer => Dir3::new_normalize(hit.coords),
        ExitSurface::Polar(bound) => {
            let sign = match bound {
                PolarBound::Lower => -1.0,
                PolarBound::Upper => 1.0,
            };
            if let PolarSurface::Equator = params.polar_surface(bound) {
                return Dir3::new_normalize(Vec3::new(0.0, 0.0, -sign));
            }
            // Unit vector towards increasing polar angle on the cone
            let (st, ct) = params.theta(bound).to_radians().sin_cos();
            let (sp, cp) = azimuth_degrees(hit.x, hit.y).to_radians().sin_cos();
            Dir3::new_normalize(sign * Vec3::new(ct * cp, ct * sp, -st))
        }
        ExitSurface::Wedge => {
            let wedge = params.wedge();
            let n1 = wedge.normal1();
            let n2 = wedge.normal2();
            if hit.coords.dot(&n1).abs() <= hit.coords.dot(&n2).abs() {
                Dir3::new_normalize(n1)
            } else {
                Dir3::new_normalize(n2)
            }
        }
    }
}
