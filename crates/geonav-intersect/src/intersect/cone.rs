//! Ray-cone crossings for conical segments of revolution about Z.
//!
//! A segment is given by two rim circles `(r1, z1)` and `(r2, z2)`; its radius
//! varies linearly with `z` between them. Polar-angle cuts of a spherical
//! shell are exactly such segments with the apex at the origin.

use crate::{Ray, Wedge};

/// Distance along `ray` to the nearest forward crossing of the conical segment
/// between `(r1, z1)` and `(r2, z2)`, unbounded in azimuth.
pub fn cone_distance(ray: &Ray, r1: f64, z1: f64, r2: f64, z2: f64) -> Option<f64> {
    cone_roots(ray, r1, z1, r2, z2).into_iter().flatten().next()
}

/// Like [`cone_distance`], but only crossings whose azimuth lies inside
/// `wedge` count.
pub fn cone_seg_distance(
    ray: &Ray,
    r1: f64,
    z1: f64,
    r2: f64,
    z2: f64,
    wedge: &Wedge,
) -> Option<f64> {
    cone_roots(ray, r1, z1, r2, z2)
        .into_iter()
        .flatten()
        .find(|&t| wedge.contains_point(&ray.at(t)))
}

/// Forward crossings of the segment, ascending, restricted to `z` in the rim range.
fn cone_roots(ray: &Ray, r1: f64, z1: f64, r2: f64, z2: f64) -> [Option<f64>; 2] {
    let (r1, z1, r2, z2) = if z1 <= z2 {
        (r1, z1, r2, z2)
    } else {
        (r2, z2, r1, z1)
    };
    let mut out = [None, None];
    let height = z2 - z1;
    // A flat annulus is a plane, not a cone
    if height <= 0.0 {
        return out;
    }

    let p = ray.origin;
    let d = ray.direction.as_ref();

    // Radius along the ray: R(t) = e*t + f
    let slope = (r2 - r1) / height;
    let e = slope * d.z;
    let f = r1 + slope * (p.z - z1);

    // x(t)^2 + y(t)^2 = R(t)^2  ->  a t^2 + 2 b t + c = 0
    let a = d.x * d.x + d.y * d.y - e * e;
    let b = p.x * d.x + p.y * d.y - e * f;
    let c = p.x * p.x + p.y * p.y - f * f;

    let mut roots = [None, None];
    if a.abs() < 1e-12 {
        // Ray parallel to a generator: one crossing at most
        if b.abs() > 1e-12 {
            roots[0] = Some(-c / (2.0 * b));
        }
    } else {
        let disc = b * b - a * c;
        if disc < 0.0 {
            return out;
        }
        let sqrt_disc = disc.sqrt();
        let t1 = (-b - sqrt_disc) / a;
        let t2 = (-b + sqrt_disc) / a;
        roots = [Some(t1.min(t2)), Some(t1.max(t2))];
    }

    let mut n = 0;
    for t in roots.into_iter().flatten() {
        if t < 0.0 {
            continue;
        }
        let z = p.z + t * d.z;
        if z < z1 || z > z2 {
            continue;
        }
        out[n] = Some(t);
        n += 1;
    }
    out
}
