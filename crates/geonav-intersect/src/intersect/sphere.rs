//! Ray-sphere crossing (quadratic equation).

use crate::Ray;

/// Which root of the ray/sphere quadratic to take when the ray starts outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SphereRoot {
    /// The nearer root: where the ray enters the ball.
    First,
    /// The farther root: where the ray leaves the ball again.
    Second,
}

/// Distance along `ray` to the origin-centred sphere of radius `radius`.
///
/// Solves `|p + s d|^2 = R^2` with `b = p.d`, `c = |p|^2 - R^2` and
/// discriminant `b^2 - c`. A ray starting inside the ball (`c <= 0`) has a
/// single forward root `-b + sqrt(disc)`; from outside, `root` picks between
/// `-b - sqrt(disc)` and `-b + sqrt(disc)`. Negative roots lie behind the
/// origin and yield `None`, as do non-positive radii.
pub fn sphere_crossing(ray: &Ray, radius: f64, root: SphereRoot) -> Option<f64> {
    if radius <= 0.0 {
        return None;
    }
    let p = ray.origin.coords;
    let b = p.dot(ray.direction.as_ref());
    let c = p.norm_squared() - radius * radius;

    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();

    let s = if c <= 0.0 {
        -b + sqrt_disc
    } else {
        match root {
            SphereRoot::First => -b - sqrt_disc,
            SphereRoot::Second => -b + sqrt_disc,
        }
    };

    if s < 0.0 {
        None
    } else {
        Some(s)
    }
}
