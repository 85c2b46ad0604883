#![warn(missing_docs)]

//! Spherical shell solid for geonav.
//!
//! The shell is the region `rmin <= r <= rmax`, optionally restricted to a
//! polar band `theta1 <= theta <= theta2` and an azimuthal wedge running
//! counter-clockwise from `phi1` to `phi2`. Angles are in degrees.
//!
//! # Architecture
//!
//! - [`SphereParams`] - Validated dimensions and derived flags
//! - [`contains`] - Point classification with selectable constraints
//! - [`compute_bounding_box`] - Axis-aligned bounds
//! - [`entry`] / [`exit`] - Ray searches into and out of the shell
//! - [`safety`] - Conservative distance-to-boundary estimates
//! - [`Sphere`] - The shape, implementing [`geonav_solid::Solid`]
//!
//! # Example
//!
//! ```
//! use geonav_math::{Dir3, Point3, Vec3, BIG};
//! use geonav_solid::{QueryMode, Solid};
//! use geonav_sphere::Sphere;
//!
//! let shell = Sphere::from_slice(&[0.0, 10.0]).unwrap();
//! let down = Dir3::new_normalize(Vec3::new(0.0, 0.0, -1.0));
//! let hit = shell.dist_to_in(&Point3::new(0.0, 0.0, 20.0), &down, QueryMode::Unconditional, BIG);
//! assert!((hit.distance - 10.0).abs() < 1e-12);
//! ```

mod bbox;
pub mod contains;
pub mod entry;
pub mod exit;
mod params;
pub mod safety;
mod shape;

pub use bbox::compute_bounding_box;
pub use contains::{is_inside, Checks};
pub use params::{SphereDimensions, SphereParams};
pub use shape::Sphere;

#[cfg(test)]
mod tests {
    //! Sampled properties over a spread of shell configurations.

    use super::*;
    use geonav_math::{Dir3, Point3, Vec3, BIG};
    use geonav_solid::{QueryMode, Solid};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn configs() -> Vec<Sphere> {
        [
            vec![0.0, 10.0],
            vec![5.0, 10.0],
            vec![0.0, 10.0, 30.0, 150.0],
            vec![2.0, 10.0, 0.0, 90.0],
            vec![2.0, 10.0, 90.0, 180.0, 0.0, 90.0],
            vec![3.0, 10.0, 20.0, 70.0, 0.0, 90.0],
            vec![0.0, 10.0, 0.0, 180.0, 0.0, 270.0],
            vec![4.0, 10.0, 40.0, 120.0, 300.0, 60.0],
            vec![1.0, 10.0, 100.0, 170.0, 45.0, 300.0],
        ]
        .iter()
        .map(|v| Sphere::from_slice(v).unwrap())
        .collect()
    }

    fn random_dir(rng: &mut StdRng) -> Dir3 {
        loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let n2 = v.norm_squared();
            if n2 > 1e-3 && n2 <= 1.0 {
                return Dir3::new_normalize(v);
            }
        }
    }

    fn random_point(rng: &mut StdRng, half: f64) -> Point3 {
        Point3::new(
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
            rng.gen_range(-half..half),
        )
    }

    fn random_inside(rng: &mut StdRng, shape: &Sphere) -> Point3 {
        let b = shape.bounding_box();
        loop {
            let (lo, hi) = (b.min(), b.max());
            let p = Point3::new(
                rng.gen_range(lo.x..=hi.x),
                rng.gen_range(lo.y..=hi.y),
                rng.gen_range(lo.z..=hi.z),
            );
            if shape.contains(&p) {
                return p;
            }
        }
    }

    fn random_outside(rng: &mut StdRng, shape: &Sphere) -> Point3 {
        let half = 1.5 * shape.params().rmax();
        loop {
            let p = random_point(rng, half);
            if !shape.contains(&p) {
                return p;
            }
        }
    }

    /// Points on every face of the shell, on a regular angular/radial grid.
    fn boundary_samples(p: &SphereParams) -> Vec<Point3> {
        const N: usize = 24;
        let lerp = |a: f64, b: f64, i: usize| a + (b - a) * i as f64 / (N - 1) as f64;
        let at = |r: f64, theta: f64, phi: f64| {
            let (st, ct) = theta.to_radians().sin_cos();
            let (sp, cp) = phi.to_radians().sin_cos();
            Point3::new(r * st * cp, r * st * sp, r * ct)
        };
        let (phi1, phi2) = (p.phi1(), p.phi1() + p.dphi());
        let mut out = Vec::new();

        let mut radii = vec![p.rmax()];
        if p.has_inner_radius() {
            radii.push(p.rmin());
        }
        for &r in &radii {
            for i in 0..N {
                for j in 0..N {
                    out.push(at(r, lerp(p.theta1(), p.theta2(), i), lerp(phi1, phi2, j)));
                }
            }
        }

        let mut thetas = Vec::new();
        if p.has_theta1_surface() {
            thetas.push(p.theta1());
        }
        if p.has_theta2_surface() {
            thetas.push(p.theta2());
        }
        for &t in &thetas {
            for i in 0..N {
                for j in 0..N {
                    out.push(at(lerp(p.rmin(), p.rmax(), i), t, lerp(phi1, phi2, j)));
                }
            }
        }

        if p.has_phi_cut() {
            for phi in [phi1, phi2] {
                for i in 0..N {
                    for j in 0..N {
                        out.push(at(lerp(p.rmin(), p.rmax(), i), lerp(p.theta1(), p.theta2(), j), phi));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_safety_bounded_by_exit_distance() {
        let mut rng = StdRng::seed_from_u64(11);
        for shape in configs() {
            for _ in 0..300 {
                let p = random_inside(&mut rng, &shape);
                let d = random_dir(&mut rng);
                let exit = shape.dist_to_out(&p, &d, QueryMode::Unconditional, BIG);
                assert!(exit.is_hit(), "no exit from {p:?} in {shape}");
                let safety = shape.safety(&p);
                assert!(
                    safety <= exit.distance + 1e-9,
                    "safety {safety} > exit {} at {p:?} dir {d:?} in {shape}",
                    exit.distance
                );
            }
        }
    }

    #[test]
    fn test_exit_path_stays_inside() {
        let mut rng = StdRng::seed_from_u64(12);
        for shape in configs() {
            for _ in 0..300 {
                let p = random_inside(&mut rng, &shape);
                let d = random_dir(&mut rng);
                let exit = shape.dist_to_out(&p, &d, QueryMode::Unconditional, BIG);
                for k in 0..40 {
                    let q = p + d.as_ref() * (exit.distance * k as f64 / 40.0);
                    assert!(shape.contains(&q), "left early at {q:?} from {p:?} in {shape}");
                }
                let end = p + d.as_ref() * exit.distance;
                assert!(shape.safety(&end) < 1e-6, "exit point {end:?} not on boundary in {shape}");
                let n = exit.normal.expect("exit normal");
                assert!(n.dot(d.as_ref()) >= -1e-6, "inward normal {n:?} for dir {d:?} in {shape}");
            }
        }
    }

    #[test]
    fn test_entry_lands_on_boundary() {
        let mut rng = StdRng::seed_from_u64(13);
        for shape in configs() {
            for _ in 0..300 {
                let p = random_outside(&mut rng, &shape);
                let target = random_inside(&mut rng, &shape);
                let d = Dir3::new_normalize(target - p);
                let entry = shape.dist_to_in(&p, &d, QueryMode::Unconditional, BIG);
                assert!(
                    entry.distance <= (target - p).norm() + 1e-9,
                    "entry {} beyond inside point {target:?} from {p:?} in {shape}",
                    entry.distance
                );
                for k in 0..40 {
                    let q = p + d.as_ref() * (entry.distance * k as f64 / 40.0);
                    assert!(!shape.contains(&q), "inside point {q:?} before entry from {p:?} in {shape}");
                }
                let hit = p + d.as_ref() * entry.distance;
                assert!(shape.safety(&hit) < 1e-6, "entry point {hit:?} not on boundary in {shape}");
            }
        }
    }

    #[test]
    fn test_missed_rays_stay_outside() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut misses = 0;
        for shape in configs() {
            let reach = 6.0 * shape.params().rmax();
            for _ in 0..300 {
                let p = random_outside(&mut rng, &shape);
                let d = random_dir(&mut rng);
                let entry = shape.dist_to_in(&p, &d, QueryMode::Unconditional, BIG);
                if entry.is_hit() {
                    continue;
                }
                misses += 1;
                for k in 0..400 {
                    let q = p + d.as_ref() * (reach * k as f64 / 400.0);
                    assert!(!shape.contains(&q), "missed ray from {p:?} passes {q:?} in {shape}");
                }
            }
        }
        assert!(misses > 0);
    }

    #[test]
    fn test_safety_never_exceeds_sampled_boundary_distance() {
        let mut rng = StdRng::seed_from_u64(15);
        for shape in configs() {
            let samples = boundary_samples(shape.params());
            for _ in 0..120 {
                let p = random_point(&mut rng, 1.5 * shape.params().rmax());
                let nearest = samples
                    .iter()
                    .map(|q| (q - p).norm())
                    .fold(f64::INFINITY, f64::min);
                let safety = shape.safety(&p);
                assert!(
                    safety <= nearest + 1e-9,
                    "safety {safety} > sampled {nearest} at {p:?} in {shape}"
                );
            }
        }
    }

    #[test]
    fn test_reflex_and_wrapping_wedges_round_trip() {
        // Enter then leave along the same line through wide and wrapping wedges
        for v in [[0.0, 10.0, 0.0, 180.0, 0.0, 270.0], [0.0, 10.0, 0.0, 180.0, 300.0, 60.0]] {
            let shape = Sphere::from_slice(&v).unwrap();
            let p = Point3::new(20.0, 0.5, 0.3);
            let d = Dir3::new_normalize(Vec3::new(-1.0, 0.0, 0.0));
            let entry = shape.dist_to_in(&p, &d, QueryMode::Unconditional, BIG);
            assert!(entry.is_hit());
            let inside = p + d.as_ref() * (entry.distance + 1e-6);
            assert!(shape.contains(&inside));
            let exit = shape.dist_to_out(&inside, &d, QueryMode::Unconditional, BIG);
            assert!(exit.is_hit());
            assert!(exit.distance > 1.0);
        }
    }
}
