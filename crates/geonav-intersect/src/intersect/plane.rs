//! Ray-plane crossing (closed-form).

use geonav_math::{Point3, Vec3};

use crate::Ray;

/// Intersect a ray with the plane through `origin` with normal `normal`.
///
/// Returns the ray parameter if the ray crosses the plane at `t >= 0`,
/// or `None` if the ray is parallel to the plane or the crossing lies behind
/// the ray origin.
pub fn intersect_plane(ray: &Ray, origin: &Point3, normal: &Vec3) -> Option<f64> {
    let denom = ray.direction.as_ref().dot(normal);

    // Ray is parallel to plane
    if denom.abs() < 1e-12 {
        return None;
    }

    let t = (*origin - ray.origin).dot(normal) / denom;

    // Intersection is behind ray origin
    if t < 0.0 {
        return None;
    }

    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn xy() -> (Point3, Vec3) {
        (Point3::origin(), Vec3::z())
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let (o, n) = xy();
        let ray = Ray::new(Point3::new(3.0, 4.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let t = intersect_plane(&ray, &o, &n).unwrap();
        assert_abs_diff_eq!(t, 5.0, epsilon = 1e-10);
        let hit = ray.at(t);
        assert_abs_diff_eq!(hit.x, 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(hit.y, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let (o, n) = xy();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_plane(&ray, &o, &n).is_none());
    }

    #[test]
    fn test_ray_plane_behind() {
        let (o, n) = xy();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(intersect_plane(&ray, &o, &n).is_none());
    }

    #[test]
    fn test_ray_plane_angled() {
        let (o, n) = xy();
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 0.0, -1.0));
        let t = intersect_plane(&ray, &o, &n).unwrap();
        let expected_t = 10.0 * 2.0_f64.sqrt();
        assert_abs_diff_eq!(t, expected_t, epsilon = 1e-10);
    }
}
