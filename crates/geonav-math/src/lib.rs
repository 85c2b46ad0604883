#![warn(missing_docs)]

//! Math types for the geonav shape kernel.
//!
//! Thin wrappers around nalgebra providing the types shared by every
//! navigation query: points, vectors, unit directions, the "no
//! intersection" sentinel, tolerances and degree-based angle helpers.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Sentinel distance meaning "no intersection / unbounded".
///
/// Queries return this finite value instead of an error; compare with
/// [`is_big`] rather than for equality.
pub const BIG: f64 = 1.0e30;

/// Squared radius below which a point is treated as sitting at the origin.
pub const ORIGIN_R2: f64 = 1.0e-20;

/// Returns `true` when `distance` is the [`BIG`] sentinel (or anything as large).
#[inline]
pub fn is_big(distance: f64) -> bool {
    distance >= 1.0e20
}

/// Map an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Azimuth of `(x, y)` in degrees, in `[0, 360)`.
#[inline]
pub fn azimuth_degrees(x: f64, y: f64) -> f64 {
    let phi = y.atan2(x).to_degrees();
    if phi < 0.0 {
        phi + 360.0
    } else {
        phi
    }
}

/// Polar angle of `point` measured from +Z, in degrees.
///
/// `r` is the precomputed norm of the point and must be non-zero.
#[inline]
pub fn polar_degrees(point: &Point3, r: f64) -> f64 {
    (point.z / r).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in degrees.
    pub angular: f64,
}

impl Tolerance {
    /// Default navigation tolerances (1e-9 linear, 1e-12 degrees angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-12,
    };

    /// Whether two angles in degrees differ by less than the angular tolerance.
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
