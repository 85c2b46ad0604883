//! Validated dimensions of a spherical shell.

use geonav_intersect::Wedge;
use geonav_math::{normalize_degrees, Tolerance};
use geonav_solid::{GeometryError, Result};
use serde::{Deserialize, Serialize};

/// Raw, unvalidated shell dimensions as they appear in configuration files.
///
/// Angles are in degrees. Omitted angular fields describe the full sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereDimensions {
    /// Inner radius.
    #[serde(default)]
    pub rmin: f64,
    /// Outer radius.
    pub rmax: f64,
    /// Lower polar bound.
    #[serde(default)]
    pub theta1: f64,
    /// Upper polar bound.
    #[serde(default = "default_theta2")]
    pub theta2: f64,
    /// Azimuthal start.
    #[serde(default)]
    pub phi1: f64,
    /// Azimuthal end.
    #[serde(default = "default_phi2")]
    pub phi2: f64,
}

fn default_theta2() -> f64 {
    180.0
}

fn default_phi2() -> f64 {
    360.0
}

impl SphereDimensions {
    /// Full sphere of radius `rmax` with a hole of radius `rmin`.
    pub fn shell(rmin: f64, rmax: f64) -> Self {
        Self {
            rmin,
            rmax,
            theta1: 0.0,
            theta2: default_theta2(),
            phi1: 0.0,
            phi2: default_phi2(),
        }
    }
}

/// Validated shell dimensions with their derived flags.
///
/// Invariants: `0 <= rmin < rmax`, `0 <= theta1 < theta2 <= 180`, both
/// azimuths in `[0, 360)`. The flags always agree with the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SphereDimensions", into = "SphereDimensions")]
pub struct SphereParams {
    rmin: f64,
    rmax: f64,
    theta1: f64,
    theta2: f64,
    phi1: f64,
    phi2: f64,
    has_inner_radius: bool,
    has_theta_cut: bool,
    has_phi_cut: bool,
    wedge: Wedge,
}

impl SphereParams {
    /// Validate a full dimension set.
    pub fn new(rmin: f64, rmax: f64, theta1: f64, theta2: f64, phi1: f64, phi2: f64) -> Result<Self> {
        for (name, value) in [
            ("rmin", rmin),
            ("rmax", rmax),
            ("theta1", theta1),
            ("theta2", theta2),
            ("phi1", phi1),
            ("phi2", phi2),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { name, value });
            }
        }
        if rmin < 0.0 || rmin >= rmax {
            return Err(GeometryError::InvalidRadii { rmin, rmax });
        }
        if theta1 < 0.0 || theta2 > 180.0 || theta1 >= theta2 {
            return Err(GeometryError::InvalidTheta { theta1, theta2 });
        }

        // Decided on the raw inputs: (-90, 270) is a full turn, (0, 720) is not
        let mut has_phi_cut = (phi2 - phi1).abs() != 360.0;
        let wedge = if has_phi_cut {
            if (phi2 - phi1).rem_euclid(360.0) == 0.0 {
                return Err(GeometryError::ZeroWidthWedge { phi1, phi2 });
            }
            let wedge = Wedge::new(phi1, phi2);
            // Widths that round to a whole turn are no cut at all
            if wedge.is_full() {
                has_phi_cut = false;
            }
            wedge
        } else {
            Wedge::full()
        };

        Ok(Self {
            rmin,
            rmax,
            theta1,
            theta2,
            phi1: normalize_degrees(phi1),
            phi2: normalize_degrees(phi2),
            has_inner_radius: rmin > 0.0,
            has_theta_cut: theta2 - theta1 < 180.0,
            has_phi_cut,
            wedge: if has_phi_cut { wedge } else { Wedge::full() },
        })
    }

    /// Full sphere (or full shell when `rmin > 0`).
    pub fn shell(rmin: f64, rmax: f64) -> Result<Self> {
        Self::new(rmin, rmax, 0.0, 180.0, 0.0, 360.0)
    }

    /// Build from `[rmin, rmax, theta1, theta2, phi1, phi2]`.
    ///
    /// Between two and six values are accepted; missing trailing values
    /// default to the full sphere.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if !(2..=6).contains(&values.len()) {
            return Err(GeometryError::ParameterCount(values.len()));
        }
        let mut full = [0.0, 0.0, 0.0, 180.0, 0.0, 360.0];
        full[..values.len()].copy_from_slice(values);
        let [rmin, rmax, theta1, theta2, phi1, phi2] = full;
        Self::new(rmin, rmax, theta1, theta2, phi1, phi2)
    }

    /// Inner radius.
    pub fn rmin(&self) -> f64 {
        self.rmin
    }

    /// Outer radius.
    pub fn rmax(&self) -> f64 {
        self.rmax
    }

    /// Lower polar bound in degrees.
    pub fn theta1(&self) -> f64 {
        self.theta1
    }

    /// Upper polar bound in degrees.
    pub fn theta2(&self) -> f64 {
        self.theta2
    }

    /// Azimuthal start in degrees, in `[0, 360)`.
    pub fn phi1(&self) -> f64 {
        self.phi1
    }

    /// Azimuthal end in degrees, in `[0, 360)`.
    pub fn phi2(&self) -> f64 {
        self.phi2
    }

    /// Whether the shell has a hole (`rmin > 0`).
    pub fn has_inner_radius(&self) -> bool {
        self.has_inner_radius
    }

    /// Whether the polar range is narrower than `[0, 180]`.
    pub fn has_theta_cut(&self) -> bool {
        self.has_theta_cut
    }

    /// Whether the azimuth is restricted to a wedge.
    pub fn has_phi_cut(&self) -> bool {
        self.has_phi_cut
    }

    /// Whether the lower polar bound is an actual surface.
    pub fn has_theta1_surface(&self) -> bool {
        self.has_theta_cut && self.theta1 > 0.0
    }

    /// Whether the upper polar bound is an actual surface.
    pub fn has_theta2_surface(&self) -> bool {
        self.has_theta_cut && self.theta2 < 180.0
    }

    /// Whether neither a polar nor an azimuthal cut applies.
    pub fn is_full_sphere(&self) -> bool {
        !self.has_theta_cut && !self.has_phi_cut
    }

    /// The azimuthal wedge; the full turn when there is no cut.
    pub fn wedge(&self) -> &Wedge {
        &self.wedge
    }

    /// Angular width of the wedge in degrees, 360 without a cut.
    pub fn dphi(&self) -> f64 {
        self.wedge.width()
    }
}

impl TryFrom<SphereDimensions> for SphereParams {
    type Error = GeometryError;

    fn try_from(d: SphereDimensions) -> Result<Self> {
        Self::new(d.rmin, d.rmax, d.theta1, d.theta2, d.phi1, d.phi2)
    }
}

impl From<SphereParams> for SphereDimensions {
    fn from(p: SphereParams) -> Self {
        Self {
            rmin: p.rmin,
            rmax: p.rmax,
            theta1: p.theta1,
            theta2: p.theta2,
            phi1: p.phi1,
            phi2: p.phi1 + p.dphi(),
        }
    }
}

/// Which polar bound a surface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PolarBound {
    Lower,
    Upper,
}

/// The surface a polar bound cuts out of the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PolarSurface {
    /// A bound of 90 degrees: the `z = 0` plane.
    Equator,
    /// Conical segment between the rims `(r1, z1)` and `(r2, z2)`, `z1 < z2`.
    Cone { r1: f64, z1: f64, r2: f64, z2: f64 },
}

impl SphereParams {
    /// Polar angle of `bound`, in degrees.
    pub(crate) fn theta(&self, bound: PolarBound) -> f64 {
        match bound {
            PolarBound::Lower => self.theta1,
            PolarBound::Upper => self.theta2,
        }
    }

    /// The surface cut by `bound` between the two radii.
    pub(crate) fn polar_surface(&self, bound: PolarBound) -> PolarSurface {
        let theta = self.theta(bound);
        if Tolerance::DEFAULT.angles_equal(theta, 90.0) {
            return PolarSurface::Equator;
        }
        let (si, ci) = theta.to_radians().sin_cos();
        let (inner, outer) = ((self.rmin * si, self.rmin * ci), (self.rmax * si, self.rmax * ci));
        let ((r1, z1), (r2, z2)) = if ci > 0.0 { (inner, outer) } else { (outer, inner) };
        PolarSurface::Cone { r1, z1, r2, z2 }
    }
}
