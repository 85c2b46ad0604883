//! Error types for solid construction.

use thiserror::Error;

/// Errors reported when a solid is built or re-dimensioned.
///
/// Queries never fail: a solid that exists has been validated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Radii violate `0 <= rmin < rmax`.
    #[error("invalid radii: rmin = {rmin}, rmax = {rmax} (need 0 <= rmin < rmax)")]
    InvalidRadii {
        /// Inner radius.
        rmin: f64,
        /// Outer radius.
        rmax: f64,
    },

    /// Polar range violates `0 <= theta1 < theta2 <= 180`.
    #[error("invalid polar range: theta1 = {theta1}, theta2 = {theta2} (need 0 <= theta1 < theta2 <= 180)")]
    InvalidTheta {
        /// Lower polar bound in degrees.
        theta1: f64,
        /// Upper polar bound in degrees.
        theta2: f64,
    },

    /// Azimuthal bounds coincide without spanning the full turn.
    #[error("zero-width azimuthal wedge: phi1 = {phi1}, phi2 = {phi2}")]
    ZeroWidthWedge {
        /// Start angle in degrees.
        phi1: f64,
        /// End angle in degrees.
        phi2: f64,
    },

    /// A dimension is NaN or infinite.
    #[error("non-finite dimension: {name} = {value}")]
    NonFinite {
        /// Name of the offending dimension.
        name: &'static str,
        /// Its value.
        value: f64,
    },

    /// Parameter slice of the wrong length.
    #[error("expected 2 to 6 parameters, got {0}")]
    ParameterCount(usize),

    /// Box half-widths must be positive and finite.
    #[error("invalid box half-widths: ({dx}, {dy}, {dz})")]
    InvalidBox {
        /// Half-width along X.
        dx: f64,
        /// Half-width along Y.
        dy: f64,
        /// Half-width along Z.
        dz: f64,
    },
}

/// Result type for solid construction.
pub type Result<T> = std::result::Result<T, GeometryError>;
