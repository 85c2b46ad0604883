#![warn(missing_docs)]

//! Closed-form ray/surface crossings for geonav solids.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and unit direction
//! - [`intersect`] - Crossing routines for spheres, conical segments,
//!   planes and azimuthal wedges
//!
//! All routines measure distance along the ray from its origin and return
//! `None` when there is no forward crossing; callers turn that into the
//! [`geonav_math::BIG`] sentinel where an API demands a plain number.

mod ray;
pub mod intersect;

pub use intersect::{
    cone_distance, cone_seg_distance, intersect_plane, phi_min_distance, sphere_crossing,
    SphereRoot, Wedge,
};
pub use ray::Ray;
