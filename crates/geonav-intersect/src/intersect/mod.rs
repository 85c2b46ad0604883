//! Ray-surface crossing algorithms.
//!
//! Each surface family bounding a geonav solid has a dedicated closed-form
//! routine returning the ray parameter of the relevant crossing, or `None`.

mod cone;
mod plane;
mod sphere;
mod wedge;

pub use cone::{cone_distance, cone_seg_distance};
pub use plane::intersect_plane;
pub use sphere::{sphere_crossing, SphereRoot};
pub use wedge::{phi_min_distance, Wedge};
