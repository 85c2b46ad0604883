#![warn(missing_docs)]

//! The solid capability shared by every geonav shape.
//!
//! A navigator only needs four answers from a shape: containment, the
//! distance to enter along a ray, the distance to leave along a ray (with the
//! outward normal there), and a conservative safety distance. [`Solid`]
//! captures that contract; shapes implement it and are held as
//! `Box<dyn Solid>` by callers.
//!
//! Distances that cannot be reached are reported as [`geonav_math::BIG`]
//! rather than as errors. Errors only come from constructing or resizing a
//! shape.

mod bbox;
mod error;

use std::fmt::Debug;

use geonav_math::{is_big, Dir3, Point3, BIG};

pub use bbox::BoundingBox;
pub use error::{GeometryError, Result};

/// How much work a distance query should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Compute the safety distance only; the ray search is skipped.
    SafetyOnly,
    /// Compute the safety distance, then search only if the proposed step
    /// reaches it.
    SafetyThenTest,
    /// Search along the ray without computing the safety distance.
    #[default]
    Unconditional,
}

impl QueryMode {
    /// Run the safety part of a query.
    ///
    /// Returns the safety (when this mode computes one) and whether the ray
    /// search should be skipped.
    pub fn screen(self, step: f64, safety: impl FnOnce() -> f64) -> (Option<f64>, bool) {
        match self {
            QueryMode::SafetyOnly => (Some(safety()), true),
            QueryMode::SafetyThenTest => {
                let s = safety();
                (Some(s), step < s)
            }
            QueryMode::Unconditional => (None, false),
        }
    }
}

/// Result of an entry query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Distance along the ray, or [`BIG`] when the solid is not entered.
    pub distance: f64,
    /// Safety distance, when the query mode computed one.
    pub safety: Option<f64>,
}

impl Crossing {
    /// A crossing that never happens.
    pub fn miss(safety: Option<f64>) -> Self {
        Self {
            distance: BIG,
            safety,
        }
    }

    /// Whether the ray actually reaches the surface.
    pub fn is_hit(&self) -> bool {
        !is_big(self.distance)
    }
}

/// Result of an exit query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitCrossing {
    /// Distance along the ray to the exit surface, or [`BIG`].
    pub distance: f64,
    /// Safety distance, when the query mode computed one.
    pub safety: Option<f64>,
    /// Outward unit normal at the exit point, when the search ran.
    pub normal: Option<Dir3>,
}

impl ExitCrossing {
    /// An exit search that was skipped or found nothing.
    pub fn miss(safety: Option<f64>) -> Self {
        Self {
            distance: BIG,
            safety,
            normal: None,
        }
    }

    /// Whether an exit surface was found.
    pub fn is_hit(&self) -> bool {
        !is_big(self.distance)
    }
}

/// A shape a navigator can step through.
pub trait Solid: Send + Sync + Debug {
    /// Short lowercase name of the shape kind.
    fn name(&self) -> &'static str;

    /// Whether `point` lies inside the solid, boundary included.
    fn contains(&self, point: &Point3) -> bool;

    /// Distance along `dir` from an outside `point` to the solid.
    ///
    /// `step` is the step the caller proposes; it only matters for
    /// [`QueryMode::SafetyThenTest`].
    fn dist_to_in(&self, point: &Point3, dir: &Dir3, mode: QueryMode, step: f64) -> Crossing;

    /// Distance along `dir` from an inside `point` to the boundary, with the
    /// outward normal there.
    fn dist_to_out(&self, point: &Point3, dir: &Dir3, mode: QueryMode, step: f64) -> ExitCrossing;

    /// Lower bound on the distance from `point` to the nearest boundary.
    fn safety(&self, point: &Point3) -> f64;

    /// Axis-aligned box enclosing the solid.
    fn bounding_box(&self) -> BoundingBox;
}
