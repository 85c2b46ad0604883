//! Step-wise transport of a straight track through a solid.

use geonav_math::{Dir3, Point3, Tolerance};
use geonav_solid::{QueryMode, Solid};
use tracing::trace;

/// Outcome of one proposed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Distance actually travelled: the proposed step, or less when a
    /// boundary is in the way.
    pub distance: f64,
    /// Whether a boundary cut the step short.
    pub limited: bool,
    /// Whether the step started inside the solid.
    pub from_inside: bool,
    /// Outward normal at the boundary when leaving the solid.
    pub normal: Option<Dir3>,
    /// Safety distance at the start point, when it was computed.
    pub safety: Option<f64>,
}

/// A boundary met while tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// The track enters the solid.
    Entry {
        /// Distance from the track start.
        distance: f64,
        /// Crossing point.
        point: Point3,
    },
    /// The track leaves the solid.
    Exit {
        /// Distance from the track start.
        distance: f64,
        /// Crossing point.
        point: Point3,
        /// Outward unit normal.
        normal: Option<Dir3>,
    },
}

impl Boundary {
    /// Distance from the track start.
    pub fn distance(&self) -> f64 {
        match *self {
            Boundary::Entry { distance, .. } | Boundary::Exit { distance, .. } => distance,
        }
    }
}

/// Moves tracks through solids one boundary at a time.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    tolerance: Tolerance,
    max_crossings: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Navigator with the default tolerance.
    pub fn new() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            max_crossings: 64,
        }
    }

    /// Override the distance a track is pushed past each boundary.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Cap on the number of crossings a single trace records.
    pub fn with_max_crossings(mut self, max: usize) -> Self {
        self.max_crossings = max;
        self
    }

    /// Try to move `proposed` along `dir` from `point`.
    ///
    /// The safety distance is checked first, so steps that cannot reach a
    /// boundary skip the ray search.
    pub fn step(&self, solid: &dyn Solid, point: &Point3, dir: &Dir3, proposed: f64) -> Step {
        let from_inside = solid.contains(point);
        let (distance, normal, safety) = if from_inside {
            let c = solid.dist_to_out(point, dir, QueryMode::SafetyThenTest, proposed);
            (c.distance, c.normal, c.safety)
        } else {
            let c = solid.dist_to_in(point, dir, QueryMode::SafetyThenTest, proposed);
            (c.distance, None, c.safety)
        };
        let limited = distance <= proposed;
        trace!(
            shape = solid.name(),
            from_inside,
            proposed,
            distance,
            limited,
            "Navigator step"
        );
        Step {
            distance: if limited { distance } else { proposed },
            limited,
            from_inside,
            normal: if limited { normal } else { None },
            safety,
        }
    }

    /// Follow the ray from `origin` along `dir` for at most `max_distance`,
    /// listing every boundary crossing in order.
    pub fn trace(
        &self,
        solid: &dyn Solid,
        origin: &Point3,
        dir: &Dir3,
        max_distance: f64,
    ) -> Vec<Boundary> {
        let push = self.tolerance.linear;
        let mut crossings = Vec::new();
        let mut travelled = 0.0;

        while travelled < max_distance && crossings.len() < self.max_crossings {
            let here = *origin + dir.as_ref() * travelled;
            let step = self.step(solid, &here, dir, max_distance - travelled);
            if !step.limited {
                break;
            }
            let distance = travelled + step.distance;
            let point = *origin + dir.as_ref() * distance;
            crossings.push(if step.from_inside {
                Boundary::Exit {
                    distance,
                    point,
                    normal: step.normal,
                }
            } else {
                Boundary::Entry { distance, point }
            });
            travelled = distance + push;
        }
        trace!(crossings = crossings.len(), "Trace finished");
        crossings
    }
}
