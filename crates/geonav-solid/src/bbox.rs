//! Axis-aligned bounding box, usable on its own as a box solid.
//!
//! Every solid carries one of these as a cheap outer bound; the box also
//! answers the full navigation query set, so it doubles as the simplest
//! sibling shape.

use geonav_intersect::Ray;
use geonav_math::{Dir3, Point3, Vec3, BIG};

use crate::{Crossing, ExitCrossing, GeometryError, QueryMode, Result, Solid};

/// Axis-aligned box given by its center and half-widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    origin: Point3,
    half: Vec3,
}

impl BoundingBox {
    /// Box centred at `origin` with half-widths `(dx, dy, dz)`.
    ///
    /// Half-widths must be positive and finite.
    pub fn new(origin: Point3, dx: f64, dy: f64, dz: f64) -> Result<Self> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        let finite_origin = origin.coords.iter().all(|c| c.is_finite());
        if !(valid(dx) && valid(dy) && valid(dz) && finite_origin) {
            return Err(GeometryError::InvalidBox { dx, dy, dz });
        }
        Ok(Self {
            origin,
            half: Vec3::new(dx, dy, dz),
        })
    }

    /// Box spanning the corners `min` and `max`.
    ///
    /// Used for derived boxes, whose extents come from already validated
    /// dimensions; degenerate (flat) extents are allowed.
    pub fn from_extents(min: Point3, max: Point3) -> Self {
        Self {
            origin: Point3::from((min.coords + max.coords) * 0.5),
            half: (max - min) * 0.5,
        }
    }

    /// Cube of half-width `half` centred at the origin.
    pub fn cube(half: f64) -> Self {
        Self {
            origin: Point3::origin(),
            half: Vec3::new(half, half, half),
        }
    }

    /// Center of the box.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Half-width along X.
    pub fn dx(&self) -> f64 {
        self.half.x
    }

    /// Half-width along Y.
    pub fn dy(&self) -> f64 {
        self.half.y
    }

    /// Half-width along Z.
    pub fn dz(&self) -> f64 {
        self.half.z
    }

    /// Minimum corner.
    pub fn min(&self) -> Point3 {
        self.origin - self.half
    }

    /// Maximum corner.
    pub fn max(&self) -> Point3 {
        self.origin + self.half
    }

    /// Per-axis distance of `point` from the box center, minus the half-width.
    ///
    /// Negative components mean the point is within that slab.
    fn excess(&self, point: &Point3) -> Vec3 {
        (point - self.origin).abs() - self.half
    }

    /// Conservative distance to the box from a point outside it.
    fn safety_outside(&self, point: &Point3) -> f64 {
        self.excess(point).max().max(0.0)
    }

    /// Distance to the nearest face from a point inside the box.
    fn safety_inside(&self, point: &Point3) -> f64 {
        (-self.excess(point).max()).max(0.0)
    }
}

impl Solid for BoundingBox {
    fn name(&self) -> &'static str {
        "box"
    }

    fn contains(&self, point: &Point3) -> bool {
        self.excess(point).max() <= 0.0
    }

    fn dist_to_in(&self, point: &Point3, dir: &Dir3, mode: QueryMode, step: f64) -> Crossing {
        let (safety, skip) = mode.screen(step, || self.safety_outside(point));
        if skip {
            return Crossing::miss(safety);
        }
        let ray = Ray::from_dir(*point, *dir);
        let distance = ray
            .intersect_aabb(&self.min(), &self.max())
            .map_or(BIG, |(t_min, _)| t_min);
        Crossing { distance, safety }
    }

    fn dist_to_out(&self, point: &Point3, dir: &Dir3, mode: QueryMode, step: f64) -> ExitCrossing {
        let (safety, skip) = mode.screen(step, || self.safety_inside(point));
        if skip {
            return ExitCrossing::miss(safety);
        }
        let local = point - self.origin;
        let mut distance = BIG;
        let mut normal = None;
        for axis in 0..3 {
            let d = dir[axis];
            if d == 0.0 {
                continue;
            }
            let face = self.half[axis].copysign(d);
            let s = ((face - local[axis]) / d).max(0.0);
            if s < distance {
                distance = s;
                let mut n = Vec3::zeros();
                n[axis] = d.signum();
                normal = Some(Dir3::new_unchecked(n));
            }
        }
        ExitCrossing {
            distance,
            safety,
            normal,
        }
    }

    fn safety(&self, point: &Point3) -> f64 {
        if self.contains(point) {
            self.safety_inside(point)
        } else {
            self.safety_outside(point)
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        *self
    }
}
