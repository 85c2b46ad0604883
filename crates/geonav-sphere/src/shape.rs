//! The spherical shell solid.

use std::fmt;

use geonav_intersect::{sphere_crossing, Ray, SphereRoot};
use geonav_math::{Dir3, Point3, BIG};
use geonav_solid::{BoundingBox, Crossing, ExitCrossing, QueryMode, Result, Solid};
use tracing::{debug, warn};

use crate::bbox::compute_bounding_box;
use crate::contains::{is_inside, Checks};
use crate::entry::{entry_distance, sphere_hit};
use crate::exit::exit_crossing;
use crate::safety::{safety_inside, safety_outside};
use crate::SphereParams;

/// A spherical shell, optionally cut to a polar band and an azimuthal wedge.
///
/// The bounding box is derived from the dimensions and kept in step with
/// them by every setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    params: SphereParams,
    bbox: BoundingBox,
}

impl Sphere {
    /// Shell with already validated dimensions.
    pub fn new(params: SphereParams) -> Self {
        let bbox = compute_bounding_box(&params);
        debug!(
            rmin = params.rmin(),
            rmax = params.rmax(),
            theta1 = params.theta1(),
            theta2 = params.theta2(),
            phi1 = params.phi1(),
            phi2 = params.phi2(),
            "Created sphere"
        );
        Self { params, bbox }
    }

    /// Validate the six dimensions and build the shell.
    pub fn from_dimensions(
        rmin: f64,
        rmax: f64,
        theta1: f64,
        theta2: f64,
        phi1: f64,
        phi2: f64,
    ) -> Result<Self> {
        let params = SphereParams::new(rmin, rmax, theta1, theta2, phi1, phi2)
            .inspect_err(|e| warn!(error = %e, "Rejected sphere dimensions"))?;
        Ok(Self::new(params))
    }

    /// Build from a parameter slice `[rmin, rmax, theta1, theta2, phi1, phi2]`
    /// of two to six values.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let params = SphereParams::from_slice(values)
            .inspect_err(|e| warn!(error = %e, "Rejected sphere parameters"))?;
        Ok(Self::new(params))
    }

    /// Current dimensions.
    pub fn params(&self) -> &SphereParams {
        &self.params
    }

    /// Replace every dimension.
    ///
    /// On error the shell keeps its previous dimensions.
    pub fn set_sphere_dimensions(
        &mut self,
        rmin: f64,
        rmax: f64,
        theta1: f64,
        theta2: f64,
        phi1: f64,
        phi2: f64,
    ) -> Result<()> {
        let params = SphereParams::new(rmin, rmax, theta1, theta2, phi1, phi2)
            .inspect_err(|e| warn!(error = %e, "Rejected sphere dimensions"))?;
        self.apply(params);
        Ok(())
    }

    /// Replace the dimensions from a two to six value slice.
    ///
    /// On error the shell keeps its previous dimensions.
    pub fn set_dimensions(&mut self, values: &[f64]) -> Result<()> {
        let params = SphereParams::from_slice(values)
            .inspect_err(|e| warn!(error = %e, "Rejected sphere parameters"))?;
        self.apply(params);
        Ok(())
    }

    fn apply(&mut self, params: SphereParams) {
        self.params = params;
        self.bbox = compute_bounding_box(&params);
        debug!(
            rmin = params.rmin(),
            rmax = params.rmax(),
            dphi = params.dphi(),
            "Updated sphere dimensions"
        );
    }

    /// Containment with a chosen subset of the constraints.
    pub fn is_inside(&self, point: &Point3, checks: Checks) -> bool {
        is_inside(&self.params, point, checks)
    }

    /// Distance along `dir` to the sphere of `radius`, or [`BIG`].
    ///
    /// With `check_angles` a crossing outside the polar band or the wedge
    /// does not count.
    pub fn dist_to_sphere(
        &self,
        point: &Point3,
        dir: &Dir3,
        radius: f64,
        root: SphereRoot,
        check_angles: bool,
    ) -> f64 {
        let ray = Ray::from_dir(*point, *dir);
        let hit = if check_angles {
            sphere_hit(&self.params, &ray, radius, root)
        } else {
            sphere_crossing(&ray, radius, root)
        };
        hit.unwrap_or(BIG)
    }
}

impl Solid for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn contains(&self, point: &Point3) -> bool {
        is_inside(&self.params, point, Checks::ALL)
    }

    fn dist_to_in(&self, point: &Point3, dir: &Dir3, mode: QueryMode, step: f64) -> Crossing {
        let (safety, skip) = mode.screen(step, || safety_outside(&self.params, point));
        if skip {
            return Crossing::miss(safety);
        }
        // Cheap rejection against the bounding box first
        let ray = Ray::from_dir(*point, *dir);
        if ray.intersect_aabb(&self.bbox.min(), &self.bbox.max()).is_none() {
            return Crossing::miss(safety);
        }
        Crossing {
            distance: entry_distance(&self.params, point, dir),
            safety,
        }
    }

    fn dist_to_out(&self, point: &Point3, dir: &Dir3, mode: QueryMode, step: f64) -> ExitCrossing {
        let (safety, skip) = mode.screen(step, || safety_inside(&self.params, point));
        if skip {
            return ExitCrossing::miss(safety);
        }
        let (distance, normal) = exit_crossing(&self.params, point, dir);
        ExitCrossing {
            distance,
            safety,
            normal,
        }
    }

    fn safety(&self, point: &Point3) -> f64 {
        if self.contains(point) {
            safety_inside(&self.params, point)
        } else {
            safety_outside(&self.params, point)
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "*** Shape sphere: Sphere ***")?;
        writeln!(f, "    Rmin   = {:.5}", p.rmin())?;
        writeln!(f, "    Rmax   = {:.5}", p.rmax())?;
        writeln!(f, "    Th1    = {:.5}", p.theta1())?;
        writeln!(f, "    Th2    = {:.5}", p.theta2())?;
        writeln!(f, "    Ph1    = {:.5}", p.phi1())?;
        writeln!(f, "    Ph2    = {:.5}", p.phi1() + p.dphi())?;
        let o = self.bbox.origin();
        writeln!(f, " Bounding box:")?;
        writeln!(f, "    origin = ({:.5}, {:.5}, {:.5})", o.x, o.y, o.z)?;
        write!(
            f,
            "    dx = {:.5}, dy = {:.5}, dz = {:.5}",
            self.bbox.dx(),
            self.bbox.dy(),
            self.bbox.dz()
        )
    }
}
