#![warn(missing_docs)]

//! Analytic solid navigation for particle transport and ray tracing.
//!
//! Re-exports the geonav crates and adds shape configuration and a track
//! navigator on top.
//!
//! # Example
//!
//! ```
//! use geonav::{Dir3, Navigator, Point3, SceneConfig, Vec3};
//!
//! let scene = SceneConfig::from_toml_str(
//!     r#"
//! [[shapes]]
//! type = "sphere"
//! rmin = 5.0
//! rmax = 10.0
//! "#,
//! )
//! .unwrap();
//! let shapes = scene.build().unwrap();
//! let up = Dir3::new_normalize(Vec3::new(0.0, 0.0, 1.0));
//! let crossings = Navigator::new().trace(shapes[0].as_ref(), &Point3::new(0.0, 0.0, -20.0), &up, 100.0);
//! assert_eq!(crossings.len(), 4);
//! ```

pub use geonav_intersect;
pub use geonav_math;
pub use geonav_solid;
pub use geonav_sphere;

pub mod config;
pub mod navigate;

pub use config::{BoxDimensions, ConfigError, SceneConfig, ShapeConfig};
pub use geonav_math::{is_big, Dir3, Point3, Tolerance, Vec3, BIG};
pub use geonav_solid::{
    BoundingBox, Crossing, ExitCrossing, GeometryError, QueryMode, Solid,
};
pub use geonav_sphere::{Checks, Sphere, SphereDimensions, SphereParams};
pub use navigate::{Boundary, Navigator, Step};
