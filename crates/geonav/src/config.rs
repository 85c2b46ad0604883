//! Shape descriptions loaded from TOML or JSON.
//!
//! ```toml
//! [[shapes]]
//! type = "sphere"
//! rmin = 5.0
//! rmax = 10.0
//! phi1 = 0.0
//! phi2 = 90.0
//!
//! [[shapes]]
//! type = "box"
//! dx = 1.0
//! dy = 2.0
//! dz = 3.0
//! ```
//!
//! Dimensions are validated when the shapes are built, not when the file is
//! parsed.

use std::path::Path;

use geonav_math::Point3;
use geonav_solid::{BoundingBox, GeometryError, Solid};
use geonav_sphere::{Sphere, SphereDimensions, SphereParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from loading or building a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document parsed but describes an invalid shape.
    #[error("invalid shape: {0}")]
    Geometry(#[from] GeometryError),

    /// TOML syntax or schema error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or schema error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension names no supported format.
    #[error("unsupported configuration format: {0}")]
    UnknownFormat(String),
}

/// Box half-widths and center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Half-width along X.
    pub dx: f64,
    /// Half-width along Y.
    pub dy: f64,
    /// Half-width along Z.
    pub dz: f64,
    /// Center of the box.
    #[serde(default)]
    pub origin: [f64; 3],
}

/// One shape of a configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeConfig {
    /// Spherical shell; omitted angles give the full sphere.
    Sphere(SphereDimensions),
    /// Axis-aligned box.
    Box(BoxDimensions),
}

impl ShapeConfig {
    /// Validate the dimensions and build the shape.
    pub fn build(&self) -> Result<Box<dyn Solid>, ConfigError> {
        let solid: Box<dyn Solid> = match *self {
            ShapeConfig::Sphere(dims) => Box::new(Sphere::new(SphereParams::try_from(dims)?)),
            ShapeConfig::Box(b) => {
                let [x, y, z] = b.origin;
                Box::new(BoundingBox::new(Point3::new(x, y, z), b.dx, b.dy, b.dz)?)
            }
        };
        Ok(solid)
    }
}

/// A document holding a list of shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Shapes in document order.
    #[serde(default)]
    pub shapes: Vec<ShapeConfig>,
}

impl SceneConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let scene = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            _ => return Err(ConfigError::UnknownFormat(path.display().to_string())),
        };
        debug!("Loaded {} shapes from {}", scene.shapes.len(), path.display());
        Ok(scene)
    }

    /// Build every shape, failing on the first invalid one.
    pub fn build(&self) -> Result<Vec<Box<dyn Solid>>, ConfigError> {
        self.shapes.iter().map(ShapeConfig::build).collect()
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
