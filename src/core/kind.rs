//! Shape variant identity.

use serde::{Deserialize, Serialize};

/// Identifier for a concrete shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Sphere,
    Cube,
    Cylinder,
    RectangularPrism,
    Cone,
}

impl ShapeKind {
    /// All built-in variants, in registration order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Cylinder,
        ShapeKind::RectangularPrism,
        ShapeKind::Cone,
    ];

    /// Get the variant name as used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::RectangularPrism => "rectangular-prism",
            ShapeKind::Cone => "cone",
        }
    }

    /// Type name used in `Display` output (e.g. `RectangularPrism`).
    pub fn type_name(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cube => "Cube",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::RectangularPrism => "RectangularPrism",
            ShapeKind::Cone => "Cone",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = ShapeKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sphere" => Ok(ShapeKind::Sphere),
            "cube" => Ok(ShapeKind::Cube),
            "cylinder" => Ok(ShapeKind::Cylinder),
            "rectangular-prism" | "rectangularprism" | "prism" | "box" => {
                Ok(ShapeKind::RectangularPrism)
            }
            "cone" => Ok(ShapeKind::Cone),
            _ => Err(ShapeKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown shape kind.
#[derive(Debug, Clone)]
pub struct ShapeKindParseError(pub String);

impl std::fmt::Display for ShapeKindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid shape kind '{}', valid values: sphere, cube, cylinder, rectangular-prism, cone",
            self.0
        )
    }
}

impl std::error::Error for ShapeKindParseError {}
