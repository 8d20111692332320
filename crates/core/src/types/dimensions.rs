//! Physical dimensions for product shapes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Unit of measure for physical dimensions.
///
/// The preview renderer contract expresses everything in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    /// Millimeters.
    #[default]
    #[serde(rename = "mm")]
    Millimeters,
}

impl fmt::Display for DimensionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeters => write!(f, "mm"),
        }
    }
}

/// Physical width and height of a shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in `unit`.
    pub width: f64,
    /// Height in `unit`.
    pub height: f64,
    /// Unit of measure.
    pub unit: DimensionUnit,
}

impl Dimensions {
    /// Create dimensions in millimeters.
    #[must_use]
    pub const fn millimeters(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            unit: DimensionUnit::Millimeters,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} {}", self.width, self.height, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let dims = Dimensions::millimeters(85.6, 54.0);
        assert_eq!(dims.to_string(), "85.6 x 54 mm");
    }

    #[test]
    fn test_unit_serializes_as_mm() {
        let json = serde_json::to_string(&DimensionUnit::Millimeters).expect("serializes");
        assert_eq!(json, "\"mm\"");
    }
}
