pub use uom::si::f64::*;
pub use uom::si::{
    angle::{degree, radian},
    length::{centimeter, foot, inch, meter, millimeter},
};
pub use uom::si::{angle, length};
use serde::{Deserialize, Serialize};
// Type aliases for domain clarity (zero cost)
pub type Distance = Length;
pub type JointAngle = Angle;
pub type LinkTwist = Angle;
pub type LinkOffset = Length;
pub type LinkLength = Length;

// Common units for convenience
pub mod units {
    pub use uom::si::angle::{degree, radian};
    pub use uom::si::length::{centimeter, foot, inch, meter, millimeter};
}

pub mod scalar;

// Re-export nalgebra
pub use nalgebra as na;

// Standard units we use internally (just documentation)
/// Internal standard: meters
pub const INTERNAL_LENGTH_UNIT: &str = "meters";
/// Internal standard: radians
pub const INTERNAL_ANGLE_UNIT: &str = "radians";

use std::{fmt, marker::PhantomData};
#[derive(Debug)]
pub struct DisplayAngle(pub Angle);
#[derive(Debug)]
pub struct DisplayDistance(pub Distance);

impl fmt::Display for DisplayAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0.get::<degree>())
    }
}

impl fmt::Display for DisplayDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0.get::<meter>();
        let mm = self.0.get::<millimeter>();
        write!(f, "{:.4}m ({:.1}mm)", m, mm)
    }
}

/// A raw value tagged with the unit string it was written in
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type LengthValue = WithUnit<Length>;
pub type AngleValue = WithUnit<Angle>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown length unit: {0}")]
    UnknownLengthUnit(String),

    #[error("Unknown angle unit: {0}")]
    UnknownAngleUnit(String),
}

impl WithUnit<Length> {
    pub fn to_distance(&self) -> Result<Distance, UnitError> {
        match self.unit.to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => {
                Ok(Distance::new::<meter>(self.value))
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Distance::new::<centimeter>(self.value))
            }
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(Distance::new::<millimeter>(self.value))
            }
            "in" | "inch" | "inches" => Ok(Distance::new::<inch>(self.value)),
            "ft" | "foot" | "feet" => Ok(Distance::new::<foot>(self.value)),
            _ => Err(UnitError::UnknownLengthUnit(self.unit.clone())),
        }
    }

    pub fn from_distance(distance: Distance, unit: &str) -> Result<Self, UnitError> {
        let value = match unit.to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => distance.get::<meter>(),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                distance.get::<centimeter>()
            }
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                distance.get::<millimeter>()
            }
            "in" | "inch" | "inches" => distance.get::<inch>(),
            "ft" | "foot" | "feet" => distance.get::<foot>(),
            _ => return Err(UnitError::UnknownLengthUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

impl WithUnit<Angle> {
    pub fn to_angle(&self) -> Result<Angle, UnitError> {
        match self.unit.to_lowercase().as_str() {
            "deg" | "degree" | "degrees" | "°" => Ok(Angle::new::<degree>(self.value)),
            "rad" | "rads" | "radian" | "radians" => Ok(Angle::new::<radian>(self.value)),
            _ => Err(UnitError::UnknownAngleUnit(self.unit.clone())),
        }
    }

    pub fn from_angle(angle: Angle, unit: &str) -> Result<Self, UnitError> {
        let value = match unit.to_lowercase().as_str() {
            "deg" | "degree" | "degrees" | "°" => angle.get::<degree>(),
            "rad" | "rads" | "radian" | "radians" => angle.get::<radian>(),
            _ => return Err(UnitError::UnknownAngleUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

/// Convert UOM Distance to internal coordinate (meters)
#[inline]
pub fn to_coord(distance: Distance) -> f64 {
    distance.get::<meter>()
}

/// Convert internal coordinate (meters) to UOM Distance
#[inline]
pub fn from_coord(value: f64) -> Distance {
    Distance::new::<meter>(value)
}

/// Create Point3 from UOM Distances
pub fn point_from_distances(x: Distance, y: Distance, z: Distance) -> na::Point3<f64> {
    na::Point3::new(to_coord(x), to_coord(y), to_coord(z))
}
