use std::fmt;
use uom::si::{
    f64::{Length, Mass},
    length::{centimeter, decimeter, inch, meter, millimeter},
    mass::{gram, kilogram, milligram, ounce, pound},
};

use crate::measurement::MeasurementError;
use crate::types::Kind;

/// A measurement expressed as a `uom` quantity.
///
/// Uses the SI definitions of each unit rather than the conversion tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Length(Length),
    Weight(Mass),
}

impl Quantity {
    /// Build a quantity from a value in a table unit of `kind`
    pub fn new(kind: Kind, value: f64, unit: &str) -> Result<Self, MeasurementError> {
        match kind {
            Kind::Length => {
                let length = match unit {
                    "millimeter" => Length::new::<millimeter>(value),
                    "centimeter" => Length::new::<centimeter>(value),
                    "decimeter" => Length::new::<decimeter>(value),
                    "inch" => Length::new::<inch>(value),
                    "meter" => Length::new::<meter>(value),
                    _ => return Err(unknown(kind, unit)),
                };
                Ok(Quantity::Length(length))
            }
            Kind::Weight => {
                let mass = match unit {
                    "milligram" => Mass::new::<milligram>(value),
                    "gram" => Mass::new::<gram>(value),
                    "kilogram" => Mass::new::<kilogram>(value),
                    "pound" => Mass::new::<pound>(value),
                    "ounce" => Mass::new::<ounce>(value),
                    _ => return Err(unknown(kind, unit)),
                };
                Ok(Quantity::Weight(mass))
            }
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Quantity::Length(_) => Kind::Length,
            Quantity::Weight(_) => Kind::Weight,
        }
    }

    /// Read the quantity in a table unit of its own kind
    pub fn get(&self, unit: &str) -> Result<f64, MeasurementError> {
        let value = match self {
            Quantity::Length(length) => match unit {
                "millimeter" => length.get::<millimeter>(),
                "centimeter" => length.get::<centimeter>(),
                "decimeter" => length.get::<decimeter>(),
                "inch" => length.get::<inch>(),
                "meter" => length.get::<meter>(),
                _ => return Err(unknown(self.kind(), unit)),
            },
            Quantity::Weight(mass) => match unit {
                "milligram" => mass.get::<milligram>(),
                "gram" => mass.get::<gram>(),
                "kilogram" => mass.get::<kilogram>(),
                "pound" => mass.get::<pound>(),
                "ounce" => mass.get::<ounce>(),
                _ => return Err(unknown(self.kind(), unit)),
            },
        };

        Ok(value)
    }
}

fn unknown(kind: Kind, unit: &str) -> MeasurementError {
    MeasurementError::UnknownUnit {
        kind,
        unit: unit.to_string(),
    }
}

impl From<Length> for Quantity {
    fn from(length: Length) -> Self {
        Quantity::Length(length)
    }
}

impl From<Mass> for Quantity {
    fn from(mass: Mass) -> Self {
        Quantity::Weight(mass)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Length(length) => {
                write!(f, "{:.3}m ({:.3}in)", length.get::<meter>(), length.get::<inch>())
            }
            Quantity::Weight(mass) => {
                write!(f, "{:.3}kg ({:.3}lbs)", mass.get::<kilogram>(), mass.get::<pound>())
            }
        }
    }
}
