mod display;
pub mod rounding;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Kind, Quantity};
use rounding::{round_cents, round_formatted};

/// Error types for measurement operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    #[error("Measurement value must be positive and finite, got {0}")]
    InvalidValue(f64),

    #[error("Unknown {kind} unit: {unit}")]
    UnknownUnit { kind: Kind, unit: String },

    #[error("Cannot combine {left} measurement with {right} measurement")]
    Incompatible { left: Kind, right: Kind },
}

/// A positive value in a unit of a given kind.
///
/// Only built through [`Measurement::new`], so the value is always strictly
/// positive and finite, and the unit is always a key of the kind's conversion
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "RawMeasurement")]
pub struct Measurement {
    kind: Kind,
    value: f64,
    unit: &'static str,
}

/// Unvalidated measurement fields, as read from configuration or JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub kind: Kind,
    pub value: f64,
    pub unit: String,
}

impl RawMeasurement {
    pub fn new(kind: Kind, value: f64, unit: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            unit: unit.into(),
        }
    }

    pub fn build(&self) -> Result<Measurement, MeasurementError> {
        Measurement::new(self.kind, self.value, &self.unit)
    }
}

impl TryFrom<RawMeasurement> for Measurement {
    type Error = MeasurementError;

    fn try_from(raw: RawMeasurement) -> Result<Self, Self::Error> {
        raw.build()
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawMeasurement::deserialize(deserializer)?
            .build()
            .map_err(serde::de::Error::custom)
    }
}

impl From<Measurement> for RawMeasurement {
    fn from(measurement: Measurement) -> Self {
        RawMeasurement::new(measurement.kind, measurement.value, measurement.unit)
    }
}

impl Measurement {
    /// Validate and build a measurement
    pub fn new(kind: Kind, value: f64, unit: &str) -> Result<Self, MeasurementError> {
        // Written negated so NaN is rejected too
        if !(value > 0.0 && value.is_finite()) {
            tracing::debug!(%kind, value, unit, "rejected non-positive or infinite measurement");
            return Err(MeasurementError::InvalidValue(value));
        }

        let Some(unit) = kind.table().canonical(unit) else {
            tracing::debug!(%kind, value, unit, "rejected unknown unit");
            return Err(MeasurementError::UnknownUnit {
                kind,
                unit: unit.to_string(),
            });
        };

        Ok(Self { kind, value, unit })
    }

    pub fn length(value: f64, unit: &str) -> Result<Self, MeasurementError> {
        Self::new(Kind::Length, value, unit)
    }

    pub fn weight(value: f64, unit: &str) -> Result<Self, MeasurementError> {
        Self::new(Kind::Weight, value, unit)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Value of this measurement in `unit`, rounded to two decimals.
    ///
    /// Returns the value untouched when `unit` is already this measurement's
    /// unit, and `f64::NAN` when `unit` is not in this kind's table.
    pub fn convert_to(&self, unit: &str) -> f64 {
        if unit == self.unit {
            return self.value;
        }

        match self.kind.table().ratio(self.unit, unit) {
            Some(ratio) => round_formatted(self.value / ratio),
            None => f64::NAN,
        }
    }

    /// Like [`convert_to`](Self::convert_to), with an error instead of NaN
    pub fn try_convert_to(&self, unit: &str) -> Result<f64, MeasurementError> {
        if !self.kind.table().contains(unit) {
            return Err(MeasurementError::UnknownUnit {
                kind: self.kind,
                unit: unit.to_string(),
            });
        }

        Ok(self.convert_to(unit))
    }

    /// Re-express this measurement in another unit of the same kind
    pub fn to_unit(&self, unit: &str) -> Result<Measurement, MeasurementError> {
        let value = self.try_convert_to(unit)?;
        Measurement::new(self.kind, value, unit)
    }

    /// Same kind, and both units present in that kind's table
    pub fn is_same_type(&self, other: &Measurement) -> bool {
        self.check_compatible(other).is_ok()
    }

    /// Sum of both measurements, in this measurement's unit
    pub fn add(&self, other: &Measurement) -> Result<Measurement, MeasurementError> {
        self.combine(other, |a, b| a + b)
    }

    /// Absolute difference of both measurements, in this measurement's unit
    pub fn diff(&self, other: &Measurement) -> Result<Measurement, MeasurementError> {
        self.combine(other, |a, b| (a - b).abs())
    }

    pub fn to_quantity(&self) -> Result<Quantity, MeasurementError> {
        Quantity::new(self.kind, self.value, self.unit)
    }

    /// Read a `uom` quantity back as a measurement in `unit`
    pub fn from_quantity(quantity: Quantity, unit: &str) -> Result<Self, MeasurementError> {
        let value = quantity.get(unit)?;
        Measurement::new(quantity.kind(), value, unit)
    }

    fn check_compatible(&self, other: &Measurement) -> Result<(), MeasurementError> {
        if self.kind != other.kind {
            return Err(MeasurementError::Incompatible {
                left: self.kind,
                right: other.kind,
            });
        }

        let table = self.kind.table();
        for unit in [self.unit, other.unit] {
            if !table.contains(unit) {
                return Err(MeasurementError::UnknownUnit {
                    kind: self.kind,
                    unit: unit.to_string(),
                });
            }
        }

        Ok(())
    }

    fn combine(
        &self,
        other: &Measurement,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Measurement, MeasurementError> {
        if let Err(err) = self.check_compatible(other) {
            tracing::debug!(
                left = %self,
                right = %other,
                error = %err,
                "measurements not combinable"
            );
            return Err(err);
        }

        // The converted operand must itself be a valid measurement
        let converted = Measurement::new(self.kind, other.convert_to(self.unit), self.unit)?;
        let value = op(self.value, converted.convert_to(self.unit));

        Measurement::new(self.kind, round_cents(value), self.unit)
    }
}

/// True when both measurements can be converted into each other
pub fn are_same_type(m1: &Measurement, m2: &Measurement) -> bool {
    m1.is_same_type(m2)
}

pub fn add_measurements(
    m1: &Measurement,
    m2: &Measurement,
) -> Result<Measurement, MeasurementError> {
    m1.add(m2)
}

pub fn diff_between(
    m1: &Measurement,
    m2: &Measurement,
) -> Result<Measurement, MeasurementError> {
    m1.diff(m2)
}
