use serde::{Deserialize, Serialize};

use crate::measurement::{Measurement, MeasurementError, RawMeasurement};
use crate::types::Kind;

/// Sample set compiled into the binary
const BUILTIN_SAMPLES: &str = include_str!("../demos/samples.toml");

/// Error types for sample set loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A measurement to convert into another unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSample {
    pub kind: Kind,
    pub value: f64,
    pub unit: String,
    pub to: String,
}

impl ConversionSample {
    pub fn measurement(&self) -> RawMeasurement {
        RawMeasurement::new(self.kind, self.value, self.unit.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Diff,
}

impl Operation {
    pub fn apply(
        &self,
        left: &Measurement,
        right: &Measurement,
    ) -> Result<Measurement, MeasurementError> {
        match self {
            Operation::Add => left.add(right),
            Operation::Diff => left.diff(right),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Diff => "diff",
        }
    }
}

/// Two measurements to combine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSample {
    pub op: Operation,
    pub left: RawMeasurement,
    pub right: RawMeasurement,
}

impl OperationSample {
    /// Validate both operands and apply the operation
    pub fn evaluate(&self) -> Result<Measurement, MeasurementError> {
        let left = self.left.build()?;
        let right = self.right.build()?;
        self.op.apply(&left, &right)
    }
}

/// Measurements and operations for the demo to run.
///
/// Entries are kept unvalidated so invalid samples can be reported rather
/// than rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default)]
    pub conversions: Vec<ConversionSample>,

    #[serde(default)]
    pub operations: Vec<OperationSample>,
}

impl SampleSet {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_SAMPLES)
    }
}
