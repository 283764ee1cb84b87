use serde_json::json;

use crate::config::{ConversionSample, Operation, OperationSample, OutputFormat, SampleSet};

/// Error types for report rendering
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render every sample in the set, conversions first, one line each
pub fn render(samples: &SampleSet) -> Result<Vec<String>, ReportError> {
    let mut lines = Vec::with_capacity(samples.conversions.len() + samples.operations.len());

    for sample in &samples.conversions {
        lines.push(render_conversion(sample, samples.output)?);
    }

    for sample in &samples.operations {
        lines.push(render_operation(sample, samples.output)?);
    }

    Ok(lines)
}

fn render_conversion(
    sample: &ConversionSample,
    format: OutputFormat,
) -> Result<String, ReportError> {
    let measurement = sample.measurement().build();

    let line = match (format, measurement) {
        (OutputFormat::Text, Ok(m)) => {
            format!("{} = {} {}", m, m.convert_to(&sample.to), sample.to)
        }
        (OutputFormat::Text, Err(_)) => format!("Invalid {} measurement", sample.kind),
        (OutputFormat::Json, Ok(m)) => serde_json::to_string(&json!({
            "measurement": m,
            "to": sample.to,
            "result": m.convert_to(&sample.to),
        }))?,
        (OutputFormat::Json, Err(err)) => serde_json::to_string(&json!({
            "measurement": sample.measurement(),
            "to": sample.to,
            "error": err.to_string(),
        }))?,
    };

    Ok(line)
}

fn render_operation(
    sample: &OperationSample,
    format: OutputFormat,
) -> Result<String, ReportError> {
    let outcome = sample.evaluate();

    let line = match format {
        OutputFormat::Text => match outcome {
            Ok(result) => {
                let (left, right) = (&sample.left, &sample.right);
                match sample.op {
                    Operation::Add => format!(
                        "{} {} + {} {} = {}",
                        left.value, left.unit, right.value, right.unit, result
                    ),
                    Operation::Diff => format!(
                        "|{} {} - {} {}| = {}",
                        left.value, left.unit, right.value, right.unit, result
                    ),
                }
            }
            Err(err) => format!("{} failed: {}", sample.op.name(), err),
        },
        OutputFormat::Json => {
            let mut value = serde_json::to_value(sample)?;
            match outcome {
                Ok(result) => value["result"] = serde_json::to_value(result)?,
                Err(err) => value["error"] = json!(err.to_string()),
            }
            serde_json::to_string(&value)?
        }
    };

    Ok(line)
}
