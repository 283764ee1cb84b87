use measure_core::{config::SampleSet, report};
use tracing_subscriber::EnvFilter;

/// Runs the builtin sample set and prints each result line.
fn main() {
    init_logging();

    if let Err(err) = try_run() {
        eprintln!("error: {err}");
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let samples = SampleSet::builtin()?;
    tracing::debug!(
        conversions = samples.conversions.len(),
        operations = samples.operations.len(),
        "loaded sample set"
    );

    for line in report::render(&samples)? {
        println!("{line}");
    }

    Ok(())
}
