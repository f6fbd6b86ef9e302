//! Rendering of measurements as text or JSON.

use serde::Serialize;

use crate::harness::{Measurement, ScalePoint};
use crate::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Two lines per component
    #[default]
    Text,
    /// Array of objects with integer microsecond fields
    Json,
}

#[derive(Serialize)]
struct MeasurementRecord {
    label: &'static str,
    words: usize,
    prefixes: usize,
    insertion_us: u64,
    search_us: u64,
}

impl From<&Measurement> for MeasurementRecord {
    fn from(m: &Measurement) -> Self {
        Self {
            label: m.label,
            words: m.words,
            prefixes: m.prefixes,
            insertion_us: m.insertion_micros(),
            search_us: m.search_micros(),
        }
    }
}

#[derive(Serialize)]
struct ScalePointRecord {
    size: usize,
    tree: MeasurementRecord,
    linear: MeasurementRecord,
}

/// Render the measurements of a single run.
pub fn render_run(measurements: &[Measurement], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(measurements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let records: Vec<MeasurementRecord> = measurements.iter().map(Into::into).collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
    }
}

/// Render a scaling sweep.
pub fn render_sweep(points: &[ScalePoint], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(points
            .iter()
            .map(|p| format!("Vocabulary size: {}\n{}\n{}", p.size, p.tree, p.linear))
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => {
            let records: Vec<ScalePointRecord> = points
                .iter()
                .map(|p| ScalePointRecord {
                    size: p.size,
                    tree: (&p.tree).into(),
                    linear: (&p.linear).into(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
    }
}
