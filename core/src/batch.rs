// core/src/batch.rs
use std::io::{self, Write};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::metrics::{package_errors_total, summaries_total};
use crate::registry::read_package;

/// Én pakke fra sensorene: aktivitetskode + rå målinger.
///
/// På disk er den et par: `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<Value>)", into = "(String, Vec<Value>)")]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<Value>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<Value>) -> Self {
        Self { workout_type: workout_type.into(), data }
    }
}

impl From<(String, Vec<Value>)> for Package {
    fn from((workout_type, data): (String, Vec<Value>)) -> Self {
        Self { workout_type, data }
    }
}

impl From<Package> for (String, Vec<Value>) {
    fn from(p: Package) -> Self {
        (p.workout_type, p.data)
    }
}

/// Innebygd batch som kjøres når ingen fil er gitt.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![json!(720), json!(1), json!(80), json!(25), json!(40)]),
        Package::new("RUN", vec![json!(15000), json!(1), json!(75)]),
        Package::new("WLK", vec![json!(9000), json!(1), json!(75), json!(180)]),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
}

/// Kjører alle pakker i rekkefølge og skriver én linje per pakke til `out`.
///
/// En ugyldig pakke gir en `Error: ...`-linje og batchen fortsetter;
/// bare I/O-feil mot `out` avbryter.
pub fn run_batch<W: Write>(
    packages: &[Package],
    out: &mut W,
    format: OutputFormat,
) -> io::Result<BatchReport> {
    let mut report = BatchReport::default();

    for (i, package) in packages.iter().enumerate() {
        match read_package(&package.workout_type, &package.data) {
            Ok(training) => {
                let info = training.show_training_info();
                debug!("package #{i} {} -> {:?}", package.workout_type, info);
                summaries_total(&info.training_type).inc();

                match format {
                    OutputFormat::Text => writeln!(out, "{}", info.get_message())?,
                    OutputFormat::Json => {
                        let line = serde_json::to_string(&info).map_err(io::Error::from)?;
                        writeln!(out, "{line}")?
                    }
                }
                report.processed += 1;
            }
            Err(e) => {
                warn!("package #{i} skipped: {e}");
                package_errors_total(e.reason()).inc();

                match format {
                    OutputFormat::Text => writeln!(out, "Error: {e}")?,
                    OutputFormat::Json => {
                        writeln!(out, "{}", json!({ "error": e.to_string(), "reason": e.reason() }))?
                    }
                }
                report.failed += 1;
            }
        }
    }

    info!(
        "batch done: {} summarised, {} rejected",
        report.processed, report.failed
    );
    Ok(report)
}
