use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::batch::{default_packages, run_batch, BatchReport, OutputFormat};
use crate::metrics::gather_text;
use crate::storage::{load_packages, save_packages};

/// Skriver treningsoppsummering for en batch med sensorpakker.
#[derive(Debug, Parser)]
#[command(name = "workout-summary", version, about)]
pub struct Args {
    /// JSON-fil med pakker, f.eks. `[["RUN", [15000, 1, 75]]]`. Uten denne brukes innebygd batch.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Én JSON-linje per økt i stedet for tekstmelding.
    #[arg(long)]
    pub json: bool,

    /// Skriv Prometheus-tellere etter batchen.
    #[arg(long)]
    pub metrics: bool,

    /// Lagre innebygd batch til fil og avslutt.
    #[arg(long, value_name = "PATH", conflicts_with_all = ["input", "json", "metrics"])]
    pub save_default: Option<PathBuf>,
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<Option<BatchReport>> {
    if let Some(path) = &args.save_default {
        save_packages(&default_packages(), path)
            .with_context(|| format!("saving default batch to {}", path.display()))?;
        return Ok(None);
    }

    let packages = match &args.input {
        Some(path) => load_packages(path)?,
        None => default_packages(),
    };

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let report = run_batch(&packages, out, format).context("writing summaries")?;

    if args.metrics {
        write!(out, "{}", gather_text()).context("writing metrics")?;
    }
    Ok(Some(report))
}

pub fn main_with_args(args: Args) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush().context("flushing stdout")?;
    Ok(())
}
