//! Generates a demo dataset for the studio and writes it to a workbook, or
//! to JSON documents when the workbook writer is unavailable.
//!
//! Flags and `SALON_DATA_*` environment variables are described by
//! `salon_data::Settings`. Diagnostics go to stderr through `tracing`
//! (`RUST_LOG` overrides the default `info` level); progress lines and the
//! final summary go to stdout.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use salon_data::{
    ConfigError, ExportError, GenerationError, SeededSource, Settings, check_consistency,
    fallback_notice, generate_dataset, select_sink, summary_lines,
};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Anything that stops a run.
#[derive(Debug, Error)]
enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

fn main() -> ExitCode {
    init_tracing();
    match run(&DefaultClock) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn run(clock: &impl Clock) -> Result<(), RunError> {
    let settings = Settings::load_from_args(env::args_os())?;
    settings.validate()?;

    let mut rng = settings
        .seed()
        .map_or_else(SeededSource::from_entropy, SeededSource::from_seed);
    let today: NaiveDate = clock.local().date_naive();
    info!(seed = rng.seed(), %today, "starting run");

    let mut out = io::stdout().lock();
    progress(&mut out, "Generating demo data...");
    let dataset = generate_dataset(&mut rng, today, settings.generation_options())?;
    for violation in check_consistency(&dataset) {
        warn!(%violation, "generated dataset is inconsistent");
    }

    if let Some(notice) = fallback_notice(&settings) {
        progress(&mut out, notice);
    }
    let sink = select_sink(&settings);
    let tables = dataset.tables()?;
    let report = sink.write(&tables)?;

    for line in summary_lines(&report, rng.seed(), &dataset.summary()) {
        progress(&mut out, &line);
    }

    Ok(())
}

fn progress(out: &mut impl Write, line: &str) {
    if let Err(err) = writeln!(out, "{line}") {
        drop(err);
    }
}
