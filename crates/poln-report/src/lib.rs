//! # POLN Report - Simulation Output
//!
//! Writes each horizon's results into the results directory:
//!
//! | File | Content |
//! |------|---------|
//! | `simulation_{Y}y.csv` | one row per month |
//! | `simulation_{Y}y.svg` | four-panel chart (feature `charts`) |
//! | `summary_{Y}y.json` | [`RunSummary`](poln_economics::RunSummary) |

#[cfg(feature = "charts")]
pub mod chart;
pub mod error;
pub mod summary;
pub mod table;

pub use error::{ReportError, Result};
pub use summary::{interpretation, write_summary};
pub use table::{read_csv, write_csv, write_records};

#[cfg(feature = "charts")]
pub use chart::render_chart;

use poln_economics::SimulationRun;
use std::path::{Path, PathBuf};

/// Files produced for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArtifacts {
    pub csv: PathBuf,
    /// Absent when charts are disabled or rendering failed
    pub chart: Option<PathBuf>,
    pub summary: PathBuf,
}

/// Writes run outputs into a directory
#[derive(Clone, Debug)]
pub struct ReportWriter {
    output_dir: PathBuf,
    charts: bool,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            charts: cfg!(feature = "charts"),
        }
    }

    /// Enable or disable chart rendering
    pub fn with_charts(mut self, charts: bool) -> Self {
        self.charts = charts && cfg!(feature = "charts");
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn csv_path(&self, years: u32) -> PathBuf {
        self.output_dir.join(format!("simulation_{}y.csv", years))
    }

    pub fn chart_path(&self, years: u32) -> PathBuf {
        self.output_dir.join(format!("simulation_{}y.svg", years))
    }

    pub fn summary_path(&self, years: u32) -> PathBuf {
        self.output_dir.join(format!("summary_{}y.json", years))
    }

    /// Write CSV, summary and (optionally) chart for a run
    pub fn write_run(&self, run: &SimulationRun) -> Result<RunArtifacts> {
        std::fs::create_dir_all(&self.output_dir)?;

        let csv = self.csv_path(run.years);
        write_csv(&csv, &run.records)?;

        let summary = self.summary_path(run.years);
        write_summary(&summary, &run.summary)?;

        let chart = if self.charts { self.try_chart(run) } else { None };

        tracing::info!(
            years = run.years,
            csv = %csv.display(),
            chart = chart.is_some(),
            "results written"
        );

        Ok(RunArtifacts { csv, chart, summary })
    }

    #[cfg(feature = "charts")]
    fn try_chart(&self, run: &SimulationRun) -> Option<PathBuf> {
        let path = self.chart_path(run.years);
        match render_chart(&path, run) {
            Ok(()) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "chart generation failed, CSV still available");
                None
            }
        }
    }

    #[cfg(not(feature = "charts"))]
    fn try_chart(&self, _run: &SimulationRun) -> Option<PathBuf> {
        None
    }
}
