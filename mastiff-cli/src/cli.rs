//! Command-line argument parsing and orchestration for the `mastiff` CLI.
//!
//! Reads a text edge-list file, runs the parallel MSF engine, optionally
//! validates the result and cross-checks it against a serial Prim oracle,
//! and renders a summary.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use mastiff_core::{MastiffError, MsfConfig, MsfResult};

use crate::ingest::{self, IngestError};
use crate::prim;

/// Command-line options accepted by the `mastiff` binary.
#[derive(Debug, Parser, Clone)]
#[command(name = "mastiff", about = "Compute a minimum spanning forest in parallel.")]
pub struct Cli {
    /// Path to a text edge-list file (`n m` header, then `u v [w]` lines).
    pub input: PathBuf,

    /// Worker thread count; 0 defers to rayon's default.
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Partitions built per worker thread, for work-stealing granularity.
    #[arg(long, default_value_t = 4)]
    pub partitions_per_thread: usize,

    /// Run the independent serial validator after computing the forest.
    #[arg(long, default_value_t = false)]
    pub validate: bool,

    /// Cross-check the computed total weight against a serial Prim oracle.
    #[arg(long, default_value_t = false)]
    pub compare_prim: bool,

    /// Seed used to assign weights to unweighted edges, for reproducibility.
    #[arg(long, default_value_t = 0)]
    pub weight_seed: u64,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or parsing the input file failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// The engine itself failed (invariant violation or validation failure).
    #[error(transparent)]
    Engine(#[from] MastiffError),
    /// `--compare-prim` found a mismatch between the parallel and serial
    /// total weights — this indicates a real engine bug, not a usage error.
    #[error("parallel total weight {parallel} disagrees with serial Prim oracle total weight {serial}")]
    PrimMismatch { parallel: u64, serial: u64 },
}

/// Outcome of a successful CLI run, ready for rendering.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    pub input: PathBuf,
    pub msf: MsfResult,
    pub prim_total_weight: Option<u64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when ingestion, computation, validation, or the
/// Prim cross-check fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let graph = ingest::load_edge_list(&cli.input, cli.weight_seed)?;

    let config = MsfConfig {
        threads: cli.threads,
        partitions_per_thread: cli.partitions_per_thread,
        validate: cli.validate,
    };
    let msf = mastiff_core::compute_msf(&graph, &config)?;

    let prim_total_weight = if cli.compare_prim {
        let (_, serial_total) = prim::prim_forest(&graph);
        if serial_total != msf.total_weight {
            return Err(CliError::PrimMismatch { parallel: msf.total_weight, serial: serial_total });
        }
        Some(serial_total)
    } else {
        None
    };

    Ok(ExecutionSummary { input: cli.input.clone(), msf, prim_total_weight })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`std::io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> std::io::Result<()> {
    writeln!(writer, "input: {}", summary.input.display())?;
    writeln!(writer, "forest edges: {}", summary.msf.edges.len())?;
    writeln!(writer, "total weight: {}", summary.msf.total_weight)?;
    if let Some(prim_total) = summary.prim_total_weight {
        writeln!(writer, "prim oracle total weight: {prim_total} (agrees)")?;
    }
    for (u, v, w) in &summary.msf.edges {
        writeln!(writer, "{}\t{}\t{}", u.index(), v.index(), w)?;
    }
    Ok(())
}
