//! Text graph ingestion, symmetrization, and weighting.
//!
//! `mastiff-core` deliberately has no file format of its own — ingestion is
//! an external collaborator's job. This module is that collaborator for the
//! CLI driver: it reads a plain edge-list text format, assigns weights to
//! unweighted edges, and hands the result to
//! [`mastiff_core::builder::from_edge_list`], which performs the actual
//! symmetrization (each undirected edge becomes both directed slots).
//!
//! # Format
//!
//! ```text
//! <n> <m>
//! <u> <v> [w]
//! ...  (m lines)
//! ```
//!
//! `n` is the vertex count, `m` the edge count. Each edge line gives two
//! 0-based vertex ids and an optional positive integer weight; when the
//! weight is omitted a deterministic pseudo-random weight is assigned.

use std::io::BufRead;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use mastiff_core::{MastiffError, WeightedGraph};

/// The default weight range used for edges that omit an explicit weight.
const UNWEIGHTED_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// Errors raised while reading and parsing an edge-list file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The header line was missing or malformed.
    #[error("malformed header line: {0}")]
    MalformedHeader(String),
    /// An edge line had the wrong number of fields or unparseable ids/weight.
    #[error("malformed edge on line {line}: {detail}")]
    MalformedEdge { line: usize, detail: String },
    /// The file claimed `m` edges but supplied a different number.
    #[error("header declared {declared} edges but {actual} were read")]
    EdgeCountMismatch { declared: usize, actual: usize },
    /// The resulting graph failed `mastiff-core`'s own invariant checks.
    #[error("constructed graph is invalid: {0}")]
    InvalidGraph(#[from] MastiffError),
}

/// Reads, symmetrizes, and weights a graph from a text edge-list file,
/// using `seed` to make any assigned weights reproducible.
pub fn load_edge_list(path: &Path, seed: u64) -> Result<WeightedGraph, IngestError> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| IngestError::MalformedHeader("file is empty".to_owned()))?
        .map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;
    let (n, m) = parse_header(&header)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut triples = Vec::with_capacity(m);
    for (i, line) in lines.enumerate() {
        let line = line.map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;
        let triple = parse_edge_line(&line, i + 2, &mut rng)?;
        triples.push(triple);
    }

    if triples.len() != m {
        return Err(IngestError::EdgeCountMismatch { declared: m, actual: triples.len() });
    }

    Ok(mastiff_core::builder::from_edge_list(n, &triples)?)
}

fn parse_header(line: &str) -> Result<(usize, usize), IngestError> {
    let mut fields = line.split_whitespace();
    let n = fields
        .next()
        .and_then(|f| f.parse::<usize>().ok())
        .ok_or_else(|| IngestError::MalformedHeader(line.to_owned()))?;
    let m = fields
        .next()
        .and_then(|f| f.parse::<usize>().ok())
        .ok_or_else(|| IngestError::MalformedHeader(line.to_owned()))?;
    Ok((n, m))
}

fn parse_edge_line(line: &str, line_no: usize, rng: &mut StdRng) -> Result<(u32, u32, u32), IngestError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let bad = |detail: &str| IngestError::MalformedEdge { line: line_no, detail: detail.to_owned() };

    if fields.len() != 2 && fields.len() != 3 {
        return Err(bad("expected `u v` or `u v w`"));
    }
    let u: u32 = fields[0].parse().map_err(|_| bad("endpoint `u` is not a valid vertex id"))?;
    let v: u32 = fields[1].parse().map_err(|_| bad("endpoint `v` is not a valid vertex id"))?;
    let w: u32 = match fields.get(2) {
        Some(raw) => raw.parse().map_err(|_| bad("weight is not a valid positive integer"))?,
        None => rng.random_range(UNWEIGHTED_RANGE),
    };
    if w == 0 {
        return Err(bad("weight must be strictly positive"));
    }
    Ok((u, v, w))
}
