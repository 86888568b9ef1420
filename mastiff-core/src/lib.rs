//! MASTIFF: a parallel, structure-aware minimum spanning forest engine.
//!
//! Computes a minimum spanning forest of a weighted, undirected graph using
//! a shared-memory Borůvka-style contraction loop: each round finds every
//! still-active component's minimum outgoing edge in parallel and contracts
//! it via a lock-free concurrent union-find, until no cross-component edges
//! remain. See [`compute_msf`] for the entry point.
//!
//! Graph ingestion, symmetrization, and thread-pool/NUMA topology discovery
//! are explicitly out of scope here; they are the job of an external
//! collaborator (see `mastiff-cli` for a driver that supplies them).

pub mod builder;
pub mod contraction;
pub mod edge_store;
pub mod engine;
pub mod error;
pub mod graph;
pub mod partition;
pub mod pool;
pub mod result;
pub mod selector;
pub mod telemetry;
pub mod union_find;

#[cfg(feature = "logging")]
mod settings;

pub use engine::{compute_msf, compute_msf_with_policy, MsfConfig};
pub use error::{MastiffError, Result};
pub use graph::{EdgeSlot, VertexId, WeightedGraph};
pub use pool::{NoNumaPolicy, NumaPolicy};
pub use result::MsfResult;

/// Independent, serial validation of a computed forest.
pub mod validate {
    pub use crate::result::validate;
}
