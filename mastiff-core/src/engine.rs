/*!
# Round Orchestration

Ties the partitioner, concurrent union-find, edge store, selector, and
contraction engine into the Borůvka-style contraction loop described by
the data model: repeatedly select each active component's minimum
outgoing edge and contract it, until a round contracts nothing. Each round
is a single parallel phase with a `collect`-shaped barrier at its end
(`rayon`'s own install/scope join), matching the teacher's established
per-phase parallelism rather than a custom barrier primitive.
*/

use crate::edge_store::EdgeStore;
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::partition::Partitioner;
use crate::pool::{build_pool, NoNumaPolicy, NumaPolicy};
use crate::result::{self, MsfResult};
use crate::selector::{select_round, Cursors};
use crate::telemetry;
use crate::union_find::ConcurrentUnionFind;
use crate::contraction::contract_round;

/// Tunables for one [`compute_msf`] call.
#[derive(Debug, Clone)]
pub struct MsfConfig {
    /// Worker thread count; `0` defers to rayon's default (usually the
    /// number of logical cores).
    pub threads: usize,
    /// Partitions built per worker thread, for work-stealing granularity.
    pub partitions_per_thread: usize,
    /// Whether to run the independent serial validator after computing the
    /// forest and fail with [`crate::error::MastiffError::ValidationFailed`]
    /// if it disagrees.
    pub validate: bool,
}

impl Default for MsfConfig {
    fn default() -> Self {
        MsfConfig {
            threads: 0,
            partitions_per_thread: 4,
            validate: false,
        }
    }
}

/// Computes a minimum spanning forest of `graph` under `config`, using the
/// default (no-op) NUMA policy.
pub fn compute_msf(graph: &WeightedGraph, config: &MsfConfig) -> Result<MsfResult> {
    compute_msf_with_policy(graph, config, &NoNumaPolicy)
}

/// As [`compute_msf`], but with an explicit [`NumaPolicy`] for pool setup.
pub fn compute_msf_with_policy(
    graph: &WeightedGraph,
    config: &MsfConfig,
    policy: &dyn NumaPolicy,
) -> Result<MsfResult> {
    let pool = build_pool(config.threads, policy)?;
    let n = graph.node_count();

    let store = EdgeStore::new(graph);
    let uf = ConcurrentUnionFind::new(n);
    let cursors = Cursors::new(n);
    let partitioner = Partitioner::build(graph.offsets(), pool.current_num_threads(), config.partitions_per_thread);

    telemetry::computation_started(n, graph.slot_count(), partitioner.len(), pool.current_num_threads());

    let mut forest = Vec::new();
    let mut round = 0usize;

    pool.install(|| loop {
        round += 1;
        let candidates = select_round(&store, &uf, &cursors, &partitioner);
        let committed = contract_round(&store, &uf, &candidates);
        telemetry::round_complete(round, uf.component_count(), committed.len());
        if committed.is_empty() {
            break;
        }
        forest.extend(committed);
    });

    telemetry::computation_finished(round, forest.len());

    let msf = MsfResult::from_forest_edges(forest);

    if config.validate && !result::validate(graph, &msf) {
        return Err(crate::error::MastiffError::validation_failed(
            "computed forest failed independent validation",
        ));
    }

    Ok(msf)
}
