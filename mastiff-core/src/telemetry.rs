/*!
# Round Telemetry

Thin `tracing` wrappers around the contraction loop's round boundaries,
kept in one place so the field names stay consistent regardless of which
caller is logging them.
*/

use tracing::{debug, info};

/// Emitted once, before the first round, with the computation's static
/// shape (vertex/slot counts, partition count, worker thread count).
pub fn computation_started(vertices: usize, slots: usize, partitions: usize, threads: usize) {
    info!(vertices, slots, partitions, threads, "starting MSF computation");
}

/// Emitted after every round's contraction step.
pub fn round_complete(round: usize, active_components: usize, contracted_this_round: usize) {
    debug!(round, active_components, contracted_this_round, "round complete");
}

/// Emitted once, after the contraction loop terminates.
pub fn computation_finished(rounds: usize, edges: usize) {
    info!(rounds, edges, "MSF computation finished");
}
