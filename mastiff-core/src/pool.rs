/*!
# Thread Pool & NUMA Seam

Wraps [`rayon::ThreadPoolBuilder`] construction for the engine's round
loop, and defines the [`NumaPolicy`] seam the data model names but the
core does not implement: placing pages and pinning threads to NUMA nodes
is the job of an external collaborator that can see the host topology.
[`NoNumaPolicy`] is the default no-op, used whenever no topology-aware
policy is supplied.
*/

use crate::error::{MastiffError, Result};

/// A hook for NUMA-aware allocation and thread placement. The core never
/// calls into real topology detection; it only calls through this trait so
/// a caller who wants NUMA-interleaved allocation can supply one.
pub trait NumaPolicy: Send + Sync {
    /// Called once before a computation starts, with the thread count the
    /// pool was built with. Implementations may pin threads or adjust
    /// allocation policy; the default does nothing.
    fn on_pool_start(&self, _threads: usize) {}
}

/// The default policy: no NUMA awareness, no thread pinning.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNumaPolicy;

impl NumaPolicy for NoNumaPolicy {}

/// Builds a scoped rayon thread pool with `threads` workers (or rayon's
/// default if `threads == 0`), invoking `policy`'s start hook before
/// returning it.
pub fn build_pool(threads: usize, policy: &dyn NumaPolicy) -> Result<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if threads > 0 {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().map_err(|e| {
        MastiffError::out_of_memory("rayon thread pool", std::mem::size_of_val(&e))
    })?;
    policy.on_pool_start(pool.current_num_threads());
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_pool_with_the_requested_thread_count() {
        let pool = build_pool(3, &NoNumaPolicy).expect("pool builds");
        assert_eq!(pool.current_num_threads(), 3);
    }

    #[test]
    fn zero_threads_falls_back_to_the_rayon_default() {
        let pool = build_pool(0, &NoNumaPolicy).expect("pool builds");
        assert!(pool.current_num_threads() >= 1);
    }
}
