//! Library surface for the `mastiff` CLI binary, split out so integration
//! tests can drive [`cli::run_cli`] without spawning a subprocess.

pub mod cli;
pub mod ingest;
pub mod logging;
pub mod prim;
