//! Opt-in debug logging, enabled only when the `logging` feature is active.
//! Mirrors the teacher crate's pattern of installing a global subscriber at
//! load time via `ctor`, gated on an environment variable so that linking
//! the crate never changes a host application's own logging setup unless
//! explicitly asked to.

use ctor::ctor;
use tracing::Level;

#[ctor]
fn set_debug_level() {
    let enabled = std::env::var("DEBUG_MASTIFF")
        .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty()))
        .unwrap_or(false);
    if enabled {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    }
}
