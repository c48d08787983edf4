// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and demos embedding the engine
// ============================================================================
//
// The engine itself only emits `tracing` events:
// - debug: selected label aspects, undistinguishable pairs, inconsistent sets
// - trace: per-aspect selection decisions, label dictionary misses
//
// Filtering follows `RUST_LOG` (e.g. `RUST_LOG=ixbrl_factset=trace`),
// defaulting to `info` when unset.
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
