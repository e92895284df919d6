// ============================================================================
// Utilities Module
// Diagnostics setup for binaries, tests and benches
// ============================================================================

/// Install a `tracing` subscriber printing events up to `level`.
///
/// Returns `false` if a global subscriber was already installed.
///
/// # Example
/// ```ignore
/// omega_epsilon::utils::init_tracing(tracing::Level::DEBUG);
/// ```
#[cfg(feature = "logging")]
pub fn init_tracing(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
