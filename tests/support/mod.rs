// tests/support/mod.rs
// Shared test support used by multiple integration test binaries. Some
// symbols are unused in individual test crates, which would otherwise
// produce dead_code warnings.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

/// Install a fmt subscriber once so probe logging is visible under
/// `RUST_LOG` when debugging a failing test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
