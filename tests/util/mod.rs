//! Helpers shared by the integration tests.

/// Installs a test logger once per binary; set `RUST_LOG=trace` to see collection events.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
