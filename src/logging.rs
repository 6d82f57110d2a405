//! Logging setup
//!
//! The library logs through the `log` facade; the binary wires it to
//! env_logger here. Control with `RUST_LOG`, e.g. `RUST_LOG=debug`.

/// Initialize env_logger
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
