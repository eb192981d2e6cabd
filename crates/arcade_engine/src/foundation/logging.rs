//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Safe to call more than once; later calls are no-ops. Controlled through
/// the `RUST_LOG` environment variable as usual for `env_logger`.
pub fn init() {
    let _ = env_logger::try_init();
}
