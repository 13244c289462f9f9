//! Logging setup for the demo programs.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. Demos call [`init_logging`] first so that
//! `RUST_LOG=debug cargo run --example p3_payment_strategy` shows which
//! strategy or factory handled each call.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatted subscriber honouring `RUST_LOG`.
///
/// Returns `true` if this call installed the subscriber and `false` if one
/// was already in place, so calling it more than once is harmless.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_a_no_op() {
        init_logging();
        assert!(!init_logging());
    }
}
