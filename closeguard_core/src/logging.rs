//! Subscriber setup shared by the FFI surface and the `closeguard` binary.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Install a stderr `fmt` subscriber filtered at `level`.
///
/// `RUST_LOG` takes precedence over `level`. Returns `false` when a global
/// subscriber was already installed, which hosts may hit on reload.
pub fn init(level: Option<&str>) -> bool {
    let fallback = level.unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        let _ = init(Some("debug"));
        assert!(!init(Some("info")));
    }
}
