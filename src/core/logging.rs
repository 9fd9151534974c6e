//! Subscriber setup for the `guild` binary

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used, and `"info"` if
/// `fallback` does not parse. Returns `false` when a subscriber was already
/// installed.
pub fn init(fallback: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Subscriber for work done before [`init`], such as loading the settings
/// that carry the real filter. Use with `tracing::subscriber::with_default`.
pub fn bootstrap() -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_target(false)
        .finish()
}

fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(fallback))
}

fn fallback_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_new(fallback).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_fallback_filter_sets_level() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(fallback_filter("warn"))
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::INFO));
        });
    }
}
