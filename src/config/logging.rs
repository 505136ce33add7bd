//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` if set and valid, otherwise `default_filter`,
/// otherwise `info`.
#[must_use]
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global fmt subscriber. Later calls are ignored.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_default_filter_falls_back_to_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter("[bad").to_string(), "info");
    }

    #[test]
    fn test_valid_default_filter_is_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(
            env_filter("lesson_status=debug").to_string(),
            "lesson_status=debug"
        );
    }
}
