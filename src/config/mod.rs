/// Application settings loaded from config.toml
pub mod settings;

/// Tracing subscriber setup
pub mod logging;
