//! Logging configuration
//!
//! Structured logging with tracing. Tor runs on its own `tor-main` thread,
//! so thread names are always shown.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "embedtor=info";

/// Initialize logging with environment-based filtering
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    install(filter);
}

/// Initialize logging with specific level, ignoring `RUST_LOG`
pub fn init_with_level(level: Level) {
    install(EnvFilter::new(level_directive(level)));
}

fn level_directive(level: Level) -> String {
    format!("embedtor={}", level)
}

fn install(filter: EnvFilter) {
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive(Level::DEBUG), "embedtor=DEBUG");
        assert_eq!(level_directive(Level::INFO), "embedtor=INFO");
    }
}
