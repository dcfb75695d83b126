//! Logging utilities for the Hireloop application.
//!
//! All crates log through `tracing`; the binary calls one of the init
//! functions once at startup.

use hireloop_config::LoggingConfig;
use std::str::FromStr;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use hireloop_common::logging;
///
/// logging::init();
/// // A second initialization is a no-op.
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber from the `logging` config section.
///
/// An unknown level name falls back to INFO with a warning.
pub fn init_from_config(config: &LoggingConfig) {
    match Level::from_str(&config.level) {
        Ok(level) => init_with_level(level),
        Err(_) => {
            init_with_level(Level::INFO);
            warn!("Unknown log level '{}', using INFO", config.level);
        }
    }
}

/// Initialize the tracing subscriber with a specific level for the `hireloop` targets.
///
/// `RUST_LOG` directives are honoured as well. Uses `try_init`, so repeated
/// calls (tests, embedded use) keep the first subscriber.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env();
    let filter = match format!("hireloop={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
