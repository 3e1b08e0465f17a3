//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SHOWSTAGE_LOG";

/// Level used when `SHOWSTAGE_LOG` is unset.
///
/// `-v` selects debug and `-vv` trace; otherwise the configured level is used
/// if it names a known level.
pub fn fallback_level(verbosity: u8, settings: &LogSettings) -> &'static str {
    match verbosity {
        0 => match settings.level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "error" => "error",
            "off" => "off",
            _ => "warn",
        },
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output.
pub fn init(verbosity: u8, settings: &LogSettings) {
    let fallback = fallback_level(verbosity, settings);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
