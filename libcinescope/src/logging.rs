//! Centralized logging configuration for all cine-* binaries
//!
//! Logs always go to stderr so that stdout stays clean for piped output
//! (movie tables, JSON). Format and level come from flags or the
//! `CINESCOPE_LOG_FORMAT` / `CINESCOPE_LOG_LEVEL` environment variables.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
        }
    }

    /// Initialize logging with the configured settings.
    ///
    /// Call once at program start.
    ///
    /// # Panics
    ///
    /// Panics if a subscriber has already been installed
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }
    }
}

fn env_format() -> LogFormat {
    std::env::var("CINESCOPE_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text)
}

fn env_level(default: &str) -> String {
    std::env::var("CINESCOPE_LOG_LEVEL").unwrap_or_else(|_| default.to_string())
}

/// Initialize logging with default settings.
///
/// Respects `CINESCOPE_LOG_FORMAT` and `CINESCOPE_LOG_LEVEL`; falls back to
/// text format at info level.
pub fn init_default() {
    LoggingConfig::new(env_format(), env_level("info"), false).init();
}

/// Initialize logging for a CLI binary.
///
/// Same environment handling as [`init_default`], but quiet by default
/// (error level) so stdout tables stay readable, with `verbose` forcing
/// debug.
pub fn init_cli(verbose: bool) {
    LoggingConfig::new(env_format(), env_level("error"), verbose).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "xml".parse::<LogFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid log format: 'xml'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_logging_config_new() {
        let config = LoggingConfig::new(LogFormat::Json, "warn".to_string(), false);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "warn");
        assert!(!config.verbose);
    }

    #[test]
    #[serial_test::serial]
    fn test_env_format_and_level() {
        std::env::remove_var("CINESCOPE_LOG_FORMAT");
        std::env::remove_var("CINESCOPE_LOG_LEVEL");
        assert_eq!(env_format(), LogFormat::Text);
        assert_eq!(env_level("error"), "error");

        std::env::set_var("CINESCOPE_LOG_FORMAT", "json");
        std::env::set_var("CINESCOPE_LOG_LEVEL", "trace");
        assert_eq!(env_format(), LogFormat::Json);
        assert_eq!(env_level("error"), "trace");
        std::env::remove_var("CINESCOPE_LOG_FORMAT");
        std::env::remove_var("CINESCOPE_LOG_LEVEL");
    }

    #[test]
    #[serial_test::serial]
    fn test_env_format_falls_back_on_garbage() {
        std::env::set_var("CINESCOPE_LOG_FORMAT", "xml");
        assert_eq!(env_format(), LogFormat::Text);
        std::env::remove_var("CINESCOPE_LOG_FORMAT");
    }
}
