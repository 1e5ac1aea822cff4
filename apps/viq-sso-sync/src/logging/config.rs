//! Logger configuration from command-line flags and environment

use std::path::PathBuf;

use super::LogLevel;

/// Logger configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Suppress all diagnostic output regardless of level
    pub quiet: bool,
    /// Append diagnostics to this file as well as stderr
    pub log_file: Option<PathBuf>,
    pub color: bool,
}

impl LogConfig {
    /// Build from flags, filling gaps from `VIQ_SYNC_VERBOSE`,
    /// `VIQ_SYNC_DEBUG`, `VIQ_SYNC_TRACE` and `VIQ_SYNC_LOG_FILE`.
    pub fn from_args_and_env(
        verbose: bool,
        debug: bool,
        trace: bool,
        quiet: bool,
        log_file: Option<PathBuf>,
    ) -> Self {
        let level = LogLevel::from_flags(
            verbose || env_flag("VIQ_SYNC_VERBOSE"),
            debug || env_flag("VIQ_SYNC_DEBUG"),
            trace || env_flag("VIQ_SYNC_TRACE"),
        );
        let log_file = log_file.or_else(|| {
            std::env::var("VIQ_SYNC_LOG_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        });

        Self {
            level,
            quiet,
            log_file,
            color: std::env::var("NO_COLOR").is_err(),
        }
    }

    pub fn is_verbose(&self) -> bool {
        !self.quiet && self.level.is_verbose()
    }

    pub fn is_debug(&self) -> bool {
        !self.quiet && self.level.is_debug()
    }

    pub fn is_trace(&self) -> bool {
        !self.quiet && self.level.is_trace()
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
