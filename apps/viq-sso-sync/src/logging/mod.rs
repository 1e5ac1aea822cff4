//! Diagnostic logging for the sync tool
//!
//! Workflow output (menus, tables, per-user results) is printed by the
//! `output` module. This module carries everything an operator only wants
//! when something goes wrong:
//! - Verbosity levels (Normal, Verbose, Debug, Trace)
//! - Environment variable support (VIQ_SYNC_VERBOSE, VIQ_SYNC_DEBUG, VIQ_SYNC_TRACE)
//! - Optional log file with timestamps
//! - Redaction of passwords and tokens in traced HTTP bodies

pub mod config;
pub mod level;
pub mod output;
pub mod redaction;

pub use config::LogConfig;
pub use level::LogLevel;
pub use output::{FileWriter, HttpDirection, HttpLogEntry, LogEntry, TerminalWriter};
pub use redaction::{Redactor, REDACTED};

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes diagnostics to stderr and, optionally, a log file
pub struct Logger {
    config: LogConfig,
    terminal: TerminalWriter,
    file: Option<FileWriter>,
    redactor: Redactor,
    trace_warned: AtomicBool,
}

impl Logger {
    pub fn new(config: LogConfig) -> io::Result<Self> {
        let terminal = TerminalWriter::new(config.color);
        let file = config
            .log_file
            .as_deref()
            .map(FileWriter::new)
            .transpose()?;

        Ok(Self {
            config,
            terminal,
            file,
            redactor: Redactor::new(),
            trace_warned: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn is_verbose(&self) -> bool {
        self.config.is_verbose()
    }

    pub fn is_debug(&self) -> bool {
        self.config.is_debug()
    }

    pub fn is_trace(&self) -> bool {
        self.config.is_trace()
    }

    fn maybe_show_trace_warning(&self) {
        if self.config.is_trace() && !self.trace_warned.swap(true, Ordering::SeqCst) {
            eprintln!("{}", self.terminal.format_trace_warning());
        }
    }

    /// Log a progress message under the given workflow context
    pub fn verbose_with_context(&self, context: impl Into<String>, message: impl Into<String>) {
        if !self.config.is_verbose() {
            return;
        }

        let entry = LogEntry::new(LogLevel::Verbose, message).with_context(context);
        self.terminal.write(&entry);

        if let Some(ref file) = self.file {
            let _ = file.write(&entry);
        }
    }

    pub fn verbose(&self, message: impl Into<String>) {
        self.verbose_with_context("verbose", message);
    }

    /// Log an outgoing request; the body is only shown at trace level
    pub fn http_request(&self, method: &str, url: &str, body: Option<&str>) {
        if !self.config.is_debug() {
            return;
        }

        let mut entry = HttpLogEntry::request(method, url);
        if let Some(body) = body {
            entry = entry.with_body(body);
        }
        self.emit_http(&entry);
    }

    /// Log a received response; the body is only shown at trace level
    pub fn http_response(&self, status: u16, timing_ms: u64, body: Option<&str>) {
        if !self.config.is_debug() {
            return;
        }

        let mut entry = HttpLogEntry::response(status, timing_ms);
        if let Some(body) = body {
            entry = entry.with_body(body);
        }
        self.emit_http(&entry);
    }

    fn emit_http(&self, entry: &HttpLogEntry) {
        let text = if self.config.is_trace() {
            self.maybe_show_trace_warning();
            entry.format_trace(&self.redactor)
        } else {
            entry.format_debug()
        };
        eprintln!("{}", self.terminal.format_http(entry, text));

        if let Some(ref file) = self.file {
            let _ = file.write_http(entry, &self.redactor);
        }
    }
}

static GLOBAL_LOGGER: std::sync::OnceLock<Logger> = std::sync::OnceLock::new();

/// Install the process logger; call once at startup
pub fn init_global_logger(config: LogConfig) -> io::Result<()> {
    let logger = Logger::new(config)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| io::Error::other("Global logger already initialized"))
}

/// The process logger, if installed
pub fn global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// Log a verbose message using the global logger
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if let Some(logger) = $crate::logging::global_logger() {
            logger.verbose(format!($($arg)*));
        }
    };
}

/// Log a verbose message with a workflow context using the global logger
#[macro_export]
macro_rules! verbose_ctx {
    ($ctx:expr, $($arg:tt)*) => {
        if let Some(logger) = $crate::logging::global_logger() {
            logger.verbose_with_context($ctx, format!($($arg)*));
        }
    };
}
