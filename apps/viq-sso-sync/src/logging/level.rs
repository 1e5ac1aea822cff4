//! Verbosity levels for diagnostic output
//!
//! Levels are cumulative: Debug includes Verbose, Trace includes Debug.

use std::fmt;

/// Verbosity level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Workflow output only (default)
    #[default]
    Normal = 0,
    /// Progress of each workflow step
    Verbose = 1,
    /// HTTP method, URL, status code, timing
    Debug = 2,
    /// Request/response bodies, redacted
    Trace = 3,
}

impl LogLevel {
    /// Highest level requested by the flags (trace > debug > verbose)
    pub fn from_flags(verbose: bool, debug: bool, trace: bool) -> Self {
        if trace {
            Self::Trace
        } else if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    pub fn is_verbose(&self) -> bool {
        *self >= Self::Verbose
    }

    pub fn is_debug(&self) -> bool {
        *self >= Self::Debug
    }

    pub fn is_trace(&self) -> bool {
        *self >= Self::Trace
    }

    /// Tag used in log file lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
