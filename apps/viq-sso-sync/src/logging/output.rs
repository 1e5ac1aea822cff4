//! Terminal and file writers for diagnostic output

use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use super::level::LogLevel;
use super::redaction::Redactor;

/// A diagnostic message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    /// Workflow step the message belongs to (e.g. "export")
    pub context: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Whether an HTTP log line describes a request or a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpDirection {
    Request,
    Response,
}

/// One side of an HTTP exchange
#[derive(Debug, Clone)]
pub struct HttpLogEntry {
    pub direction: HttpDirection,
    pub method: Option<String>,
    pub url: Option<String>,
    pub status: Option<u16>,
    pub timing_ms: Option<u64>,
    pub body: Option<String>,
}

impl HttpLogEntry {
    pub fn request(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            direction: HttpDirection::Request,
            method: Some(method.into()),
            url: Some(url.into()),
            status: None,
            timing_ms: None,
            body: None,
        }
    }

    pub fn response(status: u16, timing_ms: u64) -> Self {
        Self {
            direction: HttpDirection::Response,
            method: None,
            url: None,
            status: Some(status),
            timing_ms: Some(timing_ms),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// One-line form: `→ GET url` or `← 200 OK (12ms)`
    pub fn format_debug(&self) -> String {
        match self.direction {
            HttpDirection::Request => format!(
                "→ {} {}",
                self.method.as_deref().unwrap_or("?"),
                self.url.as_deref().unwrap_or("?")
            ),
            HttpDirection::Response => {
                let status = self.status.unwrap_or(0);
                let reason = reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("?");
                format!("← {} {} ({}ms)", status, reason, self.timing_ms.unwrap_or(0))
            }
        }
    }

    /// Debug line plus the redacted body
    pub fn format_trace(&self, redactor: &Redactor) -> String {
        let mut output = self.format_debug();

        if let Some(ref body) = self.body {
            let redacted = redactor.redact(body);
            if redacted.is_empty() {
                output.push_str("\n  Body: (empty)");
            } else {
                output.push_str(&format!("\n  Body:\n    {}", redacted));
            }
        }

        output
    }
}

/// Writes diagnostics to stderr
pub struct TerminalWriter {
    color: bool,
}

impl TerminalWriter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format_entry(&self, entry: &LogEntry) -> String {
        let context = entry.context.as_deref().unwrap_or("verbose");

        if self.color {
            format!("\x1b[36m[{}]\x1b[0m {}", context, entry.message)
        } else {
            format!("[{}] {}", context, entry.message)
        }
    }

    pub fn format_http(&self, entry: &HttpLogEntry, text: String) -> String {
        if !self.color {
            return text;
        }
        match (entry.direction, entry.status) {
            (HttpDirection::Request, _) => format!("\x1b[33m{}\x1b[0m", text),
            (HttpDirection::Response, Some(200..=299)) => format!("\x1b[32m{}\x1b[0m", text),
            (HttpDirection::Response, Some(400..)) => format!("\x1b[31m{}\x1b[0m", text),
            (HttpDirection::Response, _) => format!("\x1b[33m{}\x1b[0m", text),
        }
    }

    pub fn format_trace_warning(&self) -> String {
        if self.color {
            "\x1b[33m⚠️  TRACE MODE: request and response bodies are printed\x1b[0m".to_string()
        } else {
            "WARNING: TRACE MODE - request and response bodies are printed".to_string()
        }
    }

    pub fn write(&self, entry: &LogEntry) {
        eprintln!("{}", self.format_entry(entry));
    }
}

/// Appends timestamped diagnostics to a file
pub struct FileWriter {
    file: Mutex<File>,
}

impl FileWriter {
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    fn format_entry(entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%Y-%m-%dT%H:%M:%S");
        let context = entry
            .context
            .as_deref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();

        format!("[{}] [{}]{} {}", timestamp, entry.level, context, entry.message)
    }

    pub fn write(&self, entry: &LogEntry) -> io::Result<()> {
        self.write_line(&Self::format_entry(entry))
    }

    /// HTTP entries are always written with bodies redacted
    pub fn write_http(&self, entry: &HttpLogEntry, redactor: &Redactor) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S");
        self.write_line(&format!(
            "[{}] [HTTP] {}",
            timestamp,
            entry.format_trace(redactor)
        ))
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("Failed to lock log file"))?;
        writeln!(file, "{}", line)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_request_debug_format() {
        let entry = HttpLogEntry::request("GET", "https://api.example.com/users?page=1");
        assert_eq!(
            entry.format_debug(),
            "→ GET https://api.example.com/users?page=1"
        );
    }

    #[test]
    fn test_response_debug_format() {
        let entry = HttpLogEntry::response(404, 31);
        assert_eq!(entry.format_debug(), "← 404 Not Found (31ms)");
    }

    #[test]
    fn test_trace_format_redacts_body() {
        let entry = HttpLogEntry::request("POST", "https://api.example.com/login")
            .with_body(r#"{"username":"a","password":"secret"}"#);
        let text = entry.format_trace(&Redactor::new());
        assert!(text.contains("[REDACTED]"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_file_writer_appends() {
        let temp = NamedTempFile::new().unwrap();
        let writer = FileWriter::new(temp.path()).unwrap();
        writer
            .write(&LogEntry::new(LogLevel::Verbose, "first").with_context("export"))
            .unwrap();
        writer
            .write(&LogEntry::new(LogLevel::Verbose, "second"))
            .unwrap();

        let content = std::fs::read_to_string(temp.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[VERBOSE] [export] first"));
        assert!(lines[1].ends_with("[VERBOSE] second"));
    }
}
