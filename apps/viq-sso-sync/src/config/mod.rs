//! Configuration management for the sync tool

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;

/// Default ExtremeCloud IQ API endpoint
pub const DEFAULT_API_URL: &str = "https://api.extremecloudiq.com";

/// Default sheet file, looked up in the working directory
pub const DEFAULT_SHEET_FILE: &str = "XIQ-SSO-AccountSwitcher.csv";
