//! Shared prompt helpers built on dialoguer.

use std::io::IsTerminal;

use dialoguer::{Input, Password, Select};

use crate::error::{CliError, CliResult};

/// Instruction shown above every arrow-key menu
pub const SELECT_PROMPT: &str =
    "Use the arrow keys to make your selection, then press enter to continue";

/// Checks if both stdin and stdout are connected to a terminal.
pub fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Fails early when no terminal is attached, since every workflow
/// depends on arrow-key menus and masked input.
pub fn require_interactive() -> CliResult<()> {
    if !is_interactive_terminal() {
        return Err(CliError::InputError(
            "This tool is interactive and requires a terminal.".into(),
        ));
    }
    Ok(())
}

/// Prompts for single selection from a list of options.
///
/// Returns the index of the selected option.
pub fn prompt_select(prompt: &str, options: &[&str], default: usize) -> CliResult<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompts for visible text input. Empty input is allowed and returned
/// as-is so callers can decide how to treat it.
pub fn prompt_text(prompt: &str) -> CliResult<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)?;
    Ok(input.trim().to_string())
}

/// Prompts for masked input.
pub fn prompt_password(prompt: &str) -> CliResult<String> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(CliError::from)
}

/// Login credentials for one instance
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-blank before a login is attempted
    pub fn validate(&self) -> CliResult<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(CliError::Validation(
                "Must enter valid VIQ credentials".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Ask for the email and password of an instance.
pub fn prompt_credentials() -> CliResult<Credentials> {
    crate::output::print_info("Enter your XIQ login credentials");
    let username = prompt_text("Email")?;
    let password = prompt_password("Password")?;
    Ok(Credentials::new(username, password))
}
