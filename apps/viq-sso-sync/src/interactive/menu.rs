//! Menu options for the top level and the export write prompt.

use crate::error::CliResult;
use crate::interactive::prompts::{prompt_select, SELECT_PROMPT};

/// Top-level workflow selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Quit,
    Export,
    Import,
}

impl MainChoice {
    pub const ALL: [MainChoice; 3] = [MainChoice::Quit, MainChoice::Export, MainChoice::Import];

    pub fn label(self) -> &'static str {
        match self {
            MainChoice::Quit => "0 - Cancel and Quit",
            MainChoice::Export => {
                "1 - Enter credentials for VIQ # 1 to export user accounts to the sheet in the current directory"
            }
            MainChoice::Import => {
                "2 - Enter credentials for VIQ # 2+ to import SSO user accounts for account switching"
            }
        }
    }

    pub fn prompt() -> CliResult<Self> {
        let labels: Vec<&str> = Self::ALL.iter().map(|c| c.label()).collect();
        let index = prompt_select(SELECT_PROMPT, &labels, 0)?;
        Ok(Self::ALL[index])
    }
}

/// What to do with freshly exported users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    Quit,
    Overwrite,
    Append,
}

impl ExportChoice {
    pub const ALL: [ExportChoice; 3] = [
        ExportChoice::Quit,
        ExportChoice::Overwrite,
        ExportChoice::Append,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportChoice::Quit => "0 - Cancel and Quit",
            ExportChoice::Overwrite => "1 - Replace/Overwrite sheet file contents",
            ExportChoice::Append => "2 - Append contents to existing sheet file",
        }
    }

    pub fn prompt() -> CliResult<Self> {
        let labels: Vec<&str> = Self::ALL.iter().map(|c| c.label()).collect();
        let index = prompt_select(SELECT_PROMPT, &labels, 0)?;
        Ok(Self::ALL[index])
    }
}
