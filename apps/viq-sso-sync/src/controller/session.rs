//! Controller session state

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::store::SheetStore;

/// State carried across menu iterations of one program run
#[derive(Debug, Clone)]
pub struct ControllerSession {
    /// Whether the workflow banner has been printed
    pub intro_shown: bool,
    pub config: Config,
    pub store: SheetStore,
    /// When the run started, for the closing duration log line
    pub started_at: DateTime<Utc>,
}

impl ControllerSession {
    pub fn new(config: Config) -> Self {
        let store = SheetStore::new(config.sheet_file.clone());
        Self {
            intro_shown: false,
            config,
            store,
            started_at: Utc::now(),
        }
    }

    /// Marks the banner as shown; returns true only the first time.
    pub fn take_intro(&mut self) -> bool {
        !std::mem::replace(&mut self.intro_shown, true)
    }

    pub fn elapsed_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
