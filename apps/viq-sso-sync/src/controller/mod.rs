//! Top-level menu state machine
//!
//! Each call to [`Controller::step`] shows the menu once and runs the chosen
//! workflow to completion. Authentication and input problems bring the
//! operator back to the menu; fetch and file failures end the run.

mod session;

pub use session::ControllerSession;

use crate::commands::{export, import};
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::interactive::MainChoice;
use crate::output::{print_error, print_progress};
use crate::verbose;

/// What the controller should do after one menu iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Show the top menu again
    Continue,
    /// Leave the program normally
    Exit,
}

pub struct Controller {
    session: ControllerSession,
}

impl Controller {
    pub fn new(config: Config) -> Self {
        Self {
            session: ControllerSession::new(config),
        }
    }

    pub fn session(&self) -> &ControllerSession {
        &self.session
    }

    /// Loop over menu iterations until the operator quits.
    ///
    /// Fatal errors are returned to the caller, which maps them to an exit
    /// code.
    pub async fn run(&mut self) -> CliResult<()> {
        loop {
            if self.step().await? == StepResult::Exit {
                verbose!("Session ended after {}s", self.session.elapsed_secs());
                return Ok(());
            }
        }
    }

    /// One pass through the top menu
    pub async fn step(&mut self) -> CliResult<StepResult> {
        if !self.session.store.exists() {
            print_error(&missing_sheet_message(&self.session));
            return Ok(StepResult::Exit);
        }

        if self.session.take_intro() {
            print_progress(&intro_banner(&self.session));
        }

        let outcome = match MainChoice::prompt()? {
            MainChoice::Quit => {
                print_error("User cancelled the script, exiting...\n");
                return Ok(StepResult::Exit);
            }
            MainChoice::Export => {
                export::execute(&self.session.config, &self.session.store).await
            }
            MainChoice::Import => {
                import::execute(&self.session.config, &self.session.store).await
            }
        };

        recover(outcome)
    }
}

/// Turn non-fatal workflow errors into a return to the menu.
pub fn recover(outcome: CliResult<StepResult>) -> CliResult<StepResult> {
    match outcome {
        // Printed bare, without the "Invalid input:" display prefix
        Err(CliError::Validation(message)) => {
            print_error(&message);
            Ok(StepResult::Continue)
        }
        Err(e) if !e.is_fatal() => {
            print_error(&e.to_string());
            Ok(StepResult::Continue)
        }
        other => other,
    }
}

fn missing_sheet_message(session: &ControllerSession) -> String {
    format!(
        "\nABORT: File missing! Copy XIQ-SSO-AccountSwitcher.csv from the repository root (or create an empty file) at: {}\n",
        session.store.path().display()
    )
}

fn intro_banner(session: &ControllerSession) -> String {
    let file = session.store.path().display();
    format!(
        "
    *****************************************************************************************
    This tool copies SSO accounts from a source VIQ#1 into other VIQs, so SSO users
    can use the Account Switcher to reach all of their VIQs.

    Workflow:
    - Configure Self Service SSO in VIQ#1 using a local administrator account
        - ALL USERS must log in once with SSO so their local accounts get marked SSO
    - Choose Option 1 to export all accounts from VIQ#1 where SSO is configured
        - You will be prompted for credentials
    - Verify the contents of the export in \"{file}\", which is also printed to the screen
    - Choose Option 2 to import the SSO accounts into VIQ#2+
        - You will be prompted for credentials
    - Repeat Option 2 for every additional VIQ the users need access to
    - Test by having an SSO user log in and switch between VIQs
    *****************************************************************************************
"
    )
}
