//! Creation loop over a reconciliation worklist

use std::time::Instant;

use crate::api::ApiClient;
use crate::batch::result::BatchResult;
use crate::error::CliError;
use crate::output::{print_error, print_progress, print_success};
use crate::reconcile::Worklist;
use crate::verbose_ctx;

/// Runs creation requests one at a time against the target instance
pub struct BatchExecutor<'a> {
    client: &'a ApiClient,
}

impl<'a> BatchExecutor<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create every candidate as an external user.
    ///
    /// A failed item is reported and recorded, then the loop moves on to
    /// the next candidate. Nothing is retried.
    pub async fn create_external_users(&self, worklist: &Worklist) -> BatchResult {
        let started = Instant::now();
        let mut result = BatchResult::new("create external users", worklist.len());

        print_progress("\nAttempting to create External SSO Users...");

        for (index, candidate) in worklist.iter().enumerate() {
            verbose_ctx!(
                "import",
                "Creating {} as {} ({}/{})",
                candidate.login_name,
                candidate.user_role,
                index + 1,
                worklist.len()
            );

            match self.client.create_external_user(&candidate.to_request()).await {
                Ok(()) => {
                    print_success(&format!(
                        "External SSO user was created successfully: {}",
                        candidate.login_name
                    ));
                    result.add_success(index, candidate.login_name.clone());
                }
                Err(e) => {
                    let detail = match &e {
                        CliError::Api { status, message } if message.is_empty() => {
                            format!("HTTP Status Code: {status}")
                        }
                        CliError::Api { status, message } => {
                            format!("HTTP Status Code: {status}\n\t{message}")
                        }
                        other => other.to_string(),
                    };
                    print_error(&format!("{}: {}", candidate.login_name, detail));
                    result.add_failure(index, candidate.login_name.clone(), detail);
                }
            }
        }

        result.set_duration(started.elapsed().as_millis() as u64);
        result
    }
}
