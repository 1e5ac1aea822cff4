//! Import SSO users from the sheet into a target instance

use crate::api::ApiClient;
use crate::batch::{BatchExecutor, BatchResult};
use crate::config::Config;
use crate::controller::StepResult;
use crate::error::CliResult;
use crate::interactive::prompt_credentials;
use crate::models::{ExternalUserRecord, UserRecord};
use crate::output::{
    print_error, print_header, print_key_value, print_notice, print_success,
    render_external_users, render_user_records,
};
use crate::reconcile::{compute_worklist, Worklist};
use crate::store::SheetStore;
use crate::verbose_ctx;

use super::login;

/// How an import run ended
#[derive(Debug)]
pub enum ImportOutcome {
    /// Every eligible user already exists in the target
    NothingToDo(Worklist),
    /// The creation batch ran; individual items may have failed
    Created {
        worklist: Worklist,
        result: BatchResult,
    },
}

impl ImportOutcome {
    pub fn worklist(&self) -> &Worklist {
        match self {
            ImportOutcome::NothingToDo(worklist) => worklist,
            ImportOutcome::Created { worklist, .. } => worklist,
        }
    }
}

/// Execute the import workflow
pub async fn execute(config: &Config, store: &SheetStore) -> CliResult<StepResult> {
    let credentials = prompt_credentials()?;
    let client = login(config, &credentials).await?;
    run(&client, store).await?;
    Ok(StepResult::Continue)
}

/// Everything after login: read the sheet, fetch the target's external
/// users, reconcile, and create what is missing.
pub async fn run(client: &ApiClient, store: &SheetStore) -> CliResult<ImportOutcome> {
    let source = store.read_all()?;
    print_success("\nSSO source VIQ User Accounts from file");
    println!("{}", render_user_records(&sorted_by_id_desc(&source)));

    let identity = client.fetch_instance_identity().await?;
    print_success(&format!("Accessing {identity}"));

    let external = client.fetch_all_external_users().await?;
    print_notice(&format!(
        "\nExisting VIQ Name: {} - External User Accounts:",
        identity.name
    ));
    println!("{}", render_external_users(&sorted_external_by_id_desc(&external)));

    let worklist = compute_worklist(&source, &external);
    verbose_ctx!(
        "import",
        "{} to create, {} already external, {} local-only skipped",
        worklist.len(),
        worklist.already_external,
        worklist.skipped_local
    );

    if worklist.is_empty() {
        print_success(
            "\nAll users found in SSO source VIQ already exist in this VIQ's account list\nNo action required.\n",
        );
        return Ok(ImportOutcome::NothingToDo(worklist));
    }

    let result = BatchExecutor::new(client)
        .create_external_users(&worklist)
        .await;
    verbose_ctx!("import", "{}", result.summary());
    print_summary(&result);

    Ok(ImportOutcome::Created { worklist, result })
}

fn print_summary(result: &BatchResult) {
    print_header("Import summary");
    print_key_value("Created", &result.success_count.to_string());
    print_key_value("Failed", &result.failure_count.to_string());
    print_key_value("Duration", &format!("{}ms", result.duration_ms));

    for item in result.failed_items() {
        print_error(&format!(
            "{}: {}",
            item.name,
            item.error.as_deref().unwrap_or("unknown error")
        ));
    }
    println!();
}

/// Display copy of the sheet, highest id first. The worklist itself keeps
/// file order.
fn sorted_by_id_desc(records: &[UserRecord]) -> Vec<UserRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.home_instance_id.cmp(&a.home_instance_id));
    sorted
}

fn sorted_external_by_id_desc(records: &[ExternalUserRecord]) -> Vec<ExternalUserRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.home_instance_id.cmp(&a.home_instance_id));
    sorted
}
